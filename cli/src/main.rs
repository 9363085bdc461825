//! CLI entrypoint for Scripture Lens
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use scripture_application::{AskScriptureUseCase, NoProgress, ProgressNotifier};
use scripture_domain::{OutputFormat as DomainOutputFormat, Question};
use scripture_infrastructure::{ConfigLoader, FileConfig, GeminiGateway, build_verse_store};
use scripture_presentation::{
    AppState, AskSource, Cli, Command, ConsoleFormatter, OutputFormatter, ProgressReporter,
    SimpleProgress, serve, set_color,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_env_only()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    config.validate().context("Invalid configuration")?;

    set_color(config.output.color && std::io::stdout().is_terminal());

    let Some(command) = cli.command else {
        bail!("No command given. Try `scripture-lens ask <QUESTION>` or `scripture-lens serve`.");
    };

    info!("Starting Scripture Lens");

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::from_config(&config.llm)?);
    let store = build_verse_store(&config.store)?;
    let use_case = AskScriptureUseCase::new(gateway, store)
        .with_config(config.pipeline.to_pipeline_config());

    match command {
        Command::Ask {
            source,
            output,
            question,
        } => {
            let question = Question::try_from(question.join(" "))?;
            let format = output
                .map(DomainOutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default();
            let progress = progress_notifier(cli.quiet);
            let rendered = ask(&use_case, source, question, format, progress.as_ref()).await?;
            println!("{}", rendered);
        }
        Command::Serve { host, port } => {
            let address = bind_address(&config, host, port);
            serve(&address, AppState::new(use_case))
                .await
                .with_context(|| format!("Server on {} failed", address))?;
        }
    }

    Ok(())
}

async fn ask(
    use_case: &AskScriptureUseCase,
    source: AskSource,
    question: Question,
    format: DomainOutputFormat,
    progress: &dyn ProgressNotifier,
) -> Result<String> {
    let formatter = ConsoleFormatter;
    let rendered = match source.source_tag() {
        Some(tag) => {
            let result = use_case
                .answer_single_source_with_progress(question, tag, progress)
                .await?;
            formatter.render_answer(&result, format)
        }
        None => {
            let result = use_case
                .answer_comparative_with_progress(question, progress)
                .await?;
            formatter.render_comparison(&result, format)
        }
    };
    Ok(rendered)
}

/// Spinners on a terminal, plain lines otherwise, nothing when quiet
fn progress_notifier(quiet: bool) -> Box<dyn ProgressNotifier> {
    if quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    }
}

fn bind_address(config: &FileConfig, host: Option<String>, port: Option<u16>) -> String {
    let mut server = config.server.clone();
    if let Some(host) = host {
        server.host = host;
    }
    if let Some(port) = port {
        server.port = port;
    }
    server.bind_address()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scripture_presentation::OutputFormat;

    #[test]
    fn test_bind_address_flags_override_config() {
        let config = FileConfig::default();
        assert_eq!(bind_address(&config, None, None), "0.0.0.0:5000");
        assert_eq!(
            bind_address(&config, Some("127.0.0.1".to_string()), Some(8080)),
            "127.0.0.1:8080"
        );
    }

    #[test]
    fn test_output_flag_maps_to_domain_format() {
        assert_eq!(
            DomainOutputFormat::from(OutputFormat::Summary),
            DomainOutputFormat::Summary
        );
    }
}
