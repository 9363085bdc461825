//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use scripture_domain::SourceTag;
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with headers
    Full,
    /// Only the answer text
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for scripture_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => scripture_domain::OutputFormat::Full,
            OutputFormat::Summary => scripture_domain::OutputFormat::Summary,
            OutputFormat::Json => scripture_domain::OutputFormat::Json,
        }
    }
}

/// Which scripture to ask
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AskSource {
    /// Bhagavad Gita
    Gita,
    /// Quran
    Quran,
    /// Bible (answered from model knowledge only)
    Bible,
    /// Compare Hinduism, Islam and Christianity
    All,
}

impl AskSource {
    /// Single-source tag, or `None` for the comparative workflow
    pub fn source_tag(&self) -> Option<SourceTag> {
        match self {
            AskSource::Gita => Some(SourceTag::Gita),
            AskSource::Quran => Some(SourceTag::Quran),
            AskSource::Bible => Some(SourceTag::Bible),
            AskSource::All => None,
        }
    }
}

/// CLI arguments for scripture-lens
#[derive(Parser, Debug)]
#[command(name = "scripture-lens")]
#[command(author, version, about = "Ask the Bhagavad Gita, the Quran and the Bible")]
#[command(long_about = r#"
Scripture Lens answers questions about religious scripture with an LLM.

A single-source question runs three stages:
1. Finding verses: the model names relevant verse identifiers
2. Fetching verses: the verses are read from the store
3. Explaining: the model explains the verses in plain text

--source all compares Hinduism, Islam and Christianity in one structured answer.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./scripture-lens.toml    Project-level config
3. ~/.config/scripture-lens/config.toml   Global config
Environment variables (SCRIPTURE_LLM__MODEL, PORT, ...) override files.

Example:
  scripture-lens ask --source gita "What is karma?"
  scripture-lens ask --source all forgiveness
  scripture-lens serve --port 5000
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask a question once and print the answer
    Ask {
        /// Scripture to ask
        #[arg(short, long, value_enum, default_value = "all")]
        source: AskSource,

        /// Output format (overrides [output].format)
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,

        /// The question (words are joined with spaces)
        #[arg(required = true, num_args = 1.., value_name = "QUESTION")]
        question: Vec<String>,
    },

    /// Serve the HTTP API
    Serve {
        /// Address to bind (overrides [server].host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides [server].port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask() {
        let cli = Cli::parse_from([
            "scripture-lens",
            "-vv",
            "ask",
            "--source",
            "quran",
            "What",
            "is",
            "mercy?",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Ask {
                source,
                output,
                question,
            }) => {
                assert_eq!(source.source_tag(), Some(SourceTag::Quran));
                assert!(output.is_none());
                assert_eq!(question.join(" "), "What is mercy?");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_ask_defaults_to_comparison() {
        let cli = Cli::parse_from(["scripture-lens", "ask", "-o", "json", "charity"]);
        match cli.command {
            Some(Command::Ask { source, output, .. }) => {
                assert_eq!(source, AskSource::All);
                assert_eq!(source.source_tag(), None);
                assert_eq!(output, Some(OutputFormat::Json));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Cli::try_parse_from(["scripture-lens", "ask"]).is_err());
    }

    #[test]
    fn test_parse_serve_with_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["scripture-lens", "serve", "--port", "8080", "--no-config"]);
        assert!(cli.no_config);
        match cli.command {
            Some(Command::Serve { host, port }) => {
                assert!(host.is_none());
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_show_config_without_subcommand() {
        let cli = Cli::parse_from(["scripture-lens", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
