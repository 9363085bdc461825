//! Progress reporting for the query pipeline

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use scripture_application::ProgressNotifier;
use scripture_domain::Stage;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one indicatif bar per pipeline stage
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: &Stage, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::stage_style());
        pb.set_prefix(stage.display_name());
        pb.set_message("Starting...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.stage_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_task_complete(&self, _stage: &Stage, label: &str, items: usize) {
        if let Ok(slot) = self.stage_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(format!("{} {} ({})", "v".green(), label, items));
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: &Stage) {
        if let Ok(mut slot) = self.stage_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{} done", stage.display_name().green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: &Stage, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            stage.display_name().bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _stage: &Stage, label: &str, items: usize) {
        eprintln!("  {} {} ({})", "v".green(), label, items);
    }

    fn on_stage_complete(&self, _stage: &Stage) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::ProgressDrawTarget;

    #[test]
    fn test_reporter_tracks_one_bar_per_stage() {
        let reporter = ProgressReporter::new();
        reporter.multi.set_draw_target(ProgressDrawTarget::hidden());

        reporter.on_stage_start(&Stage::FetchVerses, 2);
        reporter.on_task_complete(&Stage::FetchVerses, "all", 2);
        {
            let slot = reporter.stage_bar.lock().unwrap();
            let pb = slot.as_ref().unwrap();
            assert_eq!(pb.position(), 1);
            assert_eq!(pb.length(), Some(2));
        }

        reporter.on_stage_complete(&Stage::FetchVerses);
        assert!(reporter.stage_bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_task_without_stage_is_ignored() {
        let reporter = ProgressReporter::new();
        reporter.multi.set_draw_target(ProgressDrawTarget::hidden());
        reporter.on_task_complete(&Stage::Summarize, "gita", 0);
        reporter.on_stage_complete(&Stage::Summarize);
    }
}
