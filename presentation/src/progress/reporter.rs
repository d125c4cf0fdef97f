//! Progress reporting for response collection

use colored::Colorize;
use foreach_application::SessionProgressNotifier;
use foreach_domain::core::string::{single_line, truncate};
use foreach_domain::{CompletionReason, Response};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;

/// Reports collection progress with a progress bar on stderr
pub struct ProgressReporter {
    multi: MultiProgress,
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi: MultiProgress::with_draw_target(target),
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProgressNotifier for ProgressReporter {
    fn on_session_start(&self, participants: usize, statements: usize, max_time: u64) {
        let pb = self
            .multi
            .add(ProgressBar::new((participants * statements) as u64));
        pb.set_style(Self::bar_style());
        pb.set_prefix("Collecting");
        pb.set_message(format!(
            "{} participant(s), stops after {}ms",
            participants, max_time
        ));

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_response_recorded(&self, response: &Response, recorded: usize, _expected: usize) {
        self.with_bar(|pb| {
            pb.set_position(recorded as u64);
            pb.set_message(format!(
                "{} {}: {}",
                "v".green(),
                response.id,
                truncate(&single_line(&response.response), 24)
            ));
        });
    }

    fn on_invalid_response(&self, participant: &str, text: &str) {
        self.with_bar(|pb| {
            pb.set_message(format!(
                "{} {}: {}",
                "x".red(),
                participant,
                truncate(&single_line(text), 24)
            ));
        });
    }

    fn on_participant_finished(&self, participant: &str) {
        self.with_bar(|pb| pb.println(format!("  {} {} finished", "v".green(), participant)));
    }

    fn on_session_complete(&self, reason: CompletionReason, recorded: usize) {
        let Ok(mut guard) = self.bar.lock() else {
            return;
        };
        if let Some(pb) = guard.take() {
            let status = match reason {
                CompletionReason::AllCompleted => reason.to_string().green(),
                CompletionReason::Timeout => reason.to_string().yellow(),
            };
            pb.finish_with_message(format!("{} ({} recorded)", status, recorded));
        }
    }
}

/// Simple line-based progress (no redrawing), written to stderr
pub struct SimpleProgress;

impl SessionProgressNotifier for SimpleProgress {
    fn on_session_start(&self, participants: usize, statements: usize, max_time: u64) {
        eprintln!(
            "{} {} ({} participant(s), {} statement(s), {}ms)",
            "->".cyan(),
            "Collecting responses".bold(),
            participants,
            statements,
            max_time
        );
    }

    fn on_response_recorded(&self, response: &Response, recorded: usize, expected: usize) {
        eprintln!(
            "  {} [{}/{}] {}",
            "v".green(),
            recorded,
            expected,
            response.id
        );
    }

    fn on_participant_finished(&self, participant: &str) {
        eprintln!("  {} {} finished", "v".green(), participant);
    }

    fn on_session_complete(&self, reason: CompletionReason, recorded: usize) {
        eprintln!("{} {} ({} recorded)", "->".cyan(), reason, recorded);
    }
}
