// Thu Jan 15 2026 - Alex

use crate::engine::{Phase, ProgressSink};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// `ProgressSink` drawing one bar that advances a step per phase.
pub struct PhaseProgress {
    bar: ProgressBar,
}

impl PhaseProgress {
    pub fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ ");

        let bar = ProgressBar::new(Phase::ALL.len() as u64);
        bar.set_style(style);
        Self { bar }
    }

    pub fn hidden() -> Self {
        let progress = Self::new();
        progress.bar.set_draw_target(ProgressDrawTarget::hidden());
        progress
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}

impl Default for PhaseProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for PhaseProgress {
    fn phase_started(&self, phase: Phase) {
        self.bar.set_message(phase.label());
    }

    fn phase_finished(&self, _phase: Phase) {
        self.bar.inc(1);
    }

    fn definitions_processed(&self, count: usize, total: usize) {
        self.bar.set_message(format!("{} ({}/{})", Phase::Parse.label(), count, total));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_advance_bar() {
        let progress = PhaseProgress::hidden();
        for phase in Phase::ALL {
            progress.phase_started(phase);
            progress.phase_finished(phase);
        }
        assert_eq!(progress.position(), 4);
    }
}
