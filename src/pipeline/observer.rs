//! Pipeline observation hooks.
//!
//! A [`PipelineObserver`] is notified at every stage boundary of a run.
//! All hooks have empty default bodies, so implementors override only what
//! they need. [`NoopObserver`] ignores everything; [`ProgressFn`] adapts a
//! closure to the per-stage progress callback; [`StageTimingObserver`]
//! records a [`StageReport`] per applied preset.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::augment::AugmentReport;
use crate::pipeline::errors::PresetStageError;

/// Receives notifications while a pipeline runs.
pub trait PipelineObserver {
    /// Called once before the first stage with the number of presets.
    fn on_run_start(&mut self, _total: usize) {}

    /// Called before preset `index` is applied.
    fn on_stage_start(&mut self, _index: usize, _total: usize, _name: &str) {}

    /// Called once per applied preset, right after its output is in place.
    fn on_progress(&mut self, _index: usize, _total: usize, _name: &str) {}

    /// Called after preset `index` with its stage report.
    fn on_stage_end(&mut self, _index: usize, _name: &str, _report: &StageReport) {}

    /// Called when the run stops early (malformed preset or cancellation).
    fn on_abort(&mut self, _error: &PresetStageError) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Adapts a `FnMut(index, total, name)` closure to [`PipelineObserver::on_progress`].
pub struct ProgressFn<F>(pub F);

impl<F> PipelineObserver for ProgressFn<F>
where
    F: FnMut(usize, usize, &str),
{
    fn on_progress(&mut self, index: usize, total: usize, name: &str) {
        (self.0)(index, total, name)
    }
}

/// Wall-clock timer for one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Timing and match statistics for one applied preset.
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    elapsed: Duration,
    augment: AugmentReport,
}

impl StageReport {
    pub fn new(elapsed: Duration, augment: AugmentReport) -> Self {
        Self { elapsed, augment }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Trigger occurrences found
    pub fn matches(&self) -> usize {
        self.augment.matches
    }

    /// Occurrences that received phrases
    pub fn augmented(&self) -> usize {
        self.augment.augmented
    }

    pub fn phrases_appended(&self) -> usize {
        self.augment.phrases_appended
    }

    /// Occurrences per trigger phrase
    pub fn hits(&self) -> &FxHashMap<String, usize> {
        &self.augment.hits
    }
}

/// Records every stage report and the abort reason, if any.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    total: usize,
    reports: Vec<(String, StageReport)>,
    progress: Vec<(usize, usize, String)>,
    aborted: Option<PresetStageError>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presets announced at run start
    pub fn total(&self) -> usize {
        self.total
    }

    /// `(preset name, report)` per applied preset, in order
    pub fn reports(&self) -> &[(String, StageReport)] {
        &self.reports
    }

    /// `(index, total, name)` progress events, in order
    pub fn progress(&self) -> &[(usize, usize, String)] {
        &self.progress
    }

    pub fn aborted(&self) -> Option<&PresetStageError> {
        self.aborted.as_ref()
    }

    /// Sum of stage durations
    pub fn total_elapsed(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_run_start(&mut self, total: usize) {
        self.total = total;
    }

    fn on_progress(&mut self, index: usize, total: usize, name: &str) {
        self.progress.push((index, total, name.to_string()));
    }

    fn on_stage_end(&mut self, _index: usize, name: &str, report: &StageReport) {
        self.reports.push((name.to_string(), report.clone()));
    }

    fn on_abort(&mut self, error: &PresetStageError) {
        self.aborted = Some(error.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::error_code::ErrorCode;

    #[test]
    fn test_progress_fn_forwards() {
        let mut seen = Vec::new();
        {
            let mut obs = ProgressFn(|i: usize, t: usize, n: &str| seen.push((i, t, n.to_string())));
            obs.on_stage_start(0, 2, "a");
            obs.on_progress(0, 2, "a");
            obs.on_progress(1, 2, "b");
        }
        assert_eq!(seen, vec![(0, 2, "a".to_string()), (1, 2, "b".to_string())]);
    }

    #[test]
    fn test_timing_observer_records() {
        let mut obs = StageTimingObserver::new();
        obs.on_run_start(2);
        let report = StageReport::new(
            Duration::from_millis(3),
            AugmentReport {
                matches: 2,
                augmented: 1,
                phrases_appended: 3,
                hits: FxHashMap::default(),
            },
        );
        obs.on_stage_end(0, "first", &report);
        obs.on_abort(&PresetStageError::new(ErrorCode::EmptyList, 1, "second", "empty"));

        assert_eq!(obs.total(), 2);
        assert_eq!(obs.reports().len(), 1);
        assert_eq!(obs.reports()[0].1.matches(), 2);
        assert_eq!(obs.reports()[0].1.phrases_appended(), 3);
        assert_eq!(obs.total_elapsed(), Duration::from_millis(3));
        assert_eq!(obs.aborted().map(|e| e.preset_index), Some(1));
    }
}
