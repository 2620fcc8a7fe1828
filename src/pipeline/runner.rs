//! Pipeline runner: applies a chain of presets to one text.
//!
//! The [`Pipeline`] threads a single text buffer through its presets in
//! order. Each stage resolves its preset only after the previous stage has
//! finished, validates it, and applies it with the [`Augmenter`]. The first
//! preset that fails to resolve stops the run; everything applied before it
//! is kept.
//!
//! ```text
//! Idle ─run()─▶ Running ─┬─ all presets applied ─▶ Completed
//!                        ├─ bad preset ──────────▶ Aborted
//!                        └─ token cancelled ─────▶ Cancelled
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::augment::Augmenter;
use crate::errors::Result;
use crate::pipeline::cancel::CancellationToken;
use crate::pipeline::errors::PresetStageError;
use crate::pipeline::observer::{NoopObserver, PipelineObserver, StageClock, StageReport};
use crate::pipeline::source::PresetSource;
use crate::types::AugmentConfig;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a preset stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($index:expr, $name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("preset_stage", index = $index, name = %$name).entered();
    };
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    /// Every preset was applied
    Completed,
    /// A preset failed to load or validate
    Aborted,
    /// The cancellation token fired between stages
    Cancelled,
}

/// Result of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOutcome {
    /// Text after the last successfully applied preset
    pub text: String,
    /// Number of presets fully applied
    pub applied_count: usize,
    pub status: PipelineStatus,
    /// Why the run stopped early; `None` when completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PresetStageError>,
}

impl PipelineOutcome {
    pub fn is_completed(&self) -> bool {
        self.status == PipelineStatus::Completed
    }
}

/// Sequential preset chain runner.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    augmenter: Augmenter,
}

impl Pipeline {
    /// Create a pipeline with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with a validated configuration
    pub fn with_config(config: AugmentConfig) -> Result<Self> {
        Ok(Self {
            augmenter: Augmenter::with_config(config)?,
        })
    }

    pub fn config(&self) -> &AugmentConfig {
        self.augmenter.config()
    }

    /// RNG for a run: seeded from the config when a seed is set.
    pub fn rng(&self) -> StdRng {
        match self.config().seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Apply `presets` to `text` in order.
    pub fn run<S, R>(
        &self,
        text: &str,
        presets: &[S],
        rng: &mut R,
        observer: &mut impl PipelineObserver,
    ) -> PipelineOutcome
    where
        S: PresetSource,
        R: Rng,
    {
        self.run_inner(text, presets, rng, observer, None)
    }

    /// Like [`run`](Self::run), checking `cancel` before each stage.
    pub fn run_with_cancel<S, R>(
        &self,
        text: &str,
        presets: &[S],
        rng: &mut R,
        observer: &mut impl PipelineObserver,
        cancel: &CancellationToken,
    ) -> PipelineOutcome
    where
        S: PresetSource,
        R: Rng,
    {
        self.run_inner(text, presets, rng, observer, Some(cancel))
    }

    /// Run the same preset chain over several independent documents.
    ///
    /// Documents are processed in parallel; stages within a document stay
    /// sequential. Document `i` uses an RNG seeded with `seed + i` when the
    /// config has a seed, so batch results are reproducible.
    pub fn run_batch<S>(&self, docs: &[String], presets: &[S]) -> Vec<PipelineOutcome>
    where
        S: PresetSource + Sync,
    {
        docs.par_iter()
            .enumerate()
            .map(|(i, doc)| {
                let mut rng = match self.config().seed {
                    Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
                    None => StdRng::from_entropy(),
                };
                self.run(doc, presets, &mut rng, &mut NoopObserver)
            })
            .collect()
    }

    fn run_inner<S, R>(
        &self,
        text: &str,
        presets: &[S],
        rng: &mut R,
        observer: &mut impl PipelineObserver,
        cancel: Option<&CancellationToken>,
    ) -> PipelineOutcome
    where
        S: PresetSource,
        R: Rng,
    {
        let total = presets.len();
        observer.on_run_start(total);

        let mut buffer = text.to_string();

        for (index, source) in presets.iter().enumerate() {
            if cancel.is_some_and(CancellationToken::is_cancelled) {
                let error = PresetStageError::cancelled(index, source.label(index));
                #[cfg(feature = "tracing")]
                tracing::info!(applied = index, total, "pipeline cancelled");
                return stop(buffer, index, PipelineStatus::Cancelled, error, observer);
            }

            let preset = match source.resolve(index) {
                Ok(preset) => preset,
                Err(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(%error, applied = index, total, "pipeline aborted");
                    return stop(buffer, index, PipelineStatus::Aborted, error, observer);
                }
            };

            let name = preset.display_name(index);
            trace_stage!(index, name);
            observer.on_stage_start(index, total, &name);

            let clock = StageClock::start();
            let (next, report) = self.augmenter.augment_with_report(&buffer, &preset, rng);
            buffer = next;

            observer.on_progress(index, total, &name);
            let report = StageReport::new(clock.elapsed(), report);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                index,
                total,
                name = %name,
                matches = report.matches(),
                appended = report.phrases_appended(),
                "preset applied"
            );

            observer.on_stage_end(index, &name, &report);
        }

        PipelineOutcome {
            text: buffer,
            applied_count: total,
            status: PipelineStatus::Completed,
            error: None,
        }
    }
}

fn stop(
    text: String,
    applied_count: usize,
    status: PipelineStatus,
    error: PresetStageError,
    observer: &mut impl PipelineObserver,
) -> PipelineOutcome {
    observer.on_abort(&error);
    PipelineOutcome {
        text,
        applied_count,
        status,
        error: Some(error),
    }
}

/// Apply `presets` to `text` with the default configuration, an entropy
/// seeded RNG and no observer.
pub fn run_pipeline<S: PresetSource>(text: &str, presets: &[S]) -> PipelineOutcome {
    let pipeline = Pipeline::new();
    let mut rng = pipeline.rng();
    pipeline.run(text, presets, &mut rng, &mut NoopObserver)
}
