//! # trigger_augment
//!
//! Boundary-aware trigger phrase augmentation.
//!
//! Given a text and a [`Preset`] (trigger phrases plus a pool of
//! augmentation phrases), the library finds every whole-word,
//! case-insensitive occurrence of a trigger and appends a random,
//! non-repeating selection of phrases after it. Presets can be chained
//! into a [`Pipeline`] where each stage consumes the previous stage's
//! output.
//!
//! ## Features
//!
//! - **Unicode-aware**: boundaries use Unicode whitespace and punctuation
//!   categories; comparison is case-insensitive per code point
//! - **Longest match first**: multi-word triggers win over their fragments
//! - **Reproducible**: every random draw goes through an injectable RNG
//! - **Fail-fast pipelines**: a malformed preset halts the chain and keeps
//!   the work already done
//! - **Python bindings**: optional, via PyO3
//!
//! ## Quick start
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use trigger_augment::{Augmenter, Preset};
//!
//! let preset = Preset::new(["cat"], ["fluffy"]);
//! let out = Augmenter::new().augment("category and cat", &preset, &mut StdRng::seed_from_u64(1));
//! assert_eq!(out, "category and cat fluffy");
//! ```

pub mod augment;
pub mod errors;
pub mod pipeline;
pub mod preset;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{AugmentError, Result};
pub use types::{AugmentConfig, Preset, TriggerCasing};

// Re-export main functionality
pub use augment::{augment, try_augment, AugmentReport, Augmenter, Pool, TriggerMatch, TriggerSet};
pub use pipeline::{
    run_pipeline, CancellationToken, ErrorCode, NoopObserver, Pipeline, PipelineObserver,
    PipelineOutcome, PipelineStatus, PresetSource, PresetStageError, ProgressFn, StageReport,
    StageTimingObserver,
};
pub use preset::PresetRecord;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
