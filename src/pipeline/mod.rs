//! Sequential preset pipelines.
//!
//! ## Submodules
//!
//! - [`runner`] - the [`Pipeline`] and its outcome types
//! - [`source`] - lazily resolved preset inputs (presets, records, files)
//! - [`observer`] - progress, timing and abort hooks
//! - [`cancel`] - cooperative cancellation between stages
//! - [`errors`] / [`error_code`] - per-preset failure reports

pub mod cancel;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod source;

pub use cancel::CancellationToken;
pub use error_code::ErrorCode;
pub use errors::PresetStageError;
pub use observer::{NoopObserver, PipelineObserver, ProgressFn, StageReport, StageTimingObserver};
pub use runner::{run_pipeline, Pipeline, PipelineOutcome, PipelineStatus};
pub use source::PresetSource;
