//! Per-preset pipeline failures.
//!
//! A [`PresetStageError`] names the preset that stopped a run: its 0-based
//! position in the chain, its display name, a stable [`ErrorCode`], a
//! human-readable `message`, and an optional `hint`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error_code::ErrorCode;

/// The failure that halted a pipeline run.
///
/// # Display format
///
/// ```text
/// [missing_field] preset 1 (Greetings): preset has no "enhancements" list
/// ```
///
/// # JSON format
///
/// ```json
/// {
///   "code": "missing_field",
///   "preset_index": 1,
///   "preset_name": "Greetings",
///   "message": "preset has no \"enhancements\" list",
///   "hint": "Add an \"enhancements\" array of strings"
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("[{code}] preset {preset_index} ({preset_name}): {message}")]
pub struct PresetStageError {
    /// Stable error code for programmatic matching.
    pub code: ErrorCode,

    /// 0-based position of the failing preset in the chain.
    pub preset_index: usize,

    /// Preset name, file stem, or `preset #<n>` when neither is known.
    pub preset_name: String,

    /// Human-readable description of the problem.
    pub message: String,

    /// Optional suggestion for how to fix the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl PresetStageError {
    pub fn new(
        code: ErrorCode,
        preset_index: usize,
        preset_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            preset_index,
            preset_name: preset_name.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Attach a hint suggesting how to fix the problem.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Error recorded when a run is cancelled before `preset_index` ran.
    pub fn cancelled(preset_index: usize, preset_name: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::Cancelled,
            preset_index,
            preset_name,
            "run cancelled before this preset was applied",
        )
    }
}
