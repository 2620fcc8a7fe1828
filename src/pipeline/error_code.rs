//! Stable error codes shared by pipeline diagnostics.
//!
//! Codes serialize as snake_case strings and never change meaning, so
//! callers can match on them programmatically.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// `triggers` or `enhancements` is absent (or null)
    MissingField,
    /// A list is not an array of strings
    InvalidType,
    /// A list is present but has no entries
    EmptyList,
    /// The preset payload could not be read or parsed
    LoadFailed,
    /// The run was cancelled between stages
    Cancelled,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidType => "invalid_type",
            Self::EmptyList => "empty_list",
            Self::LoadFailed => "load_failed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde() {
        for code in [
            ErrorCode::MissingField,
            ErrorCode::InvalidType,
            ErrorCode::EmptyList,
            ErrorCode::LoadFailed,
            ErrorCode::Cancelled,
        ] {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, code.to_string());
        }
    }
}
