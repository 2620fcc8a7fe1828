//! Loosely-typed preset payloads.
//!
//! A [`PresetRecord`] accepts any JSON object. Shape problems in
//! `triggers` / `enhancements` are reported by [`PresetRecord::validate`]
//! when the pipeline reaches the preset, not when the payload is parsed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{AugmentError, Result};
use crate::pipeline::error_code::ErrorCode;
use crate::pipeline::errors::PresetStageError;
use crate::types::Preset;

/// A preset as found in a JSON payload, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggers: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhancements: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Value>,
    /// Where the record came from (file stem); used when `name` is absent.
    #[serde(skip)]
    pub source: Option<String>,
}

impl PresetRecord {
    /// Parse a record from JSON. Only invalid JSON or a non-object payload
    /// fails here.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(AugmentError::invalid_preset(format!(
                "preset payload must be a JSON object, got {}",
                kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Set the source label
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The `name` field when it is a non-blank string
    pub fn name(&self) -> Option<&str> {
        self.name
            .as_ref()
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
    }

    /// Name used in progress reports and errors.
    pub fn label(&self, index: usize) -> String {
        self.name()
            .or(self.source.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("preset #{}", index + 1))
    }

    /// Check the record's shape and build a [`Preset`].
    ///
    /// `triggers` and `enhancements` must both be non-empty arrays of
    /// strings. A `created` value that is not an RFC 3339 timestamp is
    /// ignored.
    pub fn validate(&self, index: usize) -> std::result::Result<Preset, PresetStageError> {
        let label = self.label(index);
        let fail = |(code, message, hint): (ErrorCode, String, String)| {
            PresetStageError::new(code, index, label.clone(), message).with_hint(hint)
        };

        let triggers = string_list(self.triggers.as_ref(), "triggers").map_err(&fail)?;
        let enhancements = string_list(self.enhancements.as_ref(), "enhancements").map_err(&fail)?;

        let mut preset = Preset::new(triggers, enhancements);
        preset.name = self
            .name()
            .map(str::to_string)
            .or_else(|| self.source.clone());
        preset.created = self
            .created
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
            .map(|ts| ts.with_timezone(&Utc));
        Ok(preset)
    }
}

impl From<&Preset> for PresetRecord {
    fn from(preset: &Preset) -> Self {
        Self {
            name: preset.name.clone().map(Value::String),
            triggers: Some(Value::from(preset.triggers.clone())),
            enhancements: Some(Value::from(preset.enhancements.clone())),
            created: preset.created.map(|ts| Value::String(ts.to_rfc3339())),
            source: None,
        }
    }
}

fn string_list(
    value: Option<&Value>,
    field: &str,
) -> std::result::Result<Vec<String>, (ErrorCode, String, String)> {
    let hint = format!("Add a \"{field}\" array of strings");
    let items = match value {
        None | Some(Value::Null) => {
            return Err((
                ErrorCode::MissingField,
                format!("preset has no \"{field}\" list"),
                hint,
            ))
        }
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err((
                ErrorCode::InvalidType,
                format!("\"{field}\" must be an array of strings, got {}", kind(other)),
                hint,
            ))
        }
    };

    if items.is_empty() {
        return Err((
            ErrorCode::EmptyList,
            format!("\"{field}\" is empty"),
            hint,
        ));
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err((
                ErrorCode::InvalidType,
                format!("\"{field}\"[{i}] must be a string, got {}", kind(other)),
                hint.clone(),
            )),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
