//! Core data types for trigger augmentation
//!
//! This module contains the validated [`Preset`] record and the
//! [`AugmentConfig`] that controls how phrases are appended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AugmentError, Result};

/// A named bundle of trigger phrases and augmentation phrases.
///
/// Presets are immutable once built. Both lists must be non-empty for the
/// preset to be usable; individual entries that are blank after trimming
/// are kept but never participate in matching or selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Display name of the preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Words or phrases whose occurrences get augmented
    pub triggers: Vec<String>,
    /// Phrases appended after a matched trigger
    pub enhancements: Vec<String>,
    /// When the preset was saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Preset {
    /// Create an unnamed preset.
    pub fn new<T, E>(triggers: T, enhancements: E) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            name: None,
            triggers: triggers.into_iter().map(Into::into).collect(),
            enhancements: enhancements.into_iter().map(Into::into).collect(),
            created: None,
        }
    }

    /// Build a preset from two newline-separated lists.
    ///
    /// Each line is trimmed and blank lines are dropped.
    pub fn from_lines(triggers: &str, enhancements: &str) -> Self {
        Self::new(split_lines(triggers), split_lines(enhancements))
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the creation timestamp
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Returns `true` when both lists are non-empty.
    pub fn is_usable(&self) -> bool {
        !self.triggers.is_empty() && !self.enhancements.is_empty()
    }

    /// Name used in logs and error reports.
    pub fn display_name(&self, index: usize) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("preset #{}", index + 1),
        }
    }

    /// File name for this preset on disk: every character outside
    /// `[A-Za-z0-9]` becomes `_`, with a `.json` extension.
    pub fn file_name(&self) -> Option<String> {
        let name = self.name.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }
        let stem: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        Some(format!("{stem}.json"))
    }

    /// Serialize to the on-disk JSON record, stamping `created` when unset.
    pub fn to_json(&self) -> Result<String> {
        let mut record = self.clone();
        if record.created.is_none() {
            record.created = Some(Utc::now());
        }
        Ok(serde_json::to_string_pretty(&record)?)
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// How a matched trigger is written back into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCasing {
    /// Use the trigger as spelled in the preset
    #[default]
    Preset,
    /// Keep the text exactly as it appeared in the source
    Source,
}

/// Configuration for augmentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    /// Fewest phrases appended per match (while the pool lasts)
    pub min_phrases: usize,
    /// Most phrases appended per match
    pub max_phrases: usize,
    /// Joins the trigger and each appended phrase
    pub separator: String,
    /// Spelling of the trigger in the output
    pub trigger_casing: TriggerCasing,
    /// Seed for reproducible runs (default: entropy)
    pub seed: Option<u64>,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            min_phrases: 1,
            max_phrases: 3,
            separator: " ".to_string(),
            trigger_casing: TriggerCasing::Preset,
            seed: None,
        }
    }
}

impl AugmentConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON, filling unspecified fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_phrases == 0 {
            return Err(AugmentError::invalid_config("min_phrases must be > 0"));
        }

        if self.max_phrases < self.min_phrases {
            return Err(AugmentError::invalid_config(format!(
                "max_phrases must be >= min_phrases, got {} < {}",
                self.max_phrases, self.min_phrases
            )));
        }

        if self.separator.is_empty() {
            return Err(AugmentError::invalid_config("separator must not be empty"));
        }

        Ok(())
    }

    /// Builder: set phrase count bounds
    pub fn with_phrase_range(mut self, min: usize, max: usize) -> Self {
        self.min_phrases = min;
        self.max_phrases = max;
        self
    }

    /// Builder: set separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder: set trigger casing
    pub fn with_trigger_casing(mut self, casing: TriggerCasing) -> Self {
        self.trigger_casing = casing;
        self
    }

    /// Builder: set RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_trims_and_drops_blanks() {
        let preset = Preset::from_lines("  hello \n\n world\n", "A\n   \nB");
        assert_eq!(preset.triggers, vec!["hello", "world"]);
        assert_eq!(preset.enhancements, vec!["A", "B"]);
        assert!(preset.name.is_none());
    }

    #[test]
    fn test_is_usable() {
        assert!(Preset::new(["a"], ["b"]).is_usable());
        assert!(!Preset::new(Vec::<String>::new(), ["b"]).is_usable());
        assert!(!Preset::new(["a"], Vec::<String>::new()).is_usable());
    }

    #[test]
    fn test_display_name_falls_back_to_position() {
        let preset = Preset::new(["a"], ["b"]);
        assert_eq!(preset.display_name(0), "preset #1");
        assert_eq!(preset.with_name("Greetings").display_name(0), "Greetings");
    }

    #[test]
    fn test_file_name_sanitizes() {
        let preset = Preset::new(["a"], ["b"]).with_name("Мой набор v2");
        assert_eq!(preset.file_name().as_deref(), Some("__________v2.json"));
        assert_eq!(Preset::new(["a"], ["b"]).file_name(), None);
    }

    #[test]
    fn test_to_json_stamps_created() {
        let preset = Preset::new(["cat"], ["fluffy"]).with_name("Cats");
        let json = preset.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Cats");
        assert_eq!(value["triggers"][0], "cat");
        assert!(value["created"].is_string());
    }

    #[test]
    fn test_config_default() {
        let config = AugmentConfig::default();
        assert_eq!(config.min_phrases, 1);
        assert_eq!(config.max_phrases, 3);
        assert_eq!(config.separator, " ");
        assert_eq!(config.trigger_casing, TriggerCasing::Preset);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config = AugmentConfig::default().with_phrase_range(0, 3);
        assert!(config.validate().is_err());

        let config = AugmentConfig::default().with_phrase_range(3, 2);
        assert!(config.validate().is_err());

        let config = AugmentConfig::default().with_separator("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = AugmentConfig::from_json(r#"{"max_phrases": 2, "trigger_casing": "source"}"#)
            .unwrap();
        assert_eq!(config.min_phrases, 1);
        assert_eq!(config.max_phrases, 2);
        assert_eq!(config.trigger_casing, TriggerCasing::Source);

        assert!(AugmentConfig::from_json(r#"{"min_phrases": 0}"#).is_err());
    }
}
