//! Single-preset augmentation
//!
//! The [`Augmenter`] walks a preset's triggers longest-first. For each
//! trigger it first collects every boundary-safe match in the current text
//! (read-only), then stitches a new text from the unmatched spans and the
//! augmented matches. The next trigger scans that new text, so a shorter
//! trigger may match inside phrases appended by an earlier one.

use rand::Rng;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::augment::matcher::{find_matches, TriggerMatch, TriggerSet};
use crate::augment::pool::Pool;
use crate::errors::{AugmentError, Result};
use crate::types::{AugmentConfig, Preset, TriggerCasing};

/// What one augmentation call did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AugmentReport {
    /// Boundary-safe occurrences found across all triggers
    pub matches: usize,
    /// Occurrences that received at least one phrase
    pub augmented: usize,
    /// Phrases appended in total
    pub phrases_appended: usize,
    /// Occurrences per trigger phrase (trimmed, as written in the preset)
    pub hits: FxHashMap<String, usize>,
}

/// Applies one preset to a text.
#[derive(Debug, Clone, Default)]
pub struct Augmenter {
    config: AugmentConfig,
}

impl Augmenter {
    /// Create an augmenter with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an augmenter with a validated configuration
    pub fn with_config(config: AugmentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AugmentConfig {
        &self.config
    }

    /// Augment `text` with `preset`.
    ///
    /// Blank text or a preset with an empty trigger or enhancement list
    /// returns the text unchanged.
    pub fn augment<R: Rng>(&self, text: &str, preset: &Preset, rng: &mut R) -> String {
        self.augment_with_report(text, preset, rng).0
    }

    /// Like [`augment`](Self::augment), but rejects blank text and presets
    /// without any usable trigger or enhancement.
    pub fn try_augment<R: Rng>(&self, text: &str, preset: &Preset, rng: &mut R) -> Result<String> {
        if text.trim().is_empty() {
            return Err(AugmentError::empty_input("source text is blank"));
        }
        if preset.triggers.iter().all(|t| t.trim().is_empty()) {
            return Err(AugmentError::empty_input("preset has no triggers"));
        }
        if preset.enhancements.iter().all(|e| e.trim().is_empty()) {
            return Err(AugmentError::empty_input("preset has no enhancements"));
        }
        Ok(self.augment(text, preset, rng))
    }

    /// Augment `text` and report match statistics.
    pub fn augment_with_report<R: Rng>(
        &self,
        text: &str,
        preset: &Preset,
        rng: &mut R,
    ) -> (String, AugmentReport) {
        let mut report = AugmentReport::default();
        if text.trim().is_empty() || !preset.is_usable() {
            return (text.to_string(), report);
        }

        let triggers = TriggerSet::new(&preset.triggers);
        let mut pool = Pool::new(&preset.enhancements);
        let mut current = text.to_string();

        for trigger in triggers.iter() {
            let matches = find_matches(&current, trigger);
            if matches.is_empty() {
                continue;
            }
            report.matches += matches.len();
            *report.hits.entry(trigger.phrase.clone()).or_insert(0) += matches.len();

            current = self.stitch(&current, &matches, &trigger.phrase, &mut pool, rng, &mut report);
        }

        (current, report)
    }

    /// Rebuild `text`, replacing each match with its augmented form.
    fn stitch<R: Rng>(
        &self,
        text: &str,
        matches: &[TriggerMatch],
        phrase: &str,
        pool: &mut Pool,
        rng: &mut R,
        report: &mut AugmentReport,
    ) -> String {
        let mut out = String::with_capacity(text.len() + matches.len() * 16);
        let mut last = 0;

        for m in matches {
            out.push_str(&text[last..m.start]);
            last = m.end;

            let selected = pool.select(rng, &self.config);
            if selected.is_empty() {
                out.push_str(m.matched(text));
                continue;
            }

            out.push_str(&m.boundary);
            out.push_str(match self.config.trigger_casing {
                TriggerCasing::Preset => phrase,
                TriggerCasing::Source => m.text.as_str(),
            });
            for addition in &selected {
                out.push_str(&self.config.separator);
                out.push_str(addition);
            }
            report.augmented += 1;
            report.phrases_appended += selected.len();
        }

        out.push_str(&text[last..]);
        out
    }
}

/// Augment `text` with `preset` using the default configuration and a
/// thread-local RNG.
pub fn augment(text: &str, preset: &Preset) -> String {
    Augmenter::new().augment(text, preset, &mut rand::thread_rng())
}

/// Strict variant of [`augment`]: blank text or an empty trigger /
/// enhancement list is an [`AugmentError::EmptyInput`].
pub fn try_augment(text: &str, preset: &Preset) -> Result<String> {
    Augmenter::new().try_augment(text, preset, &mut rand::thread_rng())
}
