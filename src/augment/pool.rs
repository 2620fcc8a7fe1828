//! Consumable pool of augmentation phrases
//!
//! A [`Pool`] is created fresh for each augmentation call and drained as
//! phrases are selected. Selected phrases are never returned to the pool,
//! so no phrase is used twice within one call.

use rand::seq::index;
use rand::Rng;

use crate::types::AugmentConfig;

/// Remaining augmentation phrases for one augmentation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    entries: Vec<String>,
}

impl Pool {
    /// Build a pool from a preset's enhancements, in preset order.
    ///
    /// Entries are trimmed; blank entries are skipped. Duplicates are kept
    /// and count as separate entries.
    pub fn new<S: AsRef<str>>(enhancements: &[S]) -> Self {
        let entries = enhancements
            .iter()
            .map(|e| e.as_ref().trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Phrases still available, in their current order.
    pub fn remaining(&self) -> &[String] {
        &self.entries
    }

    /// Draw between `config.min_phrases` and `config.max_phrases` distinct
    /// entries (capped by what remains) and remove them from the pool.
    ///
    /// Returns the phrases in selection order; empty once the pool is
    /// exhausted.
    pub fn select<R: Rng>(&mut self, rng: &mut R, config: &AugmentConfig) -> Vec<String> {
        if self.entries.is_empty() {
            return Vec::new();
        }

        let wanted = rng.gen_range(config.min_phrases..=config.max_phrases);
        let amount = wanted.min(self.entries.len());
        let picked = index::sample(rng, self.entries.len(), amount).into_vec();

        let chosen: Vec<String> = picked
            .iter()
            .map(|&i| std::mem::take(&mut self.entries[i]))
            .collect();

        let mut doomed = picked;
        doomed.sort_unstable_by(|a, b| b.cmp(a));
        for i in doomed {
            self.entries.remove(i);
        }

        chosen
    }
}

/// Draw 1 to 3 phrases from `pool` with the default bounds.
pub fn select<R: Rng>(pool: &mut Pool, rng: &mut R) -> Vec<String> {
    pool.select(rng, &AugmentConfig::default())
}
