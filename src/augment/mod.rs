//! Trigger matching, phrase selection and single-preset augmentation.
//!
//! ## Submodules
//!
//! - [`matcher`] - boundary-safe, case-insensitive trigger occurrences
//! - [`pool`] - consumable phrase pool and random selection
//! - [`augmenter`] - applies one preset to a text

pub mod augmenter;
pub mod matcher;
pub mod pool;

pub use augmenter::{augment, try_augment, AugmentReport, Augmenter};
pub use matcher::{find_all, find_matches, Trigger, TriggerMatch, TriggerSet};
pub use pool::{select, Pool};
