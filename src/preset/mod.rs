//! Preset payloads and preset files.
//!
//! - [`record`] - raw JSON records and their validation into [`Preset`](crate::types::Preset)
//! - [`loader`] - reading, listing and saving preset files

pub mod loader;
pub mod record;

pub use loader::{list_preset_files, read_record, save_preset};
pub use record::PresetRecord;
