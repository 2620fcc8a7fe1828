//! Reading and writing preset files.
//!
//! Presets live on disk as one pretty-printed JSON object per `.json`
//! file. Loading never validates the record's shape; that happens when a
//! pipeline reaches the preset.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AugmentError, Result};
use crate::preset::record::PresetRecord;
use crate::types::Preset;

/// Read one preset file. The record's `source` is set to the file stem.
pub fn read_record(path: &Path) -> Result<PresetRecord> {
    let json = fs::read_to_string(path).map_err(|err| AugmentError::io(path, err))?;
    let record = PresetRecord::from_json(&json)?;

    Ok(match path.file_stem().and_then(|stem| stem.to_str()) {
        Some(stem) => record.with_source(stem),
        None => record,
    })
}

/// List the `*.json` files of `dir`, sorted by file name.
pub fn list_preset_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|err| AugmentError::io(dir, err))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| AugmentError::io(dir, err))?.path();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Write `preset` into `dir` under [`Preset::file_name`] and return the path.
///
/// Presets must be usable and named to be saved.
pub fn save_preset(dir: &Path, preset: &Preset) -> Result<PathBuf> {
    if !preset.is_usable() {
        return Err(AugmentError::invalid_preset(
            "add triggers and enhancements before saving",
        ));
    }
    let file_name = preset
        .file_name()
        .ok_or_else(|| AugmentError::invalid_preset("a preset needs a name to be saved"))?;

    let path = dir.join(file_name);
    let json = preset.to_json()?;
    fs::write(&path, json).map_err(|err| AugmentError::io(&path, err))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), "saved preset");

    Ok(path)
}
