//! Where a pipeline stage gets its preset from.
//!
//! A [`PresetSource`] is resolved only when the pipeline reaches it, after
//! the previous stage has finished. Implementations exist for already-built
//! [`Preset`]s, raw [`PresetRecord`]s and preset file paths.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::pipeline::error_code::ErrorCode;
use crate::pipeline::errors::PresetStageError;
use crate::preset::loader::read_record;
use crate::preset::record::PresetRecord;
use crate::types::Preset;

pub trait PresetSource {
    /// Name shown in progress reports before the preset is resolved.
    fn label(&self, index: usize) -> String;

    /// Load and validate the preset at chain position `index`.
    fn resolve(&self, index: usize) -> Result<Cow<'_, Preset>, PresetStageError>;
}

impl PresetSource for Preset {
    fn label(&self, index: usize) -> String {
        self.display_name(index)
    }

    fn resolve(&self, index: usize) -> Result<Cow<'_, Preset>, PresetStageError> {
        let missing = if self.triggers.is_empty() {
            Some("triggers")
        } else if self.enhancements.is_empty() {
            Some("enhancements")
        } else {
            None
        };

        match missing {
            Some(field) => Err(PresetStageError::new(
                ErrorCode::EmptyList,
                index,
                self.label(index),
                format!("\"{field}\" is empty"),
            )
            .with_hint(format!("Add at least one entry to \"{field}\""))),
            None => Ok(Cow::Borrowed(self)),
        }
    }
}

impl PresetSource for PresetRecord {
    fn label(&self, index: usize) -> String {
        PresetRecord::label(self, index)
    }

    fn resolve(&self, index: usize) -> Result<Cow<'_, Preset>, PresetStageError> {
        self.validate(index).map(Cow::Owned)
    }
}

impl PresetSource for Path {
    fn label(&self, index: usize) -> String {
        self.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("preset #{}", index + 1))
    }

    fn resolve(&self, index: usize) -> Result<Cow<'_, Preset>, PresetStageError> {
        let record = read_record(self).map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(path = %self.display(), error = %err, "failed to load preset");

            PresetStageError::new(ErrorCode::LoadFailed, index, self.label(index), err.to_string())
                .with_hint("Check that the file exists and contains a JSON object")
        })?;
        record.validate(index).map(Cow::Owned)
    }
}

impl PresetSource for PathBuf {
    fn label(&self, index: usize) -> String {
        self.as_path().label(index)
    }

    fn resolve(&self, index: usize) -> Result<Cow<'_, Preset>, PresetStageError> {
        self.as_path().resolve(index)
    }
}

impl<T: PresetSource + ?Sized> PresetSource for &T {
    fn label(&self, index: usize) -> String {
        (**self).label(index)
    }

    fn resolve(&self, index: usize) -> Result<Cow<'_, Preset>, PresetStageError> {
        (**self).resolve(index)
    }
}
