//! Native Python functions
//!
//! `augment` works on plain Python lists. `run_pipeline` takes the preset
//! chain as a JSON array of preset objects and returns the outcome as a
//! JSON string, so malformed presets surface as pipeline errors rather
//! than Python type errors.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;

use crate::augment::Augmenter;
use crate::errors::AugmentError;
use crate::pipeline::observer::NoopObserver;
use crate::pipeline::runner::Pipeline;
use crate::preset::record::PresetRecord;
use crate::types::Preset;

fn to_py_err(err: AugmentError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Augment `text` with one preset.
///
/// Raises ValueError when the text is blank or either list is empty.
#[pyfunction]
#[pyo3(signature = (text, triggers, enhancements, seed=None))]
pub fn augment(
    text: &str,
    triggers: Vec<String>,
    enhancements: Vec<String>,
    seed: Option<u64>,
) -> PyResult<String> {
    let preset = Preset::new(triggers, enhancements);
    Augmenter::new()
        .try_augment(text, &preset, &mut rng_for(seed))
        .map_err(to_py_err)
}

/// Run a chain of presets given as a JSON array.
///
/// Returns the outcome as JSON: `{"text", "applied_count", "status", "error"?}`.
#[pyfunction]
#[pyo3(signature = (text, presets_json, seed=None))]
pub fn run_pipeline(py: Python<'_>, text: &str, presets_json: &str, seed: Option<u64>) -> PyResult<String> {
    let values: Vec<Value> = serde_json::from_str(presets_json)
        .map_err(|err| to_py_err(AugmentError::from(err)))?;

    // Non-object entries become empty records so the pipeline reports them
    // at their position.
    let records: Vec<PresetRecord> = values
        .into_iter()
        .map(|value| match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => PresetRecord::default(),
        })
        .collect();

    let text = text.to_string();
    let outcome = py.allow_threads(move || {
        Pipeline::new().run(&text, &records, &mut rng_for(seed), &mut NoopObserver)
    });

    serde_json::to_string(&outcome).map_err(|err| to_py_err(AugmentError::from(err)))
}
