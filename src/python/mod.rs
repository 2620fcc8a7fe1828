//! Python bindings via PyO3
//!
//! This module provides the Python interface for trigger_augment.

pub mod native;

use pyo3::prelude::*;

/// Register all Python functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_function(wrap_pyfunction!(native::augment, m)?)?;
    m.add_function(wrap_pyfunction!(native::run_pipeline, m)?)?;

    Ok(())
}
