//! Python bindings for ISCC code generation.
//!
//! Compiled only with the `python-ext` feature. Byte streams cross the
//! boundary as `bytes`; images are passed encoded and decoded on the Rust
//! side.

pub mod identifiers;

use pyo3::prelude::*;

/// Register all Python bindings with the module.
pub fn register_python_bindings(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    identifiers::register_identifier_bindings(py, m)?;
    m.add_function(wrap_pyfunction!(crate::logging::init_logging, m)?)?;
    Ok(())
}
