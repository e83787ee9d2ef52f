//! Python bindings for component code generation and the base58 codec.

use crate::error::IsccError;
use crate::identifiers;
use pyo3::prelude::*;
use std::fs::File;
use std::io::BufReader;

/// Register identifier and codec Python bindings.
pub fn register_identifier_bindings(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(meta_id_py, m)?)?;
    m.add_function(wrap_pyfunction!(content_id_text_py, m)?)?;
    m.add_function(wrap_pyfunction!(content_id_image_py, m)?)?;
    m.add_function(wrap_pyfunction!(content_id_mixed_py, m)?)?;
    m.add_function(wrap_pyfunction!(data_id_py, m)?)?;
    m.add_function(wrap_pyfunction!(data_id_path_py, m)?)?;
    m.add_function(wrap_pyfunction!(instance_id_py, m)?)?;
    m.add_function(wrap_pyfunction!(instance_id_path_py, m)?)?;
    m.add_function(wrap_pyfunction!(encode_py, m)?)?;
    m.add_function(wrap_pyfunction!(decode_py, m)?)?;
    Ok(())
}

fn open_path(path: &str) -> PyResult<BufReader<File>> {
    let file = File::open(path).map_err(|e| crate::log_error!(IsccError::Io(e), path))?;
    Ok(BufReader::new(file))
}

/// Meta-ID as `(code, trimmed_title, trimmed_extra)`.
#[pyfunction]
#[pyo3(name = "meta_id")]
#[pyo3(signature = (title, extra="", version=1))]
fn meta_id_py(title: &str, extra: &str, version: u32) -> PyResult<(String, String, String)> {
    let id = identifiers::meta_id(title, extra, version)?;
    Ok((id.code, id.title, id.extra))
}

#[pyfunction]
#[pyo3(name = "content_id_text")]
#[pyo3(signature = (text, partial=false))]
fn content_id_text_py(text: &str, partial: bool) -> PyResult<String> {
    Ok(identifiers::content_id_text(text, partial)?)
}

/// Content-ID-Image of encoded image bytes (PNG, JPEG, ...).
#[pyfunction]
#[pyo3(name = "content_id_image")]
#[pyo3(signature = (data, partial=false))]
fn content_id_image_py(data: &[u8], partial: bool) -> PyResult<String> {
    Ok(identifiers::content_id_image_from_bytes(data, partial)?)
}

#[pyfunction]
#[pyo3(name = "content_id_mixed")]
#[pyo3(signature = (codes, partial=false))]
fn content_id_mixed_py(codes: Vec<String>, partial: bool) -> PyResult<String> {
    Ok(identifiers::content_id_mixed(codes.as_slice(), partial)?)
}

#[pyfunction]
#[pyo3(name = "data_id")]
fn data_id_py(data: &[u8]) -> PyResult<String> {
    Ok(identifiers::data_id(data)?)
}

/// Data-ID of a file, streamed from disk.
#[pyfunction]
#[pyo3(name = "data_id_path")]
fn data_id_path_py(path: &str) -> PyResult<String> {
    let reader = open_path(path)?;
    Ok(identifiers::data_id(reader)?)
}

/// Instance-ID as `(code, hex_top_hash)`.
#[pyfunction]
#[pyo3(name = "instance_id")]
fn instance_id_py(data: &[u8]) -> PyResult<(String, String)> {
    let id = identifiers::instance_id(data)?;
    Ok((id.code, id.hash_hex))
}

/// Instance-ID of a file, streamed from disk.
#[pyfunction]
#[pyo3(name = "instance_id_path")]
fn instance_id_path_py(path: &str) -> PyResult<(String, String)> {
    let reader = open_path(path)?;
    let id = identifiers::instance_id(reader)?;
    Ok((id.code, id.hash_hex))
}

/// Base58-encode a 1, 8 or 9 byte digest.
#[pyfunction]
#[pyo3(name = "encode")]
fn encode_py(digest: &[u8]) -> PyResult<String> {
    Ok(crate::codec::encode(digest).map_err(IsccError::from)?)
}

/// Decode a 2, 11 or 13 character code.
#[pyfunction]
#[pyo3(name = "decode")]
fn decode_py(code: &str) -> PyResult<Vec<u8>> {
    Ok(crate::codec::decode(code).map_err(IsccError::from)?)
}
