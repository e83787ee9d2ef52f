//! ISCC component codes.
//!
//! Similarity-preserving and exact identifiers for media content: Meta-IDs
//! from titles, Content-IDs from text and images, Data-IDs and Instance-IDs
//! from raw byte streams. Every code is 9 bytes (a header byte and an
//! 8-byte digest) rendered as 13 base58 symbols.
//!
//! ```no_run
//! let meta = iscc::meta_id("ISCC Content Identifiers", "", 1)?;
//! let instance = iscc::instance_id(std::fs::File::open("document.pdf")?)?;
//! println!("{} {}", meta.code, instance.code);
//! # Ok::<(), iscc::IsccError>(())
//! ```

/// Base58 codec for component codes
pub mod codec;
/// Configuration structs with protocol defaults
pub mod config;
pub mod error;
/// Double SHA-256, Merkle reduction and feature hashes
pub mod hashing;
/// Component code generators
pub mod identifiers;
pub mod logging;
/// DCT-based perceptual image hash
pub mod perceptual;
/// MinHash and SimHash reductions
pub mod similarity;
/// Unicode normalization and n-gram windows
pub mod text;

#[cfg(feature = "python-ext")]
pub mod python_bindings;

pub use config::IsccConfig;
pub use error::{IsccError, Result};
pub use identifiers::{
    content_id_image, content_id_image_from_bytes, content_id_mixed, content_id_text, data_id,
    instance_id, meta_id, ComponentKind, InstanceId, Iscc, MetaId,
};

/// A Python module implemented in Rust.
#[cfg(feature = "python-ext")]
#[pyo3::pymodule]
fn iscc(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    python_bindings::register_python_bindings(m.py(), m)
}
