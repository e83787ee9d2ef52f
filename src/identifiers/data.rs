//! Data-ID: similarity fingerprint over content-defined chunks.

use super::header::{finalize, ComponentKind};
use super::{default_generator, Iscc};
use crate::config::DataConfig;
use crate::error::{IsccError, Result};
use crate::hashing::feature_hash32;
use crate::similarity::feature_digest;
use fastcdc::v2020::{Error as CdcError, StreamCDC};
use std::io::Read;
use tracing::{debug, trace};

fn chunking_error(err: CdcError) -> IsccError {
    match err {
        CdcError::IoError(e) => IsccError::Io(e),
        other => IsccError::Chunking(format!("{other:?}")),
    }
}

/// One 32-bit feature per content-defined chunk of `reader`.
///
/// An empty stream yields the single feature of the empty chunk.
pub fn chunk_features<R: Read>(reader: R, config: &DataConfig) -> Result<Vec<u32>> {
    config.validate()?;
    let chunker = StreamCDC::new(
        reader,
        config.min_chunk_size,
        config.avg_chunk_size,
        config.max_chunk_size,
    );

    let mut features = Vec::new();
    for chunk in chunker {
        let chunk = chunk.map_err(chunking_error)?;
        trace!(offset = chunk.offset, length = chunk.length, "Chunk boundary");
        features.push(feature_hash32(&chunk.data));
    }
    if features.is_empty() {
        features.push(feature_hash32(b""));
    }
    Ok(features)
}

impl Iscc {
    /// Data-ID: MinHash over content-defined chunks of `reader`.
    ///
    /// # Errors
    ///
    /// [`IsccError::Io`] when reading fails, [`IsccError::InvalidConfig`] for
    /// out-of-range chunk sizes.
    pub fn data_id<R: Read>(&self, reader: R) -> Result<String> {
        let _span = crate::span_trace!("data_id").entered();
        let features = chunk_features(reader, &self.config.data)?;
        let digest = feature_digest(&features, &self.permutations)?;
        let code = finalize(ComponentKind::Data, false, &digest)?;
        debug!(
            kind = %ComponentKind::Data,
            code = %code,
            chunks = features.len(),
            "Component code generated"
        );
        Ok(code)
    }
}

/// Data-ID with the default configuration.
pub fn data_id<R: Read>(reader: R) -> Result<String> {
    default_generator().data_id(reader)
}
