//! Instance-ID: exact Merkle fingerprint of a byte stream.

use super::header::{finalize, ComponentKind};
use super::{default_generator, Iscc};
use crate::error::Result;
use crate::hashing::{leaf_hash, top_hash, Digest32};
use std::io::{self, Read};
use tracing::debug;

/// An Instance-ID and the hex-encoded top hash it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceId {
    pub code: String,
    pub hash_hex: String,
}

/// Fill `buffer` from `reader`, stopping early only at end of stream.
fn fill_chunk<R: Read>(reader: &mut R, buffer: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn leaf_digests<R: Read>(mut reader: R, chunk_size: usize) -> Result<Vec<Digest32>> {
    let mut buffer = vec![0u8; chunk_size];
    let mut leaves = Vec::new();
    loop {
        let filled = fill_chunk(&mut reader, &mut buffer)?;
        if filled == 0 {
            break;
        }
        leaves.push(leaf_hash(&buffer[..filled]));
        if filled < chunk_size {
            break;
        }
    }
    Ok(leaves)
}

impl Iscc {
    /// Hash `reader` in fixed-size chunks and reduce them to a Merkle top hash.
    ///
    /// An empty stream hashes as a single empty leaf.
    pub fn instance_id<R: Read>(&self, reader: R) -> Result<InstanceId> {
        let chunk_size = self.config.instance.chunk_size;
        let _span = crate::span_trace!("instance_id", chunk_size).entered();
        let leaves = leaf_digests(reader, chunk_size)?;
        let top = top_hash(&leaves);

        let mut digest = [0u8; 8];
        digest.copy_from_slice(&top[..8]);
        let code = finalize(ComponentKind::Instance, false, &digest)?;
        debug!(
            kind = %ComponentKind::Instance,
            code = %code,
            leaves = leaves.len(),
            "Component code generated"
        );
        Ok(InstanceId {
            code,
            hash_hex: hex::encode(top),
        })
    }
}

/// Instance-ID with the default configuration.
pub fn instance_id<R: Read>(reader: R) -> Result<InstanceId> {
    default_generator().instance_id(reader)
}
