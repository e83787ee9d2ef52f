//! Centralized module for the hash functions behind every component code.
//!
//! Cryptographic: double SHA-256 for Instance-ID leaves and inner nodes.
//! Non-cryptographic: xxHash32/xxHash64 (seed 0) turning text windows and
//! data chunks into numeric features.

pub mod merkle;

pub use self::merkle::{inner_hash, leaf_hash, top_hash, Digest32};

use sha2::{Digest, Sha256};
use xxhash_rust::xxh32::xxh32;
use xxhash_rust::xxh64::xxh64;

/// Computes `SHA-256(SHA-256(parts...))` over the concatenation of `parts`.
pub fn sha256d_parts(parts: &[&[u8]]) -> Digest32 {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let first = hasher.finalize();
    Sha256::digest(first).into()
}

/// Computes `SHA-256(SHA-256(data))`.
pub fn sha256d(data: &[u8]) -> Digest32 {
    sha256d_parts(&[data])
}

/// 32-bit feature hash of a window or chunk.
#[inline]
pub fn feature_hash32(data: &[u8]) -> u32 {
    xxh32(data, 0)
}

/// 64-bit feature hash of a window, as an 8-byte big-endian digest.
#[inline]
pub fn feature_digest64(data: &[u8]) -> [u8; 8] {
    xxh64(data, 0).to_be_bytes()
}
