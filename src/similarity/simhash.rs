//! SimHash: per-bit majority vote across equal-length digests.

use crate::error::{IsccError, Result};

/// Combine `digests` into one digest of the same length.
///
/// Bit positions are counted MSB-first from the first byte. An output bit is
/// set when at least `ceil(n / 2)` of the `n` inputs have it set, so with two
/// inputs a single vote suffices.
pub fn simhash<D: AsRef<[u8]>>(digests: &[D]) -> Result<Vec<u8>> {
    let width = digests
        .first()
        .ok_or(IsccError::EmptyInput { stage: "simhash" })?
        .as_ref()
        .len();

    let mut votes = vec![0usize; width * 8];
    for (index, digest) in digests.iter().enumerate() {
        let digest = digest.as_ref();
        if digest.len() != width {
            return Err(IsccError::InconsistentLength {
                expected: width,
                found: digest.len(),
                index,
            });
        }
        for (bit, count) in votes.iter_mut().enumerate() {
            if digest[bit / 8] & (0x80 >> (bit % 8)) != 0 {
                *count += 1;
            }
        }
    }

    let threshold = digests.len().div_ceil(2);
    let mut out = vec![0u8; width];
    for (bit, &count) in votes.iter().enumerate() {
        if count >= threshold {
            out[bit / 8] |= 0x80 >> (bit % 8);
        }
    }
    Ok(out)
}

/// [`simhash`] over 8-byte digests, returning a fixed-size array.
pub fn simhash64<D: AsRef<[u8]>>(digests: &[D]) -> Result<[u8; 8]> {
    if let Some(first) = digests.first() {
        let found = first.as_ref().len();
        if found != 8 {
            return Err(IsccError::InconsistentLength {
                expected: 8,
                found,
                index: 0,
            });
        }
    }
    let combined = simhash(digests)?;
    let mut out = [0u8; 8];
    out.copy_from_slice(&combined);
    Ok(out)
}
