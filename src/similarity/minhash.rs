//! MinHash over 32-bit features with a fixed table of 128 permutations.
//!
//! Each permutation is the universal hash `((a * f + b) mod 2^64) mod (2^61 - 1)`
//! truncated to 32 bits. Slot `i` of a signature is the minimum of permutation
//! `i` over all features.

use crate::error::{IsccError, Result};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of permutations, and thus slots in a signature.
pub const NUM_PERMUTATIONS: usize = 128;

/// Seed of the default permutation table.
pub const DEFAULT_PERMUTATION_SEED: u64 = 0x4953_4343_0000_0001;

const MERSENNE_PRIME: u64 = (1 << 61) - 1;
const MAX_HASH: u64 = (1 << 32) - 1;

/// A MinHash signature: one minimum per permutation.
pub type MinHashSignature = [u32; NUM_PERMUTATIONS];

/// Immutable table of permutation constants.
///
/// Built once and shared by reference; it holds no interior mutability and
/// can be read from any number of threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinHashPermutations {
    multipliers: [u64; NUM_PERMUTATIONS],
    offsets: [u64; NUM_PERMUTATIONS],
}

impl MinHashPermutations {
    /// Use an explicit table, e.g. a published set of protocol constants.
    pub fn new(multipliers: [u64; NUM_PERMUTATIONS], offsets: [u64; NUM_PERMUTATIONS]) -> Self {
        Self {
            multipliers,
            offsets,
        }
    }

    /// Derive a table deterministically from `seed`.
    ///
    /// Multipliers are odd and both constants lie below the Mersenne prime.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut multipliers = [0u64; NUM_PERMUTATIONS];
        let mut offsets = [0u64; NUM_PERMUTATIONS];
        for (a, b) in multipliers.iter_mut().zip(offsets.iter_mut()) {
            *a = (rng.next_u64() % MERSENNE_PRIME) | 1;
            *b = rng.next_u64() % MERSENNE_PRIME;
        }
        Self {
            multipliers,
            offsets,
        }
    }

    /// Use a table given as slices, e.g. loaded from a configuration file.
    ///
    /// # Errors
    ///
    /// [`IsccError::InvalidConfig`] unless both slices hold exactly
    /// [`NUM_PERMUTATIONS`] constants.
    pub fn from_slices(multipliers: &[u64], offsets: &[u64]) -> Result<Self> {
        let table = |name: &str, values: &[u64]| {
            <[u64; NUM_PERMUTATIONS]>::try_from(values).map_err(|_| {
                IsccError::InvalidConfig(format!(
                    "minhash.table.{name} must hold {NUM_PERMUTATIONS} constants, got {}",
                    values.len()
                ))
            })
        };
        Ok(Self::new(
            table("multipliers", multipliers)?,
            table("offsets", offsets)?,
        ))
    }

    pub fn multipliers(&self) -> &[u64; NUM_PERMUTATIONS] {
        &self.multipliers
    }

    pub fn offsets(&self) -> &[u64; NUM_PERMUTATIONS] {
        &self.offsets
    }

    #[inline]
    fn permute(&self, slot: usize, feature: u32) -> u32 {
        let mixed = self.multipliers[slot]
            .wrapping_mul(feature as u64)
            .wrapping_add(self.offsets[slot]);
        ((mixed % MERSENNE_PRIME) & MAX_HASH) as u32
    }
}

impl Default for MinHashPermutations {
    fn default() -> Self {
        Self::from_seed(DEFAULT_PERMUTATION_SEED)
    }
}

/// Compute the MinHash signature of `features`.
///
/// # Errors
///
/// [`IsccError::EmptyInput`] when `features` is empty; there is no minimum
/// to take.
pub fn minhash(features: &[u32], permutations: &MinHashPermutations) -> Result<MinHashSignature> {
    if features.is_empty() {
        return Err(IsccError::EmptyInput { stage: "minhash" });
    }
    let mut signature = [u32::MAX; NUM_PERMUTATIONS];
    for (slot, min) in signature.iter_mut().enumerate() {
        *min = features
            .iter()
            .map(|&f| permutations.permute(slot, f))
            .min()
            .unwrap_or(u32::MAX);
    }
    Ok(signature)
}

/// Pack the least significant bit of each slot into two 8-byte digests.
///
/// Slots 0..64 fill the first word MSB-first (slot 0 is bit 63), slots
/// 64..128 the second. Words are serialized big-endian.
pub fn lsb_digests(signature: &MinHashSignature) -> [[u8; 8]; 2] {
    let pack = |slots: &[u32]| {
        slots
            .iter()
            .fold(0u64, |word, &value| (word << 1) | (value & 1) as u64)
            .to_be_bytes()
    };
    let (low, high) = signature.split_at(NUM_PERMUTATIONS / 2);
    [pack(low), pack(high)]
}
