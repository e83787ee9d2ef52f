//! Similarity-preserving reductions: MinHash and SimHash.
//!
//! Text and data fingerprints run features through [`minhash`], pack the
//! signature with [`lsb_digests`] and fold the two words with [`simhash`].
//! Meta-IDs and mixed Content-IDs go straight to [`simhash`].

pub mod minhash;
pub mod simhash;

pub use self::minhash::{
    lsb_digests, minhash, MinHashPermutations, MinHashSignature, DEFAULT_PERMUTATION_SEED,
    NUM_PERMUTATIONS,
};
pub use self::simhash::{simhash, simhash64};

use crate::error::Result;

/// Features to 8-byte similarity digest: MinHash, LSB pack, SimHash.
pub fn feature_digest(features: &[u32], permutations: &MinHashPermutations) -> Result<[u8; 8]> {
    let signature = minhash(features, permutations)?;
    simhash64(&lsb_digests(&signature))
}
