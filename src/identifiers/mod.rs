//! Component code generators.
//!
//! An [`Iscc`] bundles a validated [`IsccConfig`] with the MinHash
//! permutation table derived from it. The free functions in this module
//! delegate to a process-wide generator built from the default
//! configuration.

pub mod content;
pub mod data;
pub mod header;
pub mod instance;
pub mod meta;

pub use self::content::{
    content_id_image, content_id_image_from_bytes, content_id_mixed, content_id_text,
};
pub use self::data::{chunk_features, data_id};
pub use self::header::{finalize, ComponentKind};
pub use self::instance::{instance_id, InstanceId};
pub use self::meta::{meta_id, MetaId};

use crate::config::IsccConfig;
use crate::error::Result;
use crate::similarity::MinHashPermutations;
use once_cell::sync::Lazy;

static DEFAULT_GENERATOR: Lazy<Iscc> = Lazy::new(Iscc::default);

/// Generator for all component codes.
#[derive(Debug, Clone)]
pub struct Iscc {
    config: IsccConfig,
    permutations: MinHashPermutations,
}

impl Iscc {
    /// Build a generator with the permutation table `config.minhash` describes.
    ///
    /// # Errors
    ///
    /// [`IsccError::InvalidConfig`](crate::IsccError::InvalidConfig) when any
    /// section of `config` is out of range.
    pub fn new(config: IsccConfig) -> Result<Self> {
        config.validate()?;
        let permutations = config.minhash.permutations()?;
        Ok(Self {
            config,
            permutations,
        })
    }

    /// Build a generator with an explicit permutation table.
    ///
    /// `config.minhash` is ignored.
    pub fn with_permutations(config: IsccConfig, permutations: MinHashPermutations) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            permutations,
        })
    }

    pub fn config(&self) -> &IsccConfig {
        &self.config
    }

    pub fn permutations(&self) -> &MinHashPermutations {
        &self.permutations
    }
}

impl Default for Iscc {
    fn default() -> Self {
        let config = IsccConfig::default();
        let permutations = MinHashPermutations::default();
        Self {
            config,
            permutations,
        }
    }
}

/// The shared generator behind the free functions.
pub fn default_generator() -> &'static Iscc {
    &DEFAULT_GENERATOR
}
