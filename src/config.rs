//! Configuration for ISCC code generation.
//!
//! Defaults reproduce the protocol constants. Every section can be
//! overridden individually, from code or from JSON.

use crate::error::{IsccError, Result};
use crate::similarity::{MinHashPermutations, DEFAULT_PERMUTATION_SEED};
use crate::text::{INPUT_TRIM, MIN_WINDOW_WIDTH};
use fastcdc::v2020::{AVERAGE_MAX, AVERAGE_MIN, MAXIMUM_MAX, MAXIMUM_MIN, MINIMUM_MAX, MINIMUM_MIN};
use serde::{Deserialize, Serialize};

/// Master configuration for all component codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsccConfig {
    /// Text preparation for Meta-ID and Content-ID-Text.
    pub text: TextConfig,
    /// Perceptual hash sampling for Content-ID-Image.
    pub image: ImageConfig,
    /// Content-defined chunking for Data-ID.
    pub data: DataConfig,
    /// Fixed-size chunking for Instance-ID.
    pub instance: InstanceConfig,
    /// MinHash permutation table.
    pub minhash: MinHashConfig,
}

impl IsccConfig {
    /// Parse a (possibly partial) JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| IsccError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        self.text.validate()?;
        self.image.validate()?;
        self.data.validate()?;
        self.instance.validate()?;
        self.minhash.validate()
    }
}

/// Text preparation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Byte budget for title and extra (default: 128).
    pub input_trim: usize,
    /// Letter n-gram width for Meta-ID (default: 4).
    pub meta_ngram_width: usize,
    /// Word shingle width for Content-ID-Text (default: 5).
    pub content_shingle_width: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            input_trim: INPUT_TRIM,
            meta_ngram_width: 4,
            content_shingle_width: 5,
        }
    }
}

impl TextConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, width) in [
            ("meta_ngram_width", self.meta_ngram_width),
            ("content_shingle_width", self.content_shingle_width),
        ] {
            if width < MIN_WINDOW_WIDTH {
                return Err(IsccError::InvalidConfig(format!(
                    "text.{name} must be at least {MIN_WINDOW_WIDTH}, got {width}"
                )));
            }
        }
        Ok(())
    }
}

/// Perceptual image hash configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Side of the square grayscale sample (default: 32).
    pub sample_size: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self { sample_size: 32 }
    }
}

impl ImageConfig {
    pub fn validate(&self) -> Result<()> {
        let min = crate::perceptual::BLOCK_SIZE as u32;
        if self.sample_size < min {
            return Err(IsccError::InvalidConfig(format!(
                "image.sample_size must be at least {min}, got {}",
                self.sample_size
            )));
        }
        Ok(())
    }
}

/// Content-defined chunking configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Minimum chunk size in bytes (default: 256).
    pub min_chunk_size: u32,
    /// Target average chunk size in bytes (default: 1024).
    pub avg_chunk_size: u32,
    /// Maximum chunk size in bytes (default: 8192).
    pub max_chunk_size: u32,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            min_chunk_size: 256,
            avg_chunk_size: 1024,
            max_chunk_size: 8192,
        }
    }
}

impl DataConfig {
    pub fn validate(&self) -> Result<()> {
        let ranges = [
            ("min_chunk_size", self.min_chunk_size, MINIMUM_MIN, MINIMUM_MAX),
            ("avg_chunk_size", self.avg_chunk_size, AVERAGE_MIN, AVERAGE_MAX),
            ("max_chunk_size", self.max_chunk_size, MAXIMUM_MIN, MAXIMUM_MAX),
        ];
        for (name, value, low, high) in ranges {
            if !(low..=high).contains(&value) {
                return Err(IsccError::InvalidConfig(format!(
                    "data.{name} must be within {low}..={high}, got {value}"
                )));
            }
        }
        if self.min_chunk_size > self.avg_chunk_size || self.avg_chunk_size > self.max_chunk_size
        {
            return Err(IsccError::InvalidConfig(format!(
                "data chunk sizes must be ordered min <= avg <= max, got {}/{}/{}",
                self.min_chunk_size, self.avg_chunk_size, self.max_chunk_size
            )));
        }
        Ok(())
    }
}

/// Instance-ID chunking configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    /// Leaf chunk size in bytes (default: 64000).
    pub chunk_size: usize,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self { chunk_size: 64_000 }
    }
}

impl InstanceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(IsccError::InvalidConfig(
                "instance.chunk_size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// MinHash permutation table configuration.
///
/// An explicit `table` takes precedence over `seed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinHashConfig {
    /// Seed the permutation table is derived from when no table is given.
    pub seed: u64,
    /// Explicit permutation constants, e.g. a published protocol table.
    pub table: Option<PermutationTable>,
}

/// 128 multipliers and 128 offsets, slot by slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermutationTable {
    pub multipliers: Vec<u64>,
    pub offsets: Vec<u64>,
}

impl Default for MinHashConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_PERMUTATION_SEED,
            table: None,
        }
    }
}

impl MinHashConfig {
    pub fn validate(&self) -> Result<()> {
        self.permutations().map(drop)
    }

    /// Build the permutation table this section describes.
    pub fn permutations(&self) -> Result<MinHashPermutations> {
        match &self.table {
            Some(table) => MinHashPermutations::from_slices(&table.multipliers, &table.offsets),
            None => Ok(MinHashPermutations::from_seed(self.seed)),
        }
    }
}
