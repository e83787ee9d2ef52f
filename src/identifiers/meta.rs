//! Meta-ID: similarity hash of title and extra metadata.

use super::header::{finalize, ComponentKind};
use super::{default_generator, Iscc};
use crate::error::{IsccError, Result};
use crate::hashing::feature_digest64;
use crate::similarity::simhash64;
use crate::text::{letter_ngrams, normalize, pre_normalize, trim};
use tracing::debug;

/// Only protocol version understood by [`Iscc::meta_id`].
pub const META_VERSION: u32 = 1;

/// A Meta-ID and the trimmed fields it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaId {
    pub code: String,
    /// Title after NFKC, whitespace trim and byte-budget trim
    pub title: String,
    /// Extra after NFKC, whitespace trim and byte-budget trim
    pub extra: String,
}

impl Iscc {
    /// Meta-ID: SimHash over letter n-grams of the trimmed title and extra.
    ///
    /// Both fields are trimmed to the configured byte budget before hashing
    /// and returned in that form.
    ///
    /// # Errors
    ///
    /// [`IsccError::UnsupportedVersion`] for any `version` but 1,
    /// [`IsccError::InvalidWindowWidth`] when the configured n-gram width is
    /// below the minimum.
    ///
    /// ```
    /// let id = iscc::Iscc::default().meta_id("ISCC Content Identifiers", "", 1)?;
    /// assert_eq!(id.code, "CCDFPFc87MhdT");
    /// assert!(iscc::Iscc::default().meta_id("x", "", 2).is_err());
    /// # Ok::<(), iscc::IsccError>(())
    /// ```
    pub fn meta_id(&self, title: &str, extra: &str, version: u32) -> Result<MetaId> {
        if version != META_VERSION {
            return Err(IsccError::UnsupportedVersion { version });
        }
        let budget = self.config.text.input_trim;
        let title = trim(&pre_normalize(title), budget).to_string();
        let extra = trim(&pre_normalize(extra), budget).to_string();

        let combined = format!("{title} {extra}");
        let normalized = normalize(combined.trim());
        let grams = letter_ngrams(&normalized, self.config.text.meta_ngram_width)?;
        let digests: Vec<[u8; 8]> = grams
            .iter()
            .map(|gram| feature_digest64(gram.as_bytes()))
            .collect();
        let digest = simhash64(&digests)?;
        let code = finalize(ComponentKind::Meta, false, &digest)?;

        debug!(
            kind = %ComponentKind::Meta,
            code = %code,
            ngrams = digests.len(),
            "Component code generated"
        );
        Ok(MetaId { code, title, extra })
    }
}

/// Meta-ID with the default configuration.
pub fn meta_id(title: &str, extra: &str, version: u32) -> Result<MetaId> {
    default_generator().meta_id(title, extra, version)
}
