//! Content-IDs for text, images and combinations of both.

use super::header::{finalize, ComponentKind};
use super::{default_generator, Iscc};
use crate::codec::{self, CodecError};
use crate::error::{IsccError, Result};
use crate::hashing::feature_hash32;
use crate::perceptual::image_hash;
use crate::similarity::{feature_digest, simhash64};
use crate::text::{normalize, pre_normalize, word_ngrams};
use image::DynamicImage;
use tracing::{debug, warn};

/// Bytes of a decoded component code.
const DECODED_LEN: usize = 9;

impl Iscc {
    /// Content-ID-Text: MinHash over word shingles of the normalized text.
    ///
    /// Text with fewer words than the shingle width yields a single shingle.
    ///
    /// # Errors
    ///
    /// [`IsccError::InvalidWindowWidth`] when the configured shingle width is
    /// below the minimum.
    pub fn content_id_text(&self, text: &str, partial: bool) -> Result<String> {
        let normalized = normalize(&pre_normalize(text));
        let words: Vec<&str> = normalized.split(' ').collect();
        let shingles = word_ngrams(&words, self.config.text.content_shingle_width)?;
        let features: Vec<u32> = shingles
            .iter()
            .map(|shingle| feature_hash32(shingle.join(" ").as_bytes()))
            .collect();

        let digest = feature_digest(&features, &self.permutations)?;
        let code = finalize(ComponentKind::ContentText, partial, &digest)?;
        debug!(
            kind = %ComponentKind::ContentText,
            code = %code,
            partial,
            shingles = features.len(),
            "Component code generated"
        );
        Ok(code)
    }

    /// Content-ID-Image: perceptual DCT hash of a decoded image.
    ///
    /// # Errors
    ///
    /// [`IsccError::EmptyInput`] for an image with no pixels.
    pub fn content_id_image(&self, img: &DynamicImage, partial: bool) -> Result<String> {
        let digest = image_hash(img, &self.config.image)?;
        let code = finalize(ComponentKind::ContentImage, partial, &digest)?;
        debug!(
            kind = %ComponentKind::ContentImage,
            code = %code,
            partial,
            width = img.width(),
            height = img.height(),
            "Component code generated"
        );
        Ok(code)
    }

    /// Decode an encoded image (any format the `image` crate detects) first.
    ///
    /// # Errors
    ///
    /// [`IsccError::Image`] when `bytes` cannot be decoded, plus those of
    /// [`Iscc::content_id_image`].
    pub fn content_id_image_from_bytes(&self, bytes: &[u8], partial: bool) -> Result<String> {
        let img = image::load_from_memory(bytes)?;
        self.content_id_image(&img, partial)
    }

    /// Combine several Content-IDs into one.
    ///
    /// Each code contributes the first 8 of its 9 decoded bytes, header
    /// included, to the SimHash vote.
    ///
    /// # Errors
    ///
    /// [`IsccError::DecodeFailure`] for a code that is not 13 valid base58
    /// symbols, [`IsccError::EmptyInput`] when `codes` is empty.
    pub fn content_id_mixed<S: AsRef<str>>(&self, codes: &[S], partial: bool) -> Result<String> {
        let mut digests = Vec::with_capacity(codes.len());
        for code in codes {
            let code = code.as_ref();
            let decoded = codec::decode(code).map_err(|source| IsccError::DecodeFailure {
                code: code.to_string(),
                source,
            })?;
            if decoded.len() != DECODED_LEN {
                return Err(IsccError::DecodeFailure {
                    code: code.to_string(),
                    source: CodecError::InvalidLength {
                        length: code.chars().count(),
                        expected: "13 symbols",
                    },
                });
            }
            let kind = ComponentKind::from_header(decoded[0]).map(|(kind, _)| kind);
            if !kind.is_some_and(ComponentKind::supports_partial) {
                warn!(code = %code, kind = ?kind, "Mixing a code that is not a Content-ID");
            }
            let mut head = [0u8; 8];
            head.copy_from_slice(&decoded[..8]);
            digests.push(head);
        }

        let digest = simhash64(&digests)?;
        let code = finalize(ComponentKind::ContentMixed, partial, &digest)?;
        debug!(
            kind = %ComponentKind::ContentMixed,
            code = %code,
            partial,
            inputs = digests.len(),
            "Component code generated"
        );
        Ok(code)
    }
}

/// Content-ID-Text with the default configuration.
pub fn content_id_text(text: &str, partial: bool) -> Result<String> {
    default_generator().content_id_text(text, partial)
}

/// Content-ID-Image with the default configuration.
pub fn content_id_image(img: &DynamicImage, partial: bool) -> Result<String> {
    default_generator().content_id_image(img, partial)
}

/// Content-ID-Image of an encoded image with the default configuration.
pub fn content_id_image_from_bytes(bytes: &[u8], partial: bool) -> Result<String> {
    default_generator().content_id_image_from_bytes(bytes, partial)
}

/// Content-ID-Mixed with the default configuration.
pub fn content_id_mixed<S: AsRef<str>>(codes: &[S], partial: bool) -> Result<String> {
    default_generator().content_id_mixed(codes, partial)
}
