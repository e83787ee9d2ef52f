//! Component kinds, header bytes and the shared encode step.

use crate::codec;
use crate::error::Result;
use std::fmt;

/// Kinds of component code produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// Similarity hash of title and extra metadata
    Meta,
    /// Word-shingle fingerprint of plain text
    ContentText,
    /// Perceptual hash of an image
    ContentImage,
    /// Combination of several Content-IDs
    ContentMixed,
    /// Content-defined chunk fingerprint of raw bytes
    Data,
    /// Exact Merkle hash of raw bytes
    Instance,
}

impl ComponentKind {
    const ALL: [ComponentKind; 6] = [
        ComponentKind::Meta,
        ComponentKind::ContentText,
        ComponentKind::ContentImage,
        ComponentKind::ContentMixed,
        ComponentKind::Data,
        ComponentKind::Instance,
    ];

    /// Header byte of a full code of this kind.
    pub const fn base_header(self) -> u8 {
        match self {
            ComponentKind::Meta => 0x00,
            ComponentKind::ContentText => 0x10,
            ComponentKind::ContentImage => 0x12,
            ComponentKind::ContentMixed => 0x18,
            ComponentKind::Data => 0x20,
            ComponentKind::Instance => 0x30,
        }
    }

    /// Only Content-IDs distinguish partial (chunk-level) codes.
    pub const fn supports_partial(self) -> bool {
        matches!(
            self,
            ComponentKind::ContentText | ComponentKind::ContentImage | ComponentKind::ContentMixed
        )
    }

    /// Header byte with the partial flag in the low bit where supported.
    pub const fn header(self, partial: bool) -> u8 {
        if partial && self.supports_partial() {
            self.base_header() | 0x01
        } else {
            self.base_header()
        }
    }

    /// Recognise a header byte, returning the kind and its partial flag.
    pub fn from_header(header: u8) -> Option<(Self, bool)> {
        Self::ALL.into_iter().find_map(|kind| {
            if kind.header(false) == header {
                Some((kind, false))
            } else if kind.supports_partial() && kind.header(true) == header {
                Some((kind, true))
            } else {
                None
            }
        })
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Meta => write!(f, "Meta-ID"),
            ComponentKind::ContentText => write!(f, "Content-ID-Text"),
            ComponentKind::ContentImage => write!(f, "Content-ID-Image"),
            ComponentKind::ContentMixed => write!(f, "Content-ID-Mixed"),
            ComponentKind::Data => write!(f, "Data-ID"),
            ComponentKind::Instance => write!(f, "Instance-ID"),
        }
    }
}

/// Prepend the header to `digest` and encode the 9-byte result.
pub fn finalize(kind: ComponentKind, partial: bool, digest: &[u8; 8]) -> Result<String> {
    let mut code = [0u8; 9];
    code[0] = kind.header(partial);
    code[1..].copy_from_slice(digest);
    Ok(codec::encode(&code)?)
}
