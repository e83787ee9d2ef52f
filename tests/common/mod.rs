//! Common test utilities and helpers.
//!
//! Inputs are generated deterministically so the suite needs no sample files.

use image::{DynamicImage, GrayImage, ImageFormat};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

/// Expected values computed independently of this crate
pub mod test_data {
    /// Meta-ID of ("ISCC Content Identifiers", "")
    pub const META_ISCC: &str = "CCDFPFc87MhdT";

    /// Meta-ID of ("Die Unendliche Geschichte", "Von Michael Ende")
    pub const META_UNENDLICHE: &str = "CCAZayenEP2Xg";

    /// Content-ID-Image of [`super::noise_image`]
    pub const IMAGE_NOISE: &str = "CYfDDwaTXbDFp";

    /// Instance-ID and top hash of 128001 bytes of 0x02
    pub const INSTANCE_THREE_CHUNKS: (&str, &str) = (
        "CRFyx5ukgf5gN",
        "5992252e0cb26cc7f5125886d5b80ad50b02d1414cbccba76c32a01c7031e87d",
    );
}

/// A 32x32 grayscale image of LCG noise.
pub fn noise_image() -> DynamicImage {
    let mut state: u64 = 12345;
    let mut pixels = Vec::with_capacity(32 * 32);
    for _ in 0..32 * 32 {
        state = (state * 1103515245 + 12345) % (1 << 31);
        pixels.push(((state >> 16) & 0xff) as u8);
    }
    DynamicImage::ImageLuma8(GrayImage::from_raw(32, 32, pixels).unwrap())
}

/// Encode an image in memory.
pub fn encode_image(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).unwrap();
    out.into_inner()
}

/// Deterministic xorshift bytes.
pub fn pseudo_random(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

/// Write `data` to a fresh temporary file.
pub fn temp_file_with(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}
