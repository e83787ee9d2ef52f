//! Perceptual image hash (DCT based).
//!
//! Pipeline:
//!
//! 1. Grayscale with integer luma weights `(299 R + 587 G + 114 B) / 1000`, rounded
//! 2. Bicubic resize to `sample_size x sample_size` (32 by default)
//! 3. Unnormalized type-II DCT over rows, then over columns
//! 4. Top-left 8x8 block of coefficients, row-major
//! 5. Bit `i` (MSB-first) set when coefficient `i` is above the block median

use crate::config::ImageConfig;
use crate::error::{IsccError, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma};
use std::cmp::Ordering;
use std::f64::consts::PI;
use tracing::trace;

/// Side of the low-frequency coefficient block.
pub const BLOCK_SIZE: usize = 8;

/// Scale an 8-bit channel by its alpha the way a 16-bit premultiplied colour
/// model does, then reduce back to 8 bits.
#[inline]
fn premultiply(channel: u8, alpha: u8) -> u32 {
    let c16 = channel as u32 * 0x101;
    let a16 = alpha as u32 * 0x101;
    (c16 * a16 / 0xffff) >> 8
}

/// Convert to 8-bit grayscale with rounded integer luma weights.
pub fn grayscale(img: &DynamicImage) -> GrayImage {
    let rgba = img.to_rgba8();
    GrayImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let weighted =
            299 * premultiply(r, a) + 587 * premultiply(g, a) + 114 * premultiply(b, a);
        Luma([((weighted + 500) / 1000) as u8])
    })
}

/// Resize to a square sample with Catmull-Rom (bicubic) interpolation.
///
/// An image that already has the target size is returned unchanged.
pub fn resize_square(gray: GrayImage, size: u32) -> GrayImage {
    if gray.dimensions() == (size, size) {
        return gray;
    }
    imageops::resize(&gray, size, size, FilterType::CatmullRom)
}

fn cosine_table(n: usize) -> Vec<f64> {
    let mut table = Vec::with_capacity(n * n);
    for k in 0..n {
        for i in 0..n {
            table.push((PI * k as f64 * (2 * i + 1) as f64 / (2 * n) as f64).cos());
        }
    }
    table
}

fn dct_with(input: &[f64], cosines: &[f64], output: &mut [f64]) {
    let n = input.len();
    for (k, out) in output.iter_mut().enumerate() {
        let row = &cosines[k * n..(k + 1) * n];
        let mut value = 0.0;
        for (x, c) in input.iter().zip(row) {
            value += x * c;
        }
        *out = 2.0 * value;
    }
}

/// Unnormalized type-II DCT: `X_k = 2 * sum x_i cos(pi k (2i + 1) / 2N)`.
pub fn dct(input: &[f64]) -> Vec<f64> {
    let mut output = vec![0.0; input.len()];
    dct_with(input, &cosine_table(input.len()), &mut output);
    output
}

/// Median of a slice; mean of the two middle values for even lengths.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// 2-D DCT of a square grayscale sample, row-major.
fn dct_2d(gray: &GrayImage) -> Vec<f64> {
    let n = gray.width() as usize;
    let cosines = cosine_table(n);
    let pixels: Vec<f64> = gray.as_raw().iter().map(|&p| p as f64).collect();

    let mut rows = vec![0.0; n * n];
    for (src, dst) in pixels.chunks(n).zip(rows.chunks_mut(n)) {
        dct_with(src, &cosines, dst);
    }

    let mut coefficients = vec![0.0; n * n];
    let mut column = vec![0.0; n];
    let mut transformed = vec![0.0; n];
    for col in 0..n {
        for (row, value) in column.iter_mut().enumerate() {
            *value = rows[row * n + col];
        }
        dct_with(&column, &cosines, &mut transformed);
        for (row, &value) in transformed.iter().enumerate() {
            coefficients[row * n + col] = value;
        }
    }
    coefficients
}

/// Hash an already-grayscale square sample.
///
/// # Errors
///
/// [`IsccError::InvalidSample`] unless the sample is square and at least
/// [`BLOCK_SIZE`] pixels wide.
pub fn hash_sample(sample: &GrayImage) -> Result<[u8; 8]> {
    let (width, height) = sample.dimensions();
    let min = BLOCK_SIZE as u32;
    if width != height || width < min {
        return Err(IsccError::InvalidSample { width, height, min });
    }
    let n = width as usize;
    let coefficients = dct_2d(sample);
    let block: Vec<f64> = coefficients
        .chunks(n)
        .take(BLOCK_SIZE)
        .flat_map(|row| row[..BLOCK_SIZE].iter().copied())
        .collect();

    let med = median(&block);
    let digest = block
        .iter()
        .fold(0u64, |acc, &value| (acc << 1) | (value > med) as u64);
    trace!(median = med, digest, "Image hash computed");
    Ok(digest.to_be_bytes())
}

/// Compute the 8-byte perceptual digest of a decoded image.
///
/// # Errors
///
/// [`IsccError::EmptyInput`] for images with zero width or height.
pub fn image_hash(img: &DynamicImage, config: &ImageConfig) -> Result<[u8; 8]> {
    if img.width() == 0 || img.height() == 0 {
        return Err(IsccError::EmptyInput { stage: "image" });
    }
    let sample = resize_square(grayscale(img), config.sample_size);
    hash_sample(&sample)
}
