//! Fixed-width base58 codec for component codes.
//!
//! The alphabet is a fixed permutation of the usual base58 symbols. Unlike
//! plain base conversion, every input length maps to a fixed output width:
//!
//! | bytes | symbols |
//! |-------|---------|
//! | 1     | 2       |
//! | 8     | 11      |
//! | 9     | 13 (2 + 11, header and body encoded separately) |
//!
//! Leading zero bytes are therefore never dropped, and a 9-byte component
//! code always renders as exactly 13 characters.

pub mod error;

pub use self::error::CodecError;
use self::error::Result;
use once_cell::sync::Lazy;

/// Symbol alphabet, indexed by digit value.
pub const ALPHABET: &[u8; 58] = b"C23456789rB1ZEFGTtYiAaVvMmHUPWXKDNbcdefghLjkSnopRqsJuQwxyz";

/// Length in symbols of an encoded component code (header + digest).
pub const CODE_LEN: usize = 13;

const RADIX: u64 = 58;
const HEADER_SYMBOLS: usize = 2;
const BODY_SYMBOLS: usize = 11;

static DIGIT_TABLE: Lazy<[Option<u8>; 128]> = Lazy::new(|| {
    let mut table = [None; 128];
    for (value, &symbol) in ALPHABET.iter().enumerate() {
        table[symbol as usize] = Some(value as u8);
    }
    table
});

/// Number of symbols needed to cover every value of `bytes` bytes.
fn symbol_width(bytes: usize) -> usize {
    match bytes {
        1 => HEADER_SYMBOLS,
        _ => BODY_SYMBOLS,
    }
}

fn encode_word(word: &[u8], out: &mut String) {
    let mut value = word.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
    let width = symbol_width(word.len());
    let mut symbols = [0u8; BODY_SYMBOLS];
    for slot in symbols[..width].iter_mut().rev() {
        *slot = ALPHABET[(value % RADIX) as usize];
        value /= RADIX;
    }
    out.extend(symbols[..width].iter().map(|&s| s as char));
}

/// Encode a 1-, 8- or 9-byte buffer.
///
/// # Errors
///
/// Returns [`CodecError::InvalidLength`] for any other input length.
pub fn encode(digest: &[u8]) -> Result<String> {
    let mut out = String::with_capacity(CODE_LEN);
    match digest.len() {
        9 => {
            encode_word(&digest[..1], &mut out);
            encode_word(&digest[1..], &mut out);
        }
        1 | 8 => encode_word(digest, &mut out),
        length => {
            return Err(CodecError::InvalidLength {
                length,
                expected: "1, 8 or 9 bytes",
            })
        }
    }
    Ok(out)
}

fn decode_word(symbols: &[char], offset: usize, out: &mut Vec<u8>) -> Result<()> {
    let bytes = if symbols.len() == HEADER_SYMBOLS { 1 } else { 8 };
    let mut value: u128 = 0;
    for (i, &symbol) in symbols.iter().enumerate() {
        let digit = DIGIT_TABLE
            .get(symbol as usize)
            .copied()
            .flatten()
            .ok_or(CodecError::InvalidSymbol {
                symbol,
                position: offset + i,
            })?;
        value = value * RADIX as u128 + digit as u128;
    }
    if value >> (bytes * 8) != 0 {
        return Err(CodecError::ValueOutOfRange {
            code: symbols.iter().collect(),
        });
    }
    out.extend_from_slice(&(value as u64).to_be_bytes()[8 - bytes..]);
    Ok(())
}

/// Decode a 2-, 11- or 13-symbol code back into 1, 8 or 9 bytes.
///
/// # Errors
///
/// [`CodecError::InvalidLength`] for other lengths, [`CodecError::InvalidSymbol`]
/// for characters outside the alphabet and [`CodecError::ValueOutOfRange`] when
/// the symbols describe a number that does not fit the target width.
pub fn decode(code: &str) -> Result<Vec<u8>> {
    let symbols: Vec<char> = code.chars().collect();
    let mut out = Vec::with_capacity(9);
    match symbols.len() {
        CODE_LEN => {
            decode_word(&symbols[..HEADER_SYMBOLS], 0, &mut out)?;
            decode_word(&symbols[HEADER_SYMBOLS..], HEADER_SYMBOLS, &mut out)?;
        }
        HEADER_SYMBOLS | BODY_SYMBOLS => decode_word(&symbols, 0, &mut out)?,
        length => {
            return Err(CodecError::InvalidLength {
                length,
                expected: "2, 11 or 13 symbols",
            })
        }
    }
    Ok(out)
}
