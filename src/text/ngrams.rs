//! Sliding n-gram windows over code points or words.

use crate::error::{IsccError, Result};

/// Smallest accepted window width.
pub const MIN_WINDOW_WIDTH: usize = 2;

fn check_width(width: usize) -> Result<()> {
    if width < MIN_WINDOW_WIDTH {
        return Err(IsccError::InvalidWindowWidth { width });
    }
    Ok(())
}

/// Overlapping windows of `width` items.
///
/// Fewer items than `width` yield one window holding all of them (possibly
/// none).
pub fn sliding_windows<T>(items: &[T], width: usize) -> Result<Vec<&[T]>> {
    check_width(width)?;
    if items.len() < width {
        return Ok(vec![items]);
    }
    Ok(items.windows(width).collect())
}

/// Overlapping windows of `width` code points, borrowed from `text`.
pub fn letter_ngrams(text: &str, width: usize) -> Result<Vec<&str>> {
    check_width(width)?;
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect();
    // one window per run of width + 1 consecutive boundaries
    let windows = sliding_windows(&bounds, width + 1)?;
    Ok(windows
        .into_iter()
        .map(|b| &text[b[0]..b[b.len() - 1]])
        .collect())
}

/// Overlapping windows of `width` words.
pub fn word_ngrams<'a, 'w>(words: &'w [&'a str], width: usize) -> Result<Vec<&'w [&'a str]>> {
    sliding_windows(words, width)
}
