//! Text preparation: normalization, trimming and n-gram windowing.

pub mod ngrams;
pub mod normalize;

pub use self::ngrams::{letter_ngrams, sliding_windows, word_ngrams, MIN_WINDOW_WIDTH};
pub use self::normalize::{normalize, pre_normalize, trim, INPUT_TRIM};
