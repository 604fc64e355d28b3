//! Integer conversion and the supported range.

use tracing::debug_span;

use crate::group::{magnitude_to_words, Words};
use crate::lexicon::{NEGATIVE, SMALL_NUMBERS};

/// Largest magnitude that can be spelled out (just under one quadrillion).
pub const MAX_VALUE: u64 = 999_999_999_999_999;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    #[error("number exceeds the supported range (max = {max})")]
    OutOfRange { max: u64 },
    #[error("number is not finite")]
    NotFinite,
}

/// Spell out `number` in Indonesian words.
///
/// Fails with [`NumberError::OutOfRange`] when `|number| > MAX_VALUE`.
pub fn convert(number: i64) -> Result<String, NumberError> {
    to_words(number).map(|w| w.join(" "))
}

/// Spell out a non-negative magnitude given as `u64`.
pub fn convert_unsigned(number: u64) -> Result<String, NumberError> {
    unsigned_to_words(number).map(|w| w.join(" "))
}

/// Token sequence for `number`, before the final single-space join.
pub fn to_words(number: i64) -> Result<Words, NumberError> {
    let _span = debug_span!("to_words", number).entered();
    let mut words = unsigned_to_words(number.unsigned_abs())?;
    if number < 0 {
        words.insert(0, NEGATIVE);
    }
    Ok(words)
}

fn unsigned_to_words(number: u64) -> Result<Words, NumberError> {
    check_range(number)?;
    if number == 0 {
        return Ok(vec![SMALL_NUMBERS[0]]);
    }
    Ok(magnitude_to_words(number))
}

fn check_range(magnitude: u64) -> Result<(), NumberError> {
    if magnitude > MAX_VALUE {
        return Err(NumberError::OutOfRange { max: MAX_VALUE });
    }
    Ok(())
}
