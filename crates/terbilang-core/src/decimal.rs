//! Decimal numbers: the integer part is spelled out as usual, then "koma"
//! and each fractional digit read one by one ("tiga koma satu empat").
//!
//! With `precision < 1` the fraction is dropped by truncation. With
//! `precision >= 1` the fraction goes through float formatting, which rounds.
//! The two paths disagree near digit boundaries (2.99 at precision 1 formats
//! as "3.0", whose fraction trims away, leaving "dua"). A negative value
//! above -1 truncates to 0 and reads without a sign ("nol koma lima").

use tracing::{debug, debug_span};

use crate::convert::{to_words, NumberError};
use crate::lexicon::{digit_word, DECIMAL_POINT};

/// Spell out `number` with up to `precision` fractional digits.
///
/// Trailing zero digits are trimmed, and if none remain only the integer
/// part is read. The integer part is always `number` truncated toward zero.
pub fn convert_decimal(number: f64, precision: i32) -> Result<String, NumberError> {
    let _span = debug_span!("convert_decimal", number, precision).entered();
    if !number.is_finite() {
        return Err(NumberError::NotFinite);
    }

    let integer = number.trunc() as i64;
    let mut words = to_words(integer)?;
    let Some(digits) = fraction_digits(number, precision) else {
        return Ok(words.join(" "));
    };
    debug!(digits = digits.as_str());

    words.push(DECIMAL_POINT);
    words.extend(digits.chars().filter_map(digit_word));
    Ok(words.join(" "))
}

/// Fractional digits of `number` at `precision`, with trailing zeros removed.
///
/// Returns `None` when `precision < 1`, when the value is not finite, or when
/// every formatted digit is zero.
pub fn fraction_digits(number: f64, precision: i32) -> Option<String> {
    if precision < 1 || !number.is_finite() {
        return None;
    }
    let formatted = format!("{:.*}", precision as usize, number.abs());
    let (_, fraction) = formatted.split_once('.')?;
    let trimmed = fraction.trim_end_matches('0');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
