//! Indonesian number-to-words conversion ("terbilang").
//!
//! ```
//! assert_eq!(terbilang_core::convert(1_001).unwrap(), "seribu satu");
//! assert_eq!(
//!     terbilang_core::convert_decimal(3.14, 2).unwrap(),
//!     "tiga koma satu empat"
//! );
//! ```

pub mod convert;
pub mod decimal;
pub mod group;
pub mod lexicon;

#[cfg(test)]
mod tests;

pub use convert::{convert, convert_unsigned, to_words, NumberError, MAX_VALUE};
pub use decimal::{convert_decimal, fraction_digits};
pub use group::Words;
pub use lexicon::SCALE_COUNT;
