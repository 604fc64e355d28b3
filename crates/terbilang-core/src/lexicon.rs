//! Indonesian number vocabulary.
//!
//! Every token the converter emits comes from this module, so a word
//! sequence can be held as `Vec<&'static str>` without allocating per word.

/// Number of base-1000 groups supported (ones through trillions).
pub const SCALE_COUNT: usize = 5;

/// Words for 0..=19. The teens are single entries, never composed from
/// "sepuluh" + unit.
pub const SMALL_NUMBERS: [&str; 20] = [
    "nol",
    "satu",
    "dua",
    "tiga",
    "empat",
    "lima",
    "enam",
    "tujuh",
    "delapan",
    "sembilan",
    "sepuluh",
    "sebelas",
    "dua belas",
    "tiga belas",
    "empat belas",
    "lima belas",
    "enam belas",
    "tujuh belas",
    "delapan belas",
    "sembilan belas",
];

/// Tens multiples indexed by the tens digit. 0 and 1 are covered by
/// `SMALL_NUMBERS`.
pub const TENS: [&str; 10] = [
    "",
    "",
    "dua puluh",
    "tiga puluh",
    "empat puluh",
    "lima puluh",
    "enam puluh",
    "tujuh puluh",
    "delapan puluh",
    "sembilan puluh",
];

/// Scale words indexed by group position (0 = ones).
pub const SCALES: [&str; SCALE_COUNT] = ["", "ribu", "juta", "miliar", "triliun"];

pub const HUNDRED: &str = "ratus";
/// Contracted "satu ratus".
pub const ONE_HUNDRED: &str = "seratus";
/// Contracted "satu ribu".
pub const ONE_THOUSAND: &str = "seribu";
pub const THOUSAND: &str = SCALES[1];

pub const NEGATIVE: &str = "negatif";
pub const DECIMAL_POINT: &str = "koma";

/// Word for a single decimal digit (0-9).
///
/// Returns `None` for anything that is not an ASCII digit.
pub fn digit_word(c: char) -> Option<&'static str> {
    c.to_digit(10).map(|d| SMALL_NUMBERS[d as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_table_alignment() {
        assert_eq!(SCALES.len(), SCALE_COUNT);
        assert_eq!(SCALES[0], "");
        assert_eq!(THOUSAND, "ribu");
    }

    #[test]
    fn test_tables_have_no_stray_whitespace() {
        for w in SMALL_NUMBERS.iter().chain(TENS.iter().skip(2)) {
            assert!(!w.is_empty());
            assert_eq!(w.trim(), *w);
            assert!(!w.contains("  "), "double space in {w:?}");
        }
    }

    #[test]
    fn test_digit_word() {
        assert_eq!(digit_word('0'), Some("nol"));
        assert_eq!(digit_word('7'), Some("tujuh"));
        assert_eq!(digit_word('9'), Some("sembilan"));
        assert_eq!(digit_word('a'), None);
        assert_eq!(digit_word('.'), None);
    }
}
