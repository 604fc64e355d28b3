//! Base-1000 digit groups: splitting, per-group wording and stitching.

use tracing::{debug, debug_span};

use crate::lexicon::{
    HUNDRED, ONE_HUNDRED, ONE_THOUSAND, SCALES, SCALE_COUNT, SMALL_NUMBERS, TENS, THOUSAND,
};

/// An ordered token sequence. Tokens are joined with single spaces only at
/// the very end of a conversion.
pub type Words = Vec<&'static str>;

/// Split `n` into `SCALE_COUNT` groups, least significant first.
///
/// Groups beyond the number's magnitude are 0. Anything above the trillions
/// group is silently discarded, so callers range-check first.
pub fn split_groups(mut n: u64) -> [u16; SCALE_COUNT] {
    let mut groups = [0u16; SCALE_COUNT];
    for g in groups.iter_mut() {
        *g = (n % 1000) as u16;
        n /= 1000;
    }
    groups
}

/// Words for a single group value in `0..=999`, without a scale word.
///
/// 0 yields an empty sequence; the standalone "nol" is handled by the caller.
pub fn group_to_words(value: u16) -> Words {
    debug_assert!(value < 1000, "group out of range: {value}");
    let mut words = Words::new();

    let hundreds = (value / 100) as usize;
    let rest = (value % 100) as usize;
    match hundreds {
        0 => {}
        1 => words.push(ONE_HUNDRED),
        h => words.extend([SMALL_NUMBERS[h], HUNDRED]),
    }

    let tens = rest / 10;
    let units = rest % 10;
    if tens >= 2 {
        words.push(TENS[tens]);
        if units != 0 {
            words.push(SMALL_NUMBERS[units]);
        }
    } else if rest != 0 {
        words.push(SMALL_NUMBERS[rest]);
    }

    words
}

/// Stitch per-group words (least significant first) into one sequence,
/// most significant first.
///
/// Zero groups are skipped along with their scale word. A thousands group
/// of exactly "satu" contracts to "seribu".
pub fn combine_groups(groups: &[Words; SCALE_COUNT]) -> Words {
    let mut words = groups[0].clone();
    for (group, &scale) in groups.iter().zip(SCALES.iter()).skip(1) {
        if group.is_empty() {
            continue;
        }
        let mut head = if group[..] == [SMALL_NUMBERS[1]] && scale == THOUSAND {
            vec![ONE_THOUSAND]
        } else {
            let mut head = group.clone();
            head.push(scale);
            head
        };
        head.append(&mut words);
        words = head;
    }
    words
}

/// Full word sequence for a non-zero magnitude that has already been
/// range-checked.
pub(crate) fn magnitude_to_words(n: u64) -> Words {
    let _span = debug_span!("magnitude_to_words", n).entered();
    let groups = split_groups(n);
    debug!(?groups);
    let group_words: [Words; SCALE_COUNT] = groups.map(group_to_words);
    let words = combine_groups(&group_words);
    debug!(token_count = words.len());
    words
}
