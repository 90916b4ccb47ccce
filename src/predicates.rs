use crate::classify::is_whitespace;

/// Returns true if every character is whitespace.
///
/// The empty slice is all whitespace.
pub fn is_all_whitespace(slice: &[char]) -> bool {
    slice.iter().all(|&c| is_whitespace(c))
}

/// Count maximal runs of non-whitespace characters.
///
/// These runs "may or may not be a word": punctuation and other control
/// characters group the same way letters do. Useful for finding how many
/// interior gaps a line has.
pub fn word_count(slice: &[char]) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for &c in slice {
        if is_whitespace(c) {
            in_word = false;
        } else if !in_word {
            in_word = true;
            count += 1;
        }
    }

    count
}

/// A slice can be shifted or normalized only if it has width and holds at
/// least one non-whitespace character.
pub fn is_normalizable(slice: &[char]) -> bool {
    !slice.is_empty() && !is_all_whitespace(slice)
}
