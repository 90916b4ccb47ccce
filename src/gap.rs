use crate::classify::{is_newline_control, is_whitespace};

/// Find the interior gap with the least whitespace.
///
/// Returns the index of the last whitespace character of that gap, i.e. the
/// position right before the word that closes it. Whitespace before the first
/// word and after the last word is never a gap, so lines with fewer than two
/// words yield `None`.
///
/// A newline control marks the gap it sits in as ignored: the run counter is
/// reset and the word that follows is not compared. On equal widths the
/// leftmost gap wins.
pub fn locate_least_gap(slice: &[char]) -> Option<usize> {
    let mut best = slice.len();
    let mut candidate = None;

    let mut in_word = false;
    let mut seen_word = false;
    let mut ignore = false;
    let mut run = 0usize;

    for (i, &c) in slice.iter().enumerate() {
        // Checked before whitespace: newlines are whitespace too.
        if is_newline_control(c) {
            ignore = true;
            in_word = false;
            run = 0;
            continue;
        }

        if is_whitespace(c) {
            in_word = false;
            if seen_word {
                run += 1;
            }
            continue;
        }

        if !in_word {
            in_word = true;
            if seen_word && !ignore && run < best {
                best = run;
                candidate = Some(i);
            }
            seen_word = true;
            ignore = false;
            run = 0;
        }
    }

    candidate.map(|word_start| word_start - 1)
}

/// [`locate_least_gap`] with the `-1` sentinel for "not found".
pub fn locate_least_gap_index(slice: &[char]) -> isize {
    locate_least_gap(slice).map_or(-1, |i| i as isize)
}
