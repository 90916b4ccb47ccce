use tracing::{debug, trace};

use crate::classify::is_whitespace;
use crate::gap::locate_least_gap;
use crate::predicates::{is_all_whitespace, is_normalizable, word_count};
use crate::shift::trailing_whitespace_to_start;

/// Whitespace value inserted into gaps during redistribution.
pub const FILL: char = ' ';

/// Migrate leading whitespace into the narrowest interior gaps, one character
/// at a time, until the line no longer starts with whitespace.
///
/// Each step drops the first character and inserts [`FILL`] right before the
/// word that closes the gap found by [`locate_least_gap`]. Stops early, with
/// whatever leading whitespace is left, when no usable gap exists.
pub fn redistribute(slice: &[char]) -> Vec<char> {
    let mut out = slice.to_vec();
    if !is_normalizable(&out) {
        return out;
    }

    let mut steps = 0usize;
    while out.first().is_some_and(|&c| is_whitespace(c)) {
        let Some(gap) = locate_least_gap(&out) else {
            trace!(steps, "no usable gap left");
            break;
        };
        out.remove(0);
        // `gap` pointed at the last whitespace of the gap; after the removal
        // the word closing it sits at `gap`.
        out.insert(gap, FILL);
        steps += 1;
    }

    debug!(width = out.len(), steps, "redistributed leading whitespace");
    out
}

/// Spread a line's whitespace across its interior gaps, keeping its width.
///
/// Trailing whitespace is first moved to the front so all padding forms a
/// single leading run, then [`redistribute`] pushes it into the gaps. Lines
/// that are empty, all whitespace or hold fewer than two words come back
/// unchanged.
pub fn normalize_whitespace(slice: &[char]) -> Vec<char> {
    if is_all_whitespace(slice) || word_count(slice) < 2 {
        return slice.to_vec();
    }

    redistribute(&trailing_whitespace_to_start(slice))
}

/// [`normalize_whitespace`] over a `&str`, counting width in `char`s.
pub fn justify_line(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    normalize_whitespace(&chars).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redistribute_str(s: &str) -> String {
        redistribute(&s.chars().collect::<Vec<_>>())
            .into_iter()
            .collect()
    }

    #[test]
    fn test_justify_leading_padding() {
        let out = justify_line("    Test something here");
        assert_eq!(out, "Test   something   here");
        assert_eq!(out.chars().count(), "    Test something here".chars().count());
    }

    #[test]
    fn test_justify_single_word_unchanged() {
        assert_eq!(justify_line("word"), "word");
        assert_eq!(justify_line("   word  "), "   word  ");
    }

    #[test]
    fn test_justify_degenerate_unchanged() {
        assert_eq!(justify_line(""), "");
        assert_eq!(justify_line("     "), "     ");
    }

    #[test]
    fn test_justify_trailing_padding() {
        assert_eq!(justify_line("ab cd    "), "ab     cd");
    }

    #[test]
    fn test_justify_both_edges() {
        assert_eq!(justify_line("  one two three  "), "one   two   three");
    }

    #[test]
    fn test_justify_uneven_gap_goes_left() {
        assert_eq!(justify_line("a b c "), "a  b c");
    }

    #[test]
    fn test_justify_already_justified() {
        assert_eq!(justify_line("Test   something   here"), "Test   something   here");
    }

    #[test]
    fn test_redistribute_stops_without_gap() {
        assert_eq!(redistribute_str("  a\nb"), "  a\nb");
    }

    #[test]
    fn test_redistribute_avoids_newline_gap() {
        assert_eq!(redistribute_str("  a\nb c"), "a\nb   c");
    }

    #[test]
    fn test_redistribute_leading_tab_becomes_space() {
        assert_eq!(redistribute_str("\ta b"), "a  b");
    }

    #[test]
    fn test_redistribute_no_leading_whitespace() {
        assert_eq!(redistribute_str("a b  "), "a b  ");
    }

    #[test]
    fn test_justify_cjk() {
        assert_eq!(justify_line("  한국어 中文"), "한국어   中文");
    }

    #[test]
    fn test_justify_heavy_padding_is_iterative() {
        let line = format!("{}left right", " ".repeat(2_000));
        let out = justify_line(&line);
        assert_eq!(out.chars().count(), line.chars().count());
        assert!(out.starts_with("left "));
        assert!(out.ends_with(" right"));
    }
}
