//! Edge shifters.
//!
//! Every function here returns a new vector of the same width as its input.
//! Slices that are empty or all whitespace come back unchanged, which is also
//! what keeps the fixed-point shifters from spinning forever.

use crate::classify::is_whitespace;
use crate::predicates::is_normalizable;

/// Move the first character to the end.
pub fn rotate_left(slice: &[char]) -> Vec<char> {
    let mut out = slice.to_vec();
    if is_normalizable(slice) {
        out.rotate_left(1);
    }
    out
}

/// Move the last character to the front.
pub fn rotate_right(slice: &[char]) -> Vec<char> {
    let mut out = slice.to_vec();
    if is_normalizable(slice) {
        out.rotate_right(1);
    }
    out
}

/// Shift the whitespace right of the last non-whitespace character to the
/// left of the first one, keeping its original order.
///
/// Same result as rotating right one step at a time until the last character
/// is not whitespace, done as a single rotation.
pub fn trailing_whitespace_to_start(slice: &[char]) -> Vec<char> {
    let mut out = slice.to_vec();
    if !is_normalizable(slice) {
        return out;
    }

    let trailing = slice.iter().rev().take_while(|&&c| is_whitespace(c)).count();
    out.rotate_right(trailing);
    out
}

/// Shift the whitespace left of the first non-whitespace character to the
/// right of the last one, keeping its original order.
pub fn leading_whitespace_to_end(slice: &[char]) -> Vec<char> {
    let mut out = slice.to_vec();
    if !is_normalizable(slice) {
        return out;
    }

    let leading = slice.iter().take_while(|&&c| is_whitespace(c)).count();
    out.rotate_left(leading);
    out
}
