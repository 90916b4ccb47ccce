/// Collect a string into the `char` slice form the core operates on.
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Collect a `char` slice back into a string for comparison.
pub fn string(slice: &[char]) -> String {
    slice.iter().collect()
}

/// The non-whitespace characters of `s`, in order.
#[allow(dead_code)]
pub fn visible(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
