/// Returns true if `c` is whitespace per the Unicode `White_Space` property.
///
/// Newline controls (`\r`, `\n`) and tabs count as whitespace here.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Returns true if `c` is a carriage return or line feed.
///
/// Other control characters (bell, escape, NUL) are neither newline controls
/// nor whitespace.
pub fn is_newline_control(c: char) -> bool {
    c.is_control() && matches!(c, '\r' | '\n')
}
