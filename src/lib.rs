pub mod block;
pub mod classify;
pub mod decode;
pub mod error;
pub mod gap;
pub mod normalize;
pub mod predicates;
pub mod shift;

pub use block::{Block, BlockOptions, render_block};
pub use classify::{is_newline_control, is_whitespace};
pub use decode::{DecodeWarning, WarningCode, decode_text};
pub use error::LayoutError;
pub use gap::{locate_least_gap, locate_least_gap_index};
pub use normalize::{justify_line, normalize_whitespace, redistribute};
pub use predicates::{is_all_whitespace, is_normalizable, word_count};
pub use shift::{leading_whitespace_to_end, rotate_left, rotate_right, trailing_whitespace_to_start};

/// Justify every line of `text` at its own width.
///
/// Line breaks are normalized to `\n`; a trailing newline is kept.
pub fn justify_text(text: &str) -> String {
    let mut out = text
        .lines()
        .map(justify_line)
        .collect::<Vec<_>>()
        .join("\n");
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Decode raw bytes and lay them out as a justified block.
///
/// Decoding problems are recoverable and come back alongside the block.
pub fn render_bytes(
    data: &[u8],
    options: &BlockOptions,
) -> Result<(Block, Option<DecodeWarning>), LayoutError> {
    let (text, warning) = decode_text(data);
    let block = render_block(&text, options)?;
    Ok((block, warning))
}
