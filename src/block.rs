//! Fixed-size block layout.
//!
//! Splits text into lines, fits each one to the block width and justifies it
//! with [`normalize_whitespace`]. Line breaking is left to the caller: text
//! longer than the block is cut, never wrapped.

use std::fmt;

use tracing::debug;

use crate::error::LayoutError;
use crate::normalize::{FILL, normalize_whitespace};

/// Options controlling block layout.
#[derive(Debug, Clone)]
pub struct BlockOptions {
    /// Width of every row, in `char`s.
    pub width: usize,
    /// Exact number of rows. `None` keeps one row per input line.
    pub height: Option<usize>,
    /// Accepted for compatibility; lines are never wrapped.
    pub word_wrap: bool,
    /// Cut lines longer than `width`. When false they keep their own width.
    pub truncate: bool,
    /// Replaces the last cell of a cut line, marking the truncation.
    pub truncate_char: Option<char>,
}

impl Default for BlockOptions {
    fn default() -> Self {
        Self {
            width: 80,
            height: None,
            word_wrap: false,
            truncate: true,
            truncate_char: None,
        }
    }
}

/// A rendered block of justified rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl Block {
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Nominal row width. Untruncated rows may be wider.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Lay `text` out as a block of justified rows.
pub fn render_block(text: &str, options: &BlockOptions) -> Result<Block, LayoutError> {
    if options.width == 0 || options.height == Some(0) {
        return Err(LayoutError::InvalidDimensions {
            width: options.width,
            height: options.height,
        });
    }
    if options.word_wrap {
        debug!("word wrap requested; lines are truncated instead");
    }

    let mut rows: Vec<Vec<char>> = text
        .lines()
        .map(|line| normalize_whitespace(&fit_line(line, options)))
        .collect();

    if let Some(height) = options.height {
        rows.resize_with(height, || vec![FILL; options.width]);
    }

    debug!(width = options.width, height = rows.len(), "rendered block");
    Ok(Block {
        width: options.width,
        rows,
    })
}

/// Pad or cut a line to the block width.
fn fit_line(line: &str, options: &BlockOptions) -> Vec<char> {
    let mut row: Vec<char> = line.chars().collect();

    if row.len() > options.width {
        if options.truncate {
            row.truncate(options.width);
            if let (Some(marker), Some(last)) = (options.truncate_char, row.last_mut()) {
                *last = marker;
            }
        }
    } else {
        row.resize(options.width, FILL);
    }

    row
}
