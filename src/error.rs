/// Errors raised by the block renderer and the output writers.
///
/// The whitespace core never fails; only the layers around it do.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid block dimensions: width {width}, height {height:?}")]
    InvalidDimensions { width: usize, height: Option<usize> },

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("failed to encode JSON")]
    Json(#[from] serde_json::Error),
}
