use std::io;

/// The one way a conversion can fail: the input could not be read.
///
/// Malformed markup is never an error; it renders as text.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read input at line {line}: {source}")]
    Read {
        /// 1-based number of the line that could not be read.
        line: usize,
        source: io::Error,
    },
}
