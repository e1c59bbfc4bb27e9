use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("index {index} out of range for line with {len} points")]
    OutOfRange { index: usize, len: usize },
}

impl LineError {
    pub(crate) fn empty() -> Self {
        LineError::InvalidArgument("number of points must be positive".to_string())
    }
}

pub type Result<T> = std::result::Result<T, LineError>;
