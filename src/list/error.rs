use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("invalid capacity: {capacity}")]
    InvalidArgument { capacity: isize },

    #[error("the input collection is absent")]
    NullInput,

    #[error("index {index} is out of range for size {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unsupported sorting method: {0}")]
    UnsupportedMethod(String),
}

pub type Result<T> = std::result::Result<T, ListError>;
