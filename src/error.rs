use crate::shape::Shape;
use thiserror::Error;

pub type MResult<T> = Result<T, MatError>;

#[derive(Error, Debug)]
pub enum MatError {
    #[error("index ({row}, {col}) out of bounds for shape {shape:?} in {op}")]
    IndexOutOfBounds {
        shape: Shape,
        row: usize,
        col: usize,
        op: &'static str,
    },
    #[error("buffer of length {len} does not match shape {shape:?}")]
    BufferShapeMismatch { shape: Shape, len: usize },
    #[error("Unexpected: {0}")]
    Unexpected(String),
}

impl From<&str> for MatError {
    fn from(e: &str) -> Self {
        MatError::Unexpected(e.to_string())
    }
}

impl From<String> for MatError {
    fn from(e: String) -> Self {
        MatError::Unexpected(e)
    }
}

impl From<MatError> for String {
    fn from(e: MatError) -> Self {
        format!("{}", e)
    }
}
