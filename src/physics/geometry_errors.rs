use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Invalid orbital elements: {0}")]
    InvalidElements(String),
    #[error("Numeric degeneracy: {0}")]
    NumericDegeneracy(String),
    #[error("Sample buffers have lengths {found:?}, expected {expected}")]
    BufferLength { expected: usize, found: Vec<usize> },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeometryError {
    /// True for the errors raised by element/sample validation, as opposed to I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GeometryError::InvalidElements(_) | GeometryError::NumericDegeneracy(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;
