use thiserror::Error;

use super::processor::Stage;

/// Failures raised by the roster pipeline.
#[derive(Error, Debug)]
pub enum GradeError {
    #[error("line {line}: {reason}")]
    Parse { line: u64, reason: String },

    #[error("no records to summarise")]
    EmptyInput,

    #[error("cannot {operation} while {actual}; roster must be {expected}")]
    InvalidState {
        operation: &'static str,
        expected: Stage,
        actual: Stage,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GradeResult<T> = Result<T, GradeError>;
