use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum QuizError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Exhausted option space: {0}")]
    ExhaustedOptionSpace(String),

    #[error("No questions available: {0}")]
    EmptyPool(String),

    #[error("No active question")]
    NoActiveQuestion,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),
}

impl QuizError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QuizError::InvalidParameter(_) => "INVALID_PARAMETER",
            QuizError::ExhaustedOptionSpace(_) => "EXHAUSTED_OPTION_SPACE",
            QuizError::EmptyPool(_) => "EMPTY_POOL",
            QuizError::NoActiveQuestion => "NO_ACTIVE_QUESTION",
            QuizError::ValidationError(_) => "VALIDATION_ERROR",
            QuizError::NotFound(_) => "NOT_FOUND",
            QuizError::AlreadyExists(_) => "ALREADY_EXISTS",
        }
    }

    /// Whether the condition is a normal outcome the caller should present
    /// to the user (e.g. "ask the teacher to add questions") rather than a
    /// system fault.
    pub fn is_terminal_condition(&self) -> bool {
        matches!(self, QuizError::EmptyPool(_))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl From<&QuizError> for ErrorResponse {
    fn from(err: &QuizError) -> Self {
        ErrorResponse {
            error: err.to_string(),
            code: err.error_code(),
        }
    }
}

impl From<validator::ValidationErrors> for QuizError {
    fn from(err: validator::ValidationErrors) -> Self {
        QuizError::ValidationError(err.to_string())
    }
}

pub type QuizResult<T> = Result<T, QuizError>;
