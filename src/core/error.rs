use std::fmt;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for business rules (rejected synchronously,
    /// never partially computed)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Errors surfaced verbatim from the external store. The engine never
    /// retries these; the edit workflow decides what to do with them.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        AppError::Persistence(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// True for errors raised at the storage boundary, as opposed to
    /// validation errors raised before any I/O happened.
    pub fn is_persistence(&self) -> bool {
        matches!(self, AppError::Persistence(_))
    }
}

/// Error kind for callers that report outcomes without matching variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Persistence,
    NotFound,
    Configuration,
    Json,
    Internal,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Persistence(_) => ErrorKind::Persistence,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Configuration(_) => ErrorKind::Configuration,
            AppError::Json(_) => ErrorKind::Json,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Persistence => "persistence",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Configuration => "configuration",
            ErrorKind::Json => "json",
            ErrorKind::Internal => "internal",
        };
        write!(f, "{}", name)
    }
}
