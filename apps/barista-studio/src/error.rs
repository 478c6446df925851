//! # API Error Type
//!
//! Unified error type for studio commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Barista                                │
//! │                                                                         │
//! │  Typed line "toggle honey"                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  ── Result<T, ApiError>                        │  │
//! │  │                                                                  │  │
//! │  │  Unknown name?     ── CoreError::AdditiveNotFound ──┐            │  │
//! │  │  Bad volume?       ── ValidationError ──────────────┼─► ApiError │  │
//! │  │  Unknown command?  ── ApiError::invalid_command ────┘            │  │
//! │  │                                                                  │  │
//! │  │  Incompatible add-on? NOT an error: OrderResponse.notice         │  │
//! │  │  Settings file broken? NOT an error: defaults + warn! log        │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use barista_core::{CoreError, ValidationError};
use serde::Serialize;

/// Error returned from studio commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Additive not found: Honey"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Name is not in the catalog or additive registry
    NotFound,

    /// Input validation failed
    ValidationError,

    /// The typed line is not a known command
    InvalidCommand,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, name: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, name))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCommand, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BeverageNotFound(name) => ApiError::not_found("Beverage", &name),
            CoreError::AdditiveNotFound(name) => ApiError::not_found("Additive", &name),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
