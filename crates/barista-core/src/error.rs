//! # Error Types
//!
//! Domain-specific error types for barista-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  barista-core errors (this file)                                       │
//! │  ├── CoreError        - Registry lookup misses                         │
//! │  └── ValidationError  - Host-supplied values out of range              │
//! │                                                                         │
//! │  NOT errors (plain values in composition.rs)                           │
//! │  └── IncompatibleAdditive - toggle refused, composition unchanged      │
//! │                                                                         │
//! │  barista-studio errors (app crate)                                     │
//! │  ├── SettingsError    - Recovered locally, never shown                 │
//! │  └── ApiError         - What the presentation layer sees               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending key in the message
//! 3. Expected outcomes (an incompatible add-on) are values, not errors

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core composition errors.
///
/// Lookups are keyed by closed enums inside Rust code, so the `*NotFound`
/// variants can only be produced at the string boundary (a name typed by a
/// user or read from a frontend message).
#[derive(Debug, Error)]
pub enum CoreError {
    /// No base beverage is registered under this name.
    #[error("Beverage not found: {0}")]
    BeverageNotFound(String),

    /// No additive is registered under this name.
    #[error("Additive not found: {0}")]
    AdditiveNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Invalid format (e.g. a malformed decimal amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
