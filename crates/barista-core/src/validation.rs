//! # Validation Module
//!
//! Checks for values that arrive from outside the engine: sound volume from
//! a slider or a settings file, and names typed at the string boundary.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                 │
//! │  └── Slider clamps 0..100, buttons only offer registry names           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── validate_volume  (0.0 ..= 1.0, finite)                            │
//! │  └── validate_name    (non-empty after trimming)                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Registry lookup (Beverage::from_name / Additive::from_name)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Lowest accepted playback volume.
pub const MIN_VOLUME: f32 = 0.0;

/// Highest accepted playback volume.
pub const MAX_VOLUME: f32 = 1.0;

/// Validates a playback volume.
///
/// ## Rules
/// - Must be a finite number
/// - Must lie in `0.0 ..= 1.0`
///
/// ```rust
/// use barista_core::validation::validate_volume;
///
/// assert!(validate_volume(0.5).is_ok());
/// assert!(validate_volume(1.5).is_err());
/// assert!(validate_volume(f32::NAN).is_err());
/// ```
pub fn validate_volume(volume: f32) -> ValidationResult<()> {
    if !volume.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "volume".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if !(MIN_VOLUME..=MAX_VOLUME).contains(&volume) {
        return Err(ValidationError::OutOfRange {
            field: "volume".to_string(),
            min: f64::from(MIN_VOLUME),
            max: f64::from(MAX_VOLUME),
        });
    }

    Ok(())
}

/// Validates a registry name before lookup and returns it trimmed.
pub fn validate_name<'a>(field: &str, name: &'a str) -> ValidationResult<&'a str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(name)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_volume_bounds() {
        assert!(validate_volume(0.0).is_ok());
        assert!(validate_volume(1.0).is_ok());
        assert!(validate_volume(0.35).is_ok());

        assert!(matches!(
            validate_volume(-0.1),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_volume(1.01),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_volume_non_finite() {
        assert!(matches!(
            validate_volume(f32::INFINITY),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("base", "  Latte ").unwrap(), "Latte");
        assert!(matches!(
            validate_name("base", "   "),
            Err(ValidationError::Required { field }) if field == "base"
        ));
    }
}
