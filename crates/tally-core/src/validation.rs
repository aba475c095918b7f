//! # Validation Module
//!
//! Input validation for the engine's mutation surface.
//!
//! ## Validation Strategy
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Validation Layers                        │
//! │                                                              │
//! │  Layer 1: Presentation layer                                 │
//! │  ├── Format checks (empty fields, parse failures)            │
//! │  └── Immediate user feedback                                 │
//! │           │                                                  │
//! │           ▼                                                  │
//! │  Layer 2: THIS MODULE                                        │
//! │  ├── Names non-empty, bounded length                         │
//! │  ├── Prices finite and strictly positive                     │
//! │  └── Rates/amounts finite and non-negative                   │
//! │                                                              │
//! │  Collaborators pre-validate; the engine stays defensive.     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{validate_name, validate_price};
//!
//! assert_eq!(validate_name("Burger", "name").unwrap(), "Burger");
//! assert!(validate_price(-1.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item or person name: trimmed, non-empty, bounded length.
///
/// Returns the trimmed name on success, matching how the original entry
/// forms discard surrounding whitespace before storing.
pub fn validate_name(name: &str, field: &'static str) -> ValidationResult<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if trimmed.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(trimmed.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an item price: finite and strictly positive.
pub fn validate_price(price: f64) -> ValidationResult<f64> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite { field: "price" });
    }
    if price <= 0.0 {
        return Err(ValidationError::MustBePositive { field: "price" });
    }
    Ok(price)
}

/// Validates a tax/tip rate or fixed amount: finite and non-negative.
pub fn validate_rate(value: f64, field: &'static str) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative { field });
    }
    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  Fries  ", "name").unwrap(), "Fries");
    }

    #[test]
    fn test_validate_name_rejects_empty() {
        assert!(validate_name("", "name").is_err());
        assert!(validate_name("   ", "name").is_err());
    }

    #[test]
    fn test_validate_name_rejects_too_long() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(
            validate_name(&long, "name"),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price(9.99).unwrap(), 9.99);
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-3.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert_eq!(validate_rate(0.0, "tax").unwrap(), 0.0);
        assert_eq!(validate_rate(8.25, "tax").unwrap(), 8.25);
        assert!(validate_rate(-1.0, "tax").is_err());
        assert!(validate_rate(f64::NAN, "tip").is_err());
    }
}
