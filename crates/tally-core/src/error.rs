//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Error Types                           │
//! │                                                              │
//! │  tally-core errors (this file)                               │
//! │  ├── BillError        - Ledger/engine operation failures     │
//! │  └── ValidationError  - Input validation failures            │
//! │                                                              │
//! │  Flow: ValidationError → BillError → app layer → user        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, field name, etc.)
//! 3. Errors are enum variants, never String
//!
//! The settlement computation itself never fails: degenerate inputs
//! (empty ledger, zero subtotal, unassigned items) are handled by
//! explicit guards, so errors only arise at the mutation surface.

use thiserror::Error;

use crate::types::{ItemId, PersonId};

// =============================================================================
// Bill Error
// =============================================================================

/// Ledger and engine operation errors.
///
/// These represent misuse of the mutation surface: referencing entities
/// that do not exist, or input that fails validation. Collaborators are
/// expected to pre-validate, but the engine stays defensive.
#[derive(Debug, Error)]
pub enum BillError {
    /// No item with the given id exists in the ledger.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// No person with the given id exists in the ledger.
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),

    /// Ledger has reached the maximum number of items.
    #[error("Bill cannot have more than {max} items")]
    TooManyItems { max: usize },

    /// Ledger has reached the maximum number of people.
    #[error("Bill cannot have more than {max} people")]
    TooManyPeople { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when collaborator input doesn't meet requirements.
/// Used for early validation before any ledger state changes.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: &'static str },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with BillError.
pub type BillResult<T> = Result<T, BillError>;

// =============================================================================
// Unit Tests
// =============================================================================
