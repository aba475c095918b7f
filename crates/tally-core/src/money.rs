//! # Money Helpers
//!
//! Floating-point currency arithmetic for the settlement engine.
//!
//! ## Why f64 Dollars?
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  EQUAL SPLITS ARE INTRINSICALLY FRACTIONAL                   │
//! │                                                              │
//! │  $10.00 split 3 ways = $3.3333... per head                   │
//! │  Proportional tax     = taxAmount × (share / subtotal)       │
//! │                                                              │
//! │  The engine's closing invariant is:                          │
//! │    Σ person totals ≈ aggregate total   (within EPSILON)      │
//! │                                                              │
//! │  Rounding reconciliation then closes the books exactly at    │
//! │  whole-dollar granularity, absorbing any surplus into tip.   │
//! │  Nothing is persisted, so no drift accumulates across        │
//! │  recomputations: every settlement is derived from scratch.   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every numeric code path in the crate uses the helpers here, so all
//! paths share a single tolerance and a single ceiling definition.

use std::fmt;

/// Comparison tolerance for settlement figures, in currency units.
///
/// Sums of proportional shares reconstruct their aggregate to within a
/// few ULPs at realistic bill sizes (tens of items, tens of people);
/// 1e-6 dollars is orders of magnitude above that noise floor and far
/// below the smallest displayed unit (a cent).
pub const EPSILON: f64 = 1e-6;

/// Checks whether two amounts are equal within [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Rounds an amount up to the next whole currency unit.
///
/// Amounts already on a whole unit are unchanged: `ceil_to_unit(20.0)`
/// is `20.0`. Rounding granularity is one whole unit; sub-unit
/// granularities are unsupported.
///
/// ## Example
/// ```rust
/// use tally_core::money::ceil_to_unit;
///
/// assert_eq!(ceil_to_unit(9.75), 10.0);
/// assert_eq!(ceil_to_unit(10.0), 10.0);
/// ```
#[inline]
pub fn ceil_to_unit(amount: f64) -> f64 {
    amount.ceil()
}

/// The surplus introduced by ceiling an amount to a whole unit.
///
/// Always in `[0, 1)`. The reconciler adds this to tip, never to
/// subtotal or tax.
#[inline]
pub fn ceil_surplus(amount: f64) -> f64 {
    ceil_to_unit(amount) - amount
}

/// Formats an amount as dollars for debug output.
///
/// ## Note
/// This is for logs and the CLI. Richer locale-aware formatting is a
/// presentation concern and out of scope for the engine.
pub fn display(amount: f64) -> impl fmt::Display {
    Dollars(amount)
}

struct Dollars(f64);

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(approx_eq(9.75, 9.75));
        assert!(!approx_eq(9.75, 9.76));
    }

    #[test]
    fn test_ceil_to_unit() {
        assert_eq!(ceil_to_unit(9.75), 10.0);
        assert_eq!(ceil_to_unit(19.5), 20.0);
        assert_eq!(ceil_to_unit(20.0), 20.0);
        assert_eq!(ceil_to_unit(0.0), 0.0);
    }

    #[test]
    fn test_ceil_surplus() {
        assert!(approx_eq(ceil_surplus(9.75), 0.25));
        assert_eq!(ceil_surplus(10.0), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", display(10.99)), "$10.99");
        assert_eq!(format!("{}", display(5.0)), "$5.00");
        assert_eq!(format!("{}", display(-5.5)), "-$5.50");
        assert_eq!(format!("{}", display(0.0)), "$0.00");
    }
}
