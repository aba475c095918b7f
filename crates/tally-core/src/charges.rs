//! # Tax & Tip Charges
//!
//! Aggregate tax and base tip amounts, before any rounding adjustment.
//!
//! Both are functions of the subtotal and the policy alone:
//! - tax is either a fixed amount or a percentage of the subtotal;
//! - tip is always a percentage of the subtotal, never of tax and never
//!   of a rounded total.
//!
//! Per-person shares of either charge are proportional to the person's
//! share of the subtotal (see [`crate::allocate::proportion`]).

use crate::types::{TaxPolicy, TipPolicy};

/// Aggregate tax amount for the given subtotal.
pub fn tax_amount(policy: TaxPolicy, subtotal: f64) -> f64 {
    match policy {
        TaxPolicy::Percentage(pct) => subtotal * pct / 100.0,
        TaxPolicy::FixedAmount(amount) => amount,
    }
}

/// Aggregate tip amount before rounding reconciliation.
pub fn base_tip_amount(policy: TipPolicy, subtotal: f64) -> f64 {
    subtotal * policy.percentage / 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::approx_eq;

    #[test]
    fn test_percentage_tax() {
        assert!(approx_eq(tax_amount(TaxPolicy::Percentage(10.0), 15.0), 1.5));
        assert!(approx_eq(tax_amount(TaxPolicy::Percentage(0.0), 15.0), 0.0));
    }

    #[test]
    fn test_fixed_tax_ignores_subtotal() {
        let policy = TaxPolicy::FixedAmount(2.5);
        assert!(approx_eq(tax_amount(policy, 15.0), 2.5));
        assert!(approx_eq(tax_amount(policy, 0.0), 2.5));
    }

    #[test]
    fn test_base_tip() {
        let policy = TipPolicy { percentage: 20.0 };
        assert!(approx_eq(base_tip_amount(policy, 15.0), 3.0));
        assert!(approx_eq(base_tip_amount(policy, 0.0), 0.0));
    }

    #[test]
    fn test_zero_tip_policy() {
        assert!(approx_eq(base_tip_amount(TipPolicy::default(), 100.0), 0.0));
    }
}
