//! # Rounding Reconciliation
//!
//! The core algorithm: applies one of three rounding policies so that
//! per-person totals stay consistent with the aggregate total. Any
//! rounding surplus is absorbed into tip, never into subtotal or tax,
//! preserving the identity `total = subtotal + tax + tip` on both the
//! aggregate and every person.
//!
//! ## The Three Modes
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Mode               Aggregate total         Person total         │
//! │  ─────────────────  ────────────────────    ────────────────────  │
//! │  None               base total (exact)      base total (exact)   │
//! │  RoundTotalUp       ⌈base total⌉            base + proportional  │
//! │                                             slice of surplus     │
//! │  RoundEachPersonUp  Σ ⌈person base⌉         ⌈person base⌉        │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Closing invariants, up to [`EPSILON`](crate::money::EPSILON):
//! - `None`: Σ person totals ≈ aggregate total.
//! - `RoundTotalUp`: aggregate total = ⌈base total⌉ exactly; person
//!   surplus slices sum to the whole surplus when every item is
//!   assigned (the slices are proportional to shares of the base
//!   total, which person base totals cover exactly in that case).
//! - `RoundEachPersonUp`: every person total is their own ceiling; the
//!   aggregate is the sum of those ceilings, NOT a ceiling of the bill
//!   total. With unassigned subtotal the two can diverge; that is an
//!   accepted consequence of the equal-split policy, not an error.
//!
//! The mode is read once per recompute; no transitions mid-computation.

use crate::money::{ceil_surplus, ceil_to_unit};
use crate::types::{PersonId, RoundingMode};

/// One person's pre-reconciliation figures.
#[derive(Debug, Clone, Copy)]
pub struct PersonBase {
    pub person_id: PersonId,
    /// Equal-split item shares.
    pub subtotal: f64,
    /// Proportional share of the aggregate tax.
    pub tax: f64,
    /// Proportional share of the base tip.
    pub base_tip: f64,
}

impl PersonBase {
    /// `subtotal + tax + base_tip`, before any rounding.
    pub fn base_total(&self) -> f64 {
        self.subtotal + self.tax + self.base_tip
    }
}

/// One person's reconciled figures.
#[derive(Debug, Clone, Copy)]
pub struct PersonFigures {
    pub person_id: PersonId,
    pub subtotal: f64,
    pub tax: f64,
    pub tip: f64,
    pub total: f64,
}

/// The reconciled aggregate: adjusted tip, closed total, per-person rows.
///
/// Subtotal and tax pass through unchanged; only tip absorbs surplus.
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub tip_amount: f64,
    pub total: f64,
    pub people: Vec<PersonFigures>,
}

/// Applies the rounding policy to the base figures.
pub fn reconcile(
    mode: RoundingMode,
    subtotal: f64,
    tax_amount: f64,
    base_tip: f64,
    people: &[PersonBase],
) -> Reconciled {
    match mode {
        RoundingMode::None => reconcile_exact(subtotal, tax_amount, base_tip, people),
        RoundingMode::RoundTotalUp => {
            reconcile_total_up(subtotal, tax_amount, base_tip, people)
        }
        RoundingMode::RoundEachPersonUp => reconcile_each_person_up(base_tip, people),
    }
}

/// `None`: totals are exact.
fn reconcile_exact(
    subtotal: f64,
    tax_amount: f64,
    base_tip: f64,
    people: &[PersonBase],
) -> Reconciled {
    Reconciled {
        tip_amount: base_tip,
        total: subtotal + tax_amount + base_tip,
        people: people
            .iter()
            .map(|p| PersonFigures {
                person_id: p.person_id,
                subtotal: p.subtotal,
                tax: p.tax,
                tip: p.base_tip,
                total: p.base_total(),
            })
            .collect(),
    }
}

/// `RoundTotalUp`: ceiling on the aggregate, surplus split pro rata.
///
/// Each person's slice of the surplus is proportional to their share of
/// the unrounded base total, so the slices reconstruct the surplus by
/// construction (when person base totals cover the whole base total).
fn reconcile_total_up(
    subtotal: f64,
    tax_amount: f64,
    base_tip: f64,
    people: &[PersonBase],
) -> Reconciled {
    let base_total = subtotal + tax_amount + base_tip;
    let rounded_total = ceil_to_unit(base_total);
    let surplus = rounded_total - base_total;

    let people = people
        .iter()
        .map(|p| {
            let ratio = if base_total > 0.0 {
                p.base_total() / base_total
            } else {
                0.0
            };
            let tip_adjustment = surplus * ratio;
            PersonFigures {
                person_id: p.person_id,
                subtotal: p.subtotal,
                tax: p.tax,
                tip: p.base_tip + tip_adjustment,
                total: p.base_total() + tip_adjustment,
            }
        })
        .collect();

    Reconciled {
        tip_amount: base_tip + surplus,
        total: rounded_total,
        people,
    }
}

/// `RoundEachPersonUp`: independent ceiling per person.
///
/// The aggregate tip and total are derived from the individual
/// surpluses; unassigned subtotal never reaches any person's ceiling.
fn reconcile_each_person_up(base_tip: f64, people: &[PersonBase]) -> Reconciled {
    let mut total_surplus = 0.0;
    let mut total = 0.0;

    let people = people
        .iter()
        .map(|p| {
            let base = p.base_total();
            let surplus = ceil_surplus(base);
            total_surplus += surplus;
            total += ceil_to_unit(base);
            PersonFigures {
                person_id: p.person_id,
                subtotal: p.subtotal,
                tax: p.tax,
                tip: p.base_tip + surplus,
                total: ceil_to_unit(base),
            }
        })
        .collect();

    Reconciled {
        tip_amount: base_tip + total_surplus,
        total,
        people,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::approx_eq;

    /// Two people splitting a $15.00 subtotal evenly, 10% tax, 20% tip.
    /// Aggregate base total $19.50; each person base total $9.75.
    fn even_pair() -> Vec<PersonBase> {
        (0..2)
            .map(|_| PersonBase {
                person_id: new_person(),
                subtotal: 7.5,
                tax: 0.75,
                base_tip: 1.5,
            })
            .collect()
    }

    fn new_person() -> PersonId {
        // Ledger issues ids in production, any unique value works here.
        let mut ledger = crate::ledger::Ledger::new();
        ledger.add_person("p").unwrap()
    }

    fn person_total_sum(r: &Reconciled) -> f64 {
        r.people.iter().map(|p| p.total).sum()
    }

    #[test]
    fn test_none_mode_is_exact() {
        let people = even_pair();
        let r = reconcile(RoundingMode::None, 15.0, 1.5, 3.0, &people);

        assert!(approx_eq(r.tip_amount, 3.0));
        assert!(approx_eq(r.total, 19.5));
        assert!(approx_eq(person_total_sum(&r), r.total));
        for p in &r.people {
            assert!(approx_eq(p.total, 9.75));
        }
    }

    #[test]
    fn test_total_up_ceils_aggregate_and_splits_surplus() {
        let people = even_pair();
        let r = reconcile(RoundingMode::RoundTotalUp, 15.0, 1.5, 3.0, &people);

        assert_eq!(r.total, 20.0);
        assert!(approx_eq(r.tip_amount, 3.5));
        // Each person carries half the $0.50 surplus in their tip.
        for p in &r.people {
            assert!(approx_eq(p.tip, 1.75));
            assert!(approx_eq(p.total, 10.0));
            assert!(approx_eq(p.tax, 0.75)); // tax untouched
        }
        assert!(approx_eq(person_total_sum(&r), r.total));
    }

    #[test]
    fn test_total_up_whole_base_total_has_no_surplus() {
        let people = vec![PersonBase {
            person_id: new_person(),
            subtotal: 18.0,
            tax: 0.0,
            base_tip: 2.0,
        }];
        let r = reconcile(RoundingMode::RoundTotalUp, 18.0, 0.0, 2.0, &people);
        assert_eq!(r.total, 20.0);
        assert!(approx_eq(r.tip_amount, 2.0));
        assert!(approx_eq(r.people[0].tip, 2.0));
    }

    #[test]
    fn test_each_person_up_ceils_individually() {
        let people = even_pair();
        let r = reconcile(RoundingMode::RoundEachPersonUp, 15.0, 1.5, 3.0, &people);

        assert_eq!(r.total, 20.0);
        assert!(approx_eq(r.tip_amount, 3.5));
        for p in &r.people {
            assert_eq!(p.total, 10.0);
            assert!(approx_eq(p.tip, 1.75));
            // Ceiling leaves no fractional remainder on the total.
            assert_eq!(p.total, p.total.ceil());
        }
    }

    #[test]
    fn test_each_person_up_uneven_shares() {
        let alice = PersonBase {
            person_id: new_person(),
            subtotal: 10.0,
            tax: 1.0,
            base_tip: 2.0, // base total 13.0, already whole
        };
        let bob = PersonBase {
            person_id: new_person(),
            subtotal: 5.0,
            tax: 0.5,
            base_tip: 1.0, // base total 6.5 → 7.0
        };
        let r = reconcile(RoundingMode::RoundEachPersonUp, 15.0, 1.5, 3.0, &[alice, bob]);

        assert_eq!(r.people[0].total, 13.0);
        assert!(approx_eq(r.people[0].tip, 2.0)); // no surplus
        assert_eq!(r.people[1].total, 7.0);
        assert!(approx_eq(r.people[1].tip, 1.5));
        assert_eq!(r.total, 20.0);
        assert!(approx_eq(r.tip_amount, 3.5));
    }

    #[test]
    fn test_each_person_up_aggregate_is_sum_of_ceilings_not_bill_ceiling() {
        // $6.00 of the subtotal is unassigned: its tax/tip reach no
        // person, so the aggregate here is below ⌈bill base total⌉.
        let assigned = PersonBase {
            person_id: new_person(),
            subtotal: 9.0,
            tax: 0.6, // proportional share of $1.00 tax on a $15 bill
            base_tip: 0.0,
        };
        let r = reconcile(RoundingMode::RoundEachPersonUp, 15.0, 1.0, 0.0, &[assigned]);

        assert_eq!(r.total, 10.0); // ⌈9.60⌉
        assert!(r.total < ceil_to_unit(15.0 + 1.0)); // ⌈16.00⌉ = 16
    }

    #[test]
    fn test_zero_bill_zero_people() {
        for mode in [
            RoundingMode::None,
            RoundingMode::RoundTotalUp,
            RoundingMode::RoundEachPersonUp,
        ] {
            let r = reconcile(mode, 0.0, 0.0, 0.0, &[]);
            assert_eq!(r.total, 0.0);
            assert_eq!(r.tip_amount, 0.0);
            assert!(r.people.is_empty());
        }
    }
}
