//! # Settlement Aggregator
//!
//! [`Bill`] owns the ledger and the policy state and exposes the full
//! operation surface consumed by presentation layers. Every settlement
//! is recomputed from scratch; no derived state is cached.
//!
//! ## Computation Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  compute_settlement()                        │
//! │                                                              │
//! │  Ledger ──► allocate ──► charges ──► rounding ──► Settlement │
//! │             subtotal     tax amount   reconcile   aggregate  │
//! │             per-person   base tip     surplus     + per-     │
//! │             shares                    into tip    person     │
//! │                                                              │
//! │  Pure function of current state: no hidden state advances,   │
//! │  same inputs always produce the same settlement.             │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::BillResult;
use crate::ledger::Ledger;
use crate::rounding::{self, PersonBase};
use crate::types::{
    ItemId, PersonBreakdown, PersonId, RoundingMode, Settlement, TaxPolicy, TipPolicy,
};
use crate::validation::validate_rate;
use crate::{allocate, charges};

/// The bill-splitting engine: ledger plus tax/tip/rounding policy.
///
/// Mutations go through the methods below; [`Bill::compute_settlement`]
/// derives the complete breakdown on demand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bill {
    ledger: Ledger,
    tax_policy: TaxPolicy,
    tip_policy: TipPolicy,
    rounding_mode: RoundingMode,
}

impl Bill {
    /// Creates an empty bill with default policies (0% tax, 0% tip,
    /// no rounding).
    pub fn new() -> Self {
        Bill::default()
    }

    // =========================================================================
    // Ledger Operations
    // =========================================================================

    /// Adds an item. See [`Ledger::add_item`].
    pub fn add_item(&mut self, name: &str, price: f64) -> BillResult<ItemId> {
        self.ledger.add_item(name, price)
    }

    /// Removes an item and its assignment entry.
    pub fn remove_item(&mut self, id: ItemId) -> BillResult<()> {
        self.ledger.remove_item(id)
    }

    /// Adds a person.
    pub fn add_person(&mut self, name: &str) -> BillResult<PersonId> {
        self.ledger.add_person(name)
    }

    /// Removes a person from the bill and from every assignment list.
    pub fn remove_person(&mut self, id: PersonId) -> BillResult<()> {
        self.ledger.remove_person(id)
    }

    /// Assigns or unassigns a person to/from an item (idempotent).
    pub fn set_assignment(
        &mut self,
        item_id: ItemId,
        person_id: PersonId,
        assigned: bool,
    ) -> BillResult<()> {
        self.ledger.set_assignment(item_id, person_id, assigned)
    }

    /// Read access to the underlying ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // =========================================================================
    // Policy Operations
    // =========================================================================

    /// Sets the tax policy. The value must be finite and non-negative.
    pub fn set_tax_policy(&mut self, policy: TaxPolicy) -> BillResult<()> {
        match policy {
            TaxPolicy::Percentage(pct) => validate_rate(pct, "tax percentage")?,
            TaxPolicy::FixedAmount(amount) => validate_rate(amount, "tax amount")?,
        };
        self.tax_policy = policy;
        Ok(())
    }

    /// Sets the tip policy. The percentage must be finite and
    /// non-negative.
    pub fn set_tip_policy(&mut self, policy: TipPolicy) -> BillResult<()> {
        validate_rate(policy.percentage, "tip percentage")?;
        self.tip_policy = policy;
        Ok(())
    }

    /// Sets the rounding mode applied on the next recompute.
    pub fn set_rounding_mode(&mut self, mode: RoundingMode) {
        self.rounding_mode = mode;
    }

    pub fn tax_policy(&self) -> TaxPolicy {
        self.tax_policy
    }

    pub fn tip_policy(&self) -> TipPolicy {
        self.tip_policy
    }

    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    /// Returns all state to the initial empty configuration.
    pub fn reset(&mut self) {
        self.ledger.reset();
        self.tax_policy = TaxPolicy::default();
        self.tip_policy = TipPolicy::default();
        self.rounding_mode = RoundingMode::default();
    }

    // =========================================================================
    // Settlement
    // =========================================================================

    /// Computes the complete settlement from current state.
    ///
    /// Pure function of the ledger and policies: calling it twice
    /// without a mutation in between yields identical figures.
    pub fn compute_settlement(&self) -> Settlement {
        let subtotal = allocate::subtotal(&self.ledger);
        let tax_amount = charges::tax_amount(self.tax_policy, subtotal);
        let base_tip = charges::base_tip_amount(self.tip_policy, subtotal);

        let bases: Vec<PersonBase> = self
            .ledger
            .people()
            .iter()
            .map(|person| {
                let person_subtotal = allocate::person_subtotal(&self.ledger, person.id);
                let proportion = allocate::proportion(subtotal, person_subtotal);
                PersonBase {
                    person_id: person.id,
                    subtotal: person_subtotal,
                    tax: tax_amount * proportion,
                    base_tip: base_tip * proportion,
                }
            })
            .collect();

        let reconciled = rounding::reconcile(
            self.rounding_mode,
            subtotal,
            tax_amount,
            base_tip,
            &bases,
        );

        let effective_tip_percentage = if subtotal > 0.0 {
            reconciled.tip_amount / subtotal * 100.0
        } else {
            0.0
        };

        // reconcile preserves input order, which is ledger people order.
        let people = self
            .ledger
            .people()
            .iter()
            .zip(reconciled.people)
            .map(|(person, figures)| PersonBreakdown {
                person_id: person.id,
                name: person.name.clone(),
                subtotal: figures.subtotal,
                tax: figures.tax,
                tip: figures.tip,
                total: figures.total,
                items: allocate::person_items(&self.ledger, person.id),
            })
            .collect();

        Settlement {
            subtotal,
            tax_amount,
            tip_amount: reconciled.tip_amount,
            total: reconciled.total,
            effective_tip_percentage,
            people,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
