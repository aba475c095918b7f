//! # Domain Types
//!
//! Core domain types for the settlement engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       Domain Types                           │
//! │                                                              │
//! │  ┌──────────────┐  ┌──────────────┐  ┌───────────────────┐   │
//! │  │     Item     │  │    Person    │  │    Settlement     │   │
//! │  │ ──────────── │  │ ──────────── │  │ ───────────────── │   │
//! │  │ id (ItemId)  │  │ id (PersonId)│  │ subtotal          │   │
//! │  │ name         │  │ name         │  │ tax/tip amounts   │   │
//! │  │ price (f64)  │  │              │  │ total + per-person│   │
//! │  └──────────────┘  └──────────────┘  └───────────────────┘   │
//! │                                                              │
//! │  ┌──────────────┐  ┌──────────────┐  ┌───────────────────┐   │
//! │  │  TaxPolicy   │  │  TipPolicy   │  │   RoundingMode    │   │
//! │  │ ──────────── │  │ ──────────── │  │ ───────────────── │   │
//! │  │ Percentage   │  │ percentage   │  │ None              │   │
//! │  │ FixedAmount  │  │              │  │ RoundTotalUp      │   │
//! │  └──────────────┘  └──────────────┘  │ RoundEachPersonUp │   │
//! │                                      └───────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items and people are immutable after creation: edits are modeled as
//! delete-and-re-add by the presentation layer. The `Settlement` family
//! is derived, never stored.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Entity Identifiers
// =============================================================================

/// Unique identifier for a bill item.
///
/// Issued by the [`Ledger`](crate::ledger::Ledger) on creation (UUID v4)
/// and stable for the item's lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ItemId(Uuid);

impl ItemId {
    pub(crate) fn new() -> Self {
        ItemId(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a person on the bill.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct PersonId(Uuid);

impl PersonId {
    pub(crate) fn new() -> Self {
        PersonId(Uuid::new_v4())
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Ledger Entities
// =============================================================================

/// A line item on the shared bill.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Unique identifier, issued by the ledger.
    pub id: ItemId,

    /// Display name (non-empty).
    pub name: String,

    /// Price in currency units. Finite and strictly positive.
    pub price: f64,

    /// When the item was added.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// A person sharing the bill.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Person {
    /// Unique identifier, issued by the ledger.
    pub id: PersonId,

    /// Display name (non-empty).
    pub name: String,

    /// When the person was added.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Policies
// =============================================================================

/// How the aggregate tax amount is derived from the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TaxPolicy {
    /// Tax as a percentage of the subtotal (e.g. `8.25` for 8.25%).
    Percentage(f64),
    /// Tax as a fixed currency amount, independent of the subtotal.
    FixedAmount(f64),
}

impl Default for TaxPolicy {
    fn default() -> Self {
        TaxPolicy::Percentage(0.0)
    }
}

/// Tip policy: a percentage applied to the subtotal only.
///
/// Tip is never computed on tax, and never on a rounded total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TipPolicy {
    /// Tip percentage of the subtotal (e.g. `20.0` for 20%).
    pub percentage: f64,
}

/// Rounding policy applied during settlement reconciliation.
///
/// The mode is read once per recompute; no mid-computation transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Exact totals, no rounding.
    #[default]
    None,
    /// Round the aggregate total up to the next whole unit; the surplus
    /// goes to tip, distributed proportionally across people.
    RoundTotalUp,
    /// Round each person's total up independently; each surplus goes to
    /// that person's tip.
    RoundEachPersonUp,
}

// =============================================================================
// Settlement (derived, never stored)
// =============================================================================

/// One item a person is party to, with their equal-split share of it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemShare {
    pub item_id: ItemId,
    pub name: String,
    /// Full item price.
    pub price: f64,
    /// Number of people the item is split between.
    pub split_count: usize,
    /// This person's share: `price / split_count`.
    pub split_cost: f64,
}

/// One person's fully reconciled share of the bill.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PersonBreakdown {
    pub person_id: PersonId,
    pub name: String,
    /// Sum of this person's equal-split item shares.
    pub subtotal: f64,
    /// Proportional share of the aggregate tax.
    pub tax: f64,
    /// Proportional base tip plus any rounding surplus.
    pub tip: f64,
    /// `subtotal + tax + tip`.
    pub total: f64,
    /// Itemized list of the items this person is party to.
    pub items: Vec<ItemShare>,
}

/// The complete settlement: aggregate figures plus per-person breakdowns.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    /// Sum of all item prices, assigned or not.
    pub subtotal: f64,
    /// Aggregate tax per the tax policy.
    pub tax_amount: f64,
    /// Aggregate tip including any rounding surplus.
    pub tip_amount: f64,
    /// Aggregate total owed.
    pub total: f64,
    /// `tip_amount / subtotal × 100` (0 on a zero subtotal). Shows how
    /// rounding inflated the nominal tip rate.
    pub effective_tip_percentage: f64,
    /// One breakdown per person, in ledger insertion order.
    pub people: Vec<PersonBreakdown>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults() {
        assert_eq!(TaxPolicy::default(), TaxPolicy::Percentage(0.0));
        assert_eq!(TipPolicy::default().percentage, 0.0);
        assert_eq!(RoundingMode::default(), RoundingMode::None);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ItemId::new(), ItemId::new());
        assert_ne!(PersonId::new(), PersonId::new());
    }

    #[test]
    fn test_tax_policy_serde_shape() {
        let json = serde_json::to_value(TaxPolicy::Percentage(8.25)).unwrap();
        assert_eq!(json["kind"], "percentage");
        assert_eq!(json["value"], 8.25);

        let fixed: TaxPolicy =
            serde_json::from_str(r#"{"kind":"fixed_amount","value":3.5}"#).unwrap();
        assert_eq!(fixed, TaxPolicy::FixedAmount(3.5));
    }

    #[test]
    fn test_rounding_mode_serde_shape() {
        let json = serde_json::to_string(&RoundingMode::RoundEachPersonUp).unwrap();
        assert_eq!(json, r#""round_each_person_up""#);
    }
}
