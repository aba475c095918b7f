//! # Cost Allocation
//!
//! Derives each person's raw (pre-tax/tip) share of the bill from the
//! ledger. Equal-split policy: an item's cost is divided evenly by
//! headcount, not by consumption.
//!
//! ## Unassigned Items
//! An item with zero assigned people contributes to the aggregate
//! subtotal but to no person's subtotal. Whenever such an item exists,
//! `Σ person subtotals < subtotal`. This is a documented divergence of
//! the equal-split policy, not something to silently correct: the
//! unassigned portion still drives tax/tip aggregates but is never
//! billed to an individual.

use crate::ledger::Ledger;
use crate::types::{ItemId, ItemShare, PersonId};

/// Sum of all item prices, independent of assignment.
pub fn subtotal(ledger: &Ledger) -> f64 {
    ledger.items().iter().map(|item| item.price).sum()
}

/// A person's equal-split share of every item they are assigned to.
pub fn person_subtotal(ledger: &Ledger, person_id: PersonId) -> f64 {
    ledger
        .items()
        .iter()
        .filter_map(|item| {
            let assigned = ledger.assigned_people(item.id);
            if assigned.contains(&person_id) {
                Some(item.price / assigned.len() as f64)
            } else {
                None
            }
        })
        .sum()
}

/// A person's fraction of the subtotal, used to allocate tax and tip.
///
/// Defined as 0 when the subtotal is 0: no one owes tax or tip on a
/// zero bill.
pub fn proportion(subtotal: f64, person_subtotal: f64) -> f64 {
    if subtotal > 0.0 {
        person_subtotal / subtotal
    } else {
        0.0
    }
}

/// The itemized list of items a person is party to, with split costs.
///
/// Exposed on the settlement for display and audit: the original UI
/// renders this in the person-detail view.
pub fn person_items(ledger: &Ledger, person_id: PersonId) -> Vec<ItemShare> {
    ledger
        .items()
        .iter()
        .filter_map(|item| {
            let assigned = ledger.assigned_people(item.id);
            if assigned.contains(&person_id) {
                Some(ItemShare {
                    item_id: item.id,
                    name: item.name.clone(),
                    price: item.price,
                    split_count: assigned.len(),
                    split_cost: item.price / assigned.len() as f64,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Per-head cost preview for a single item (`price / headcount`).
///
/// `None` for an unknown item or one with no assignees; the assignment
/// view only shows "split n ways" once someone is assigned.
pub fn item_split_cost(ledger: &Ledger, item_id: ItemId) -> Option<f64> {
    let item = ledger.item(item_id)?;
    let count = ledger.assigned_people(item_id).len();
    if count == 0 {
        return None;
    }
    Some(item.price / count as f64)
}

// =============================================================================
// Unit Tests
// =============================================================================
