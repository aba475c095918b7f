//! # Ledger
//!
//! The leaf data holder: items, people, and the item→people assignment
//! relation, with the full mutation surface.
//!
//! ## Mutation Surface
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Ledger Operations                         │
//! │                                                              │
//! │  Presentation Action      Operation           State Change   │
//! │  ───────────────────      ─────────           ────────────   │
//! │  Add item        ───────► add_item()      ──► items.push     │
//! │  Delete item     ───────► remove_item()   ──► cascade-clean  │
//! │  Add person      ───────► add_person()    ──► people.push    │
//! │  Delete person   ───────► remove_person() ──► cascade-clean  │
//! │  Toggle a chip   ───────► set_assignment()──► relation edit  │
//! │  Reset All       ───────► reset()         ──► everything     │
//! │                                                              │
//! │  Deleting an entity cleans the assignment relation in the    │
//! │  same state update; no dangling ids can be observed.         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Every id in the assignment relation refers to a live entity.
//! - A person appears at most once per item (set semantics on insert).
//! - An item with zero assigned people is a valid, recognized state.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{BillError, BillResult};
use crate::types::{Item, ItemId, Person, PersonId};
use crate::validation::{validate_name, validate_price};
use crate::{MAX_BILL_ITEMS, MAX_BILL_PEOPLE};

/// Items, people, and the item→people assignment relation.
///
/// Entities keep their insertion order; the original UI lists items and
/// people in the order they were added, and per-person breakdowns follow
/// the same order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    items: Vec<Item>,
    people: Vec<Person>,
    /// Item id → people assigned to that item, in assignment order.
    assignments: BTreeMap<ItemId, Vec<PersonId>>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger::default()
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Adds an item and returns its id.
    ///
    /// The name is trimmed and must be non-empty; the price must be
    /// finite and strictly positive. The item starts unassigned.
    pub fn add_item(&mut self, name: &str, price: f64) -> BillResult<ItemId> {
        let name = validate_name(name, "item name")?;
        let price = validate_price(price)?;

        if self.items.len() >= MAX_BILL_ITEMS {
            return Err(BillError::TooManyItems {
                max: MAX_BILL_ITEMS,
            });
        }

        let id = ItemId::new();
        self.items.push(Item {
            id,
            name,
            price,
            created_at: Utc::now(),
        });
        self.assignments.insert(id, Vec::new());
        Ok(id)
    }

    /// Removes an item and its assignment entry.
    pub fn remove_item(&mut self, id: ItemId) -> BillResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|item| item.id != id);

        if self.items.len() == initial_len {
            return Err(BillError::ItemNotFound(id));
        }

        self.assignments.remove(&id);
        Ok(())
    }

    /// Looks up an item by id.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    // =========================================================================
    // People
    // =========================================================================

    /// Adds a person and returns their id.
    pub fn add_person(&mut self, name: &str) -> BillResult<PersonId> {
        let name = validate_name(name, "person name")?;

        if self.people.len() >= MAX_BILL_PEOPLE {
            return Err(BillError::TooManyPeople {
                max: MAX_BILL_PEOPLE,
            });
        }

        let id = PersonId::new();
        self.people.push(Person {
            id,
            name,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    /// Removes a person and clears them from every item's assignment list.
    pub fn remove_person(&mut self, id: PersonId) -> BillResult<()> {
        let initial_len = self.people.len();
        self.people.retain(|person| person.id != id);

        if self.people.len() == initial_len {
            return Err(BillError::PersonNotFound(id));
        }

        for assigned in self.assignments.values_mut() {
            assigned.retain(|person_id| *person_id != id);
        }
        Ok(())
    }

    /// Looks up a person by id.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    /// All people, in insertion order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    // =========================================================================
    // Assignment Relation
    // =========================================================================

    /// Assigns or unassigns a person to/from an item.
    ///
    /// Idempotent: assigning an already-assigned pair or clearing an
    /// absent one leaves the relation unchanged.
    pub fn set_assignment(
        &mut self,
        item_id: ItemId,
        person_id: PersonId,
        assigned: bool,
    ) -> BillResult<()> {
        if self.item(item_id).is_none() {
            return Err(BillError::ItemNotFound(item_id));
        }
        if self.person(person_id).is_none() {
            return Err(BillError::PersonNotFound(person_id));
        }

        let entry = self.assignments.entry(item_id).or_default();
        if assigned {
            if !entry.contains(&person_id) {
                entry.push(person_id);
            }
        } else {
            entry.retain(|id| *id != person_id);
        }
        Ok(())
    }

    /// The people assigned to an item, in assignment order.
    ///
    /// Empty for an unassigned item (or an unknown id).
    pub fn assigned_people(&self, item_id: ItemId) -> &[PersonId] {
        self.assignments
            .get(&item_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether a person is assigned to an item.
    pub fn is_assigned(&self, item_id: ItemId, person_id: PersonId) -> bool {
        self.assigned_people(item_id).contains(&person_id)
    }

    // =========================================================================
    // Reset
    // =========================================================================

    /// Clears all items, people, and assignments.
    pub fn reset(&mut self) {
        self.items.clear();
        self.people.clear();
        self.assignments.clear();
    }

    /// Whether the ledger holds no items and no people.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.people.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_validates_input() {
        let mut ledger = Ledger::new();
        assert!(ledger.add_item("", 5.0).is_err());
        assert!(ledger.add_item("Fries", 0.0).is_err());
        assert!(ledger.add_item("Fries", f64::NAN).is_err());
        assert!(ledger.add_item("Fries", 5.0).is_ok());
    }

    #[test]
    fn test_add_item_trims_name() {
        let mut ledger = Ledger::new();
        let id = ledger.add_item("  Burger  ", 10.0).unwrap();
        assert_eq!(ledger.item(id).unwrap().name, "Burger");
    }

    #[test]
    fn test_remove_item_cascades_assignment_entry() {
        let mut ledger = Ledger::new();
        let item = ledger.add_item("Burger", 10.0).unwrap();
        let alice = ledger.add_person("Alice").unwrap();
        ledger.set_assignment(item, alice, true).unwrap();

        ledger.remove_item(item).unwrap();
        assert!(ledger.item(item).is_none());
        assert!(ledger.assigned_people(item).is_empty());
    }

    #[test]
    fn test_remove_person_cascades_from_all_items() {
        let mut ledger = Ledger::new();
        let burger = ledger.add_item("Burger", 10.0).unwrap();
        let fries = ledger.add_item("Fries", 5.0).unwrap();
        let alice = ledger.add_person("Alice").unwrap();
        let bob = ledger.add_person("Bob").unwrap();

        for item in [burger, fries] {
            ledger.set_assignment(item, alice, true).unwrap();
            ledger.set_assignment(item, bob, true).unwrap();
        }

        ledger.remove_person(alice).unwrap();
        assert_eq!(ledger.assigned_people(burger), &[bob]);
        assert_eq!(ledger.assigned_people(fries), &[bob]);
    }

    #[test]
    fn test_remove_unknown_ids() {
        let mut ledger = Ledger::new();
        let item = ledger.add_item("Burger", 10.0).unwrap();
        ledger.remove_item(item).unwrap();
        assert!(matches!(
            ledger.remove_item(item),
            Err(BillError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_set_assignment_is_idempotent() {
        let mut ledger = Ledger::new();
        let item = ledger.add_item("Burger", 10.0).unwrap();
        let alice = ledger.add_person("Alice").unwrap();

        ledger.set_assignment(item, alice, true).unwrap();
        ledger.set_assignment(item, alice, true).unwrap();
        assert_eq!(ledger.assigned_people(item).len(), 1);

        ledger.set_assignment(item, alice, false).unwrap();
        ledger.set_assignment(item, alice, false).unwrap();
        assert!(ledger.assigned_people(item).is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_prior_state() {
        let mut ledger = Ledger::new();
        let item = ledger.add_item("Burger", 10.0).unwrap();
        let alice = ledger.add_person("Alice").unwrap();
        let bob = ledger.add_person("Bob").unwrap();
        ledger.set_assignment(item, alice, true).unwrap();

        let before: Vec<_> = ledger.assigned_people(item).to_vec();
        ledger.set_assignment(item, bob, true).unwrap();
        ledger.set_assignment(item, bob, false).unwrap();
        assert_eq!(ledger.assigned_people(item), before.as_slice());
    }

    #[test]
    fn test_set_assignment_rejects_unknown_ids() {
        let mut ledger = Ledger::new();
        let item = ledger.add_item("Burger", 10.0).unwrap();
        let alice = ledger.add_person("Alice").unwrap();
        ledger.remove_person(alice).unwrap();

        assert!(matches!(
            ledger.set_assignment(item, alice, true),
            Err(BillError::PersonNotFound(_))
        ));
    }

    #[test]
    fn test_assignment_order_is_preserved() {
        let mut ledger = Ledger::new();
        let item = ledger.add_item("Platter", 12.0).unwrap();
        let alice = ledger.add_person("Alice").unwrap();
        let bob = ledger.add_person("Bob").unwrap();
        let carol = ledger.add_person("Carol").unwrap();

        ledger.set_assignment(item, carol, true).unwrap();
        ledger.set_assignment(item, alice, true).unwrap();
        ledger.set_assignment(item, bob, true).unwrap();

        assert_eq!(ledger.assigned_people(item), &[carol, alice, bob]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ledger = Ledger::new();
        let item = ledger.add_item("Burger", 10.0).unwrap();
        let alice = ledger.add_person("Alice").unwrap();
        ledger.set_assignment(item, alice, true).unwrap();

        ledger.reset();
        assert!(ledger.is_empty());
        assert!(ledger.items().is_empty());
        assert!(ledger.people().is_empty());
        assert!(ledger.assigned_people(item).is_empty());
    }
}
