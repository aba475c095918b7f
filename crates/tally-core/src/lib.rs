//! # tally-core: Pure Settlement Engine for Tally
//!
//! This crate is the **heart** of Tally: it computes a fair split of a
//! shared bill from itemized costs, per-item assignment of people, tax
//! and tip policy, and a rounding mode — all as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Tally Architecture                        │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │            Presentation layer (CLI / future UI)        │  │
//! │  │    entry forms ──► assignment view ──► settlement view │  │
//! │  └───────────────────────────┬────────────────────────────┘  │
//! │                              │                               │
//! │  ┌───────────────────────────▼────────────────────────────┐  │
//! │  │              ★ tally-core (THIS CRATE) ★               │  │
//! │  │                                                        │  │
//! │  │  ┌────────┐ ┌──────────┐ ┌─────────┐ ┌────────────┐    │  │
//! │  │  │ ledger │ │ allocate │ │ charges │ │  rounding  │    │  │
//! │  │  │ items  │ │  equal   │ │ tax &   │ │ three-mode │    │  │
//! │  │  │ people │ │  split   │ │ tip     │ │ reconciler │    │  │
//! │  │  └────────┘ └──────────┘ └─────────┘ └────────────┘    │  │
//! │  │                                                        │  │
//! │  │  NO I/O • NO PERSISTENCE • PURE RECOMPUTE-ON-READ      │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Person, policies, Settlement DTOs)
//! - [`ledger`] - The data holder and its mutation surface
//! - [`allocate`] - Equal-split cost allocation
//! - [`charges`] - Tax and base-tip amounts
//! - [`rounding`] - The rounding-reconciliation algorithm
//! - [`settlement`] - [`Bill`]: the composed engine
//! - [`money`] - Currency helpers shared by every numeric path
//! - [`validation`] - Defensive input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Bill, RoundingMode, TaxPolicy, TipPolicy};
//!
//! let mut bill = Bill::new();
//! let burger = bill.add_item("Burger", 10.0)?;
//! let alice = bill.add_person("Alice")?;
//! bill.set_assignment(burger, alice, true)?;
//! bill.set_tax_policy(TaxPolicy::Percentage(10.0))?;
//! bill.set_tip_policy(TipPolicy { percentage: 20.0 })?;
//! bill.set_rounding_mode(RoundingMode::RoundEachPersonUp);
//!
//! let settlement = bill.compute_settlement();
//! assert_eq!(settlement.people[0].total, 13.0); // ⌈$13.00⌉
//! # Ok::<(), tally_core::BillError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocate;
pub mod charges;
pub mod error;
pub mod ledger;
pub mod money;
pub mod rounding;
pub mod settlement;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{BillError, BillResult, ValidationError};
pub use ledger::Ledger;
pub use settlement::Bill;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items on a single bill.
///
/// ## Business Reason
/// The engine is linear in items × people and intended for tens of
/// each; the cap keeps a runaway collaborator from degrading the UI.
pub const MAX_BILL_ITEMS: usize = 200;

/// Maximum people on a single bill.
pub const MAX_BILL_PEOPLE: usize = 100;

/// Maximum length of an item or person name, in bytes.
pub const MAX_NAME_LENGTH: usize = 120;
