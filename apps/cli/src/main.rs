//! # Tally CLI
//!
//! Loads a bill description from a JSON file, drives the settlement
//! engine, and prints the settlement summary.
//!
//! ## Usage
//! ```bash
//! # Settle a bill file
//! cargo run -p tally-cli -- dinner.json
//!
//! # With debug logging
//! RUST_LOG=debug cargo run -p tally-cli -- dinner.json
//! ```
//!
//! ## Bill File Format
//! ```json
//! {
//!   "people": ["Alice", "Bob"],
//!   "items": [
//!     { "name": "Burger", "price": 10.0, "sharedBy": ["Alice", "Bob"] },
//!     { "name": "Fries", "price": 5.0, "sharedBy": ["Alice", "Bob"] }
//!   ],
//!   "tax": { "kind": "percentage", "value": 10.0 },
//!   "tip": { "percentage": 20.0 },
//!   "rounding": "round_each_person_up"
//! }
//! ```
//!
//! Items with an empty `sharedBy` list stay unassigned: they count
//! toward the aggregate subtotal/tax/tip but are billed to no one.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::process;

use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tally_core::money::display;
use tally_core::{Bill, RoundingMode, Settlement, TaxPolicy, TipPolicy};

/// The on-disk bill description.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BillFile {
    #[serde(default)]
    people: Vec<String>,
    #[serde(default)]
    items: Vec<BillFileItem>,
    #[serde(default)]
    tax: TaxPolicy,
    #[serde(default)]
    tip: TipPolicy,
    #[serde(default)]
    rounding: RoundingMode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BillFileItem {
    name: String,
    price: f64,
    /// People sharing this item, by name.
    #[serde(default)]
    shared_by: Vec<String>,
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut path: Option<&str> = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return;
            }
            other => path = Some(other),
        }
    }

    let Some(path) = path else {
        eprintln!("error: no bill file given");
        print_help();
        process::exit(2);
    };

    if let Err(err) = run(path) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let file: BillFile = serde_json::from_str(&raw)?;
    info!(
        items = file.items.len(),
        people = file.people.len(),
        "loaded bill file"
    );

    let bill = build_bill(&file)?;
    let settlement = bill.compute_settlement();
    debug!(
        subtotal = settlement.subtotal,
        total = settlement.total,
        "settlement computed"
    );

    render(&settlement, file.tip, file.rounding);
    Ok(())
}

/// Replays the bill file through the engine's operation surface.
fn build_bill(file: &BillFile) -> Result<Bill, Box<dyn std::error::Error>> {
    let mut bill = Bill::new();

    let mut people = HashMap::new();
    for name in &file.people {
        let id = bill.add_person(name)?;
        if people.insert(name.trim().to_string(), id).is_some() {
            return Err(format!("duplicate person name: {name}").into());
        }
    }

    for item in &file.items {
        let item_id = bill.add_item(&item.name, item.price)?;
        for person_name in &item.shared_by {
            let person_id = people
                .get(person_name.trim())
                .ok_or_else(|| format!("unknown person in sharedBy: {person_name}"))?;
            bill.set_assignment(item_id, *person_id, true)?;
        }
    }

    bill.set_tax_policy(file.tax)?;
    bill.set_tip_policy(file.tip)?;
    bill.set_rounding_mode(file.rounding);
    Ok(bill)
}

/// Prints the settlement the way the original summary card lays it out:
/// aggregate block, then individual totals with itemized detail.
fn render(settlement: &Settlement, tip: TipPolicy, rounding: RoundingMode) {
    println!("Settlement Summary");
    println!("==================");
    println!("  Subtotal:  {}", display(settlement.subtotal));
    println!("  Tax:       {}", display(settlement.tax_amount));

    let effective = settlement.effective_tip_percentage;
    if rounding != RoundingMode::None && (effective - tip.percentage).abs() > 0.05 {
        println!(
            "  Tip:       {}  ({effective:.1}% effective)",
            display(settlement.tip_amount)
        );
    } else {
        println!("  Tip:       {}", display(settlement.tip_amount));
    }
    println!("  Total:     {}", display(settlement.total));

    if settlement.people.is_empty() {
        return;
    }

    println!();
    println!("Individual Totals");
    println!("-----------------");
    for person in &settlement.people {
        println!("  {:<20} {}", person.name, display(person.total));
        for share in &person.items {
            println!(
                "    {:<18} {}  (1/{} of {})",
                share.name,
                display(share.split_cost),
                share.split_count,
                display(share.price)
            );
        }
        println!(
            "    meal {} · tax {} · tip {}",
            display(person.subtotal),
            display(person.tax),
            display(person.tip)
        );
    }
}

fn print_help() {
    println!("Tally - shared bill settlement");
    println!();
    println!("Usage: tally [OPTIONS] <BILL_FILE>");
    println!();
    println!("Arguments:");
    println!("  <BILL_FILE>   JSON bill description (see crate docs)");
    println!();
    println!("Options:");
    println!("  -h, --help    Show this help message");
}

/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DINNER: &str = r#"{
        "people": ["Alice", "Bob"],
        "items": [
            { "name": "Burger", "price": 10.0, "sharedBy": ["Alice", "Bob"] },
            { "name": "Fries", "price": 5.0, "sharedBy": ["Alice", "Bob"] }
        ],
        "tax": { "kind": "percentage", "value": 10.0 },
        "tip": { "percentage": 20.0 },
        "rounding": "round_each_person_up"
    }"#;

    #[test]
    fn test_build_bill_from_file() {
        let file: BillFile = serde_json::from_str(DINNER).unwrap();
        let bill = build_bill(&file).unwrap();
        let settlement = bill.compute_settlement();

        assert_eq!(settlement.total, 20.0);
        assert_eq!(settlement.people.len(), 2);
        assert_eq!(settlement.people[0].total, 10.0);
    }

    #[test]
    fn test_unknown_person_in_shared_by() {
        let file: BillFile = serde_json::from_str(
            r#"{
                "people": ["Alice"],
                "items": [{ "name": "Soup", "price": 4.0, "sharedBy": ["Mallory"] }]
            }"#,
        )
        .unwrap();
        assert!(build_bill(&file).is_err());
    }

    #[test]
    fn test_defaults_when_policies_omitted() {
        let file: BillFile =
            serde_json::from_str(r#"{ "people": [], "items": [] }"#).unwrap();
        assert_eq!(file.tax, TaxPolicy::default());
        assert_eq!(file.rounding, RoundingMode::None);
    }
}
