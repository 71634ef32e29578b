//! JSON exchange for card collections.
//! This is the platform's deck-exchange format, not engine-state
//! persistence: review statistics travel with the cards, but nothing here
//! is read back automatically at startup.

use crate::models::Card;
use std::fs::File;
use std::io::{Read, Write};

/// Exports a card collection to a pretty-printed JSON file.
/// Returns an error if file creation or writing fails.
pub fn export_cards_to_path(cards: &[Card], path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let json_string = serde_json::to_string_pretty(cards)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(())
}

/// Imports a card collection from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_cards(filename: &str) -> Result<Vec<Card>, Box<dyn std::error::Error>> {
    let mut file = File::open(filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let cards: Vec<Card> = serde_json::from_str(&contents)?;

    log::info!("imported {} cards from '{}'", cards.len(), filename);
    Ok(cards)
}
