//! Validate command implementation

use anyhow::Result;
use cardstack::validate_card_indexes;

pub fn run(alias: String, size: u64, indexes: Vec<i64>) -> Result<()> {
    validate(&alias, size, &indexes)?;
    println!("ok");
    Ok(())
}

fn validate(alias: &str, size: u64, indexes: &[i64]) -> Result<()> {
    validate_card_indexes(alias, size, indexes)?;
    log::info!(
        "{} indexes are valid for card stack {alias} of {size} cards",
        indexes.len()
    );
    Ok(())
}
