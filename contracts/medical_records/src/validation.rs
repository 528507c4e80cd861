//! Field constraints shared by `create` and `modify`.
//!
//! Lengths are byte lengths of the Soroban `String`, which equal character
//! counts for ASCII input.

use soroban_sdk::{String, Vec};

use crate::errors::ContractError;

pub const MAX_SUBJECT_ID_LEN: u32 = 64;
pub const MAX_SUMMARY_LEN: u32 = 128;
pub const MAX_CATEGORY_LEN: u32 = 32;
pub const MAX_CATEGORIES: u32 = 10;
/// Exclusive upper bound on `volume`.
pub const VOLUME_LIMIT: u64 = 1_000_000_000;

pub fn category_valid(category: &String) -> bool {
    (1..=MAX_CATEGORY_LEN).contains(&category.len())
}

pub fn category_set_valid(categories: &Vec<String>) -> bool {
    if !(1..=MAX_CATEGORIES).contains(&categories.len()) {
        return false;
    }
    categories.iter().all(|c| category_valid(&c))
}

pub fn identifier_valid(value: &String, max_len: u32) -> bool {
    (1..=max_len).contains(&value.len())
}

pub fn volume_valid(volume: u64) -> bool {
    volume > 0 && volume < VOLUME_LIMIT
}

/// Checks every mutable record field and reports the first violated rule,
/// in the order subject id, volume, summary, categories.
pub fn validate_fields(
    subject_id: &String,
    volume: u64,
    summary: &String,
    categories: &Vec<String>,
) -> Result<(), ContractError> {
    if !identifier_valid(subject_id, MAX_SUBJECT_ID_LEN) {
        return Err(ContractError::InvalidIdentifier);
    }
    if !volume_valid(volume) {
        return Err(ContractError::InvalidVolume);
    }
    if !identifier_valid(summary, MAX_SUMMARY_LEN) {
        return Err(ContractError::InvalidIdentifier);
    }
    if !category_set_valid(categories) {
        return Err(ContractError::InvalidCategory);
    }
    Ok(())
}
