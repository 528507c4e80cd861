//! Global record id sequence.
//!
//! The counter lives in instance storage and only moves forward. `next`
//! never writes, so a create that fails validation leaves no gap.

use soroban_sdk::{symbol_short, Env, Symbol};

const REC_CTR: Symbol = symbol_short!("REC_CTR");

/// Number of records ever created (0 before the first create).
pub fn current(env: &Env) -> u64 {
    env.storage().instance().get(&REC_CTR).unwrap_or(0)
}

/// The id the next successful create will receive.
pub fn next(env: &Env) -> u64 {
    current(env).saturating_add(1)
}

pub fn commit(env: &Env, id: u64) {
    env.storage().instance().set(&REC_CTR, &id);
}
