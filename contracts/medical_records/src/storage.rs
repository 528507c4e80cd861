//! Keyed access to records and grants in persistent storage.
//!
//! Entries have their TTL extended whenever they are written or read.
//! Writes happen only after every check in the calling contract function has
//! passed, and a failed invocation rolls back everything it wrote.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::{AccessGrant, MedicalRecord};

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

pub fn record_key(record_id: u64) -> (Symbol, u64) {
    (symbol_short!("RECORD"), record_id)
}

pub fn grant_key(record_id: u64, viewer: &Address) -> (Symbol, u64, Address) {
    (symbol_short!("GRANT"), record_id, viewer.clone())
}

fn extend_ttl_record_key(env: &Env, key: &(Symbol, u64)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_ttl_grant_key(env: &Env, key: &(Symbol, u64, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Loads a record, extending its TTL when it exists.
pub fn get_record(env: &Env, record_id: u64) -> Option<MedicalRecord> {
    let key = record_key(record_id);
    let record: Option<MedicalRecord> = env.storage().persistent().get(&key);
    if record.is_some() {
        extend_ttl_record_key(env, &key);
    }
    record
}

pub fn set_record(env: &Env, record: &MedicalRecord) {
    let key = record_key(record.id);
    env.storage().persistent().set(&key, record);
    extend_ttl_record_key(env, &key);
}

pub fn remove_record(env: &Env, record_id: u64) {
    env.storage().persistent().remove(&record_key(record_id));
}

pub fn get_grant(env: &Env, record_id: u64, viewer: &Address) -> Option<AccessGrant> {
    let key = grant_key(record_id, viewer);
    let grant: Option<AccessGrant> = env.storage().persistent().get(&key);
    if grant.is_some() {
        extend_ttl_grant_key(env, &key);
    }
    grant
}

pub fn set_grant(env: &Env, grant: &AccessGrant) {
    let key = grant_key(grant.record_id, &grant.viewer);
    env.storage().persistent().set(&key, grant);
    extend_ttl_grant_key(env, &key);
}

pub fn remove_grant(env: &Env, record_id: u64, viewer: &Address) {
    env.storage()
        .persistent()
        .remove(&grant_key(record_id, viewer));
}
