use soroban_sdk::{symbol_short, Address, Env};

use crate::types::ViewerPolicy;

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub sequence: u64,
}

/// Event published when a new record is created.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordCreatedEvent {
    pub record_id: u64,
    pub provider: Address,
    pub created_at: u64,
}

/// Event published when a record changes owner.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub record_id: u64,
    pub previous_provider: Address,
    pub new_provider: Address,
}

/// Event published when a viewer grant is written or disabled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessChangedEvent {
    pub record_id: u64,
    pub viewer: Address,
    pub enabled: bool,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let data = InitializedEvent {
        admin,
        sequence: u64::from(env.ledger().sequence()),
    };
    env.events().publish((symbol_short!("INIT"),), data);
}

pub fn publish_record_created(env: &Env, record_id: u64, provider: Address, created_at: u64) {
    let topics = (symbol_short!("REC_NEW"), provider.clone());
    let data = RecordCreatedEvent {
        record_id,
        provider,
        created_at,
    };
    env.events().publish(topics, data);
}

pub fn publish_record_modified(env: &Env, record_id: u64, provider: Address) {
    env.events()
        .publish((symbol_short!("REC_MOD"), provider), record_id);
}

pub fn publish_record_removed(env: &Env, record_id: u64, provider: Address) {
    env.events()
        .publish((symbol_short!("REC_DEL"), provider), record_id);
}

pub fn publish_ownership_transferred(
    env: &Env,
    record_id: u64,
    previous_provider: Address,
    new_provider: Address,
) {
    let topics = (symbol_short!("REC_XFER"), new_provider.clone());
    let data = OwnershipTransferredEvent {
        record_id,
        previous_provider,
        new_provider,
    };
    env.events().publish(topics, data);
}

pub fn publish_access_authorized(env: &Env, record_id: u64, viewer: Address) {
    let topics = (symbol_short!("ACC_GRT"), viewer.clone());
    let data = AccessChangedEvent {
        record_id,
        viewer,
        enabled: true,
    };
    env.events().publish(topics, data);
}

pub fn publish_access_revoked(env: &Env, record_id: u64, viewer: Address) {
    let topics = (symbol_short!("ACC_REV"), viewer.clone());
    let data = AccessChangedEvent {
        record_id,
        viewer,
        enabled: false,
    };
    env.events().publish(topics, data);
}

pub fn publish_policy_changed(env: &Env, policy: ViewerPolicy) {
    env.events().publish((symbol_short!("POLICY"),), policy);
}

pub fn publish_viewer_registered(env: &Env, viewer: Address, registered: bool) {
    env.events()
        .publish((symbol_short!("VWR_REG"), viewer), registered);
}

pub fn publish_consent_changed(env: &Env, provider: Address, viewer: Address, granted: bool) {
    env.events()
        .publish((symbol_short!("CONSENT"), provider, viewer), granted);
}
