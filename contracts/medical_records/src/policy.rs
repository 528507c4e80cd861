//! Authorized-viewer policy consulted by `authorize_access`.
//!
//! The active [`ViewerPolicy`] is stored in instance storage and defaults to
//! [`ViewerPolicy::AdminOnly`]. The viewer table is maintained by the
//! administrator; consent entries are signed by the viewer they admit.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::ViewerPolicy;

const POLICY: Symbol = symbol_short!("V_POLICY");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn viewer_key(viewer: &Address) -> (Symbol, Address) {
    (symbol_short!("VIEWER"), viewer.clone())
}

fn consent_key(provider: &Address, viewer: &Address) -> (Symbol, Address, Address) {
    (symbol_short!("CONSENT"), provider.clone(), viewer.clone())
}

pub fn get_policy(env: &Env) -> ViewerPolicy {
    env.storage()
        .instance()
        .get(&POLICY)
        .unwrap_or(ViewerPolicy::AdminOnly)
}

pub fn set_policy(env: &Env, policy: &ViewerPolicy) {
    env.storage().instance().set(&POLICY, policy);
}

pub fn register_viewer(env: &Env, viewer: &Address) {
    let key = viewer_key(viewer);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn unregister_viewer(env: &Env, viewer: &Address) {
    env.storage().persistent().remove(&viewer_key(viewer));
}

pub fn is_registered_viewer(env: &Env, viewer: &Address) -> bool {
    env.storage().persistent().has(&viewer_key(viewer))
}

pub fn grant_consent(env: &Env, provider: &Address, viewer: &Address) {
    let key = consent_key(provider, viewer);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn revoke_consent(env: &Env, provider: &Address, viewer: &Address) {
    env.storage()
        .persistent()
        .remove(&consent_key(provider, viewer));
}

pub fn has_consent(env: &Env, provider: &Address, viewer: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&consent_key(provider, viewer))
}

/// Returns true if `provider` may grant `viewer` access under the active policy.
///
/// With no administrator configured, `AdminOnly` admits nobody.
pub fn is_authorized_viewer(
    env: &Env,
    admin: Option<Address>,
    provider: &Address,
    viewer: &Address,
) -> bool {
    match get_policy(env) {
        ViewerPolicy::AdminOnly => admin.is_some_and(|a| a == *viewer),
        ViewerPolicy::RoleTable => is_registered_viewer(env, viewer),
        ViewerPolicy::ConsentList => has_consent(env, provider, viewer),
    }
}
