#![no_std]
//! Permissioned store for clinical-document metadata.
//!
//! Each record is owned by the provider that created it. Only the owner may
//! modify, remove or transfer a record, or grant viewers access to it. Read
//! accessors are open to any caller; the record content itself is kept
//! off-ledger and is the caller's responsibility to protect.

pub mod counter;
pub mod errors;
pub mod events;
pub mod policy;
pub mod storage;
pub mod types;
pub mod validation;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol, Vec};

pub use errors::{ContractError, ErrorCategory, ErrorSeverity};
pub use types::{AccessGrant, MedicalRecord, ViewerPolicy};

/// Storage keys for the contract
const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

#[contract]
pub struct MedicalRecordsContract;

impl MedicalRecordsContract {
    fn load_record(env: &Env, record_id: u64) -> Result<MedicalRecord, ContractError> {
        storage::get_record(env, record_id).ok_or(ContractError::NotFound)
    }

    /// Loads a record and checks that `caller` is its provider.
    fn load_owned_record(
        env: &Env,
        record_id: u64,
        caller: &Address,
    ) -> Result<MedicalRecord, ContractError> {
        let record = Self::load_record(env, record_id)?;
        if record.provider != *caller {
            return Err(ContractError::AuthFailure);
        }
        Ok(record)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)?;
        if admin != *caller {
            return Err(ContractError::AdminOnly);
        }
        Ok(())
    }
}

#[contractimpl]
impl MedicalRecordsContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the contract with the administrator address.
    ///
    /// Record operations do not need initialization, but no viewer besides
    /// the creator can be authorized under the default policy until an
    /// administrator exists.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        extend_ttl_instance(&env);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    // ── Record Store ─────────────────────────────────────────────────────────

    /// Create a record owned by `caller` and return its id.
    ///
    /// The creator receives an enabled access grant on the new record.
    pub fn create(
        env: Env,
        caller: Address,
        subject_id: String,
        volume: u64,
        summary: String,
        categories: Vec<String>,
    ) -> Result<u64, ContractError> {
        caller.require_auth();

        validation::validate_fields(&subject_id, volume, &summary, &categories)?;

        let record_id = counter::next(&env);
        let created_at = u64::from(env.ledger().sequence());

        let record = MedicalRecord {
            id: record_id,
            subject_id,
            provider: caller.clone(),
            volume,
            created_at,
            summary,
            categories,
        };
        storage::set_record(&env, &record);
        counter::commit(&env, record_id);

        storage::set_grant(
            &env,
            &AccessGrant {
                record_id,
                viewer: caller.clone(),
                enabled: true,
            },
        );
        extend_ttl_instance(&env);

        events::publish_record_created(&env, record_id, caller, created_at);

        Ok(record_id)
    }

    /// Overwrite the subject id, volume, summary and categories of a record.
    /// Provider and creation marker are left untouched.
    pub fn modify(
        env: Env,
        caller: Address,
        record_id: u64,
        subject_id: String,
        volume: u64,
        summary: String,
        categories: Vec<String>,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let mut record = Self::load_owned_record(&env, record_id, &caller)?;
        validation::validate_fields(&subject_id, volume, &summary, &categories)?;

        record.subject_id = subject_id;
        record.volume = volume;
        record.summary = summary;
        record.categories = categories;
        storage::set_record(&env, &record);
        extend_ttl_instance(&env);

        events::publish_record_modified(&env, record_id, caller);

        Ok(())
    }

    /// Delete a record together with the caller's own grant on it.
    ///
    /// Grants held by other viewers are not removed and stay readable
    /// through `verify_access` after the record is gone.
    pub fn remove(env: Env, caller: Address, record_id: u64) -> Result<(), ContractError> {
        caller.require_auth();

        Self::load_owned_record(&env, record_id, &caller)?;

        storage::remove_record(&env, record_id);
        storage::remove_grant(&env, record_id, &caller);
        extend_ttl_instance(&env);

        events::publish_record_removed(&env, record_id, caller);

        Ok(())
    }

    /// Hand a record over to `new_provider`. Existing grants are unchanged.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        record_id: u64,
        new_provider: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let mut record = Self::load_owned_record(&env, record_id, &caller)?;
        record.provider = new_provider.clone();
        storage::set_record(&env, &record);
        extend_ttl_instance(&env);

        events::publish_ownership_transferred(&env, record_id, caller, new_provider);

        Ok(())
    }

    // ── Read accessors ───────────────────────────────────────────────────────
    //
    // None of these check who is asking: record metadata is public to every
    // caller. Integrators that need confidential metadata must gate reads
    // off-ledger.

    /// Get the full record
    pub fn get_details(env: Env, record_id: u64) -> Result<MedicalRecord, ContractError> {
        Self::load_record(&env, record_id)
    }

    pub fn get_provider(env: Env, record_id: u64) -> Result<Address, ContractError> {
        Ok(Self::load_record(&env, record_id)?.provider)
    }

    /// Ledger sequence number at which the record was created
    pub fn get_timestamp(env: Env, record_id: u64) -> Result<u64, ContractError> {
        Ok(Self::load_record(&env, record_id)?.created_at)
    }

    pub fn get_size(env: Env, record_id: u64) -> Result<u64, ContractError> {
        Ok(Self::load_record(&env, record_id)?.volume)
    }

    pub fn get_summary(env: Env, record_id: u64) -> Result<String, ContractError> {
        Ok(Self::load_record(&env, record_id)?.summary)
    }

    pub fn get_categories(env: Env, record_id: u64) -> Result<Vec<String>, ContractError> {
        Ok(Self::load_record(&env, record_id)?.categories)
    }

    pub fn get_subject_id(env: Env, record_id: u64) -> Result<String, ContractError> {
        Ok(Self::load_record(&env, record_id)?.subject_id)
    }

    pub fn count_categories(env: Env, record_id: u64) -> Result<u32, ContractError> {
        Ok(Self::load_record(&env, record_id)?.categories.len())
    }

    /// Total number of records ever created. Deletions do not lower it.
    pub fn get_stats(env: Env) -> u64 {
        counter::current(&env)
    }

    // ── Access Control Ledger ────────────────────────────────────────────────

    /// Grant `viewer` access to a record.
    ///
    /// Only the record's provider may grant, and only to viewers admitted by
    /// the active [`ViewerPolicy`]. Re-authorizing an existing grant
    /// overwrites it with an enabled one.
    pub fn authorize_access(
        env: Env,
        caller: Address,
        record_id: u64,
        viewer: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let record = Self::load_owned_record(&env, record_id, &caller)?;

        let admin: Option<Address> = env.storage().instance().get(&ADMIN);
        if !policy::is_authorized_viewer(&env, admin, &record.provider, &viewer) {
            return Err(ContractError::AccessViolation);
        }

        storage::set_grant(
            &env,
            &AccessGrant {
                record_id,
                viewer: viewer.clone(),
                enabled: true,
            },
        );
        extend_ttl_instance(&env);

        events::publish_access_authorized(&env, record_id, viewer);

        Ok(())
    }

    /// Disable an existing grant. The entry is kept, so `verify_access`
    /// reports `false` for it rather than failing.
    pub fn revoke_access(
        env: Env,
        caller: Address,
        record_id: u64,
        viewer: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        Self::load_owned_record(&env, record_id, &caller)?;

        let mut grant =
            storage::get_grant(&env, record_id, &viewer).ok_or(ContractError::AccessViolation)?;
        grant.enabled = false;
        storage::set_grant(&env, &grant);
        extend_ttl_instance(&env);

        events::publish_access_revoked(&env, record_id, viewer);

        Ok(())
    }

    /// Return the stored grant flag for `viewer`, failing if no grant exists.
    ///
    /// Looks only at the grant table: the record itself need not exist.
    pub fn verify_access(
        env: Env,
        record_id: u64,
        viewer: Address,
    ) -> Result<bool, ContractError> {
        storage::get_grant(&env, record_id, &viewer)
            .map(|grant| grant.enabled)
            .ok_or(ContractError::AccessViolation)
    }

    // ── Viewer policy configuration ──────────────────────────────────────────

    /// Select the rule `authorize_access` applies to viewers. Admin only.
    pub fn set_viewer_policy(
        env: Env,
        caller: Address,
        viewer_policy: ViewerPolicy,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        policy::set_policy(&env, &viewer_policy);
        extend_ttl_instance(&env);

        events::publish_policy_changed(&env, viewer_policy);

        Ok(())
    }

    pub fn get_viewer_policy(env: Env) -> ViewerPolicy {
        policy::get_policy(&env)
    }

    /// Add `viewer` to the table consulted by [`ViewerPolicy::RoleTable`].
    pub fn register_viewer(
        env: Env,
        caller: Address,
        viewer: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        policy::register_viewer(&env, &viewer);
        events::publish_viewer_registered(&env, viewer, true);

        Ok(())
    }

    pub fn unregister_viewer(
        env: Env,
        caller: Address,
        viewer: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        policy::unregister_viewer(&env, &viewer);
        events::publish_viewer_registered(&env, viewer, false);

        Ok(())
    }

    pub fn is_registered_viewer(env: Env, viewer: Address) -> bool {
        policy::is_registered_viewer(&env, &viewer)
    }

    /// Record that `viewer` consents to receiving grants from `provider`.
    /// Consulted by [`ViewerPolicy::ConsentList`].
    ///
    /// Signed by the viewer, so a provider cannot enlist viewers on its own.
    pub fn grant_consent(env: Env, viewer: Address, provider: Address) {
        viewer.require_auth();

        policy::grant_consent(&env, &provider, &viewer);
        events::publish_consent_changed(&env, provider, viewer, true);
    }

    /// Withdraw consent. Grants already written are left in place.
    pub fn revoke_consent(env: Env, viewer: Address, provider: Address) {
        viewer.require_auth();

        policy::revoke_consent(&env, &provider, &viewer);
        events::publish_consent_changed(&env, provider, viewer, false);
    }

    pub fn has_consent(env: Env, provider: Address, viewer: Address) -> bool {
        policy::has_consent(&env, &provider, &viewer)
    }
}

#[cfg(test)]
mod test_policy;
