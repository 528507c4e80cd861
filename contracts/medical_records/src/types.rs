use soroban_sdk::{contracttype, Address, String, Vec};

/// Metadata for one clinical document. The document itself lives off-ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicalRecord {
    pub id: u64,
    pub subject_id: String,
    /// Owner of the record; changes only through `transfer_ownership`.
    pub provider: Address,
    pub volume: u64,
    /// Ledger sequence number at creation.
    pub created_at: u64,
    pub summary: String,
    pub categories: Vec<String>,
}

/// Read permission for one viewer on one record
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrant {
    pub record_id: u64,
    pub viewer: Address,
    pub enabled: bool,
}

/// Rule deciding which viewers a provider may grant access to
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ViewerPolicy {
    /// Only the contract administrator may be granted access
    AdminOnly,
    /// Any viewer registered by the administrator
    RoleTable,
    /// Any viewer that has consented to grants from the record's provider
    ConsentList,
}
