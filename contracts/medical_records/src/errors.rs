use soroban_sdk::contracttype;

/// Error categories for classifying contract failures
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Input fields violate a length, range or category constraint
    Validation = 1,
    /// Caller is not allowed to perform the operation
    Authorization = 2,
    /// Referenced record does not exist
    NotFound = 3,
    /// Operation conflicts with existing state
    StateConflict = 4,
    /// Contract-level lifecycle issues
    System = 5,
}

/// Error severity levels indicating the impact of a failure
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    /// Caller supplied bad input; resubmit with corrected values
    Low = 1,
    /// Caller attempted something it is not entitled to
    Medium = 2,
    /// Contract is not in a usable configuration
    High = 3,
}

/// Contract errors.
///
/// Codes are part of the external interface and must stay stable.
/// `Duplicate` and `InvalidProvider` are reserved and not produced by any
/// current operation.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotFound = 1,
    Duplicate = 2,
    InvalidIdentifier = 3,
    InvalidVolume = 4,
    InvalidCategory = 5,
    AuthFailure = 6,
    InvalidProvider = 7,
    AdminOnly = 8,
    AccessViolation = 9,
    NotInitialized = 10,
    AlreadyInitialized = 11,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidIdentifier
            | ContractError::InvalidVolume
            | ContractError::InvalidCategory
            | ContractError::InvalidProvider => ErrorCategory::Validation,
            ContractError::AuthFailure
            | ContractError::AdminOnly
            | ContractError::AccessViolation => ErrorCategory::Authorization,
            ContractError::NotFound => ErrorCategory::NotFound,
            ContractError::Duplicate | ContractError::AlreadyInitialized => {
                ErrorCategory::StateConflict
            }
            ContractError::NotInitialized => ErrorCategory::System,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::NotFound
            | ContractError::Duplicate
            | ContractError::InvalidIdentifier
            | ContractError::InvalidVolume
            | ContractError::InvalidCategory
            | ContractError::InvalidProvider
            | ContractError::AlreadyInitialized => ErrorSeverity::Low,
            ContractError::AuthFailure
            | ContractError::AdminOnly
            | ContractError::AccessViolation => ErrorSeverity::Medium,
            ContractError::NotInitialized => ErrorSeverity::High,
        }
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotFound => "Record not found",
            ContractError::Duplicate => "Entry already exists",
            ContractError::InvalidIdentifier => "Subject identifier or summary has invalid length",
            ContractError::InvalidVolume => "Content volume out of range",
            ContractError::InvalidCategory => "Category list or entry has invalid length",
            ContractError::AuthFailure => "Caller is not the record provider",
            ContractError::InvalidProvider => "Invalid provider identity",
            ContractError::AdminOnly => "Operation restricted to the administrator",
            ContractError::AccessViolation => "Viewer is not permitted to access the record",
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
        }
    }
}
