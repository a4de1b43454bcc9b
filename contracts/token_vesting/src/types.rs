use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VestingError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    LengthMismatch = 4,
    InvalidAmount = 5,
    NotEligible = 6,
    NothingToClaim = 7,
    Overflow = 8,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingConfig {
    pub operator: Address,
    pub token: Address,
    pub whitelisting: Address,
}

/// One time-locked entitlement. Settled at most once.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingGrant {
    pub beneficiary: Address,
    pub amount: i128,
    pub release_time: u64,
    pub claimed: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct GrantAdded {
    pub beneficiary: Address,
    pub amount: i128,
    pub release_time: u64,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Grants(Address),
}
