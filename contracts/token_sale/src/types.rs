use soroban_sdk::{contracttype, Address, Env};

/// Parameters shared by every sale variant, fixed at `initialize`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleParams {
    pub start_time: u64,
    pub end_time: u64,
    pub wallet: Address,        // Receives released funds
    pub payment_token: Address, // Asset contributions are paid in
    pub token: Address,         // Token minted on allocation
    pub whitelisting: Address,  // Eligibility list
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CapParams {
    pub token_cap: i128,
    pub individual_cap: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RefundParams {
    pub refund_closing_time: u64,
    pub refund_closing_token_cap: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub operator: Address,
    pub wallet: Address,
    pub payment_token: Address,
    pub token: Address,
    pub whitelisting: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleWindow {
    pub start_time: u64,
    pub end_time: u64,
    pub paused: bool,
}

/// A recorded payment awaiting allocation.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Contribution {
    pub index: u32,
    pub contributor: Address,
    pub amount: i128, // Payment asset units
    pub timestamp: u64,
    pub allocated: bool,
    pub refunded: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Caps {
    pub token_cap: i128,
    pub individual_cap: i128,
    pub distributed_supply: i128,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum VaultState {
    Active,
    Refunding,
    Closed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RefundPolicy {
    pub refund_closing_time: u64,
    pub refund_closing_token_cap: i128,
}

/// Where accepted contributions are sent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FundsRoute {
    Wallet,
    Vault,
}

#[contracttype]
pub enum DataKey {
    Config,
    Window,
    TotalRaised,
    ContributionCount,
    Contribution(u32),
    Caps,
    Allocated(Address),
    VaultState,
    VaultBalance,
    Deposit(Address),
    RefundPolicy,
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
