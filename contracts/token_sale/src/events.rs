//! Event schema consumed by auditors and indexers.
//!
//! Every payload is a `#[contracttype]` struct so field names are part of the
//! emitted data. Topic symbols and field sets must stay stable.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// `amount` carries the payment-asset units indexers used to read as `weiAmount`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ContributionRecorded {
    pub index: u32,
    pub contributor: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenPurchase {
    pub purchaser: Address,
    pub beneficiary: Address,
    pub value: i128,
    pub amount: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenOwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VaultClosed {
    pub wallet: Address,
    pub amount: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Refunded {
    pub beneficiary: Address,
    pub amount: i128,
}

pub fn contribution_recorded(env: &Env, event: ContributionRecorded) {
    env.events().publish((symbol_short!("contrib"),), event);
}

pub fn token_purchase(env: &Env, event: TokenPurchase) {
    env.events().publish((symbol_short!("purchase"),), event);
}

pub fn token_ownership_transferred(env: &Env, event: TokenOwnershipTransferred) {
    env.events().publish((symbol_short!("tok_own"),), event);
}

pub fn paused(env: &Env) {
    env.events().publish((symbol_short!("paused"),), ());
}

pub fn unpaused(env: &Env) {
    env.events().publish((symbol_short!("unpaused"),), ());
}

pub fn start_time_set(env: &Env, start_time: u64) {
    env.events().publish((symbol_short!("start_set"),), start_time);
}

pub fn end_time_set(env: &Env, end_time: u64) {
    env.events().publish((symbol_short!("end_set"),), end_time);
}

pub fn caps_set(env: &Env, token_cap: i128, individual_cap: i128) {
    env.events()
        .publish((symbol_short!("cap_set"),), (token_cap, individual_cap));
}

pub fn refunds_enabled(env: &Env) {
    env.events().publish((symbol_short!("rfnd_on"),), ());
}

pub fn vault_closed(env: &Env, event: VaultClosed) {
    env.events().publish((symbol_short!("closed"),), event);
}

pub fn refunded(env: &Env, event: Refunded) {
    env.events().publish((symbol_short!("refunded"),), event);
}

pub fn refund_closing_time_set(env: &Env, refund_closing_time: u64) {
    env.events()
        .publish((symbol_short!("rc_time"),), refund_closing_time);
}

pub fn refund_closing_token_cap_set(env: &Env, refund_closing_token_cap: i128) {
    env.events()
        .publish((symbol_short!("rc_cap"),), refund_closing_token_cap);
}
