use crate::errors::SaleError;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_window(env: &Env) -> Result<SaleWindow, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Window)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_window(env: &Env, window: &SaleWindow) {
    env.storage().instance().set(&DataKey::Window, window);
}

pub fn get_total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalRaised, &amount);
}

pub fn get_contribution_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ContributionCount)
        .unwrap_or(0)
}

pub fn set_contribution_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ContributionCount, &count);
}

pub fn get_contribution(env: &Env, index: u32) -> Option<Contribution> {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(index))
}

pub fn set_contribution(env: &Env, contribution: &Contribution) {
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(contribution.index), contribution);
}

pub fn get_caps(env: &Env) -> Result<Caps, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::Caps)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_caps(env: &Env, caps: &Caps) {
    env.storage().instance().set(&DataKey::Caps, caps);
}

pub fn get_allocated(env: &Env, beneficiary: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Allocated(beneficiary.clone()))
        .unwrap_or(0)
}

pub fn set_allocated(env: &Env, beneficiary: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Allocated(beneficiary.clone()), &amount);
}

pub fn get_vault_state(env: &Env) -> VaultState {
    env.storage()
        .instance()
        .get(&DataKey::VaultState)
        .unwrap_or(VaultState::Active)
}

pub fn set_vault_state(env: &Env, state: VaultState) {
    env.storage().instance().set(&DataKey::VaultState, &state);
}

pub fn get_vault_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::VaultBalance)
        .unwrap_or(0)
}

pub fn set_vault_balance(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::VaultBalance, &amount);
}

pub fn get_deposit(env: &Env, depositor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Deposit(depositor.clone()))
        .unwrap_or(0)
}

pub fn set_deposit(env: &Env, depositor: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Deposit(depositor.clone()), &amount);
}

pub fn get_refund_policy(env: &Env) -> Result<RefundPolicy, SaleError> {
    env.storage()
        .instance()
        .get(&DataKey::RefundPolicy)
        .ok_or(SaleError::NotInitialized)
}

pub fn set_refund_policy(env: &Env, policy: &RefundPolicy) {
    env.storage().instance().set(&DataKey::RefundPolicy, policy);
}
