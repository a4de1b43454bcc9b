use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env};
use token_sale::{access, allocation, caps, ledger, refund_cap, storage, vault};
use token_sale::{
    CapParams, Contribution, FundsRoute, RefundParams, SaleConfig, SaleError, SaleParams,
    SaleWindow, VaultState,
};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Public sale escrowing contributions until the allocation threshold is met"
);

#[contract]
pub struct PublicSaleContract;

#[contractimpl]
impl PublicSaleContract {
    /// Initialize the sale, its caps and the refund policy; the vault starts `Active`.
    pub fn initialize(
        env: Env,
        operator: Address,
        params: SaleParams,
        cap_params: CapParams,
        refund_params: RefundParams,
    ) -> Result<(), SaleError> {
        operator.require_auth();
        ledger::init(&env, &operator, &params)?;
        caps::init(&env, &cap_params)?;
        refund_cap::init(&env, &refund_params)
    }

    /// Record a contribution; the payment is held in escrow by this contract.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<u32, SaleError> {
        ledger::contribute(&env, &contributor, amount, FundsRoute::Vault)
    }

    pub fn allocate_tokens(
        env: Env,
        caller: Address,
        index: u32,
        amount: i128,
    ) -> Result<(), SaleError> {
        allocation::allocate_tokens(&env, &caller, index, amount)
    }

    pub fn owner_assigned_tokens(
        env: Env,
        caller: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<(), SaleError> {
        allocation::owner_assigned_tokens(&env, &caller, &beneficiary, amount)
    }

    pub fn enable_refunds(env: Env, caller: Address) -> Result<(), SaleError> {
        refund_cap::enable_refunds(&env, &caller)
    }

    /// Release escrow to the wallet. Returns the amount moved.
    pub fn close_refunds(env: Env, caller: Address) -> Result<i128, SaleError> {
        refund_cap::close_refunds(&env, &caller)
    }

    pub fn refund_contribution(env: Env, caller: Address, index: u32) -> Result<(), SaleError> {
        refund_cap::refund_contribution(&env, &caller, index)
    }

    pub fn set_start_time(env: Env, caller: Address, start_time: u64) -> Result<(), SaleError> {
        ledger::set_start_time(&env, &caller, start_time)
    }

    pub fn set_end_time(env: Env, caller: Address, end_time: u64) -> Result<(), SaleError> {
        refund_cap::set_end_time(&env, &caller, end_time)
    }

    pub fn set_token_cap(env: Env, caller: Address, token_cap: i128) -> Result<(), SaleError> {
        refund_cap::set_token_cap(&env, &caller, token_cap)
    }

    pub fn set_individual_cap(
        env: Env,
        caller: Address,
        individual_cap: i128,
    ) -> Result<(), SaleError> {
        caps::set_individual_cap(&env, &caller, individual_cap)
    }

    pub fn set_refund_closing_time(
        env: Env,
        caller: Address,
        refund_closing_time: u64,
    ) -> Result<(), SaleError> {
        refund_cap::set_refund_closing_time(&env, &caller, refund_closing_time)
    }

    pub fn set_refund_closing_token_cap(
        env: Env,
        caller: Address,
        refund_closing_token_cap: i128,
    ) -> Result<(), SaleError> {
        refund_cap::set_refund_closing_token_cap(&env, &caller, refund_closing_token_cap)
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), SaleError> {
        ledger::pause(&env, &caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), SaleError> {
        ledger::unpause(&env, &caller)
    }

    pub fn has_ended(env: Env) -> Result<bool, SaleError> {
        caps::has_ended(&env)
    }

    pub fn transfer_token_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), SaleError> {
        access::transfer_token_ownership(&env, &caller, &new_owner)
    }

    // Views

    pub fn get_config(env: Env) -> Result<SaleConfig, SaleError> {
        storage::get_config(&env)
    }

    pub fn get_window(env: Env) -> Result<SaleWindow, SaleError> {
        storage::get_window(&env)
    }

    pub fn contribution_count(env: Env) -> u32 {
        storage::get_contribution_count(&env)
    }

    pub fn get_contribution(env: Env, index: u32) -> Result<Contribution, SaleError> {
        ledger::contribution(&env, index)
    }

    pub fn total_raised(env: Env) -> i128 {
        storage::get_total_raised(&env)
    }

    pub fn token_cap(env: Env) -> Result<i128, SaleError> {
        Ok(storage::get_caps(&env)?.token_cap)
    }

    pub fn individual_cap(env: Env) -> Result<i128, SaleError> {
        Ok(storage::get_caps(&env)?.individual_cap)
    }

    pub fn distributed_supply(env: Env) -> Result<i128, SaleError> {
        Ok(storage::get_caps(&env)?.distributed_supply)
    }

    pub fn allocated_to(env: Env, beneficiary: Address) -> i128 {
        storage::get_allocated(&env, &beneficiary)
    }

    pub fn vault_state(env: Env) -> VaultState {
        vault::state(&env)
    }

    pub fn deposit_of(env: Env, depositor: Address) -> i128 {
        storage::get_deposit(&env, &depositor)
    }

    pub fn vault_balance(env: Env) -> i128 {
        storage::get_vault_balance(&env)
    }

    pub fn refund_closing_time(env: Env) -> Result<u64, SaleError> {
        Ok(storage::get_refund_policy(&env)?.refund_closing_time)
    }

    pub fn refund_closing_token_cap(env: Env) -> Result<i128, SaleError> {
        Ok(storage::get_refund_policy(&env)?.refund_closing_token_cap)
    }
}
