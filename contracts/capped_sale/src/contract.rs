use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env};
use token_sale::{access, allocation, caps, ledger, storage};
use token_sale::{
    CapParams, Contribution, FundsRoute, SaleConfig, SaleError, SaleParams, SaleWindow,
};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Capped sale with deferred token allocation to approved investors"
);

#[contract]
pub struct CappedSaleContract;

#[contractimpl]
impl CappedSaleContract {
    /// Initialize the sale and its caps. The token must still have room below `token_cap`.
    pub fn initialize(
        env: Env,
        operator: Address,
        params: SaleParams,
        cap_params: CapParams,
    ) -> Result<(), SaleError> {
        operator.require_auth();
        ledger::init(&env, &operator, &params)?;
        caps::init(&env, &cap_params)
    }

    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<u32, SaleError> {
        ledger::contribute(&env, &contributor, amount, FundsRoute::Wallet)
    }

    /// Mint `amount` tokens against contribution `index` once the sale has ended.
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

    pub fn set_start_time(env: Env, caller: Address, start_time: u64) -> Result<(), SaleError> {
        ledger::set_start_time(&env, &caller, start_time)
    }

    pub fn set_end_time(env: Env, caller: Address, end_time: u64) -> Result<(), SaleError> {
        ledger::set_end_time(&env, &caller, end_time)
    }

    pub fn set_token_cap(env: Env, caller: Address, token_cap: i128) -> Result<(), SaleError> {
        caps::set_token_cap(&env, &caller, token_cap)
    }

    pub fn set_individual_cap(
        env: Env,
        caller: Address,
        individual_cap: i128,
    ) -> Result<(), SaleError> {
        caps::set_individual_cap(&env, &caller, individual_cap)
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), SaleError> {
        ledger::pause(&env, &caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), SaleError> {
        ledger::unpause(&env, &caller)
    }

    /// Window closed or token cap fully distributed.
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
}
