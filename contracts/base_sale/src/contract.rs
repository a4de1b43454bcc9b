use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env};
use token_sale::{access, ledger, storage};
use token_sale::{Contribution, FundsRoute, SaleConfig, SaleError, SaleParams, SaleWindow};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Time-boxed sale recording contributions and forwarding funds to the wallet"
);

#[contract]
pub struct BaseSaleContract;

#[contractimpl]
impl BaseSaleContract {
    /// Initialize the sale; `operator` becomes the only privileged caller.
    pub fn initialize(env: Env, operator: Address, params: SaleParams) -> Result<(), SaleError> {
        operator.require_auth();
        ledger::init(&env, &operator, &params)
    }

    /// Record a contribution; the payment goes straight to the wallet.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<u32, SaleError> {
        ledger::contribute(&env, &contributor, amount, FundsRoute::Wallet)
    }

    pub fn set_start_time(env: Env, caller: Address, start_time: u64) -> Result<(), SaleError> {
        ledger::set_start_time(&env, &caller, start_time)
    }

    pub fn set_end_time(env: Env, caller: Address, end_time: u64) -> Result<(), SaleError> {
        ledger::set_end_time(&env, &caller, end_time)
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), SaleError> {
        ledger::pause(&env, &caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), SaleError> {
        ledger::unpause(&env, &caller)
    }

    pub fn has_ended(env: Env) -> Result<bool, SaleError> {
        ledger::has_ended(&env)
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
}
