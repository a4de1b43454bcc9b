//! Narrow interfaces to the contracts the sale depends on but does not own.

use soroban_sdk::{contractclient, Address, Env};

/// Approval list gating who may receive allocated or vested tokens.
#[contractclient(name = "EligibilityClient")]
pub trait Eligibility {
    fn is_investor_approved(env: Env, investor: Address) -> bool;
}

/// Token whose minting authority has been handed to the sale contract.
#[contractclient(name = "MintableTokenClient")]
pub trait MintableToken {
    fn mint(env: Env, to: Address, amount: i128);
    fn total_supply(env: Env) -> i128;
    fn owner(env: Env) -> Address;
    fn transfer_ownership(env: Env, new_owner: Address);
}

pub fn is_approved(env: &Env, whitelisting: &Address, investor: &Address) -> bool {
    EligibilityClient::new(env, whitelisting).is_investor_approved(investor)
}
