//! Cap enforcer: global token cap and per-beneficiary cap.
//!
//! `distributed_supply <= token_cap` and `allocated(b) <= individual_cap` hold
//! before and after every call; both are checked before any counter moves.

use crate::access::require_operator;
use crate::collaborators::MintableTokenClient;
use crate::errors::SaleError;
use crate::events;
use crate::ledger;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{Address, Env};

/// Must run after `ledger::init`, which stores the token address.
pub fn init(env: &Env, params: &CapParams) -> Result<(), SaleError> {
    if params.token_cap <= 0 || params.individual_cap <= 0 {
        return Err(SaleError::InvalidCap);
    }

    let config = get_config(env)?;
    let existing_supply = MintableTokenClient::new(env, &config.token).total_supply();
    if existing_supply >= params.token_cap {
        return Err(SaleError::CapAlreadyReached);
    }

    set_caps(
        env,
        &Caps {
            token_cap: params.token_cap,
            individual_cap: params.individual_cap,
            distributed_supply: 0,
        },
    );
    Ok(())
}

/// Reserves `amount` for `beneficiary` against both caps.
pub fn check_and_reserve(env: &Env, beneficiary: &Address, amount: i128) -> Result<(), SaleError> {
    let mut caps = get_caps(env)?;

    let distributed = caps
        .distributed_supply
        .checked_add(amount)
        .ok_or(SaleError::Overflow)?;
    if distributed > caps.token_cap {
        return Err(SaleError::TokenCapExceeded);
    }

    let allocated = get_allocated(env, beneficiary)
        .checked_add(amount)
        .ok_or(SaleError::Overflow)?;
    if allocated > caps.individual_cap {
        return Err(SaleError::IndividualCapExceeded);
    }

    caps.distributed_supply = distributed;
    set_caps(env, &caps);
    set_allocated(env, beneficiary, allocated);
    Ok(())
}

/// Window closed, or nothing left to distribute.
pub fn has_ended(env: &Env) -> Result<bool, SaleError> {
    if ledger::has_ended(env)? {
        return Ok(true);
    }
    let caps = get_caps(env)?;
    Ok(caps.distributed_supply >= caps.token_cap)
}

pub fn set_individual_cap(env: &Env, caller: &Address, individual_cap: i128) -> Result<(), SaleError> {
    require_operator(env, caller)?;
    if individual_cap <= 0 {
        return Err(SaleError::InvalidCap);
    }

    let mut caps = get_caps(env)?;
    caps.individual_cap = individual_cap;
    set_caps(env, &caps);
    events::caps_set(env, caps.token_cap, caps.individual_cap);
    Ok(())
}

pub fn set_token_cap(env: &Env, caller: &Address, token_cap: i128) -> Result<(), SaleError> {
    require_operator(env, caller)?;
    update_token_cap(env, token_cap)
}

/// Lowering below what is already distributed is rejected.
pub(crate) fn update_token_cap(env: &Env, token_cap: i128) -> Result<(), SaleError> {
    let mut caps = get_caps(env)?;
    if token_cap <= 0 || token_cap < caps.distributed_supply {
        return Err(SaleError::InvalidCap);
    }

    caps.token_cap = token_cap;
    set_caps(env, &caps);
    events::caps_set(env, caps.token_cap, caps.individual_cap);
    Ok(())
}
