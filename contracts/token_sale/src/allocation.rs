//! Allocation engine: turns recorded contributions into minted tokens.
//!
//! Payment acceptance and issuance are decoupled, so pricing and eligibility
//! review can happen between the two. The operator supplies the token amount.

use crate::access::{require_operator, require_valid_address};
use crate::caps;
use crate::collaborators::{is_approved, MintableTokenClient};
use crate::errors::SaleError;
use crate::events::{self, TokenPurchase};
use crate::ledger;
use crate::storage::set_contribution;
use crate::types::SaleConfig;
use soroban_sdk::{log, Address, Env};

pub fn allocate_tokens(
    env: &Env,
    caller: &Address,
    index: u32,
    amount: i128,
) -> Result<(), SaleError> {
    let config = require_operator(env, caller)?;
    if !caps::has_ended(env)? {
        return Err(SaleError::NotEnded);
    }
    if amount <= 0 {
        return Err(SaleError::ZeroValue);
    }

    let mut contribution = ledger::contribution(env, index)?;
    if contribution.allocated {
        return Err(SaleError::AlreadyAllocated);
    }
    if contribution.refunded {
        return Err(SaleError::AlreadyRefunded);
    }
    if !is_approved(env, &config.whitelisting, &contribution.contributor) {
        return Err(SaleError::NotEligible);
    }

    caps::check_and_reserve(env, &contribution.contributor, amount)?;
    contribution.allocated = true;
    set_contribution(env, &contribution);

    log!(env, "contribution allocated", index, amount);
    mint_and_record(env, &config, caller, &contribution.contributor, contribution.amount, amount);
    Ok(())
}

/// Credits `beneficiary` directly, with no backing contribution.
pub fn owner_assigned_tokens(
    env: &Env,
    caller: &Address,
    beneficiary: &Address,
    amount: i128,
) -> Result<(), SaleError> {
    let config = require_operator(env, caller)?;
    if amount <= 0 {
        return Err(SaleError::ZeroValue);
    }
    require_valid_address(env, beneficiary)?;
    if !is_approved(env, &config.whitelisting, beneficiary) {
        return Err(SaleError::NotEligible);
    }

    caps::check_and_reserve(env, beneficiary, amount)?;
    mint_and_record(env, &config, caller, beneficiary, 0, amount);
    Ok(())
}

fn mint_and_record(
    env: &Env,
    config: &SaleConfig,
    purchaser: &Address,
    beneficiary: &Address,
    value: i128,
    amount: i128,
) {
    MintableTokenClient::new(env, &config.token).mint(beneficiary, &amount);
    events::token_purchase(
        env,
        TokenPurchase {
            purchaser: purchaser.clone(),
            beneficiary: beneficiary.clone(),
            value,
            amount,
        },
    );
}
