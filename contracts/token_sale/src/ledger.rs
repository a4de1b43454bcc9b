//! Contribution ledger, sale window and pause switch.

use crate::access::{require_operator, require_valid_address};
use crate::errors::SaleError;
use crate::events::{self, ContributionRecorded};
use crate::storage::*;
use crate::types::*;
use crate::vault;
use soroban_sdk::{log, token, Address, Env};

pub fn init(env: &Env, operator: &Address, params: &SaleParams) -> Result<(), SaleError> {
    if is_initialized(env) {
        return Err(SaleError::AlreadyInitialized);
    }

    let now = get_ledger_timestamp(env);
    if params.start_time < now || params.start_time >= params.end_time {
        return Err(SaleError::InvalidOrdering);
    }
    require_valid_address(env, &params.wallet)?;

    set_config(
        env,
        &SaleConfig {
            operator: operator.clone(),
            wallet: params.wallet.clone(),
            payment_token: params.payment_token.clone(),
            token: params.token.clone(),
            whitelisting: params.whitelisting.clone(),
        },
    );
    set_window(
        env,
        &SaleWindow {
            start_time: params.start_time,
            end_time: params.end_time,
            paused: false,
        },
    );
    set_total_raised(env, 0);
    set_contribution_count(env, 0);
    Ok(())
}

/// Records a payment and forwards the funds along `route`.
/// Returns the index of the new contribution.
pub fn contribute(
    env: &Env,
    contributor: &Address,
    amount: i128,
    route: FundsRoute,
) -> Result<u32, SaleError> {
    let window = get_window(env)?;
    let now = get_ledger_timestamp(env);
    if now < window.start_time || now > window.end_time {
        return Err(SaleError::OutsideWindow);
    }
    if window.paused {
        return Err(SaleError::Paused);
    }
    if amount <= 0 {
        return Err(SaleError::ZeroValue);
    }
    require_valid_address(env, contributor)?;
    contributor.require_auth();

    let config = get_config(env)?;
    let index = get_contribution_count(env);
    let next_index = index.checked_add(1).ok_or(SaleError::Overflow)?;
    let total_raised = get_total_raised(env)
        .checked_add(amount)
        .ok_or(SaleError::Overflow)?;

    if route == FundsRoute::Vault {
        vault::deposit(env, contributor, amount)?;
    }

    set_contribution(
        env,
        &Contribution {
            index,
            contributor: contributor.clone(),
            amount,
            timestamp: now,
            allocated: false,
            refunded: false,
        },
    );
    set_contribution_count(env, next_index);
    set_total_raised(env, total_raised);

    let destination = match route {
        FundsRoute::Wallet => config.wallet,
        FundsRoute::Vault => env.current_contract_address(),
    };
    token::Client::new(env, &config.payment_token).transfer(contributor, &destination, &amount);

    log!(env, "contribution recorded", index, amount);
    events::contribution_recorded(
        env,
        ContributionRecorded {
            index,
            contributor: contributor.clone(),
            amount,
            timestamp: now,
        },
    );
    Ok(index)
}

pub fn set_start_time(env: &Env, caller: &Address, start_time: u64) -> Result<(), SaleError> {
    require_operator(env, caller)?;
    let mut window = get_window(env)?;
    let now = get_ledger_timestamp(env);

    if now >= window.start_time {
        return Err(SaleError::AlreadyStarted);
    }
    if start_time <= now || start_time >= window.end_time {
        return Err(SaleError::InvalidOrdering);
    }

    window.start_time = start_time;
    set_window(env, &window);
    events::start_time_set(env, start_time);
    Ok(())
}

pub fn set_end_time(env: &Env, caller: &Address, end_time: u64) -> Result<(), SaleError> {
    require_operator(env, caller)?;
    update_end_time(env, end_time)
}

pub(crate) fn update_end_time(env: &Env, end_time: u64) -> Result<(), SaleError> {
    let mut window = get_window(env)?;
    let now = get_ledger_timestamp(env);

    if now >= window.end_time {
        return Err(SaleError::AlreadyEnded);
    }
    if end_time <= now || end_time <= window.start_time {
        return Err(SaleError::InvalidOrdering);
    }

    window.end_time = end_time;
    set_window(env, &window);
    events::end_time_set(env, end_time);
    Ok(())
}

pub fn pause(env: &Env, caller: &Address) -> Result<(), SaleError> {
    require_operator(env, caller)?;
    let mut window = get_window(env)?;
    window.paused = true;
    set_window(env, &window);
    events::paused(env);
    Ok(())
}

pub fn unpause(env: &Env, caller: &Address) -> Result<(), SaleError> {
    require_operator(env, caller)?;
    let mut window = get_window(env)?;
    window.paused = false;
    set_window(env, &window);
    events::unpaused(env);
    Ok(())
}

/// True once the window has closed. Capped variants widen this in `caps::has_ended`.
pub fn has_ended(env: &Env) -> Result<bool, SaleError> {
    let window = get_window(env)?;
    Ok(get_ledger_timestamp(env) > window.end_time)
}

pub fn contribution(env: &Env, index: u32) -> Result<Contribution, SaleError> {
    get_contribution(env, index).ok_or(SaleError::ContributionNotFound)
}
