//! Refund-capped allocation: the vault is released to the wallet only if
//! enough tokens were allocated by `refund_closing_time`. The threshold counts
//! tokens allocated, never payment received.

use crate::access::require_operator;
use crate::caps;
use crate::errors::SaleError;
use crate::events;
use crate::ledger;
use crate::storage::*;
use crate::types::*;
use crate::vault;
use soroban_sdk::{Address, Env};

/// Must run after `ledger::init` and `caps::init`.
pub fn init(env: &Env, params: &RefundParams) -> Result<(), SaleError> {
    let window = get_window(env)?;
    let caps = get_caps(env)?;
    if params.refund_closing_time <= window.end_time {
        return Err(SaleError::InvalidDeadline);
    }
    if params.refund_closing_token_cap < 0 || params.refund_closing_token_cap > caps.token_cap {
        return Err(SaleError::InvalidCap);
    }

    set_refund_policy(
        env,
        &RefundPolicy {
            refund_closing_time: params.refund_closing_time,
            refund_closing_token_cap: params.refund_closing_token_cap,
        },
    );
    set_vault_state(env, VaultState::Active);
    set_vault_balance(env, 0);
    Ok(())
}

pub fn enable_refunds(env: &Env, caller: &Address) -> Result<(), SaleError> {
    require_operator(env, caller)?;
    if !caps::has_ended(env)? {
        return Err(SaleError::NotEnded);
    }
    vault::enable_refunds(env)
}

/// Releases the vault to the wallet once the threshold was met by the deadline.
pub fn close_refunds(env: &Env, caller: &Address) -> Result<i128, SaleError> {
    require_operator(env, caller)?;
    let policy = get_refund_policy(env)?;
    if get_ledger_timestamp(env) <= policy.refund_closing_time {
        return Err(SaleError::TooEarly);
    }

    let caps = get_caps(env)?;
    if caps.distributed_supply < policy.refund_closing_token_cap {
        return Err(SaleError::ThresholdNotMet);
    }
    vault::close(env)
}

/// Returns one contribution's funds to its contributor.
///
/// Allocated contributions are never refunded, and a `Refunding` vault can no
/// longer be closed, so the deposits backing them stay in the vault for good.
pub fn refund_contribution(env: &Env, caller: &Address, index: u32) -> Result<(), SaleError> {
    require_operator(env, caller)?;
    let mut contribution = ledger::contribution(env, index)?;
    if contribution.allocated {
        return Err(SaleError::AlreadyAllocated);
    }
    if contribution.refunded {
        return Err(SaleError::AlreadyRefunded);
    }
    if vault::state(env) != VaultState::Refunding {
        return Err(SaleError::VaultNotRefunding);
    }

    contribution.refunded = true;
    set_contribution(env, &contribution);
    vault::refund(env, &contribution.contributor, contribution.amount)
}

pub fn set_refund_closing_time(
    env: &Env,
    caller: &Address,
    refund_closing_time: u64,
) -> Result<(), SaleError> {
    require_operator(env, caller)?;
    let mut policy = get_refund_policy(env)?;
    let window = get_window(env)?;
    let now = get_ledger_timestamp(env);

    if now > policy.refund_closing_time {
        return Err(SaleError::DeadlinePassed);
    }
    if refund_closing_time <= now || refund_closing_time <= window.end_time {
        return Err(SaleError::InvalidDeadline);
    }

    policy.refund_closing_time = refund_closing_time;
    set_refund_policy(env, &policy);
    events::refund_closing_time_set(env, refund_closing_time);
    Ok(())
}

pub fn set_refund_closing_token_cap(
    env: &Env,
    caller: &Address,
    refund_closing_token_cap: i128,
) -> Result<(), SaleError> {
    require_operator(env, caller)?;
    let mut policy = get_refund_policy(env)?;
    let caps = get_caps(env)?;

    if get_ledger_timestamp(env) > policy.refund_closing_time {
        return Err(SaleError::DeadlinePassed);
    }
    if refund_closing_token_cap < 0 || refund_closing_token_cap > caps.token_cap {
        return Err(SaleError::InvalidCap);
    }

    policy.refund_closing_token_cap = refund_closing_token_cap;
    set_refund_policy(env, &policy);
    events::refund_closing_token_cap_set(env, refund_closing_token_cap);
    Ok(())
}

/// Keeps `refund_closing_token_cap <= token_cap` when the token cap moves.
pub fn set_token_cap(env: &Env, caller: &Address, token_cap: i128) -> Result<(), SaleError> {
    require_operator(env, caller)?;
    let policy = get_refund_policy(env)?;
    if token_cap < policy.refund_closing_token_cap {
        return Err(SaleError::InvalidCap);
    }
    caps::update_token_cap(env, token_cap)
}

/// Keeps `end_time < refund_closing_time` when the window moves.
pub fn set_end_time(env: &Env, caller: &Address, end_time: u64) -> Result<(), SaleError> {
    require_operator(env, caller)?;
    let policy = get_refund_policy(env)?;
    let window = get_window(env)?;
    if get_ledger_timestamp(env) >= window.end_time {
        return Err(SaleError::AlreadyEnded);
    }
    if end_time >= policy.refund_closing_time {
        return Err(SaleError::InvalidOrdering);
    }
    ledger::update_end_time(env, end_time)
}
