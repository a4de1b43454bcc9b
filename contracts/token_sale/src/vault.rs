//! Escrow vault holding contributions in the sale contract's own balance.
//!
//! `Active -> Refunding` and `Active -> Closed` are the only transitions and
//! exclude each other. Callers are responsible for operator checks.

use crate::errors::SaleError;
use crate::events::{self, Refunded, VaultClosed};
use crate::storage::*;
use crate::types::VaultState;
use soroban_sdk::{log, token, Address, Env};

pub fn state(env: &Env) -> VaultState {
    get_vault_state(env)
}

pub fn deposit(env: &Env, from: &Address, amount: i128) -> Result<(), SaleError> {
    if get_vault_state(env) != VaultState::Active {
        return Err(SaleError::VaultNotActive);
    }

    let deposited = get_deposit(env, from)
        .checked_add(amount)
        .ok_or(SaleError::Overflow)?;
    let balance = get_vault_balance(env)
        .checked_add(amount)
        .ok_or(SaleError::Overflow)?;

    set_deposit(env, from, deposited);
    set_vault_balance(env, balance);
    Ok(())
}

pub fn enable_refunds(env: &Env) -> Result<(), SaleError> {
    if get_vault_state(env) != VaultState::Active {
        return Err(SaleError::VaultNotActive);
    }

    set_vault_state(env, VaultState::Refunding);
    log!(env, "vault refunding");
    events::refunds_enabled(env);
    Ok(())
}

/// Returns `amount` of `beneficiary`'s deposit to them.
pub fn refund(env: &Env, beneficiary: &Address, amount: i128) -> Result<(), SaleError> {
    if get_vault_state(env) != VaultState::Refunding {
        return Err(SaleError::VaultNotRefunding);
    }
    if amount <= 0 {
        return Err(SaleError::ZeroValue);
    }

    let deposited = get_deposit(env, beneficiary);
    if deposited < amount {
        return Err(SaleError::InsufficientDeposit);
    }
    let balance = get_vault_balance(env)
        .checked_sub(amount)
        .ok_or(SaleError::Overflow)?;

    set_deposit(env, beneficiary, deposited - amount);
    set_vault_balance(env, balance);

    let config = get_config(env)?;
    token::Client::new(env, &config.payment_token).transfer(
        &env.current_contract_address(),
        beneficiary,
        &amount,
    );

    events::refunded(
        env,
        Refunded {
            beneficiary: beneficiary.clone(),
            amount,
        },
    );
    Ok(())
}

/// Releases the whole balance to the wallet. Returns the amount moved.
pub fn close(env: &Env) -> Result<i128, SaleError> {
    if get_vault_state(env) != VaultState::Active {
        return Err(SaleError::VaultNotActive);
    }

    let config = get_config(env)?;
    let balance = get_vault_balance(env);
    set_vault_state(env, VaultState::Closed);
    set_vault_balance(env, 0);

    if balance > 0 {
        token::Client::new(env, &config.payment_token).transfer(
            &env.current_contract_address(),
            &config.wallet,
            &balance,
        );
    }

    log!(env, "vault closed", balance);
    events::vault_closed(
        env,
        VaultClosed {
            wallet: config.wallet,
            amount: balance,
        },
    );
    Ok(balance)
}
