use crate::collaborators::MintableTokenClient;
use crate::errors::SaleError;
use crate::events::{self, TokenOwnershipTransferred};
use crate::storage::get_config;
use crate::types::SaleConfig;
use soroban_sdk::{Address, Env};

/// Authenticates `caller` and checks it is the configured operator.
pub fn require_operator(env: &Env, caller: &Address) -> Result<SaleConfig, SaleError> {
    caller.require_auth();
    let config = get_config(env)?;
    if *caller != config.operator {
        return Err(SaleError::Unauthorized);
    }
    Ok(config)
}

/// The sale contract's own address stands in for the null address: anything
/// sent there can never be moved again.
pub fn require_valid_address(env: &Env, address: &Address) -> Result<(), SaleError> {
    if *address == env.current_contract_address() {
        return Err(SaleError::InvalidAddress);
    }
    Ok(())
}

/// Hands minting authority over the sale token to `new_owner`.
pub fn transfer_token_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), SaleError> {
    let config = require_operator(env, caller)?;
    require_valid_address(env, new_owner)?;

    MintableTokenClient::new(env, &config.token).transfer_ownership(new_owner);
    events::token_ownership_transferred(
        env,
        TokenOwnershipTransferred {
            previous_owner: caller.clone(),
            new_owner: new_owner.clone(),
        },
    );
    Ok(())
}
