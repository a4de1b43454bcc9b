#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address,
    Env, String,
};

contractmeta!(
    key = "Description",
    val = "Sale Token - mintable token handed to a sale contract for issuance"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InsufficientBalance = 5,
    MaxSupplyExceeded = 6,
    InvalidAddress = 7,
}

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

#[contracttype]
pub enum DataKey {
    Metadata,
    Owner,
    MaxSupply,
    TotalSupply,
    Balance(Address),
}

#[contract]
pub struct SaleTokenContract;

#[contractimpl]
impl SaleTokenContract {
    pub fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        decimal: u32,
        max_supply: i128,
    ) -> Result<(), TokenError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(TokenError::AlreadyInitialized);
        }
        if max_supply <= 0 {
            return Err(TokenError::InvalidAmount);
        }
        owner.require_auth();

        let metadata = TokenMetadata {
            decimal,
            name,
            symbol,
        };
        env.storage().instance().set(&DataKey::Metadata, &metadata);
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::MaxSupply, &max_supply);
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);
        Ok(())
    }

    /// Owner only. Called by a sale contract once it holds ownership.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), TokenError> {
        let owner = Self::owner(env.clone())?;
        owner.require_auth();
        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let supply = Self::total_supply(env.clone())
            .checked_add(amount)
            .ok_or(TokenError::MaxSupplyExceeded)?;
        if supply > Self::max_supply(env.clone())? {
            return Err(TokenError::MaxSupplyExceeded);
        }

        let balance = read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(TokenError::MaxSupplyExceeded)?;
        write_balance(&env, &to, balance);
        env.storage().instance().set(&DataKey::TotalSupply, &supply);

        env.events().publish((symbol_short!("mint"), to), amount);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }

        let balance = read_balance(&env, &from);
        if balance < amount {
            return Err(TokenError::InsufficientBalance);
        }
        write_balance(&env, &from, balance - amount);
        let supply = Self::total_supply(env.clone()) - amount;
        env.storage().instance().set(&DataKey::TotalSupply, &supply);

        env.events().publish((symbol_short!("burn"), from), amount);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        if amount <= 0 {
            return Err(TokenError::InvalidAmount);
        }
        if to == env.current_contract_address() {
            return Err(TokenError::InvalidAddress);
        }

        let from_balance = read_balance(&env, &from);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance);
        }
        write_balance(&env, &from, from_balance - amount);
        let to_balance = read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(TokenError::InvalidAmount)?;
        write_balance(&env, &to, to_balance);

        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn max_supply(env: Env) -> Result<i128, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::MaxSupply)
            .ok_or(TokenError::NotInitialized)
    }

    pub fn owner(env: Env) -> Result<Address, TokenError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(TokenError::NotInitialized)
    }

    /// Hands minting authority to `new_owner`, typically a sale contract.
    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), TokenError> {
        let owner = Self::owner(env.clone())?;
        owner.require_auth();
        if new_owner == env.current_contract_address() {
            return Err(TokenError::InvalidAddress);
        }

        env.storage().instance().set(&DataKey::Owner, &new_owner);
        env.events().publish(
            (symbol_short!("own_xfer"),),
            OwnershipTransferred {
                previous_owner: owner,
                new_owner,
            },
        );
        Ok(())
    }

    pub fn set_token_information(
        env: Env,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError> {
        let owner = Self::owner(env.clone())?;
        owner.require_auth();

        let mut metadata = read_metadata(&env)?;
        metadata.name = name;
        metadata.symbol = symbol;
        env.storage().instance().set(&DataKey::Metadata, &metadata);
        Ok(())
    }

    pub fn name(env: Env) -> Result<String, TokenError> {
        Ok(read_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, TokenError> {
        Ok(read_metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, TokenError> {
        Ok(read_metadata(&env)?.decimal)
    }
}

fn read_metadata(env: &Env) -> Result<TokenMetadata, TokenError> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(TokenError::NotInitialized)
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(id.clone()), &amount);
}
