#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address,
    Env, Vec,
};

contractmeta!(
    key = "Description",
    val = "Investor approval list for regulated token sales"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WhitelistError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestorEvent {
    pub investor: Address,
}

// Storage keys
#[contracttype]
pub enum DataKey {
    Owner,
    Approved(Address),
}

#[contract]
pub struct WhitelistingContract;

#[contractimpl]
impl WhitelistingContract {
    pub fn initialize(env: Env, owner: Address) -> Result<(), WhitelistError> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(WhitelistError::AlreadyInitialized);
        }
        owner.require_auth();
        env.storage().instance().set(&DataKey::Owner, &owner);
        Ok(())
    }

    pub fn approve_investor(
        env: Env,
        caller: Address,
        investor: Address,
    ) -> Result<(), WhitelistError> {
        require_owner(&env, &caller)?;
        set_approval(&env, &investor, true);
        Ok(())
    }

    pub fn approve_investors_in_bulk(
        env: Env,
        caller: Address,
        investors: Vec<Address>,
    ) -> Result<(), WhitelistError> {
        require_owner(&env, &caller)?;
        for investor in investors.iter() {
            set_approval(&env, &investor, true);
        }
        Ok(())
    }

    pub fn disapprove_investor(
        env: Env,
        caller: Address,
        investor: Address,
    ) -> Result<(), WhitelistError> {
        require_owner(&env, &caller)?;
        set_approval(&env, &investor, false);
        Ok(())
    }

    pub fn disapprove_investors_in_bulk(
        env: Env,
        caller: Address,
        investors: Vec<Address>,
    ) -> Result<(), WhitelistError> {
        require_owner(&env, &caller)?;
        for investor in investors.iter() {
            set_approval(&env, &investor, false);
        }
        Ok(())
    }

    /// Unknown addresses are not approved.
    pub fn is_investor_approved(env: Env, investor: Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Approved(investor))
            .unwrap_or(false)
    }

    pub fn owner(env: Env) -> Result<Address, WhitelistError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(WhitelistError::NotInitialized)
    }
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), WhitelistError> {
    caller.require_auth();
    let owner: Address = env
        .storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(WhitelistError::NotInitialized)?;
    if *caller != owner {
        return Err(WhitelistError::Unauthorized);
    }
    Ok(())
}

// Emits only when the stored flag actually flips.
fn set_approval(env: &Env, investor: &Address, approved: bool) {
    let key = DataKey::Approved(investor.clone());
    let current: bool = env.storage().persistent().get(&key).unwrap_or(false);
    if current == approved {
        return;
    }

    env.storage().persistent().set(&key, &approved);
    let topic = if approved {
        symbol_short!("approved")
    } else {
        symbol_short!("disappr")
    };
    env.events().publish(
        (topic,),
        InvestorEvent {
            investor: investor.clone(),
        },
    );
}
