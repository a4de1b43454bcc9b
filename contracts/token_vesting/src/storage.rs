use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<VestingConfig, VestingError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(VestingError::NotInitialized)
}

pub fn set_config(env: &Env, config: &VestingConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_grants(env: &Env, beneficiary: &Address) -> Vec<VestingGrant> {
    env.storage()
        .persistent()
        .get(&DataKey::Grants(beneficiary.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn set_grants(env: &Env, beneficiary: &Address, grants: &Vec<VestingGrant>) {
    env.storage()
        .persistent()
        .set(&DataKey::Grants(beneficiary.clone()), grants);
}
