use crate::storage::*;
use crate::types::*;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, symbol_short, token, Address, Env, Vec,
};
use token_sale::collaborators::is_approved;

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Time-locked token grants released to approved beneficiaries"
);

#[contract]
pub struct TokenVestingContract;

#[contractimpl]
impl TokenVestingContract {
    /// `token` is paid out of this contract's own balance, which must be funded separately.
    pub fn initialize(
        env: Env,
        operator: Address,
        token: Address,
        whitelisting: Address,
    ) -> Result<(), VestingError> {
        if is_initialized(&env) {
            return Err(VestingError::AlreadyInitialized);
        }
        operator.require_auth();

        set_config(
            &env,
            &VestingConfig {
                operator,
                token,
                whitelisting,
            },
        );
        Ok(())
    }

    /// Appends one grant per tuple. Existing grants are left untouched.
    pub fn add_vesting(
        env: Env,
        caller: Address,
        beneficiaries: Vec<Address>,
        amounts: Vec<i128>,
        release_times: Vec<u64>,
    ) -> Result<(), VestingError> {
        caller.require_auth();
        let config = get_config(&env)?;
        if caller != config.operator {
            return Err(VestingError::Unauthorized);
        }
        if beneficiaries.len() != amounts.len() || beneficiaries.len() != release_times.len() {
            return Err(VestingError::LengthMismatch);
        }

        for i in 0..beneficiaries.len() {
            let beneficiary = beneficiaries.get_unchecked(i);
            let amount = amounts.get_unchecked(i);
            let release_time = release_times.get_unchecked(i);
            if amount <= 0 {
                return Err(VestingError::InvalidAmount);
            }

            let mut grants = get_grants(&env, &beneficiary);
            grants.push_back(VestingGrant {
                beneficiary: beneficiary.clone(),
                amount,
                release_time,
                claimed: false,
            });
            set_grants(&env, &beneficiary, &grants);

            env.events().publish(
                (symbol_short!("vest_add"),),
                GrantAdded {
                    beneficiary,
                    amount,
                    release_time,
                },
            );
        }
        Ok(())
    }

    /// Settles every matured, unclaimed grant of `claimer` in one transfer.
    pub fn claim(env: Env, claimer: Address) -> Result<i128, VestingError> {
        claimer.require_auth();
        let config = get_config(&env)?;
        if !is_approved(&env, &config.whitelisting, &claimer) {
            return Err(VestingError::NotEligible);
        }

        let now = env.ledger().timestamp();
        let mut grants = get_grants(&env, &claimer);
        let mut total: i128 = 0;
        for i in 0..grants.len() {
            let mut grant = grants.get_unchecked(i);
            if grant.claimed || grant.release_time > now {
                continue;
            }
            total = total
                .checked_add(grant.amount)
                .ok_or(VestingError::Overflow)?;
            grant.claimed = true;
            grants.set(i, grant);
        }

        if total == 0 {
            return Err(VestingError::NothingToClaim);
        }
        set_grants(&env, &claimer, &grants);

        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &claimer,
            &total,
        );
        log!(&env, "vesting claimed", claimer, total);
        Ok(total)
    }

    pub fn grants_of(env: Env, beneficiary: Address) -> Vec<VestingGrant> {
        get_grants(&env, &beneficiary)
    }

    /// What `claim` would pay out right now, ignoring eligibility.
    pub fn claimable(env: Env, beneficiary: Address) -> Result<i128, VestingError> {
        let now = env.ledger().timestamp();
        let mut total: i128 = 0;
        for grant in get_grants(&env, &beneficiary).iter() {
            if !grant.claimed && grant.release_time <= now {
                total = total
                    .checked_add(grant.amount)
                    .ok_or(VestingError::Overflow)?;
            }
        }
        Ok(total)
    }

    pub fn get_config(env: Env) -> Result<VestingConfig, VestingError> {
        get_config(&env)
    }
}
