#![no_std]

mod contract;
mod storage;
mod types;


pub use contract::{TokenVestingContract, TokenVestingContractClient};
pub use types::{GrantAdded, VestingConfig, VestingError, VestingGrant};
