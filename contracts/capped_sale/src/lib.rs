#![no_std]

mod contract;


pub use contract::{CappedSaleContract, CappedSaleContractClient};
pub use token_sale::{CapParams, Contribution, SaleConfig, SaleError, SaleParams, SaleWindow};
