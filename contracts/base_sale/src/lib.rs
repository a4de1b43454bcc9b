#![no_std]

mod contract;


pub use contract::{BaseSaleContract, BaseSaleContractClient};
pub use token_sale::{Contribution, SaleConfig, SaleError, SaleParams, SaleWindow};
