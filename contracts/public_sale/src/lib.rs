#![no_std]

mod contract;


pub use contract::{PublicSaleContract, PublicSaleContractClient};
pub use token_sale::{
    CapParams, Contribution, RefundParams, SaleConfig, SaleError, SaleParams, SaleWindow,
    VaultState,
};
