#![no_std]

//! Capability modules shared by the sale contracts.
//!
//! Each deployable sale composes the modules it needs: the contribution
//! ledger alone, or the ledger with the cap enforcer, the allocation engine,
//! the escrow vault and the refund-capped release rules. Functions operate on
//! the calling contract's storage.

pub mod access;
pub mod allocation;
pub mod caps;
pub mod collaborators;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod refund_cap;
pub mod storage;
pub mod types;
pub mod vault;


pub use errors::SaleError;
pub use types::*;
