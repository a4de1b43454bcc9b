//! End-to-end scenarios running the sale variants, the sale token, the
//! approval list and the vesting ledger together.
#![cfg(test)]

mod fixtures;
mod scenarios;
