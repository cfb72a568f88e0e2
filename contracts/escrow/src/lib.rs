#![no_std]

mod access;
pub mod entities;
pub mod errors;
mod escrow_contract;
mod events;
mod fees;
mod registry;
mod store;

pub use access::{Coordinator, StoredOwner};
pub use escrow_contract::{EscrowCustodyContract, EscrowCustodyContractClient};
pub use fees::split_share;
