use soroban_sdk::{contracttype, Address};

/// Active liquidation auction of a single vault.
/// `owner` is the vault owner at the moment of seizure, the vault is given back
/// to it once the whole debt is repaid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct Auction {
    pub start: u64,
    pub owner: Address,
}
