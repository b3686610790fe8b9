use soroban_sdk::{contracttype, Address};

/// Debt position as stored by the ledger.
/// `debt` is denominated in `base_asset`, `collateral` in `collateral_asset`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct Vault {
    pub owner: Address,
    pub base_asset: Address,
    pub collateral_asset: Address,
    pub debt: i128,
    pub collateral: i128,
}
