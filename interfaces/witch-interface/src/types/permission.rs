use soroban_sdk::contracttype;

#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Permission {
    SetAuctionParams,
    Permission,
}
