use cauldron_interface::types::vault::Vault;
use common::WAD;
use soroban_sdk::{contracttype, Address, BytesN, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Witch,
    Vault(BytesN<12>),
    Auction(BytesN<12>),
    Spot(Address),
    Ratio(Address),
}

pub fn has_witch(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Witch)
}

pub fn write_witch(env: &Env, witch: &Address) {
    env.storage().instance().set(&DataKey::Witch, witch);
}

pub fn read_witch(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Witch)
}

pub fn read_vault(env: &Env, vault_id: &BytesN<12>) -> Option<Vault> {
    env.storage()
        .persistent()
        .get(&DataKey::Vault(vault_id.clone()))
}

pub fn write_vault(env: &Env, vault_id: &BytesN<12>, vault: &Vault) {
    env.storage()
        .persistent()
        .set(&DataKey::Vault(vault_id.clone()), vault);
}

pub fn read_auction(env: &Env, vault_id: &BytesN<12>) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::Auction(vault_id.clone()))
}

pub fn write_auction(env: &Env, vault_id: &BytesN<12>, timestamp: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::Auction(vault_id.clone()), &timestamp);
}

pub fn remove_auction(env: &Env, vault_id: &BytesN<12>) {
    env.storage()
        .persistent()
        .remove(&DataKey::Auction(vault_id.clone()));
}

/// Collateral price in base asset, WAD. Defaults to one
pub fn read_spot(env: &Env, collateral_asset: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Spot(collateral_asset.clone()))
        .unwrap_or(WAD)
}

pub fn write_spot(env: &Env, collateral_asset: &Address, spot: i128) {
    env.storage()
        .instance()
        .set(&DataKey::Spot(collateral_asset.clone()), &spot);
}

/// Required collateralization ratio, WAD. Defaults to one
pub fn read_ratio(env: &Env, collateral_asset: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Ratio(collateral_asset.clone()))
        .unwrap_or(WAD)
}

pub fn write_ratio(env: &Env, collateral_asset: &Address, ratio: i128) {
    env.storage()
        .instance()
        .set(&DataKey::Ratio(collateral_asset.clone()), &ratio);
}
