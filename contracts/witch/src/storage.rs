use soroban_sdk::{contracttype, vec, Address, BytesN, Env, Vec};
use witch_interface::types::auction::Auction;
use witch_interface::types::error::Error;
use witch_interface::types::permission::Permission;

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_AUCTION_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_AUCTION_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Cauldron,
    DebtSink,
    InitialProportion,
    AuctionTime,
    Auction(BytesN<12>),
    Permission(Permission),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn write_cauldron(env: &Env, cauldron: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Cauldron, cauldron);
}

pub fn read_cauldron(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Cauldron)
        .ok_or(Error::Uninitialized)
}

pub fn write_debt_sink(env: &Env, debt_sink: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::DebtSink, debt_sink);
}

pub fn read_debt_sink(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::DebtSink)
        .ok_or(Error::Uninitialized)
}

pub fn write_initial_proportion(env: &Env, value: i128) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::InitialProportion, &value);
}

pub fn read_initial_proportion(env: &Env) -> Result<i128, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::InitialProportion)
        .ok_or(Error::Uninitialized)
}

pub fn write_auction_time(env: &Env, value: u64) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::AuctionTime, &value);
}

pub fn read_auction_time(env: &Env) -> Result<u64, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::AuctionTime)
        .ok_or(Error::Uninitialized)
}

pub fn read_auction(env: &Env, vault_id: &BytesN<12>) -> Option<Auction> {
    let key = DataKey::Auction(vault_id.clone());
    let auction = env.storage().persistent().get(&key);

    if auction.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_AUCTION_BUMP_LEDGERS,
            HIGH_AUCTION_BUMP_LEDGERS,
        );
    }

    auction
}

pub fn has_auction(env: &Env, vault_id: &BytesN<12>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Auction(vault_id.clone()))
}

pub fn write_auction(env: &Env, vault_id: &BytesN<12>, auction: &Auction) {
    let key = DataKey::Auction(vault_id.clone());
    env.storage().persistent().set(&key, auction);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_AUCTION_BUMP_LEDGERS,
        HIGH_AUCTION_BUMP_LEDGERS,
    );
}

pub fn remove_auction(env: &Env, vault_id: &BytesN<12>) {
    env.storage()
        .persistent()
        .remove(&DataKey::Auction(vault_id.clone()));
}

pub fn read_permission_owners(env: &Env, permission: &Permission) -> Vec<Address> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Permission(permission.clone()))
        .unwrap_or(vec![env])
}

pub fn write_permission_owners(env: &Env, owners: &Vec<Address>, permission: &Permission) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::Permission(permission.clone()), owners);
}

pub fn has_permission_owners(env: &Env, permission: &Permission) -> bool {
    bump_instance(env);

    env.storage()
        .instance()
        .has(&DataKey::Permission(permission.clone()))
}
