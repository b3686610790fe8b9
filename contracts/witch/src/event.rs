use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol};
use witch_interface::types::auction::Auction;

pub(crate) fn initialized(
    e: &Env,
    permission_owner: &Address,
    cauldron: &Address,
    debt_sink: &Address,
) {
    let topics = (Symbol::new(e, "initialize"), permission_owner);
    e.events().publish(topics, (cauldron, debt_sink));
}

pub(crate) fn auction_started(e: &Env, vault_id: &BytesN<12>, auction: &Auction) {
    let topics = (Symbol::new(e, "auction_started"), vault_id.clone());
    e.events().publish(topics, (auction.start, auction.owner.clone()));
}

pub(crate) fn bought(
    e: &Env,
    vault_id: &BytesN<12>,
    buyer: &Address,
    collateral_out: i128,
    debt_paid: i128,
) {
    let topics = (symbol_short!("bought"), vault_id.clone(), buyer.clone());
    e.events().publish(topics, (collateral_out, debt_paid));
}

pub(crate) fn initial_proportion_set(e: &Env, value: i128) {
    let topics = (Symbol::new(e, "initial_proportion_set"),);
    e.events().publish(topics, value);
}

pub(crate) fn auction_time_set(e: &Env, value: u64) {
    let topics = (Symbol::new(e, "auction_time_set"),);
    e.events().publish(topics, value);
}
