use soroban_sdk::{BytesN, Env};
use witch_interface::types::error::Error;

use crate::storage::{read_auction, read_auction_time, read_initial_proportion};

use super::utils::price_decay::price_decay;

pub fn proportion(env: &Env, vault_id: &BytesN<12>) -> Result<Option<i128>, Error> {
    let auction = match read_auction(env, vault_id) {
        Some(auction) => auction,
        None => return Ok(None),
    };

    let elapsed = env.ledger().timestamp().saturating_sub(auction.start);

    price_decay(
        env,
        elapsed,
        read_initial_proportion(env)?,
        read_auction_time(env)?,
    )
    .map(|p| Some(p.into_inner()))
    .ok_or(Error::MathOverflowError)
}
