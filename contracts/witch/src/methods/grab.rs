use cauldron_interface::CauldronClient;
use soroban_sdk::{BytesN, Env};
use witch_interface::types::{auction::Auction, error::Error};

use crate::event;
use crate::storage::{read_cauldron, write_auction};

use super::utils::validation::require_not_under_auction;

pub fn grab(env: &Env, vault_id: &BytesN<12>) -> Result<(), Error> {
    let cauldron = CauldronClient::new(env, &read_cauldron(env)?);

    let owner = cauldron
        .vault_owner(vault_id)
        .ok_or(Error::VaultNotFound)?;

    require_not_under_auction(env, vault_id)?;

    if !cauldron.is_undercollateralized(vault_id) {
        return Err(Error::NotUndercollateralized);
    }

    let auction = Auction {
        start: env.ledger().timestamp(),
        owner,
    };

    write_auction(env, vault_id, &auction);
    cauldron.lock_vault(vault_id, &auction.start, &env.current_contract_address());

    event::auction_started(env, vault_id, &auction);

    Ok(())
}
