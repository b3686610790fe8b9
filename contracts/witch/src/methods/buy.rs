use cauldron_interface::CauldronClient;
use soroban_sdk::{token, Address, BytesN, Env};
use witch_interface::types::error::Error;

use crate::event;
use crate::storage::{
    read_auction, read_auction_time, read_cauldron, read_debt_sink, read_initial_proportion,
    remove_auction,
};

use super::utils::price_decay::{collateral_for_debt, price_decay};
use super::utils::validation::{require_enough_bought, require_non_negative_amount};

pub fn buy(
    env: &Env,
    buyer: &Address,
    vault_id: &BytesN<12>,
    debt_repaid: i128,
    min_collateral_out: i128,
) -> Result<(i128, i128), Error> {
    buyer.require_auth();

    require_non_negative_amount(debt_repaid)?;
    require_non_negative_amount(min_collateral_out)?;

    let auction = read_auction(env, vault_id).ok_or(Error::NothingToBuy)?;
    let cauldron = CauldronClient::new(env, &read_cauldron(env)?);
    let debt_sink = read_debt_sink(env)?;

    // a locked vault keeps positive debt until the buy repaying it closes the auction,
    // so the zero debt case is only reachable for a vault the ledger dropped
    let vault = cauldron
        .vault(vault_id)
        .filter(|v| v.debt > 0)
        .ok_or(Error::NothingToBuy)?;

    let elapsed = env.ledger().timestamp().saturating_sub(auction.start);
    let proportion = price_decay(
        env,
        elapsed,
        read_initial_proportion(env)?,
        read_auction_time(env)?,
    )
    .ok_or(Error::MathOverflowError)?;

    let debt = debt_repaid.min(vault.debt);
    let collateral_out =
        collateral_for_debt(env, debt, vault.collateral, vault.debt, proportion)
            .ok_or(Error::MathOverflowError)?;

    require_enough_bought(collateral_out, min_collateral_out)?;

    if debt > 0 {
        cauldron.reduce_debt(vault_id, &debt);
        token::Client::new(env, &vault.base_asset).transfer(buyer, &debt_sink, &debt);
    }

    if collateral_out > 0 {
        cauldron.transfer_collateral(vault_id, &collateral_out, buyer);
    }

    // whole debt repaid, the vault with the rest of collateral goes back to its owner
    if debt == vault.debt {
        cauldron.return_vault_ownership(vault_id, &auction.owner);
        remove_auction(env, vault_id);
    }

    event::bought(env, vault_id, buyer, collateral_out, debt);

    Ok((collateral_out, debt))
}
