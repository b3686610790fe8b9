use soroban_sdk::{vec, Address, Env};
use witch_interface::types::{error::Error, permission::Permission};

use crate::event;
use crate::storage::{
    write_auction_time, write_cauldron, write_debt_sink, write_initial_proportion,
    write_permission_owners,
};

use super::utils::validation::{
    require_permissions_owner_not_exist, require_valid_initial_proportion,
};

pub fn initialize(
    env: &Env,
    permission_owner: &Address,
    cauldron: &Address,
    debt_sink: &Address,
    initial_proportion: i128,
    auction_time: u64,
) -> Result<(), Error> {
    require_permissions_owner_not_exist(env)?;
    require_valid_initial_proportion(initial_proportion)?;

    let owners = vec![env, permission_owner.clone()];

    write_permission_owners(env, &owners, &Permission::Permission);
    write_permission_owners(env, &owners, &Permission::SetAuctionParams);
    write_cauldron(env, cauldron);
    write_debt_sink(env, debt_sink);
    write_initial_proportion(env, initial_proportion);
    write_auction_time(env, auction_time);

    event::initialized(env, permission_owner, cauldron, debt_sink);

    Ok(())
}
