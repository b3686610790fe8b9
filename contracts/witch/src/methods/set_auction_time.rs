use soroban_sdk::{Address, Env};
use witch_interface::types::{error::Error, permission::Permission};

use crate::event;
use crate::storage::write_auction_time;

use super::utils::validation::require_permission;

pub fn set_auction_time(env: &Env, who: &Address, value: u64) -> Result<(), Error> {
    require_permission(env, who, &Permission::SetAuctionParams)?;

    write_auction_time(env, value);

    event::auction_time_set(env, value);

    Ok(())
}
