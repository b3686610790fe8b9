use soroban_sdk::{Address, Env};
use witch_interface::types::{error::Error, permission::Permission};

use crate::event;
use crate::storage::write_initial_proportion;

use super::utils::validation::{require_permission, require_valid_initial_proportion};

pub fn set_initial_proportion(env: &Env, who: &Address, value: i128) -> Result<(), Error> {
    require_permission(env, who, &Permission::SetAuctionParams)?;
    require_valid_initial_proportion(value)?;

    write_initial_proportion(env, value);

    event::initial_proportion_set(env, value);

    Ok(())
}
