use common::WAD;
use soroban_sdk::{Address, BytesN, Env};
use witch_interface::types::{error::Error, permission::Permission};

use crate::storage::{has_auction, has_permission_owners, read_permission_owners};

pub fn require_permissions_owner_not_exist(env: &Env) -> Result<(), Error> {
    if has_permission_owners(env, &Permission::Permission) {
        return Err(Error::AlreadyInitialized);
    }

    Ok(())
}

pub fn require_permission(env: &Env, who: &Address, permission: &Permission) -> Result<(), Error> {
    who.require_auth();

    let owners = read_permission_owners(env, permission);

    owners
        .binary_search(who)
        .map(|_| ())
        .map_err(|_| Error::NoPermissions)
}

pub fn require_valid_initial_proportion(value: i128) -> Result<(), Error> {
    if value > WAD {
        return Err(Error::ProportionTooHigh);
    }

    if value.is_negative() {
        return Err(Error::MustBeNonNegative);
    }

    Ok(())
}

pub fn require_non_negative_amount(amount: i128) -> Result<(), Error> {
    if amount.is_negative() {
        return Err(Error::InvalidAmount);
    }

    Ok(())
}

pub fn require_not_under_auction(env: &Env, vault_id: &BytesN<12>) -> Result<(), Error> {
    if has_auction(env, vault_id) {
        return Err(Error::AlreadyUnderAuction);
    }

    Ok(())
}

pub fn require_enough_bought(collateral_out: i128, min_collateral_out: i128) -> Result<(), Error> {
    if collateral_out < min_collateral_out {
        return Err(Error::SlippageExceeded);
    }

    Ok(())
}
