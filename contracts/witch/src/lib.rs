#![deny(warnings)]
#![no_std]

use methods::{
    buy::buy, grab::grab, grant_permission::grant_permission, initialize::initialize,
    permissioned::permissioned, proportion::proportion, revoke_permission::revoke_permission,
    set_auction_time::set_auction_time, set_initial_proportion::set_initial_proportion,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};
use witch_interface::types::{auction::Auction, error::Error, permission::Permission};
use witch_interface::WitchTrait;

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;

#[contract]
pub struct Witch;

#[contractimpl]
impl WitchTrait for Witch {
    fn initialize(
        env: Env,
        permission_owner: Address,
        cauldron: Address,
        debt_sink: Address,
        initial_proportion: i128,
        auction_time: u64,
    ) -> Result<(), Error> {
        initialize(
            &env,
            &permission_owner,
            &cauldron,
            &debt_sink,
            initial_proportion,
            auction_time,
        )
    }

    fn version() -> u32 {
        1
    }

    fn grant_permission(
        env: Env,
        who: Address,
        receiver: Address,
        permission: Permission,
    ) -> Result<(), Error> {
        grant_permission(&env, &who, &receiver, &permission)
    }

    fn revoke_permission(
        env: Env,
        who: Address,
        owner: Address,
        permission: Permission,
    ) -> Result<(), Error> {
        revoke_permission(&env, &who, &owner, &permission)
    }

    fn permissioned(env: Env, who: Address, permission: Permission) -> bool {
        permissioned(&env, &who, &permission)
    }

    fn set_initial_proportion(env: Env, who: Address, value: i128) -> Result<(), Error> {
        set_initial_proportion(&env, &who, value)
    }

    fn initial_proportion(env: Env) -> Result<i128, Error> {
        read_initial_proportion(&env)
    }

    fn set_auction_time(env: Env, who: Address, value: u64) -> Result<(), Error> {
        set_auction_time(&env, &who, value)
    }

    fn auction_time(env: Env) -> Result<u64, Error> {
        read_auction_time(&env)
    }

    fn cauldron(env: Env) -> Result<Address, Error> {
        read_cauldron(&env)
    }

    fn debt_sink(env: Env) -> Result<Address, Error> {
        read_debt_sink(&env)
    }

    fn grab(env: Env, vault_id: BytesN<12>) -> Result<(), Error> {
        grab(&env, &vault_id)
    }

    fn buy(
        env: Env,
        buyer: Address,
        vault_id: BytesN<12>,
        debt_repaid: i128,
        min_collateral_out: i128,
    ) -> Result<(i128, i128), Error> {
        buy(&env, &buyer, &vault_id, debt_repaid, min_collateral_out)
    }

    fn auction(env: Env, vault_id: BytesN<12>) -> Option<Auction> {
        read_auction(&env, &vault_id)
    }

    fn auction_start(env: Env, vault_id: BytesN<12>) -> Option<u64> {
        read_auction(&env, &vault_id).map(|a| a.start)
    }

    fn proportion(env: Env, vault_id: BytesN<12>) -> Result<Option<i128>, Error> {
        proportion(&env, &vault_id)
    }
}
