#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, BytesN, Env};
use types::auction::Auction;
use types::error::Error;
use types::permission::Permission;

pub mod types;

pub struct Spec;

/// Interface for liquidation auction engine
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "WitchClient")]
pub trait WitchTrait {
    fn initialize(
        env: Env,
        permission_owner: Address,
        cauldron: Address,
        debt_sink: Address,
        initial_proportion: i128,
        auction_time: u64,
    ) -> Result<(), Error>;

    fn version() -> u32;

    fn grant_permission(
        env: Env,
        who: Address,
        receiver: Address,
        permission: Permission,
    ) -> Result<(), Error>;

    fn revoke_permission(
        env: Env,
        who: Address,
        owner: Address,
        permission: Permission,
    ) -> Result<(), Error>;

    fn permissioned(env: Env, who: Address, permission: Permission) -> bool;

    fn set_initial_proportion(env: Env, who: Address, value: i128) -> Result<(), Error>;

    fn initial_proportion(env: Env) -> Result<i128, Error>;

    fn set_auction_time(env: Env, who: Address, value: u64) -> Result<(), Error>;

    fn auction_time(env: Env) -> Result<u64, Error>;

    fn cauldron(env: Env) -> Result<Address, Error>;

    fn debt_sink(env: Env) -> Result<Address, Error>;

    /// Seizes under-collateralized vault and starts auction on it
    fn grab(env: Env, vault_id: BytesN<12>) -> Result<(), Error>;

    /// Repays up to `debt_repaid` of vault debt in exchange for collateral.
    /// Returns (collateral bought, debt repaid)
    fn buy(
        env: Env,
        buyer: Address,
        vault_id: BytesN<12>,
        debt_repaid: i128,
        min_collateral_out: i128,
    ) -> Result<(i128, i128), Error>;

    fn auction(env: Env, vault_id: BytesN<12>) -> Option<Auction>;

    fn auction_start(env: Env, vault_id: BytesN<12>) -> Option<u64>;

    /// Current collateral proportion of an active auction in WAD
    fn proportion(env: Env, vault_id: BytesN<12>) -> Result<Option<i128>, Error>;
}
