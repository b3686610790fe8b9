#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, BytesN, Env};
use types::vault::Vault;

pub mod types;

pub struct Spec;

/// Vault ledger interface. Source of truth for vault balances, ownership and collateralization.
/// Mutating methods are expected to accept calls from the registered auction engine only.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "CauldronClient")]
pub trait CauldronTrait {
    /// Returns vault data or `None` when vault doesn't exist
    fn vault(env: Env, vault_id: BytesN<12>) -> Option<Vault>;

    fn vault_owner(env: Env, vault_id: BytesN<12>) -> Option<Address>;

    /// Vault debt in base asset units, zero for unknown vaults
    fn vault_debt(env: Env, vault_id: BytesN<12>) -> i128;

    /// Vault collateral in collateral asset units, zero for unknown vaults
    fn vault_collateral(env: Env, vault_id: BytesN<12>) -> i128;

    fn is_undercollateralized(env: Env, vault_id: BytesN<12>) -> bool;

    /// Timestamp the vault was locked at, if it's locked
    fn auction(env: Env, vault_id: BytesN<12>) -> Option<u64>;

    /// Marks vault as being auctioned since `timestamp` and gives it to `receiver`
    fn lock_vault(env: Env, vault_id: BytesN<12>, timestamp: u64, receiver: Address);

    /// Moves `amount` of vault collateral out of custody to `to`
    fn transfer_collateral(env: Env, vault_id: BytesN<12>, amount: i128, to: Address);

    fn reduce_debt(env: Env, vault_id: BytesN<12>, amount: i128);

    /// Unlocks the vault and gives it back to `owner`
    fn return_vault_ownership(env: Env, vault_id: BytesN<12>, owner: Address);
}
