#![deny(warnings)]
#![no_std]

use cauldron_interface::{types::vault::Vault, CauldronTrait};
use common::FixedI128;
use soroban_sdk::{
    assert_with_error, contract, contractclient, contracterror, contractimpl, panic_with_error,
    token, Address, BytesN, Env, Symbol,
};
use storage::*;

mod storage;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    VaultNotFound = 2,
    VaultAlreadyExists = 3,
    VaultLocked = 4,
    InvalidAmount = 5,
    MathOverflowError = 6,
}

#[contractclient(name = "CauldronMockAdminClient")]
pub trait CauldronMockAdminTrait {
    fn initialize(env: Env, witch: Address);

    fn build(
        env: Env,
        owner: Address,
        vault_id: BytesN<12>,
        base_asset: Address,
        collateral_asset: Address,
    );

    /// Moves `collateral` from the owner into custody and adds `debt` to the vault
    fn pour(env: Env, vault_id: BytesN<12>, collateral: i128, debt: i128);

    fn set_spot(env: Env, collateral_asset: Address, spot: i128);

    fn set_ratio(env: Env, collateral_asset: Address, ratio: i128);
}

#[contract]
pub struct CauldronMock;

#[contractimpl]
impl CauldronTrait for CauldronMock {
    fn vault(env: Env, vault_id: BytesN<12>) -> Option<Vault> {
        read_vault(&env, &vault_id)
    }

    fn vault_owner(env: Env, vault_id: BytesN<12>) -> Option<Address> {
        read_vault(&env, &vault_id).map(|v| v.owner)
    }

    fn vault_debt(env: Env, vault_id: BytesN<12>) -> i128 {
        read_vault(&env, &vault_id).map_or(0, |v| v.debt)
    }

    fn vault_collateral(env: Env, vault_id: BytesN<12>) -> i128 {
        read_vault(&env, &vault_id).map_or(0, |v| v.collateral)
    }

    fn is_undercollateralized(env: Env, vault_id: BytesN<12>) -> bool {
        let vault = require_vault(&env, &vault_id);
        let spot = read_spot(&env, &vault.collateral_asset);
        let ratio = read_ratio(&env, &vault.collateral_asset);

        let collateral_value = FixedI128::from_inner(spot).mul_int(&env, vault.collateral);
        let required = FixedI128::from_inner(ratio).mul_int(&env, vault.debt);

        collateral_value < required
    }

    fn auction(env: Env, vault_id: BytesN<12>) -> Option<u64> {
        read_auction(&env, &vault_id)
    }

    fn lock_vault(env: Env, vault_id: BytesN<12>, timestamp: u64, receiver: Address) {
        require_witch(&env);

        let mut vault = require_vault(&env, &vault_id);
        assert_with_error!(
            &env,
            read_auction(&env, &vault_id).is_none(),
            Error::VaultLocked
        );

        vault.owner = receiver.clone();
        write_vault(&env, &vault_id, &vault);
        write_auction(&env, &vault_id, timestamp);

        env.events().publish(
            (Symbol::new(&env, "vault_locked"), vault_id),
            (timestamp, receiver),
        );
    }

    fn transfer_collateral(env: Env, vault_id: BytesN<12>, amount: i128, to: Address) {
        require_witch(&env);
        require_non_negative(&env, amount);

        let mut vault = require_vault(&env, &vault_id);
        vault.collateral = vault
            .collateral
            .checked_sub(amount)
            .filter(|c| !c.is_negative())
            .unwrap_or_else(|| panic_with_error!(&env, Error::InvalidAmount));
        write_vault(&env, &vault_id, &vault);

        token::Client::new(&env, &vault.collateral_asset).transfer(
            &env.current_contract_address(),
            &to,
            &amount,
        );
    }

    fn reduce_debt(env: Env, vault_id: BytesN<12>, amount: i128) {
        require_witch(&env);
        require_non_negative(&env, amount);

        let mut vault = require_vault(&env, &vault_id);
        vault.debt = vault
            .debt
            .checked_sub(amount)
            .filter(|d| !d.is_negative())
            .unwrap_or_else(|| panic_with_error!(&env, Error::InvalidAmount));
        write_vault(&env, &vault_id, &vault);
    }

    fn return_vault_ownership(env: Env, vault_id: BytesN<12>, owner: Address) {
        require_witch(&env);

        let mut vault = require_vault(&env, &vault_id);
        vault.owner = owner.clone();
        write_vault(&env, &vault_id, &vault);
        remove_auction(&env, &vault_id);

        env.events().publish((Symbol::new(&env, "vault_given"), vault_id), owner);
    }
}

#[contractimpl]
impl CauldronMockAdminTrait for CauldronMock {
    fn initialize(env: Env, witch: Address) {
        assert_with_error!(&env, !has_witch(&env), Error::AlreadyInitialized);

        write_witch(&env, &witch);
    }

    fn build(
        env: Env,
        owner: Address,
        vault_id: BytesN<12>,
        base_asset: Address,
        collateral_asset: Address,
    ) {
        assert_with_error!(
            &env,
            read_vault(&env, &vault_id).is_none(),
            Error::VaultAlreadyExists
        );

        write_vault(
            &env,
            &vault_id,
            &Vault {
                owner,
                base_asset,
                collateral_asset,
                debt: 0,
                collateral: 0,
            },
        );
    }

    fn pour(env: Env, vault_id: BytesN<12>, collateral: i128, debt: i128) {
        require_non_negative(&env, collateral);
        require_non_negative(&env, debt);

        let mut vault = require_vault(&env, &vault_id);
        vault.owner.require_auth();

        if collateral > 0 {
            token::Client::new(&env, &vault.collateral_asset).transfer(
                &vault.owner,
                &env.current_contract_address(),
                &collateral,
            );
        }

        vault.collateral = vault
            .collateral
            .checked_add(collateral)
            .unwrap_or_else(|| panic_with_error!(&env, Error::MathOverflowError));
        vault.debt = vault
            .debt
            .checked_add(debt)
            .unwrap_or_else(|| panic_with_error!(&env, Error::MathOverflowError));

        write_vault(&env, &vault_id, &vault);
    }

    fn set_spot(env: Env, collateral_asset: Address, spot: i128) {
        write_spot(&env, &collateral_asset, spot);
    }

    fn set_ratio(env: Env, collateral_asset: Address, ratio: i128) {
        write_ratio(&env, &collateral_asset, ratio);
    }
}

fn require_witch(env: &Env) {
    read_witch(env)
        .unwrap_or_else(|| panic_with_error!(env, Error::Uninitialized))
        .require_auth();
}

fn require_vault(env: &Env, vault_id: &BytesN<12>) -> Vault {
    read_vault(env, vault_id).unwrap_or_else(|| panic_with_error!(env, Error::VaultNotFound))
}

fn require_non_negative(env: &Env, amount: i128) {
    assert_with_error!(env, !amount.is_negative(), Error::InvalidAmount);
}
