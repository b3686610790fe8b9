use crate::tests::sut::{init_grabbed, init_witch, vault_id, Sut, AUCTION_TIME, DAY};
use crate::*;
use common::WAD;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, Events, Ledger};
use soroban_sdk::{symbol_short, vec, IntoVal};

#[test]
fn should_require_buyer_auth() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    sut.witch.buy(&buyer, &sut.vault_id, &WAD, &0);

    let (_, invocation) = env
        .auths()
        .into_iter()
        .find(|(address, _)| *address == buyer)
        .unwrap();

    assert_eq!(
        invocation.function,
        AuthorizedFunction::Contract((
            sut.witch.address.clone(),
            symbol_short!("buy"),
            (buyer.clone(), sut.vault_id.clone(), WAD, 0i128).into_val(&env)
        )),
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #101)")]
fn should_fail_when_vault_not_grabbed() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_witch(&env);
    let buyer = sut.buyer(&env);

    sut.witch.buy(&buyer, &sut.vault_id, &0, &0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #101)")]
fn should_fail_when_vault_not_found() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_witch(&env);
    let buyer = sut.buyer(&env);

    sut.witch.buy(&buyer, &vault_id(&env, 42), &0, &0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #302)")]
fn should_fail_when_negative_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    sut.witch.buy(&buyer, &sut.vault_id, &-1, &0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #400)")]
fn should_fail_when_not_enough_bought() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    sut.witch.buy(&buyer, &sut.vault_id, &WAD, &WAD);
}

#[test]
fn should_not_change_state_when_not_enough_bought() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    assert_eq!(
        sut.witch.try_buy(&buyer, &sut.vault_id, &WAD, &(WAD / 2 + 1)),
        Err(Ok(Error::SlippageExceeded))
    );

    assert_eq!(sut.cauldron.vault_debt(&sut.vault_id), WAD);
    assert_eq!(sut.cauldron.vault_collateral(&sut.vault_id), WAD);
    assert_eq!(sut.base.balance(&buyer), 10 * WAD);
    assert_eq!(sut.collateral.balance(&buyer), 0);
    assert!(sut.witch.auction(&sut.vault_id).is_some());
}

#[test]
fn should_buy_nothing() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    let bought = sut.witch.buy(&buyer, &sut.vault_id, &0, &0);

    assert_eq!(bought, (0, 0));
    assert_eq!(sut.cauldron.vault_debt(&sut.vault_id), WAD);
    assert_eq!(sut.cauldron.vault_collateral(&sut.vault_id), WAD);
    assert_eq!(sut.base.balance(&buyer), 10 * WAD);
    assert!(sut.witch.auction(&sut.vault_id).is_some());

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.witch.address.clone(),
                (symbol_short!("bought"), sut.vault_id.clone(), buyer.clone()).into_val(&env),
                (0i128, 0i128).into_val(&env)
            ),
        ]
    );
}

#[test]
fn should_buy_half_of_collateral_for_whole_debt_at_start() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    let (collateral_out, debt_paid) = sut.witch.buy(&buyer, &sut.vault_id, &WAD, &0);

    assert_eq!(collateral_out, WAD / 2);
    assert_eq!(debt_paid, WAD);

    assert_eq!(sut.base.balance(&buyer), 9 * WAD);
    assert_eq!(sut.base.balance(&sut.debt_sink), WAD);
    assert_eq!(sut.collateral.balance(&buyer), WAD / 2);

    assert_eq!(sut.cauldron.vault_debt(&sut.vault_id), 0);
    assert_eq!(sut.cauldron.vault_collateral(&sut.vault_id), WAD / 2);
    assert_eq!(sut.collateral.balance(&sut.cauldron.address), WAD / 2);
}

#[test]
fn should_return_vault_to_owner_when_debt_repaid() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    sut.witch.buy(&buyer, &sut.vault_id, &WAD, &0);

    assert_eq!(
        sut.cauldron.vault_owner(&sut.vault_id),
        Some(sut.owner.clone())
    );
    assert_eq!(sut.cauldron.auction(&sut.vault_id), None);
    assert_eq!(sut.witch.auction(&sut.vault_id), None);
    assert_eq!(sut.witch.auction_start(&sut.vault_id), None);
}

#[test]
fn should_emit_bought_event() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    sut.witch.buy(&buyer, &sut.vault_id, &WAD, &0);

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.witch.address.clone(),
                (symbol_short!("bought"), sut.vault_id.clone(), buyer.clone()).into_val(&env),
                (WAD / 2, WAD).into_val(&env)
            ),
        ]
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #101)")]
fn should_fail_after_debt_repaid() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    sut.witch.buy(&buyer, &sut.vault_id, &WAD, &0);
    sut.witch.buy(&buyer, &sut.vault_id, &0, &0);
}

#[test]
fn should_buy_whole_collateral_for_whole_debt_after_auction_time() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    env.ledger().with_mut(|li| li.timestamp = DAY + AUCTION_TIME);

    let bought = sut.witch.buy(&buyer, &sut.vault_id, &WAD, &0);

    assert_eq!(bought, (WAD, WAD));
    assert_eq!(sut.collateral.balance(&buyer), WAD);
    assert_eq!(sut.cauldron.vault_collateral(&sut.vault_id), 0);
    assert_eq!(
        sut.cauldron.vault_owner(&sut.vault_id),
        Some(sut.owner.clone())
    );
}

#[test]
fn should_not_release_more_than_par_long_after_auction_time() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    env.ledger().with_mut(|li| li.timestamp = 30 * DAY);

    let bought = sut.witch.buy(&buyer, &sut.vault_id, &WAD, &0);

    assert_eq!(bought, (WAD, WAD));
}

#[test]
fn should_buy_partially_in_the_middle_of_auction() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    env.ledger().with_mut(|li| li.timestamp = DAY + AUCTION_TIME / 2);

    // 0.5 + (1 - 0.5) * 0.5 = 0.75 of par
    let bought = sut.witch.buy(&buyer, &sut.vault_id, &(WAD / 2), &0);

    assert_eq!(bought, (WAD * 3 / 8, WAD / 2));
    assert_eq!(sut.cauldron.vault_debt(&sut.vault_id), WAD / 2);
    assert_eq!(sut.cauldron.vault_collateral(&sut.vault_id), WAD * 5 / 8);
    assert_eq!(
        sut.cauldron.vault_owner(&sut.vault_id),
        Some(sut.witch.address.clone())
    );
    assert_eq!(sut.witch.auction_start(&sut.vault_id), Some(DAY));
}

#[test]
fn should_clamp_debt_to_outstanding() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    let bought = sut.witch.buy(&buyer, &sut.vault_id, &(5 * WAD), &0);

    assert_eq!(bought, (WAD / 2, WAD));
    assert_eq!(sut.base.balance(&buyer), 9 * WAD);
    assert_eq!(sut.witch.auction(&sut.vault_id), None);
}

#[test]
fn should_price_against_vault_backing() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    // first half bought at start leaves 0.75 collateral backing 0.5 debt
    sut.witch.buy(&buyer, &sut.vault_id, &(WAD / 2), &0);
    assert_eq!(sut.cauldron.vault_collateral(&sut.vault_id), WAD * 3 / 4);

    env.ledger().with_mut(|li| li.timestamp = DAY + AUCTION_TIME);

    let bought = sut.witch.buy(&buyer, &sut.vault_id, &(WAD / 2), &0);

    assert_eq!(bought, (WAD * 3 / 4, WAD / 2));
    assert_eq!(sut.collateral.balance(&buyer), WAD);
    assert_eq!(sut.cauldron.vault_collateral(&sut.vault_id), 0);
    assert_eq!(sut.witch.auction(&sut.vault_id), None);
}

#[test]
fn should_raise_proportion_as_time_passes() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);

    let mut prev = 0;
    for elapsed in [0, 1, 600, 1_800, 3_599, 3_600, 7_200] {
        env.ledger().with_mut(|li| li.timestamp = DAY + elapsed);

        let proportion = sut.witch.proportion(&sut.vault_id).unwrap();
        assert!(proportion >= prev);
        assert!(proportion <= WAD);
        prev = proportion;
    }

    assert_eq!(prev, WAD);
}

#[test]
fn should_apply_parameter_changes_to_active_auction() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    sut.witch.set_initial_proportion(&sut.witch_admin, &WAD);

    let bought = sut.witch.buy(&buyer, &sut.vault_id, &WAD, &0);

    assert_eq!(bought, (WAD, WAD));
}

#[test]
fn should_release_par_immediately_when_no_auction_time() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    sut.witch.set_auction_time(&sut.witch_admin, &0);

    assert_eq!(sut.witch.proportion(&sut.vault_id), Some(WAD));
    assert_eq!(sut.witch.buy(&buyer, &sut.vault_id, &WAD, &0), (WAD, WAD));
}

#[test]
fn should_grab_again_after_repayment() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_grabbed(&env);
    let buyer = sut.buyer(&env);

    sut.witch.buy(&buyer, &sut.vault_id, &WAD, &0);

    // owner borrows again against the remaining half of collateral
    sut.cauldron_admin.pour(&sut.vault_id, &0, &WAD);

    env.ledger().with_mut(|li| li.timestamp = 2 * DAY);
    sut.witch.grab(&sut.vault_id);

    let auction = sut.witch.auction(&sut.vault_id).unwrap();
    assert_eq!(auction.start, 2 * DAY);
    assert_eq!(auction.owner, sut.owner);
}

#[test]
fn should_buy_whole_debt_of_large_vault() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_witch(&env);
    let (owner, vault) = grab_vault_of(&env, &sut, 100 * WAD);
    let buyer = Address::generate(&env);
    sut.base_admin.mint(&buyer, &(100 * WAD));

    let bought = sut.witch.buy(&buyer, &vault, &(100 * WAD), &0);

    assert_eq!(bought, (50 * WAD, 100 * WAD));
    assert_eq!(sut.collateral.balance(&buyer), 50 * WAD);
    assert_eq!(sut.base.balance(&sut.debt_sink), 100 * WAD);
    assert_eq!(sut.cauldron.vault_collateral(&vault), 50 * WAD);
    assert_eq!(sut.cauldron.vault_owner(&vault), Some(owner));
    assert_eq!(sut.witch.auction(&vault), None);
}

#[test]
fn should_buy_partially_from_huge_vault() {
    let env = Env::default();
    env.mock_all_auths();

    let amount = 1_000_000_000 * WAD;
    let sut = init_witch(&env);
    let (_, vault) = grab_vault_of(&env, &sut, amount);
    let buyer = Address::generate(&env);
    sut.base_admin.mint(&buyer, &amount);

    env.ledger().with_mut(|li| li.timestamp = DAY + AUCTION_TIME / 2);

    let bought = sut.witch.buy(&buyer, &vault, &(amount / 2), &0);

    assert_eq!(bought, (amount * 3 / 8, amount / 2));
    assert_eq!(sut.cauldron.vault_debt(&vault), amount / 2);
    assert_eq!(sut.cauldron.vault_collateral(&vault), amount * 5 / 8);
}

/// Builds 1:1 vault of `amount` collateral and debt for a new owner, drops the price and grabs it
fn grab_vault_of(env: &Env, sut: &Sut, amount: i128) -> (Address, BytesN<12>) {
    let owner = Address::generate(env);
    let vault = vault_id(env, 9);

    sut.collateral_admin.mint(&owner, &amount);
    sut.cauldron_admin
        .build(&owner, &vault, &sut.base.address, &sut.collateral.address);
    sut.cauldron_admin.pour(&vault, &amount, &amount);

    sut.undercollateralize();
    sut.witch.grab(&vault);

    (owner, vault)
}
