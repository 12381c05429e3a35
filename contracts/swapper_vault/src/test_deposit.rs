#![cfg(test)]

use crate::test_helpers::*;
use crate::{DepositEntry, SwapperError};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

// ═══════════════════════════════════════════════════════════════════
// 1. Happy path
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_first_deposit_creates_entry() {
    let e = Env::default();
    let s = setup(&e);
    let a = s.funded_depositor(&e, DEPOSITOR_MINT);

    assert!(s.client.deposit(&a, &s.token, &50));

    assert_eq!(s.client.get_deposited_balance(&a), 50);
    assert_eq!(s.client.get_depositor_count(), 1);
    assert!(s.client.is_depositor(&a));
    assert_eq!(
        s.client.get_deposit_entry(&a),
        Some(DepositEntry {
            balance: 50,
            slot: 0
        })
    );
}

#[test]
fn test_deposit_moves_tokens_into_vault() {
    let e = Env::default();
    let s = setup(&e);
    let a = s.funded_depositor(&e, DEPOSITOR_MINT);

    s.client.deposit(&a, &s.token, &50);

    assert_eq!(s.balance(&e, &a), DEPOSITOR_MINT - 50);
    assert_eq!(s.balance(&e, &s.vault), 50);
}

#[test]
fn test_repeat_deposits_accumulate() {
    let e = Env::default();
    let s = setup(&e);
    let a = s.funded_depositor(&e, DEPOSITOR_MINT);

    s.client.deposit(&a, &s.token, &50);
    s.client.deposit(&a, &s.token, &20);

    assert_eq!(s.client.get_deposited_balance(&a), 70);
    assert_eq!(s.client.get_depositor_count(), 1);
    assert_eq!(s.balance(&e, &s.vault), 70);
}

#[test]
fn test_many_deposits_take_one_slot() {
    let e = Env::default();
    let s = setup(&e);
    let a = s.funded_depositor(&e, DEFAULT_MINT);

    let amounts = [1_i128, 7, 13, 250, 4_000];
    for amount in amounts.iter() {
        s.client.deposit(&a, &s.token, amount);
    }

    assert_eq!(s.client.get_deposited_balance(&a), amounts.iter().sum::<i128>());
    assert_eq!(s.client.get_depositor_count(), 1);
}

#[test]
fn test_unknown_depositor_balance_is_zero() {
    let e = Env::default();
    let s = setup(&e);
    let stranger = Address::generate(&e);

    assert_eq!(s.client.get_deposited_balance(&stranger), 0);
    assert!(!s.client.is_depositor(&stranger));
    assert_eq!(s.client.get_deposit_entry(&stranger), None);
}

// ═══════════════════════════════════════════════════════════════════
// 2. Error paths
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_zero_deposit_fails_without_state_change() {
    let e = Env::default();
    let s = setup(&e);
    let a = s.funded_depositor(&e, DEPOSITOR_MINT);

    let result = s.client.try_deposit(&a, &s.token, &0);
    assert_eq!(result, Err(Ok(SwapperError::InvalidAmount)));

    assert_eq!(s.client.get_deposited_balance(&a), 0);
    assert_eq!(s.client.get_depositor_count(), 0);
    assert_eq!(s.balance(&e, &a), DEPOSITOR_MINT);
}

#[test]
fn test_negative_deposit_fails() {
    let e = Env::default();
    let s = setup(&e);
    let a = s.funded_depositor(&e, DEPOSITOR_MINT);

    let result = s.client.try_deposit(&a, &s.token, &-5);
    assert_eq!(result, Err(Ok(SwapperError::InvalidAmount)));
}

#[test]
fn test_zero_deposit_by_existing_depositor_keeps_balance() {
    let e = Env::default();
    let s = setup(&e);
    let a = s.funded_depositor(&e, DEPOSITOR_MINT);

    s.client.deposit(&a, &s.token, &30);
    let result = s.client.try_deposit(&a, &s.token, &0);
    assert_eq!(result, Err(Ok(SwapperError::InvalidAmount)));
    assert_eq!(s.client.get_deposited_balance(&a), 30);
}

#[test]
fn test_deposit_wrong_asset_fails() {
    let e = Env::default();
    let s = setup(&e);
    let a = s.funded_depositor(&e, DEPOSITOR_MINT);
    let other = e
        .register_stellar_asset_contract_v2(s.owner.clone())
        .address();

    let result = s.client.try_deposit(&a, &other, &10);
    assert_eq!(result, Err(Ok(SwapperError::UnsupportedAsset)));
    assert_eq!(s.client.get_depositor_count(), 0);
}

#[test]
fn test_insufficient_funds_rolls_back() {
    let e = Env::default();
    let s = setup(&e);
    let a = s.funded_depositor(&e, 40);

    // Token contract rejects the transfer; nothing is recorded.
    assert!(s.client.try_deposit(&a, &s.token, &50).is_err());

    assert_eq!(s.client.get_deposited_balance(&a), 0);
    assert_eq!(s.client.get_depositor_count(), 0);
    assert!(!s.client.is_depositor(&a));
    assert_eq!(s.balance(&e, &a), 40);
    assert_eq!(s.balance(&e, &s.vault), 0);
}

#[test]
fn test_insufficient_top_up_keeps_prior_balance() {
    let e = Env::default();
    let s = setup(&e);
    let a = s.funded_depositor(&e, 60);

    s.client.deposit(&a, &s.token, &50);
    assert!(s.client.try_deposit(&a, &s.token, &20).is_err());

    assert_eq!(s.client.get_deposited_balance(&a), 50);
    assert_eq!(s.balance(&e, &a), 10);
}

#[test]
fn test_balance_overflow_fails() {
    let e = Env::default();
    let s = setup(&e);
    let a = s.funded_depositor(&e, i128::MAX);

    s.client.deposit(&a, &s.token, &i128::MAX);
    s.asset_admin(&e).mint(&a, &1);

    let result = s.client.try_deposit(&a, &s.token, &1);
    assert_eq!(result, Err(Ok(SwapperError::Overflow)));
    assert_eq!(s.client.get_deposited_balance(&a), i128::MAX);
    assert_eq!(s.balance(&e, &a), 1);
}
