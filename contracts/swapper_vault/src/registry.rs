//! Bounded depositor registry.
//!
//! A fixed-capacity arena of slots keyed by depositor address, paired with one
//! ledger entry per occupied slot.
//!
//! ## Layout
//! - `DataKey::Slot(i)` holds the depositor occupying slot `i`.
//! - `DataKey::Entry(addr)` holds that depositor's balance and slot index.
//! - `DataKey::DepositorCount` is the occupancy count. Slots `0..count` are
//!   always occupied; admission appends at `count`, release swap-removes.
//!
//! ## Invariants
//! - `count <= MaxDepositors` at all times.
//! - An entry exists iff its depositor occupies exactly one slot.
//! - Every stored balance is strictly positive.
//!
//! The cap is keyed on membership, not on call count: a depositor already in
//! the registry can always top up, even when every slot is taken.

use soroban_sdk::{Address, Env, Vec};
use swapper_errors::SwapperError;

use crate::storage;
use crate::types::{DataKey, DepositEntry};

/// Outcome of validating a deposit before any funds move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositPlan {
    /// Entry to store once the inbound transfer has succeeded.
    pub entry: DepositEntry,
    /// `true` when the depositor takes a fresh slot.
    pub admitted: bool,
}

pub fn entry(e: &Env, depositor: &Address) -> Option<DepositEntry> {
    e.storage()
        .persistent()
        .get(&DataKey::Entry(depositor.clone()))
}

pub fn contains(e: &Env, depositor: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::Entry(depositor.clone()))
}

/// Balance of `depositor`, or 0 when it holds no entry.
pub fn balance_of(e: &Env, depositor: &Address) -> i128 {
    entry(e, depositor).map(|en| en.balance).unwrap_or(0)
}

pub fn len(e: &Env) -> u32 {
    storage::get_depositor_count(e)
}

/// Current members in slot order.
pub fn members(e: &Env) -> Vec<Address> {
    let mut out = Vec::new(e);
    for slot in 0..len(e) {
        if let Some(addr) = e
            .storage()
            .persistent()
            .get::<_, Address>(&DataKey::Slot(slot))
        {
            out.push_back(addr);
        }
    }
    out
}

/// Validate a deposit of `amount` by `depositor` without writing anything.
///
/// # Errors
/// * `TooManyDepositors` if `depositor` is new and every slot is occupied.
/// * `Overflow` if the accumulated balance would not fit.
pub fn plan_deposit(
    e: &Env,
    depositor: &Address,
    amount: i128,
) -> Result<DepositPlan, SwapperError> {
    if let Some(existing) = entry(e, depositor) {
        let balance = existing
            .balance
            .checked_add(amount)
            .ok_or(SwapperError::Overflow)?;
        return Ok(DepositPlan {
            entry: DepositEntry {
                balance,
                slot: existing.slot,
            },
            admitted: false,
        });
    }

    let cap = storage::get_max_depositors(e)?;
    let count = len(e);
    if count >= cap {
        return Err(SwapperError::TooManyDepositors);
    }

    Ok(DepositPlan {
        entry: DepositEntry {
            balance: amount,
            slot: count,
        },
        admitted: true,
    })
}

/// Write a validated plan. Only call after the inbound transfer succeeded.
pub fn commit_deposit(e: &Env, depositor: &Address, plan: &DepositPlan) {
    if plan.admitted {
        let slot_key = DataKey::Slot(plan.entry.slot);
        e.storage().persistent().set(&slot_key, depositor);
        storage::extend_persistent(e, &slot_key);
        storage::set_depositor_count(e, plan.entry.slot + 1);
    }

    let entry_key = DataKey::Entry(depositor.clone());
    e.storage().persistent().set(&entry_key, &plan.entry);
    storage::extend_persistent(e, &entry_key);
}

/// Remove `depositor` from the registry and return its full balance.
///
/// The highest occupied slot is moved into the freed one so occupancy stays
/// dense and the slot is immediately available to a new depositor.
///
/// # Errors
/// * `NoDeposit` if `depositor` holds no entry.
pub fn release(e: &Env, depositor: &Address) -> Result<i128, SwapperError> {
    let freed = entry(e, depositor).ok_or(SwapperError::NoDeposit)?;
    if freed.balance <= 0 {
        return Err(SwapperError::NoDeposit);
    }

    let last = len(e).checked_sub(1).ok_or(SwapperError::NoDeposit)?;

    if freed.slot != last {
        let moved: Address = e
            .storage()
            .persistent()
            .get(&DataKey::Slot(last))
            .ok_or(SwapperError::NoDeposit)?;
        let mut moved_entry = entry(e, &moved).ok_or(SwapperError::NoDeposit)?;
        moved_entry.slot = freed.slot;

        let slot_key = DataKey::Slot(freed.slot);
        e.storage().persistent().set(&slot_key, &moved);
        storage::extend_persistent(e, &slot_key);

        let moved_key = DataKey::Entry(moved);
        e.storage().persistent().set(&moved_key, &moved_entry);
        storage::extend_persistent(e, &moved_key);
    }

    e.storage().persistent().remove(&DataKey::Slot(last));
    e.storage()
        .persistent()
        .remove(&DataKey::Entry(depositor.clone()));
    storage::set_depositor_count(e, last);

    Ok(freed.balance)
}
