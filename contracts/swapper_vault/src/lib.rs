//! Swapper Vault Contract
//!
//! Custodial vault for a single Stellar asset. Any address may deposit; each
//! depositor's balance accumulates until it reclaims the whole amount with one
//! withdrawal. The number of distinct concurrent depositors is capped.
//!
//! ## Key design decisions
//!
//! - **Bounded registry**: a fixed-capacity slot arena (see `registry`) caps
//!   storage and iteration cost. Slots are freed on withdrawal and reused.
//! - **Plan, transfer, commit**: deposits are validated into a plan, funds
//!   are pulled in, then the plan is written. Any failure aborts the whole
//!   invocation, token movement included.
//! - **Checks-Effects-Interactions on withdraw**: the entry is removed before
//!   the payout, so a second withdrawal fails with `NoDeposit`.
//! - **Typed errors**: every mutating entry point returns `SwapperError`.
//! - **Fee**: owner-only, strictly positive, not applied to balances.

#![no_std]

mod events;
mod fee;
mod registry;
mod storage;
mod token_integration;
pub mod types;

pub use swapper_errors::{ErrorCategory, ErrorExt, SwapperError};
pub use types::{DepositEntry, DEFAULT_MAX_DEPOSITORS};

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};




#[cfg(test)]
mod test_deposit;





#[contract]
pub struct SwapperVault;

#[contractimpl]
impl SwapperVault {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization.
    ///
    /// # Arguments
    /// * `owner` - Address allowed to change the fee
    /// * `token` - Stellar asset the vault holds
    /// * `initial_fee` - Starting fee, must be > 0
    /// * `max_depositors` - Registry capacity; `None` uses `DEFAULT_MAX_DEPOSITORS`
    ///
    /// # Errors
    /// * `AlreadyInitialized`, `InvalidFee`, `InvalidCapacity`
    pub fn initialize(
        e: Env,
        owner: Address,
        token: Address,
        initial_fee: u128,
        max_depositors: Option<u32>,
    ) -> Result<(), SwapperError> {
        if storage::is_initialized(&e) {
            return Err(SwapperError::AlreadyInitialized);
        }
        owner.require_auth();

        fee::validate_fee(initial_fee)?;
        let cap = max_depositors.unwrap_or(DEFAULT_MAX_DEPOSITORS);
        if cap == 0 {
            return Err(SwapperError::InvalidCapacity);
        }

        storage::set_owner(&e, &owner);
        storage::set_token(&e, &token);
        storage::set_fee(&e, initial_fee);
        storage::set_max_depositors(&e, cap);
        storage::set_depositor_count(&e, 0);
        storage::extend_instance(&e);

        events::emit_initialized(&e, &owner, &token, initial_fee, cap);
        Ok(())
    }

    // ── Fee ────────────────────────────────────────────────────────────────

    /// Owner-only fee update. Returns `true` on success.
    ///
    /// # Errors
    /// * `NotOwner` if `caller` is not the owner
    /// * `InvalidFee` if `new_fee` is 0
    pub fn change_current_fee(
        e: Env,
        caller: Address,
        new_fee: u128,
    ) -> Result<bool, SwapperError> {
        fee::change_current_fee(&e, &caller, new_fee)?;
        storage::extend_instance(&e);
        Ok(true)
    }

    pub fn get_current_fee(e: Env) -> Result<u128, SwapperError> {
        storage::get_fee(&e)
    }

    // ── Deposits ───────────────────────────────────────────────────────────

    /// Move `amount` of `asset` from `depositor` into the vault and credit it.
    ///
    /// A first deposit takes a registry slot; later deposits from the same
    /// address only grow its balance. Returns `true` on success.
    ///
    /// # Errors
    /// * `UnsupportedAsset` if `asset` is not the vault token
    /// * `InvalidAmount` if `amount` <= 0
    /// * `TooManyDepositors` if `depositor` is new and the registry is full
    /// * `Overflow` if the balance would overflow
    pub fn deposit(
        e: Env,
        depositor: Address,
        asset: Address,
        amount: i128,
    ) -> Result<bool, SwapperError> {
        depositor.require_auth();
        let token = token_integration::require_vault_asset(&e, &asset)?;
        if amount <= 0 {
            return Err(SwapperError::InvalidAmount);
        }

        let plan = registry::plan_deposit(&e, &depositor, amount)?;
        token_integration::transfer_into_vault(&e, &token, &depositor, amount);
        registry::commit_deposit(&e, &depositor, &plan);
        storage::extend_instance(&e);

        if plan.admitted {
            events::emit_depositor_added(&e, &depositor, plan.entry.slot);
        }
        events::emit_deposit(
            &e,
            &depositor,
            amount,
            plan.entry.balance,
            registry::len(&e),
        );
        Ok(true)
    }

    /// Pay `depositor` its whole balance and free its registry slot.
    ///
    /// Returns the amount paid out.
    ///
    /// # Errors
    /// * `UnsupportedAsset` if `asset` is not the vault token
    /// * `NoDeposit` if `depositor` has nothing deposited
    pub fn withdraw(e: Env, depositor: Address, asset: Address) -> Result<i128, SwapperError> {
        depositor.require_auth();
        let token = token_integration::require_vault_asset(&e, &asset)?;

        // CEI: drop the entry before paying out.
        let amount = registry::release(&e, &depositor)?;
        token_integration::transfer_out_of_vault(&e, &token, &depositor, amount);
        storage::extend_instance(&e);

        events::emit_withdraw(&e, &depositor, amount, registry::len(&e));
        Ok(amount)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Balance held for `depositor`, 0 if it has no entry.
    pub fn get_deposited_balance(e: Env, depositor: Address) -> i128 {
        registry::balance_of(&e, &depositor)
    }

    pub fn get_deposit_entry(e: Env, depositor: Address) -> Option<DepositEntry> {
        registry::entry(&e, &depositor)
    }

    pub fn is_depositor(e: Env, depositor: Address) -> bool {
        registry::contains(&e, &depositor)
    }

    /// Number of occupied registry slots.
    pub fn get_depositor_count(e: Env) -> u32 {
        registry::len(&e)
    }

    /// Active depositors in slot order.
    pub fn get_depositors(e: Env) -> Vec<Address> {
        registry::members(&e)
    }

    pub fn get_max_depositors(e: Env) -> Result<u32, SwapperError> {
        storage::get_max_depositors(&e)
    }

    pub fn get_owner(e: Env) -> Result<Address, SwapperError> {
        storage::get_owner(&e)
    }

    pub fn get_token(e: Env) -> Result<Address, SwapperError> {
        storage::get_token(&e)
    }
}
