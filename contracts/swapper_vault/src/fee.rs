//! Owner-controlled fee parameter.
//!
//! The fee is stored and validated only; no deposit or withdrawal reads it.

use soroban_sdk::{Address, Env};
use swapper_errors::SwapperError;

use crate::{events, storage};

pub fn validate_fee(fee: u128) -> Result<(), SwapperError> {
    if fee == 0 {
        return Err(SwapperError::InvalidFee);
    }
    Ok(())
}

fn require_owner(e: &Env, caller: &Address) -> Result<(), SwapperError> {
    caller.require_auth();
    let owner = storage::get_owner(e)?;
    if owner != *caller {
        return Err(SwapperError::NotOwner);
    }
    Ok(())
}

/// Replace the stored fee with `new_fee`. Returns the previous fee.
///
/// Ownership is checked before the value, so a non-owner always sees `NotOwner`.
pub fn change_current_fee(
    e: &Env,
    caller: &Address,
    new_fee: u128,
) -> Result<u128, SwapperError> {
    require_owner(e, caller)?;
    validate_fee(new_fee)?;

    let old_fee = storage::get_fee(e)?;
    storage::set_fee(e, new_fee);
    events::emit_fee_changed(e, old_fee, new_fee);
    Ok(old_fee)
}
