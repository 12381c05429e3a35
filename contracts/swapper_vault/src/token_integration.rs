//! Token integration helpers for the swapper vault.
//! Centralizes the asset check and the two transfer directions.

use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};
use swapper_errors::SwapperError;

use crate::storage;

/// @notice Returns the vault token if `asset` names it.
/// @dev Fails with `NotInitialized` before setup, `UnsupportedAsset` on mismatch.
pub fn require_vault_asset(e: &Env, asset: &Address) -> Result<Address, SwapperError> {
    let token = storage::get_token(e)?;
    if token != *asset {
        return Err(SwapperError::UnsupportedAsset);
    }
    Ok(token)
}

/// @notice Moves `amount` of `token` from `from` into the vault.
/// @dev The token contract aborts the invocation if `from` is short of funds.
pub fn transfer_into_vault(e: &Env, token: &Address, from: &Address, amount: i128) {
    let vault = e.current_contract_address();
    TokenClient::new(e, token).transfer(from, &vault, &amount);
}

/// @notice Pays `amount` of `token` out of the vault to `to`.
pub fn transfer_out_of_vault(e: &Env, token: &Address, to: &Address, amount: i128) {
    let vault = e.current_contract_address();
    TokenClient::new(e, token).transfer(&vault, to, &amount);
}
