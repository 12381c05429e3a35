use soroban_sdk::{Address, Env};
use swapper_errors::SwapperError;

use crate::types::DataKey;

/// Bump amount for long-lived entries (roughly 30 days in ledgers).
const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
const LEDGER_THRESHOLD: u32 = 259_200;

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Owner)
}

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD, LEDGER_BUMP);
}

pub fn extend_persistent(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, LEDGER_THRESHOLD, LEDGER_BUMP);
}

// =============================================================================
// Owner
// =============================================================================

pub fn get_owner(e: &Env) -> Result<Address, SwapperError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(SwapperError::NotInitialized)
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

// =============================================================================
// Token
// =============================================================================

pub fn get_token(e: &Env) -> Result<Address, SwapperError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(SwapperError::NotInitialized)
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

// =============================================================================
// Fee
// =============================================================================

pub fn get_fee(e: &Env) -> Result<u128, SwapperError> {
    e.storage()
        .instance()
        .get(&DataKey::CurrentFee)
        .ok_or(SwapperError::NotInitialized)
}

pub fn set_fee(e: &Env, fee: u128) {
    e.storage().instance().set(&DataKey::CurrentFee, &fee);
}

// =============================================================================
// Registry counters
// =============================================================================

pub fn get_max_depositors(e: &Env) -> Result<u32, SwapperError> {
    e.storage()
        .instance()
        .get(&DataKey::MaxDepositors)
        .ok_or(SwapperError::NotInitialized)
}

pub fn set_max_depositors(e: &Env, max: u32) {
    e.storage().instance().set(&DataKey::MaxDepositors, &max);
}

pub fn get_depositor_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::DepositorCount)
        .unwrap_or(0)
}

pub fn set_depositor_count(e: &Env, count: u32) {
    e.storage()
        .instance()
        .set(&DataKey::DepositorCount, &count);
}
