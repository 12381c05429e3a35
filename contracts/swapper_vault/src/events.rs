use soroban_sdk::{Address, Env, Symbol};

/// Emitted once, when the vault is initialized.
///
/// # Topics
/// * `Symbol` - "initialized"
///
/// # Data
/// * `Address` - The owner
/// * `Address` - The token held by the vault
/// * `u128` - The initial fee
/// * `u32` - The registry capacity
pub fn emit_initialized(
    e: &Env,
    owner: &Address,
    token: &Address,
    fee: u128,
    max_depositors: u32,
) {
    let topics = (Symbol::new(e, "initialized"),);
    let data = (owner.clone(), token.clone(), fee, max_depositors);
    e.events().publish(topics, data);
}

/// Emitted when the owner changes the fee.
///
/// # Topics
/// * `Symbol` - "fee_changed"
///
/// # Data
/// * `u128` - The previous fee
/// * `u128` - The new fee
pub fn emit_fee_changed(e: &Env, old_fee: u128, new_fee: u128) {
    let topics = (Symbol::new(e, "fee_changed"),);
    e.events().publish(topics, (old_fee, new_fee));
}

/// Emitted when a new depositor takes a registry slot.
///
/// # Topics
/// * `Symbol` - "depositor_added"
/// * `Address` - The depositor
///
/// # Data
/// * `u32` - The slot index taken
pub fn emit_depositor_added(e: &Env, depositor: &Address, slot: u32) {
    let topics = (Symbol::new(e, "depositor_added"), depositor.clone());
    e.events().publish(topics, slot);
}

/// Emitted on every successful deposit.
///
/// # Topics
/// * `Symbol` - "deposit"
/// * `Address` - The depositor
///
/// # Data
/// * `i128` - The amount deposited
/// * `i128` - The depositor's new balance
/// * `u32` - Registry size after the deposit
pub fn emit_deposit(e: &Env, depositor: &Address, amount: i128, new_balance: i128, size: u32) {
    let topics = (Symbol::new(e, "deposit"), depositor.clone());
    let data = (amount, new_balance, size);
    e.events().publish(topics, data);
}

/// Emitted on every successful withdrawal.
///
/// # Topics
/// * `Symbol` - "withdraw"
/// * `Address` - The depositor
///
/// # Data
/// * `i128` - The amount paid out
/// * `u32` - Registry size after the withdrawal
pub fn emit_withdraw(e: &Env, depositor: &Address, amount: i128, size: u32) {
    let topics = (Symbol::new(e, "withdraw"), depositor.clone());
    e.events().publish(topics, (amount, size));
}
