use soroban_sdk::{contracttype, Address};

/// Registry capacity used when `initialize` is not given an explicit one.
pub const DEFAULT_MAX_DEPOSITORS: u32 = 50;

// ─── Ledger state ──────────────────────────────────────────────────────────

/// Ledger entry for one active depositor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEntry {
    /// Accumulated deposits not yet withdrawn. Always > 0 while the entry exists.
    pub balance: i128,
    /// Index of the registry slot this depositor occupies.
    pub slot: u32,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Address allowed to change the fee.
    Owner,
    /// Stellar asset held by the vault.
    Token,
    /// Owner-controlled fee, always > 0.
    CurrentFee,
    /// Registry capacity.
    MaxDepositors,
    /// Number of occupied slots.
    DepositorCount,
    /// Occupied slot -> depositor. Slots `0..DepositorCount` are always filled.
    Slot(u32),
    /// Depositor -> ledger entry.
    Entry(Address),
}
