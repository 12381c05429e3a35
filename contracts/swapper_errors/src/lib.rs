#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups vault errors by concern for monitoring and off-chain display.
/// @dev    Switch on the category first, then on the specific `SwapperError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup errors (codes 1-99).
    Initialization,
    /// Caller permission errors.
    Authorization,
    /// Rejected arguments: zero fee, non-positive amount, foreign asset.
    Validation,
    /// Depositor registry and balance errors.
    Ledger,
    /// Checked arithmetic errors (codes 700-799).
    Arithmetic,
}

/// @title  SwapperError
/// @notice Canonical error enum returned by every swapper vault entry point.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Code 104 is unassigned and must stay that way.
///
/// Error Code Layout:
///   1   -  99 : Initialization
///   100 - 199 : Fee, deposit and withdrawal failures
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum SwapperError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    /// Configured maximum depositor count is zero.
    InvalidCapacity = 3,

    // --- Vault operations (100-199) ---
    /// Caller is not the vault owner.
    /// Entry points: change_current_fee
    NotOwner = 100,

    /// Fee must be strictly positive.
    /// Entry points: initialize, change_current_fee
    InvalidFee = 101,

    /// Deposit amount must be strictly positive.
    /// Entry points: deposit
    InvalidAmount = 102,

    /// Caller has no ledger entry to withdraw.
    /// Entry points: withdraw
    NoDeposit = 103,

    /// Registry is full and the caller is not already a depositor.
    /// Entry points: deposit
    TooManyDepositors = 105,

    /// Asset argument does not match the token the vault was initialized with.
    /// Entry points: deposit, withdraw
    UnsupportedAsset = 106,

    // --- Arithmetic (700-799) ---
    /// Balance or counter arithmetic would overflow.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every SwapperError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for SwapperError {
    fn category(&self) -> ErrorCategory {
        match self {
            SwapperError::NotInitialized
            | SwapperError::AlreadyInitialized
            | SwapperError::InvalidCapacity => ErrorCategory::Initialization,

            SwapperError::NotOwner => ErrorCategory::Authorization,

            SwapperError::InvalidFee
            | SwapperError::InvalidAmount
            | SwapperError::UnsupportedAsset => ErrorCategory::Validation,

            SwapperError::NoDeposit | SwapperError::TooManyDepositors => ErrorCategory::Ledger,

            SwapperError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            SwapperError::NotInitialized => "Contract has not been initialized",
            SwapperError::AlreadyInitialized => "Contract has already been initialized",
            SwapperError::InvalidCapacity => "Maximum depositor count must be positive",
            SwapperError::NotOwner => "Caller is not the contract owner",
            SwapperError::InvalidFee => "Fee must be strictly positive (> 0)",
            SwapperError::InvalidAmount => "Amount must be strictly positive (> 0)",
            SwapperError::NoDeposit => "No deposit found for the caller",
            SwapperError::TooManyDepositors => "Depositor registry is full",
            SwapperError::UnsupportedAsset => "Asset is not the token held by this vault",
            SwapperError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}
