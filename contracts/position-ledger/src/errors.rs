use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    /// Ratio below 100%, rate above 100% per week, or identical assets.
    InvalidConfig = 4,
    /// Zero amount, or an amount that does not fit the token's `i128`.
    InvalidAmount = 5,
    /// Withdrawal larger than the deposited collateral.
    InsufficientCollateral = 6,
    NoCollateral = 7,
    DebtAlreadyActive = 8,
    NoDebt = 9,
    /// Collateral cannot leave while a loan is open.
    DebtPending = 10,
    ExceedsCollateralLimit = 11,
    /// The ledger does not hold enough of the loan asset to fund the borrow.
    InsufficientReserve = 12,
    /// Token call refused: missing balance or allowance, or the token reverted.
    TransferFailed = 13,
    MathOverflow = 14,
    /// Loans cannot be opened at ledger timestamp zero.
    InvalidTimestamp = 15,
}
