#![no_std]

//! Over-collateralized lending ledger.
//!
//! Users deposit a collateral asset, open a single loan in a separate loan asset up to
//! `collateral * BASIS_POINTS / collateral_ratio_bps`, and repay principal plus a flat
//! weekly interest charge for every completed week the loan was open. Collateral can
//! only leave once the loan is closed. Both assets are reached through the standard
//! token interface, so any SEP-41 token can back either side.

mod constants;
mod contract;
mod errors;
mod events;
mod helpers;
mod storage;

pub use constants::*;
pub use contract::{PositionLedger, PositionLedgerClient};
pub use errors::LedgerError;
pub use events::{
    AdminChanged, CollateralAdded, CollateralRemoved, DebtRepaid, ExternalCallFailed, LoanDrawn,
    ParamsUpdated,
};
pub use storage::{LedgerConfig, Position};
