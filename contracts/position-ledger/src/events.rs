use soroban_sdk::{contractevent, Address, Symbol};

/// Collateral pulled into the ledger.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralAdded {
    #[topic]
    pub user: Address,
    pub amount: u128,
}

/// Loan asset paid out against a position.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoanDrawn {
    #[topic]
    pub user: Address,
    pub amount: u128,
}

/// Loan closed; `principal + interest` was pulled from the borrower.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DebtRepaid {
    #[topic]
    pub user: Address,
    pub principal: u128,
    pub interest: u128,
}

/// Collateral returned to its owner.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralRemoved {
    #[topic]
    pub user: Address,
    pub amount: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParamsUpdated {
    pub collateral_ratio_bps: u32,
    pub weekly_rate_bps: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChanged {
    #[topic]
    pub admin: Address,
}

/// Records token calls that reverted or hit a host error.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExternalCallFailed {
    #[topic]
    pub contract: Address,
    #[topic]
    pub function: Symbol,
    pub failure_kind: u32,
}
