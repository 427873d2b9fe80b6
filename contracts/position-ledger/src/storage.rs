use soroban_sdk::{contracttype, Address, Env};

use crate::constants::{TTL_EXTEND_TO, TTL_THRESHOLD};
use crate::errors::LedgerError;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,            // LedgerConfig (instance)
    Totals,            // Totals (instance)
    Position(Address), // Position per user (persistent)
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub admin: Address,
    pub collateral_token: Address,
    pub loan_token: Address,
    pub collateral_ratio_bps: u32,
    pub weekly_rate_bps: u32,
}

/// One user's collateral and debt.
///
/// `borrowed_at` is non-zero exactly when `principal` is non-zero. `weekly_rate_bps`
/// is the rate in force when the loan was drawn and is zero with no open loan.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub collateral: u128,
    pub principal: u128,
    pub borrowed_at: u64,
    pub weekly_rate_bps: u32,
}

impl Position {
    pub fn is_empty(&self) -> bool {
        self.collateral == 0
            && self.principal == 0
            && self.borrowed_at == 0
            && self.weekly_rate_bps == 0
    }
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Totals {
    pub collateral: u128,
    pub principal: u128,
}

pub fn bump_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn read_config(env: &Env) -> Result<LedgerConfig, LedgerError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LedgerError::NotInitialized)?;
    bump_instance_ttl(env);
    Ok(config)
}

pub fn write_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance_ttl(env);
}

pub fn read_totals(env: &Env) -> Totals {
    env.storage()
        .instance()
        .get(&DataKey::Totals)
        .unwrap_or_default()
}

pub fn write_totals(env: &Env, totals: &Totals) {
    env.storage().instance().set(&DataKey::Totals, totals);
}

/// Missing entries read as the all-zero position.
pub fn read_position(env: &Env, user: &Address) -> Position {
    let persistent = env.storage().persistent();
    let key = DataKey::Position(user.clone());
    match persistent.get::<_, Position>(&key) {
        Some(position) => {
            persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
            position
        }
        None => Position::default(),
    }
}

/// An all-zero position is dropped rather than stored.
pub fn write_position(env: &Env, user: &Address, position: &Position) {
    let persistent = env.storage().persistent();
    let key = DataKey::Position(user.clone());
    if position.is_empty() {
        persistent.remove(&key);
        return;
    }
    persistent.set(&key, position);
    persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
