use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::constants::*;
use crate::errors::LedgerError;
use crate::events::*;
use crate::helpers::*;
use crate::storage::*;

#[contract]
pub struct PositionLedger;

#[contractimpl]
impl PositionLedger {
    /// Binds the ledger to its collateral and loan assets.
    /// Ratio and weekly rate start at the protocol defaults (150%, 5%).
    pub fn initialize(
        env: Env,
        admin: Address,
        collateral_token: Address,
        loan_token: Address,
    ) -> Result<(), LedgerError> {
        if is_initialized(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }
        admin.require_auth();
        if collateral_token == loan_token {
            return Err(LedgerError::InvalidConfig);
        }
        write_config(
            &env,
            &LedgerConfig {
                admin,
                collateral_token,
                loan_token,
                collateral_ratio_bps: DEFAULT_COLLATERAL_RATIO_BPS,
                weekly_rate_bps: DEFAULT_WEEKLY_INTEREST_RATE_BPS,
            },
        );
        write_totals(&env, &Totals::default());
        Ok(())
    }

    /// Admin: update the collateral ratio and weekly rate.
    /// Both apply to loans drawn afterwards; an open loan keeps the rate it was drawn at.
    pub fn set_params(
        env: Env,
        admin: Address,
        collateral_ratio_bps: u32,
        weekly_rate_bps: u32,
    ) -> Result<(), LedgerError> {
        let mut config = require_admin(&env, &admin)?;
        if collateral_ratio_bps < BASIS_POINTS || weekly_rate_bps > BASIS_POINTS {
            return Err(LedgerError::InvalidConfig);
        }
        config.collateral_ratio_bps = collateral_ratio_bps;
        config.weekly_rate_bps = weekly_rate_bps;
        write_config(&env, &config);
        ParamsUpdated {
            collateral_ratio_bps,
            weekly_rate_bps,
        }
        .publish(&env);
        Ok(())
    }

    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), LedgerError> {
        let mut config = require_admin(&env, &admin)?;
        config.admin = new_admin.clone();
        write_config(&env, &config);
        AdminChanged { admin: new_admin }.publish(&env);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, LedgerError> {
        read_config(&env)
    }

    /// Pull `amount` of the collateral asset from `user` (requires a prior `approve`
    /// to this contract) and credit it to their position.
    pub fn deposit(env: Env, user: Address, amount: u128) -> Result<(), LedgerError> {
        let config = read_config(&env)?;
        user.require_auth();
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }

        let mut position = read_position(&env, &user);
        let mut totals = read_totals(&env);
        position.collateral = position
            .collateral
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        totals.collateral = totals
            .collateral
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;

        // Funds come in before the position is credited.
        pull(&env, &config.collateral_token, &user, amount)?;

        write_position(&env, &user, &position);
        write_totals(&env, &totals);
        CollateralAdded { user, amount }.publish(&env);
        Ok(())
    }

    /// Open a loan of `amount` against the caller's collateral and pay it out from the
    /// ledger's loan-asset reserve.
    pub fn borrow(env: Env, user: Address, amount: u128) -> Result<(), LedgerError> {
        let config = read_config(&env)?;
        user.require_auth();

        let mut position = read_position(&env, &user);
        if position.principal > 0 {
            return Err(LedgerError::DebtAlreadyActive);
        }
        if amount == 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if position.collateral == 0 {
            return Err(LedgerError::NoCollateral);
        }
        let limit = borrow_limit(position.collateral, config.collateral_ratio_bps)?;
        if amount > limit {
            return Err(LedgerError::ExceedsCollateralLimit);
        }
        if custody_balance(&env, &config.loan_token) < amount {
            return Err(LedgerError::InsufficientReserve);
        }
        let now = env.ledger().timestamp();
        if now == 0 {
            return Err(LedgerError::InvalidTimestamp);
        }

        let mut totals = read_totals(&env);
        totals.principal = totals
            .principal
            .checked_add(amount)
            .ok_or(LedgerError::MathOverflow)?;
        position.principal = amount;
        position.borrowed_at = now;
        position.weekly_rate_bps = config.weekly_rate_bps;
        write_position(&env, &user, &position);
        write_totals(&env, &totals);

        // A failed payout returns Err, which rolls the writes above back.
        push(&env, &config.loan_token, &user, amount)?;

        LoanDrawn { user, amount }.publish(&env);
        Ok(())
    }

    /// Close the caller's loan by pulling principal plus accrued interest.
    pub fn repay(env: Env, user: Address) -> Result<(), LedgerError> {
        let config = read_config(&env)?;
        user.require_auth();

        let mut position = read_position(&env, &user);
        if position.principal == 0 {
            return Err(LedgerError::NoDebt);
        }
        let (owed, interest) = amount_owed(&position, env.ledger().timestamp())?;
        let principal = position.principal;

        let mut totals = read_totals(&env);
        totals.principal = totals
            .principal
            .checked_sub(principal)
            .ok_or(LedgerError::MathOverflow)?;

        pull(&env, &config.loan_token, &user, owed)?;

        position.principal = 0;
        position.borrowed_at = 0;
        position.weekly_rate_bps = 0;
        write_position(&env, &user, &position);
        write_totals(&env, &totals);
        DebtRepaid {
            user,
            principal,
            interest,
        }
        .publish(&env);
        Ok(())
    }

    /// Return `amount` of collateral to the caller. Only allowed with no open loan.
    pub fn withdraw(env: Env, user: Address, amount: u128) -> Result<(), LedgerError> {
        let config = read_config(&env)?;
        user.require_auth();
        let position = read_position(&env, &user);
        remove_collateral(&env, &config, &user, position, amount)
    }

    /// Return all of the caller's collateral; yields the amount withdrawn.
    pub fn withdraw_all(env: Env, user: Address) -> Result<u128, LedgerError> {
        let config = read_config(&env)?;
        user.require_auth();
        let position = read_position(&env, &user);
        let amount = position.collateral;
        remove_collateral(&env, &config, &user, position, amount)?;
        Ok(amount)
    }

    /// `(collateral, principal, accrued_interest)` as of the current ledger time.
    pub fn fetch_position(env: Env, user: Address) -> Result<(u128, u128, u128), LedgerError> {
        read_config(&env)?;
        let position = read_position(&env, &user);
        let interest = accrued_interest(&position, env.ledger().timestamp())?;
        Ok((position.collateral, position.principal, interest))
    }

    pub fn get_position(env: Env, user: Address) -> Position {
        read_position(&env, &user)
    }

    pub fn borrow_limit(env: Env, user: Address) -> Result<u128, LedgerError> {
        let config = read_config(&env)?;
        let position = read_position(&env, &user);
        borrow_limit(position.collateral, config.collateral_ratio_bps)
    }

    /// What `repay` would pull right now; 0 with no open loan.
    pub fn amount_owed(env: Env, user: Address) -> Result<u128, LedgerError> {
        read_config(&env)?;
        let position = read_position(&env, &user);
        let (owed, _) = amount_owed(&position, env.ledger().timestamp())?;
        Ok(owed)
    }

    /// `(total_collateral, total_principal)` across all positions.
    pub fn get_totals(env: Env) -> (u128, u128) {
        let totals = read_totals(&env);
        (totals.collateral, totals.principal)
    }

    /// Loan asset currently held by the ledger and available to lend.
    pub fn get_reserve(env: Env) -> Result<u128, LedgerError> {
        let config = read_config(&env)?;
        Ok(custody_balance(&env, &config.loan_token))
    }
}

fn require_admin(env: &Env, admin: &Address) -> Result<LedgerConfig, LedgerError> {
    let config = read_config(env)?;
    if config.admin != *admin {
        return Err(LedgerError::Unauthorized);
    }
    admin.require_auth();
    Ok(config)
}

fn remove_collateral(
    env: &Env,
    config: &LedgerConfig,
    user: &Address,
    mut position: Position,
    amount: u128,
) -> Result<(), LedgerError> {
    if position.principal > 0 {
        return Err(LedgerError::DebtPending);
    }
    if position.collateral == 0 {
        return Err(LedgerError::NoCollateral);
    }
    if amount == 0 {
        return Err(LedgerError::InvalidAmount);
    }
    if amount > position.collateral {
        return Err(LedgerError::InsufficientCollateral);
    }

    let mut totals = read_totals(env);
    totals.collateral = totals
        .collateral
        .checked_sub(amount)
        .ok_or(LedgerError::MathOverflow)?;
    position.collateral -= amount;
    write_position(env, user, &position);
    write_totals(env, &totals);

    push(env, &config.collateral_token, user, amount)?;

    CollateralRemoved {
        user: user.clone(),
        amount,
    }
    .publish(env);
    Ok(())
}
