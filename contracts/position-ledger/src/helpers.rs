use soroban_sdk::{token, Address, Env, IntoVal, InvokeError, Symbol, Val, Vec};

use crate::constants::{BASIS_POINTS, WEEK_SECONDS};
use crate::errors::LedgerError;
use crate::events::ExternalCallFailed;
use crate::storage::Position;

/// Largest principal `collateral` can back at `ratio_bps`.
pub fn borrow_limit(collateral: u128, ratio_bps: u32) -> Result<u128, LedgerError> {
    if ratio_bps == 0 {
        return Err(LedgerError::InvalidConfig);
    }
    let scaled = collateral
        .checked_mul(u128::from(BASIS_POINTS))
        .ok_or(LedgerError::MathOverflow)?;
    Ok(scaled / u128::from(ratio_bps))
}

/// Interest owed on `position` at `now`.
///
/// A flat `principal * weekly_rate_bps / BASIS_POINTS` is charged for every completed
/// week since `borrowed_at`, at the rate fixed when the loan was drawn; a partial week
/// accrues nothing. Both `repay` and the read path go through here so a quote always
/// matches what repayment would pull.
pub fn accrued_interest(position: &Position, now: u64) -> Result<u128, LedgerError> {
    if position.principal == 0 {
        return Ok(0);
    }
    let weeks = now.saturating_sub(position.borrowed_at) / WEEK_SECONDS;
    if weeks == 0 {
        return Ok(0);
    }
    let per_week = position
        .principal
        .checked_mul(u128::from(position.weekly_rate_bps))
        .ok_or(LedgerError::MathOverflow)?
        / u128::from(BASIS_POINTS);
    per_week
        .checked_mul(u128::from(weeks))
        .ok_or(LedgerError::MathOverflow)
}

/// Principal plus accrued interest.
pub fn amount_owed(position: &Position, now: u64) -> Result<(u128, u128), LedgerError> {
    let interest = accrued_interest(position, now)?;
    let owed = position
        .principal
        .checked_add(interest)
        .ok_or(LedgerError::MathOverflow)?;
    Ok((owed, interest))
}

pub fn to_i128(amount: u128) -> Result<i128, LedgerError> {
    i128::try_from(amount).map_err(|_| LedgerError::InvalidAmount)
}

/// Invokes a token transfer, reporting a revert or host failure as `TransferFailed`
/// after recording it in an `ExternalCallFailed` event.
fn transfer_or_fail<A>(env: &Env, token: &Address, func: &str, args: A) -> Result<(), LedgerError>
where
    A: IntoVal<Env, Vec<Val>>,
{
    let function = Symbol::new(env, func);
    let args: Vec<Val> = args.into_val(env);
    let failure_kind = match env.try_invoke_contract::<(), InvokeError>(token, &function, args) {
        Ok(Ok(())) => return Ok(()),
        Err(Ok(_)) => 0, // token reverted
        Ok(Err(_)) | Err(Err(_)) => 1,
    };
    ExternalCallFailed {
        contract: token.clone(),
        function,
        failure_kind,
    }
    .publish(env);
    Err(LedgerError::TransferFailed)
}

/// Moves `amount` of `token` from `owner` into the ledger using the allowance `owner`
/// granted to the ledger.
pub fn pull(env: &Env, token: &Address, owner: &Address, amount: u128) -> Result<(), LedgerError> {
    let amount = to_i128(amount)?;
    let ledger = env.current_contract_address();
    let client = token::Client::new(env, token);
    if client.balance(owner) < amount || client.allowance(owner, &ledger) < amount {
        return Err(LedgerError::TransferFailed);
    }
    transfer_or_fail(
        env,
        token,
        "transfer_from",
        (ledger.clone(), owner.clone(), ledger, amount),
    )
}

/// Pays `amount` of `token` out of the ledger's own balance.
pub fn push(env: &Env, token: &Address, to: &Address, amount: u128) -> Result<(), LedgerError> {
    let amount = to_i128(amount)?;
    transfer_or_fail(
        env,
        token,
        "transfer",
        (env.current_contract_address(), to.clone(), amount),
    )
}

/// The ledger's balance of `token`.
pub fn custody_balance(env: &Env, token: &Address) -> u128 {
    let balance = token::Client::new(env, token).balance(&env.current_contract_address());
    u128::try_from(balance).unwrap_or(0)
}
