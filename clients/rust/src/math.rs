//! Integer arithmetic mirroring the stake pool program.
//!
//! Products of two `u64` values are computed in `u128` and divisions floor,
//! matching the program's rounding. Floating point is only used by
//! [`divide_to_f64`] for display.

use crate::accounts::{Fee, RateOfExchange, StakePool};

/// Pool tokens minted for a deposit of `lamports`.
///
/// An empty pool (no supply or no lamports) mints one token per lamport.
pub fn calculate_pool_tokens_for_deposit(stake_pool: &StakePool, lamports: u64) -> u64 {
    if stake_pool.pool_token_supply == 0 || stake_pool.total_lamports == 0 {
        return lamports;
    }
    divide_floor(
        lamports as u128 * stake_pool.pool_token_supply as u128,
        stake_pool.total_lamports as u128,
    )
}

/// Lamports released by burning `pool_tokens`.
///
/// Dust amounts worth less than one lamport round down to zero.
pub fn calculate_lamports_withdraw_amount(stake_pool: &StakePool, pool_tokens: u64) -> u64 {
    let numerator = pool_tokens as u128 * stake_pool.total_lamports as u128;
    let denominator = stake_pool.pool_token_supply as u128;
    if numerator < denominator {
        return 0;
    }
    divide_floor(numerator, denominator)
}

/// Gross amount to request so that `amount` is left once the program takes
/// `fee` out of it: `amount * denominator / (denominator - numerator)`.
///
/// An unconfigured fee leaves the amount unchanged. A fee of 100% or more
/// leaves nothing to withdraw.
pub fn apply_withdrawal_fee_gross_up(amount: u64, fee: &Fee) -> u64 {
    if !fee.is_configured() {
        return amount;
    }
    let Some(net) = fee.denominator.checked_sub(fee.numerator) else {
        return 0;
    };
    divide_floor(amount as u128 * fee.denominator as u128, net as u128)
}

/// Lamports paid out for `pool_tokens` at the pool's rate of exchange.
pub fn pool_tokens_to_lamports(rate: Option<&RateOfExchange>, pool_tokens: u64) -> u64 {
    match rate {
        Some(rate) if rate.denominator != 0 => divide_floor(
            pool_tokens as u128 * rate.numerator as u128,
            rate.denominator as u128,
        ),
        _ => pool_tokens,
    }
}

/// Largest pool token amount whose payout fits in `lamports`.
pub fn lamports_to_pool_tokens(rate: Option<&RateOfExchange>, lamports: u64) -> u64 {
    match rate {
        Some(rate) if rate.denominator != 0 && rate.numerator != 0 => divide_floor(
            lamports as u128 * rate.denominator as u128,
            rate.numerator as u128,
        ),
        _ => lamports,
    }
}

/// Quotient plus the reduced remainder fraction, for display only.
///
/// Returns `0.0` when `denominator` is zero.
pub fn divide_to_f64(numerator: u128, denominator: u128) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    let gcd = gcd(remainder, denominator);
    quotient as f64 + (remainder / gcd) as f64 / (denominator / gcd) as f64
}

/// Floor division that returns `0` for a zero denominator and saturates at
/// `u64::MAX`.
fn divide_floor(numerator: u128, denominator: u128) -> u64 {
    if denominator == 0 {
        return 0;
    }
    u64::try_from(numerator / denominator).unwrap_or(u64::MAX)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
