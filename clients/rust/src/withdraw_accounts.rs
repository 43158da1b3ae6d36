//! Selection of the validator stake account a withdrawal splits from.

use log::{debug, info};
use solana_program::pubkey::Pubkey;

use crate::{
    accounts::{StakePool, ValidatorList},
    errors::StakePoolClientError,
    math::{apply_withdrawal_fee_gross_up, calculate_pool_tokens_for_deposit},
    pdas::{find_stake_pda, find_transient_stake_pda},
    StakePoolConfig,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WithdrawAccountKind {
    /// Stake account of the pool's preferred withdraw validator.
    Preferred,
    Active,
    Transient,
}

/// A stake account that could back a withdrawal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawCandidate {
    pub kind: WithdrawAccountKind,
    pub vote_address: Option<Pubkey>,
    pub stake_address: Pubkey,
    pub lamports: u64,
}

/// The stake account chosen for a withdrawal and the pool tokens to burn.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawAccount {
    pub vote_address: Option<Pubkey>,
    pub stake_address: Pubkey,
    pub pool_amount: u64,
}

/// Lists the stake accounts of active validators, largest balance first.
///
/// Empty stake and transient accounts are left out. Equal balances keep the
/// validator list order.
pub fn collect_withdraw_candidates(
    validator_list: &ValidatorList,
    stake_pool: &StakePool,
    config: &StakePoolConfig,
) -> Vec<WithdrawCandidate> {
    let mut candidates = Vec::new();

    for validator in validator_list.active_validators() {
        let vote_address = validator.vote_account_address;

        if validator.active_stake_lamports != 0 {
            let (stake_address, _) =
                find_stake_pda(&vote_address, &config.stake_pool, &config.program_id);
            let kind = if stake_pool.preferred_withdraw_validator_vote_address == Some(vote_address)
            {
                WithdrawAccountKind::Preferred
            } else {
                WithdrawAccountKind::Active
            };
            candidates.push(WithdrawCandidate {
                kind,
                vote_address: Some(vote_address),
                stake_address,
                lamports: validator.active_stake_lamports,
            });
        }

        if validator.transient_stake_lamports != 0 {
            let (stake_address, _) = find_transient_stake_pda(
                &vote_address,
                &config.stake_pool,
                validator.transient_seed_suffix_start,
                &config.program_id,
            );
            candidates.push(WithdrawCandidate {
                kind: WithdrawAccountKind::Transient,
                vote_address: Some(vote_address),
                stake_address,
                lamports: validator.transient_stake_lamports,
            });
        }
    }

    // `sort_by` is stable
    candidates.sort_by(|a, b| b.lamports.cmp(&a.lamports));
    candidates
}

/// Pool tokens a withdrawal from a stake account holding `lamports` may
/// burn, fee included.
pub fn withdrawable_pool_tokens(stake_pool: &StakePool, lamports: u64) -> u64 {
    let pool_tokens = calculate_pool_tokens_for_deposit(stake_pool, lamports);
    apply_withdrawal_fee_gross_up(pool_tokens, &stake_pool.stake_withdrawal_fee)
}

/// Picks the single stake account that covers `pool_tokens`.
///
/// Only plain active validator stake accounts are considered and the first
/// one, by descending balance, that covers the whole amount wins. A
/// withdrawal is never split across validators.
pub fn prepare_withdraw_account(
    validator_list: &ValidatorList,
    stake_pool: &StakePool,
    config: &StakePoolConfig,
    pool_tokens: u64,
) -> Result<WithdrawAccount, StakePoolClientError> {
    let candidates = collect_withdraw_candidates(validator_list, stake_pool, config);
    debug!(
        "{} withdraw candidates for {} pool tokens",
        candidates.len(),
        pool_tokens
    );

    let mut max_pool_tokens = 0;
    for candidate in candidates
        .iter()
        .filter(|candidate| candidate.kind == WithdrawAccountKind::Active)
    {
        let capacity = withdrawable_pool_tokens(stake_pool, candidate.lamports);
        max_pool_tokens = max_pool_tokens.max(capacity);

        let pool_amount = capacity.min(pool_tokens);
        if pool_amount == 0 || capacity < pool_tokens {
            continue;
        }

        info!(
            "Withdrawing {} pool tokens from stake account {}",
            pool_amount, candidate.stake_address
        );
        return Ok(WithdrawAccount {
            vote_address: candidate.vote_address,
            stake_address: candidate.stake_address,
            pool_amount,
        });
    }

    Err(StakePoolClientError::NoEligibleWithdrawAccount { max_pool_tokens })
}
