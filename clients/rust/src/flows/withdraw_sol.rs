use log::{debug, info};
use solana_program::{pubkey::Pubkey, stake::state::StakeStateV2};
use solana_sdk::{
    native_token::lamports_to_sol,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address_with_program_id;

use super::{
    add_associated_token_account, fetch_pool_token_account, finalize_transaction, DaoAccounts,
};
use crate::{
    accounts::StakePool,
    errors::StakePoolClientError,
    instructions::WithdrawSolWithDao,
    math::{lamports_to_pool_tokens, pool_tokens_to_lamports},
    pdas::find_withdraw_authority_pda,
    rpc::{fetch_required_account, StakePoolRpc},
    StakePoolConfig,
};

#[derive(Clone, Debug)]
pub struct WithdrawSolArgs {
    pub user: Pubkey,
    pub pool_tokens: u64,
    /// Must match the pool's SOL withdraw authority when given. It signs the
    /// transaction alongside the user.
    pub sol_withdraw_authority: Option<Pubkey>,
}

/// Builds a transaction burning `pool_tokens` for lamports paid straight out
/// of the pool reserve into the user wallet.
pub async fn withdraw_sol(
    rpc: &dyn StakePoolRpc,
    config: &StakePoolConfig,
    args: WithdrawSolArgs,
) -> Result<Transaction, StakePoolClientError> {
    let WithdrawSolArgs {
        user,
        pool_tokens,
        sol_withdraw_authority,
    } = args;

    let stake_pool: StakePool = fetch_required_account(rpc, &config.stake_pool).await?;
    let dao = DaoAccounts::load(rpc, config, &user).await?;

    check_reserve_liquidity(rpc, &stake_pool, pool_tokens).await?;

    if let Some(received) = sol_withdraw_authority {
        if stake_pool.sol_withdraw_authority != Some(received) {
            return Err(StakePoolClientError::AuthorityMismatch {
                expected: stake_pool.sol_withdraw_authority,
                received,
            });
        }
    }

    let pool_token_account = get_associated_token_address_with_program_id(
        &user,
        &stake_pool.pool_mint,
        &stake_pool.token_program_id,
    );
    fetch_pool_token_account(rpc, &pool_token_account, &stake_pool.pool_mint, pool_tokens).await?;

    let transfer_authority = Keypair::new();
    let mut instructions = Vec::new();

    let dao_community_tokens_to = add_associated_token_account(
        rpc,
        &user,
        &dao.community_token_mint,
        &spl_token::id(),
        &mut instructions,
    )
    .await?
    .address();

    if let Some(instruction) = dao.create_staking_rewards(config, &user) {
        instructions.push(instruction);
    }

    instructions.push(spl_token::instruction::approve(
        &stake_pool.token_program_id,
        &pool_token_account,
        &transfer_authority.pubkey(),
        &user,
        &[],
        pool_tokens,
    )?);

    let (withdraw_authority, _) = find_withdraw_authority_pda(&config.stake_pool, &config.program_id);
    instructions.push(
        WithdrawSolWithDao {
            stake_pool: config.stake_pool,
            withdraw_authority,
            source_transfer_authority: transfer_authority.pubkey(),
            pool_tokens_from: pool_token_account,
            dao_community_tokens_to,
            reserve_stake: stake_pool.reserve_stake,
            lamports_to: user,
            manager_fee_account: stake_pool.manager_fee_account,
            pool_mint: stake_pool.pool_mint,
            token_program: stake_pool.token_program_id,
            community_token_staking_rewards: dao.staking_rewards,
            owner_wallet: user,
            community_token: dao.community_token,
            sol_withdraw_authority,
        }
        .instruction(&config.program_id, pool_tokens),
    );

    info!(
        "Withdrawing {} pool tokens from reserve {}",
        pool_tokens, stake_pool.reserve_stake
    );
    finalize_transaction(rpc, &instructions, &user, &transfer_authority).await
}

/// Fails when the reserve, minus the rent of a stake account, cannot pay out
/// `pool_tokens` at the pool's rate of exchange.
///
/// The error carries the largest pool token amount the reserve can cover.
async fn check_reserve_liquidity(
    rpc: &dyn StakePoolRpc,
    stake_pool: &StakePool,
    pool_tokens: u64,
) -> Result<(), StakePoolClientError> {
    let rate = stake_pool.rate_of_exchange.as_ref();
    let lamports = pool_tokens_to_lamports(rate, pool_tokens);

    let reserve_balance = rpc.get_balance(&stake_pool.reserve_stake).await?;
    let stake_rent = rpc
        .get_minimum_balance_for_rent_exemption(StakeStateV2::size_of())
        .await?;
    let available = reserve_balance.saturating_sub(stake_rent);
    debug!(
        "Reserve holds ◎{} available, ◎{} requested",
        lamports_to_sol(available),
        lamports_to_sol(lamports)
    );

    if available < lamports {
        return Err(StakePoolClientError::InsufficientFunds {
            requested: pool_tokens,
            available: lamports_to_pool_tokens(rate, available),
        });
    }
    Ok(())
}
