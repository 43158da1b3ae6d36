use log::info;
use solana_program::{pubkey::Pubkey, stake, stake::state::StakeStateV2};
use solana_sdk::{
    native_token::lamports_to_sol,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address_with_program_id;

use super::{
    add_associated_token_account, fetch_pool_token_account, finalize_transaction,
    new_stake_account, DaoAccounts,
};
use crate::{
    accounts::{StakePool, ValidatorList},
    errors::StakePoolClientError,
    instructions::{WithdrawStake, WithdrawStakeWithDao},
    math::calculate_lamports_withdraw_amount,
    pdas::find_withdraw_authority_pda,
    rpc::{fetch_required_account, StakePoolRpc},
    withdraw_accounts::prepare_withdraw_account,
    StakePoolConfig,
};

#[derive(Clone, Debug)]
pub struct UndelegateSolArgs {
    pub user: Pubkey,
    pub pool_tokens: u64,
}

/// Builds a transaction burning `pool_tokens` for a new stake account split
/// off a validator stake account, then deactivates it.
///
/// The stake account is owned by the user and becomes withdrawable once it
/// has cooled down.
pub async fn undelegate_sol(
    rpc: &dyn StakePoolRpc,
    config: &StakePoolConfig,
    args: UndelegateSolArgs,
) -> Result<Transaction, StakePoolClientError> {
    let UndelegateSolArgs { user, pool_tokens } = args;

    let stake_pool: StakePool = fetch_required_account(rpc, &config.stake_pool).await?;
    let dao = DaoAccounts::load(rpc, config, &user).await?;

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

    let validator_list: ValidatorList =
        fetch_required_account(rpc, &stake_pool.validator_list).await?;
    let withdraw_account =
        prepare_withdraw_account(&validator_list, &stake_pool, config, pool_tokens)?;

    let lamports = calculate_lamports_withdraw_amount(&stake_pool, withdraw_account.pool_amount);
    match withdraw_account.vote_address {
        Some(vote_address) => info!(
            "Withdrawing ◎{} from stake account {}, delegated to {}",
            lamports_to_sol(lamports),
            withdraw_account.stake_address,
            vote_address
        ),
        None => info!(
            "Withdrawing ◎{} from stake account {}",
            lamports_to_sol(lamports),
            withdraw_account.stake_address
        ),
    }

    let stake_rent = rpc
        .get_minimum_balance_for_rent_exemption(StakeStateV2::size_of())
        .await?;
    let stake_receiver =
        new_stake_account(rpc, config, &user, stake_rent, &mut instructions).await?;

    let (withdraw_authority, _) = find_withdraw_authority_pda(&config.stake_pool, &config.program_id);
    instructions.push(
        WithdrawStakeWithDao {
            withdraw_stake: WithdrawStake {
                stake_pool: config.stake_pool,
                validator_list: stake_pool.validator_list,
                withdraw_authority,
                validator_stake: withdraw_account.stake_address,
                destination_stake: stake_receiver,
                destination_stake_authority: user,
                source_transfer_authority: transfer_authority.pubkey(),
                source_pool_account: pool_token_account,
                manager_fee_account: stake_pool.manager_fee_account,
                pool_mint: stake_pool.pool_mint,
                token_program: stake_pool.token_program_id,
            },
            dao_community_tokens_to,
            community_token_staking_rewards: dao.staking_rewards,
            owner_wallet: user,
            community_token: dao.community_token,
        }
        .instruction(&config.program_id, withdraw_account.pool_amount),
    );
    instructions.push(stake::instruction::deactivate_stake(&stake_receiver, &user));

    finalize_transaction(rpc, &instructions, &user, &transfer_authority).await
}
