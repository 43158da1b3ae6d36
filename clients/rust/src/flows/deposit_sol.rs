use log::{info, warn};
use solana_program::{pubkey::Pubkey, system_instruction};
use solana_sdk::{
    native_token::lamports_to_sol,
    signature::{Keypair, Signer},
    transaction::Transaction,
};

use super::{add_associated_token_account, finalize_transaction, DaoAccounts};
use crate::{
    accounts::{StakePool, TokenAccount},
    errors::StakePoolClientError,
    instructions::DepositSolWithDao,
    pdas::find_withdraw_authority_pda,
    rpc::{fetch_required_account, StakePoolRpc},
    StakePoolConfig,
};

/// Lamports kept in the wallet for transaction fees.
pub const LAMPORTS_TO_LEAVE_IN_WALLET: u64 = 3_000_000;

#[derive(Clone, Debug)]
pub struct DepositSolArgs {
    pub user: Pubkey,
    pub lamports: u64,
    /// Defaults to the user's associated pool token account.
    pub pool_token_receiver: Option<Pubkey>,
    /// Defaults to the user's associated community token account.
    pub community_token_receiver: Option<Pubkey>,
    /// Defaults to the pool token receiver.
    pub referrer: Option<Pubkey>,
}

/// Builds a transaction depositing `lamports` into the pool reserve for pool
/// tokens.
///
/// When the wallet cannot cover the deposit plus fees and the rent of the
/// token accounts to create, the deposit is reduced by that reserve.
pub async fn deposit_sol(
    rpc: &dyn StakePoolRpc,
    config: &StakePoolConfig,
    args: DepositSolArgs,
) -> Result<Transaction, StakePoolClientError> {
    let DepositSolArgs {
        user,
        mut lamports,
        pool_token_receiver,
        community_token_receiver,
        referrer,
    } = args;

    let balance = rpc.get_balance(&user).await?;
    if balance < lamports {
        return Err(StakePoolClientError::InsufficientFunds {
            requested: lamports,
            available: balance,
        });
    }

    let stake_pool: StakePool = fetch_required_account(rpc, &config.stake_pool).await?;

    let token_account_rent = rpc
        .get_minimum_balance_for_rent_exemption(TokenAccount::LEN)
        .await?;
    let missing_accounts = [pool_token_receiver, community_token_receiver]
        .iter()
        .filter(|account| account.is_none())
        .count() as u64;
    let reserve = LAMPORTS_TO_LEAVE_IN_WALLET + missing_accounts * token_account_rent;
    if balance < lamports.saturating_add(reserve) {
        lamports = lamports
            .checked_sub(reserve)
            .ok_or(StakePoolClientError::InsufficientFunds {
                requested: lamports,
                available: balance.saturating_sub(reserve),
            })?;
        warn!(
            "Deposit reduced to ◎{} to cover fees and rent",
            lamports_to_sol(lamports)
        );
    }

    let dao = DaoAccounts::load(rpc, config, &user).await?;

    let transfer = Keypair::new();
    let mut instructions = Vec::new();

    if let Some(instruction) = dao.create_staking_rewards(config, &user) {
        instructions.push(instruction);
    }

    instructions.push(system_instruction::transfer(
        &user,
        &transfer.pubkey(),
        lamports,
    ));

    let pool_tokens_to = match pool_token_receiver {
        Some(address) => address,
        None => add_associated_token_account(
            rpc,
            &user,
            &stake_pool.pool_mint,
            &stake_pool.token_program_id,
            &mut instructions,
        )
        .await?
        .address(),
    };
    let dao_community_tokens_to = match community_token_receiver {
        Some(address) => address,
        None => add_associated_token_account(
            rpc,
            &user,
            &dao.community_token_mint,
            &spl_token::id(),
            &mut instructions,
        )
        .await?
        .address(),
    };

    let (withdraw_authority, _) = find_withdraw_authority_pda(&config.stake_pool, &config.program_id);
    instructions.push(
        DepositSolWithDao {
            stake_pool: config.stake_pool,
            withdraw_authority,
            reserve_stake: stake_pool.reserve_stake,
            lamports_from: transfer.pubkey(),
            pool_tokens_to,
            dao_community_tokens_to,
            manager_fee_account: stake_pool.manager_fee_account,
            referrer_pool_tokens_account: referrer.unwrap_or(pool_tokens_to),
            pool_mint: stake_pool.pool_mint,
            token_program: stake_pool.token_program_id,
            community_token_staking_rewards: dao.staking_rewards,
            owner_wallet: user,
            community_token: dao.community_token,
            deposit_authority: None,
        }
        .instruction(&config.program_id, lamports),
    );

    info!(
        "Depositing ◎{} into stake pool {}",
        lamports_to_sol(lamports),
        config.stake_pool
    );
    finalize_transaction(rpc, &instructions, &user, &transfer).await
}
