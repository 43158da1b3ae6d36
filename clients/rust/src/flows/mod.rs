//! Transaction assembly for deposit, undelegate and withdraw.
//!
//! Every flow reads what it needs through [`StakePoolRpc`], builds the
//! instruction list, signs with the ephemeral keypair it introduced and
//! returns the transaction without submitting it. The user wallet is the fee
//! payer and still has to sign.

mod deposit_sol;
mod undelegate_sol;
mod withdraw_sol;

use log::debug;
use solana_program::{
    instruction::Instruction, pubkey::Pubkey, stake, stake::state::StakeStateV2,
    system_instruction,
};
use solana_sdk::{signature::Keypair, transaction::Transaction};
use spl_associated_token_account::{
    get_associated_token_address_with_program_id,
    instruction::create_associated_token_account_idempotent,
};

pub use deposit_sol::*;
pub use undelegate_sol::*;
pub use withdraw_sol::*;

use crate::{
    accounts::{CommunityToken, DaoState, TokenAccount},
    errors::StakePoolClientError,
    instructions::CreateCommunityTokenStakingRewards,
    pdas::{
        find_community_token_pda, find_community_token_staking_rewards_counter_pda,
        find_community_token_staking_rewards_pda, find_dao_state_pda,
    },
    rpc::{account_exists, fetch_required_account, StakePoolRpc},
    StakePoolConfig,
};

/// Stake accounts a wallet may hold for pending withdrawals.
pub const MAX_WITHDRAW_STAKE_ACCOUNTS: u64 = 12;

/// Outcome of [`add_associated_token_account`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssociatedAccount {
    /// A create instruction was added.
    Created(Pubkey),
    AlreadyExists(Pubkey),
}

impl AssociatedAccount {
    pub fn address(&self) -> Pubkey {
        match self {
            AssociatedAccount::Created(address) | AssociatedAccount::AlreadyExists(address) => {
                *address
            }
        }
    }
}

/// Adds an idempotent create instruction for the associated token account
/// of `owner` and `mint` when it does not exist yet.
///
/// Another transaction creating the account first is not an error on chain.
pub async fn add_associated_token_account(
    rpc: &dyn StakePoolRpc,
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
    instructions: &mut Vec<Instruction>,
) -> Result<AssociatedAccount, StakePoolClientError> {
    let address = get_associated_token_address_with_program_id(owner, mint, token_program);
    if account_exists(rpc, &address).await? {
        return Ok(AssociatedAccount::AlreadyExists(address));
    }

    debug!("Creating associated token account {address} for mint {mint}");
    instructions.push(create_associated_token_account_idempotent(
        owner,
        owner,
        mint,
        token_program,
    ));
    Ok(AssociatedAccount::Created(address))
}

/// DAO bookkeeping records of a pool and user.
#[derive(Clone, Debug)]
pub struct DaoAccounts {
    pub community_token: Pubkey,
    pub community_token_mint: Pubkey,
    pub staking_rewards: Pubkey,
    pub staking_rewards_counter: Pubkey,
    /// Whether the user's staking rewards record exists already.
    pub staking_rewards_exists: bool,
}

impl DaoAccounts {
    /// Loads and checks the DAO records `owner` needs.
    ///
    /// The DAO state, community token and rewards counter records must exist
    /// and the DAO must be enabled.
    pub async fn load(
        rpc: &dyn StakePoolRpc,
        config: &StakePoolConfig,
        owner: &Pubkey,
    ) -> Result<Self, StakePoolClientError> {
        let (dao_state_address, _) = find_dao_state_pda(&config.stake_pool, &config.program_id);
        let dao_state: DaoState = fetch_required_account(rpc, &dao_state_address).await?;
        if !dao_state.is_enabled {
            return Err(StakePoolClientError::DaoNotEnabled);
        }

        let (community_token, _) = find_community_token_pda(&config.stake_pool, &config.program_id);
        let CommunityToken { token_mint } = fetch_required_account(rpc, &community_token).await?;

        let (staking_rewards, _) =
            find_community_token_staking_rewards_pda(&config.stake_pool, owner, &config.program_id);
        let staking_rewards_exists = account_exists(rpc, &staking_rewards).await?;

        let (staking_rewards_counter, _) =
            find_community_token_staking_rewards_counter_pda(&config.stake_pool, &config.program_id);
        if !account_exists(rpc, &staking_rewards_counter).await? {
            return Err(StakePoolClientError::AccountNotFound {
                account: "community token staking rewards counter",
                address: staking_rewards_counter,
            });
        }

        debug!(
            "DAO community token {community_token} (mint {token_mint}), staking rewards \
             {staking_rewards} exists: {staking_rewards_exists}"
        );
        Ok(Self {
            community_token,
            community_token_mint: token_mint,
            staking_rewards,
            staking_rewards_counter,
            staking_rewards_exists,
        })
    }

    /// Instruction creating the user's staking rewards record, when missing.
    pub fn create_staking_rewards(
        &self,
        config: &StakePoolConfig,
        owner: &Pubkey,
    ) -> Option<Instruction> {
        if self.staking_rewards_exists {
            return None;
        }
        Some(
            CreateCommunityTokenStakingRewards {
                stake_pool: config.stake_pool,
                owner_wallet: *owner,
                community_token_staking_rewards: self.staking_rewards,
                community_token_staking_rewards_counter: self.staking_rewards_counter,
            }
            .instruction(&config.program_id),
        )
    }
}

/// Fetches `address` and checks it is a token account of `mint` holding at
/// least `amount`.
pub async fn fetch_pool_token_account(
    rpc: &dyn StakePoolRpc,
    address: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Result<TokenAccount, StakePoolClientError> {
    let token_account: TokenAccount = fetch_required_account(rpc, address).await?;
    if token_account.mint != *mint {
        return Err(StakePoolClientError::InvalidTokenAccount {
            address: *address,
            expected_mint: *mint,
        });
    }
    if token_account.amount < amount {
        return Err(StakePoolClientError::InsufficientFunds {
            requested: amount,
            available: token_account.amount,
        });
    }
    Ok(token_account)
}

/// Seed of the `index`-th withdrawal stake account of `payer`.
pub fn stake_account_seed(payer: &Pubkey, program_id: &Pubkey, index: u64) -> String {
    let payer: String = payer.to_string().chars().take(4).collect();
    let program: String = program_id.to_string().chars().take(4).collect();
    format!("{payer}{program}everstake{index}")
}

/// Adds an instruction creating the first unused withdrawal stake account of
/// `payer` funded with `lamports`, and returns its address.
pub async fn new_stake_account(
    rpc: &dyn StakePoolRpc,
    config: &StakePoolConfig,
    payer: &Pubkey,
    lamports: u64,
    instructions: &mut Vec<Instruction>,
) -> Result<Pubkey, StakePoolClientError> {
    for index in 1..MAX_WITHDRAW_STAKE_ACCOUNTS {
        let seed = stake_account_seed(payer, &config.program_id, index);
        let address = Pubkey::create_with_seed(payer, &seed, &stake::program::id())?;
        if account_exists(rpc, &address).await? {
            continue;
        }

        debug!("Creating stake account {address} with seed {seed}");
        instructions.push(system_instruction::create_account_with_seed(
            payer,
            &address,
            payer,
            &seed,
            lamports,
            StakeStateV2::size_of() as u64,
            &stake::program::id(),
        ));
        return Ok(address);
    }

    Err(StakePoolClientError::StakeAccountLimitReached {
        limit: MAX_WITHDRAW_STAKE_ACCOUNTS,
    })
}

/// Sets the fee payer and latest blockhash, and signs with `ephemeral`.
pub async fn finalize_transaction(
    rpc: &dyn StakePoolRpc,
    instructions: &[Instruction],
    fee_payer: &Pubkey,
    ephemeral: &Keypair,
) -> Result<Transaction, StakePoolClientError> {
    let mut transaction = Transaction::new_with_payer(instructions, Some(fee_payer));
    let blockhash = rpc.get_latest_blockhash().await?;
    transaction.try_partial_sign(&[ephemeral], blockhash)?;
    Ok(transaction)
}
