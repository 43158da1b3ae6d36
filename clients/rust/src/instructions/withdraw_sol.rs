use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    stake, sysvar,
};

use super::StakePoolInstruction;

/// Accounts of the plain `WithdrawSol` instruction.
#[derive(Clone, Debug)]
pub struct WithdrawSol {
    pub stake_pool: Pubkey,
    pub withdraw_authority: Pubkey,
    pub source_transfer_authority: Pubkey,
    pub pool_tokens_from: Pubkey,
    pub reserve_stake: Pubkey,
    pub lamports_to: Pubkey,
    pub manager_fee_account: Pubkey,
    pub pool_mint: Pubkey,
    pub token_program: Pubkey,
    /// Required when the pool has a SOL withdraw authority.
    pub sol_withdraw_authority: Option<Pubkey>,
}

impl WithdrawSol {
    pub fn instruction(&self, program_id: &Pubkey, pool_tokens: u64) -> Instruction {
        let mut accounts = vec![
            AccountMeta::new(self.stake_pool, false),
            AccountMeta::new_readonly(self.withdraw_authority, false),
            AccountMeta::new_readonly(self.source_transfer_authority, true),
            AccountMeta::new(self.pool_tokens_from, false),
            AccountMeta::new(self.reserve_stake, false),
            AccountMeta::new(self.lamports_to, false),
            AccountMeta::new(self.manager_fee_account, false),
            AccountMeta::new(self.pool_mint, false),
            AccountMeta::new_readonly(sysvar::clock::id(), false),
            AccountMeta::new_readonly(sysvar::stake_history::id(), false),
            AccountMeta::new_readonly(stake::program::id(), false),
            AccountMeta::new_readonly(self.token_program, false),
        ];
        if let Some(sol_withdraw_authority) = self.sol_withdraw_authority {
            accounts.push(AccountMeta::new_readonly(sol_withdraw_authority, true));
        }

        Instruction {
            program_id: *program_id,
            accounts,
            data: StakePoolInstruction::WithdrawSol(pool_tokens).pack(),
        }
    }
}

/// Accounts of `WithdrawSolWithDao`.
///
/// The community token receiver sits right after the pool token source, the
/// remaining DAO accounts come after the token program.
#[derive(Clone, Debug)]
pub struct WithdrawSolWithDao {
    pub stake_pool: Pubkey,
    pub withdraw_authority: Pubkey,
    pub source_transfer_authority: Pubkey,
    pub pool_tokens_from: Pubkey,
    pub dao_community_tokens_to: Pubkey,
    pub reserve_stake: Pubkey,
    pub lamports_to: Pubkey,
    pub manager_fee_account: Pubkey,
    pub pool_mint: Pubkey,
    pub token_program: Pubkey,
    pub community_token_staking_rewards: Pubkey,
    pub owner_wallet: Pubkey,
    pub community_token: Pubkey,
    pub sol_withdraw_authority: Option<Pubkey>,
}

impl WithdrawSolWithDao {
    pub fn instruction(&self, program_id: &Pubkey, pool_tokens: u64) -> Instruction {
        let mut accounts = vec![
            AccountMeta::new(self.stake_pool, false),
            AccountMeta::new_readonly(self.withdraw_authority, false),
            AccountMeta::new_readonly(self.source_transfer_authority, true),
            AccountMeta::new(self.pool_tokens_from, false),
            AccountMeta::new_readonly(self.dao_community_tokens_to, false),
            AccountMeta::new(self.reserve_stake, false),
            AccountMeta::new(self.lamports_to, false),
            AccountMeta::new(self.manager_fee_account, false),
            AccountMeta::new(self.pool_mint, false),
            AccountMeta::new_readonly(sysvar::clock::id(), false),
            AccountMeta::new_readonly(sysvar::stake_history::id(), false),
            AccountMeta::new_readonly(stake::program::id(), false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new(self.community_token_staking_rewards, false),
            AccountMeta::new_readonly(self.owner_wallet, true),
            AccountMeta::new_readonly(self.community_token, false),
        ];
        if let Some(sol_withdraw_authority) = self.sol_withdraw_authority {
            accounts.push(AccountMeta::new_readonly(sol_withdraw_authority, true));
        }

        Instruction {
            program_id: *program_id,
            accounts,
            data: StakePoolInstruction::WithdrawSolWithDao(pool_tokens).pack(),
        }
    }
}
