use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    stake, sysvar,
};

use super::StakePoolInstruction;

/// Accounts of `WithdrawStake`.
#[derive(Clone, Debug)]
pub struct WithdrawStake {
    pub stake_pool: Pubkey,
    pub validator_list: Pubkey,
    pub withdraw_authority: Pubkey,
    /// Validator or transient stake account to split from.
    pub validator_stake: Pubkey,
    /// Uninitialized stake account receiving the split.
    pub destination_stake: Pubkey,
    pub destination_stake_authority: Pubkey,
    /// Delegate approved to burn the pool tokens, must sign.
    pub source_transfer_authority: Pubkey,
    pub source_pool_account: Pubkey,
    pub manager_fee_account: Pubkey,
    pub pool_mint: Pubkey,
    pub token_program: Pubkey,
}

impl WithdrawStake {
    pub fn instruction(&self, program_id: &Pubkey, pool_tokens: u64) -> Instruction {
        Instruction {
            program_id: *program_id,
            accounts: self.account_metas(),
            data: StakePoolInstruction::WithdrawStake(pool_tokens).pack(),
        }
    }

    fn account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.stake_pool, false),
            AccountMeta::new(self.validator_list, false),
            AccountMeta::new_readonly(self.withdraw_authority, false),
            AccountMeta::new(self.validator_stake, false),
            AccountMeta::new(self.destination_stake, false),
            AccountMeta::new_readonly(self.destination_stake_authority, false),
            AccountMeta::new_readonly(self.source_transfer_authority, true),
            AccountMeta::new(self.source_pool_account, false),
            AccountMeta::new(self.manager_fee_account, false),
            AccountMeta::new(self.pool_mint, false),
            AccountMeta::new_readonly(sysvar::clock::id(), false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(stake::program::id(), false),
        ]
    }
}

/// Accounts of `WithdrawStakeWithDao`: the [`WithdrawStake`] accounts
/// followed by the DAO bookkeeping accounts.
#[derive(Clone, Debug)]
pub struct WithdrawStakeWithDao {
    pub withdraw_stake: WithdrawStake,
    pub dao_community_tokens_to: Pubkey,
    pub community_token_staking_rewards: Pubkey,
    pub owner_wallet: Pubkey,
    pub community_token: Pubkey,
}

impl WithdrawStakeWithDao {
    pub fn instruction(&self, program_id: &Pubkey, pool_tokens: u64) -> Instruction {
        let mut accounts = self.withdraw_stake.account_metas();
        accounts.extend([
            AccountMeta::new_readonly(self.dao_community_tokens_to, false),
            AccountMeta::new(self.community_token_staking_rewards, false),
            AccountMeta::new_readonly(self.owner_wallet, true),
            AccountMeta::new_readonly(self.community_token, false),
        ]);

        Instruction {
            program_id: *program_id,
            accounts,
            data: StakePoolInstruction::WithdrawStakeWithDao(pool_tokens).pack(),
        }
    }
}
