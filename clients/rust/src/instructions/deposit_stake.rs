use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    stake::{self, state::StakeAuthorize},
    sysvar,
};

use super::StakePoolInstruction;

/// Accounts of `DepositStake`.
#[derive(Clone, Debug)]
pub struct DepositStake {
    pub stake_pool: Pubkey,
    pub validator_list: Pubkey,
    pub deposit_authority: Pubkey,
    pub withdraw_authority: Pubkey,
    /// Stake account being deposited.
    pub deposit_stake: Pubkey,
    /// Current staker and withdrawer of `deposit_stake`, must sign.
    pub deposit_stake_authority: Pubkey,
    pub validator_stake: Pubkey,
    pub reserve_stake: Pubkey,
    pub pool_tokens_to: Pubkey,
    pub pool_mint: Pubkey,
    pub token_program: Pubkey,
}

impl DepositStake {
    /// Hands both stake authorities over to the pool's deposit authority, then
    /// deposits the stake account.
    pub fn instructions(&self, program_id: &Pubkey) -> Vec<Instruction> {
        let authorize = |stake_authorize| {
            stake::instruction::authorize(
                &self.deposit_stake,
                &self.deposit_stake_authority,
                &self.deposit_authority,
                stake_authorize,
                None,
            )
        };

        vec![
            authorize(StakeAuthorize::Staker),
            authorize(StakeAuthorize::Withdrawer),
            Instruction {
                program_id: *program_id,
                accounts: vec![
                    AccountMeta::new(self.stake_pool, false),
                    AccountMeta::new(self.validator_list, false),
                    AccountMeta::new_readonly(self.deposit_authority, false),
                    AccountMeta::new_readonly(self.withdraw_authority, false),
                    AccountMeta::new(self.deposit_stake, false),
                    AccountMeta::new(self.validator_stake, false),
                    AccountMeta::new(self.reserve_stake, false),
                    AccountMeta::new(self.pool_tokens_to, false),
                    AccountMeta::new(self.pool_mint, false),
                    AccountMeta::new_readonly(sysvar::clock::id(), false),
                    AccountMeta::new_readonly(sysvar::stake_history::id(), false),
                    AccountMeta::new_readonly(self.token_program, false),
                    AccountMeta::new_readonly(stake::program::id(), false),
                ],
                data: StakePoolInstruction::DepositStake.pack(),
            },
        ]
    }
}
