use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program, sysvar,
};

use super::StakePoolInstruction;

/// Accounts of `CreateCommunityTokenStakingRewards`.
#[derive(Clone, Debug)]
pub struct CreateCommunityTokenStakingRewards {
    pub stake_pool: Pubkey,
    /// Wallet the record is created for. Signs and pays rent.
    pub owner_wallet: Pubkey,
    pub community_token_staking_rewards: Pubkey,
    pub community_token_staking_rewards_counter: Pubkey,
}

impl CreateCommunityTokenStakingRewards {
    pub fn instruction(&self, program_id: &Pubkey) -> Instruction {
        Instruction {
            program_id: *program_id,
            accounts: vec![
                AccountMeta::new_readonly(self.stake_pool, false),
                AccountMeta::new_readonly(self.owner_wallet, true),
                AccountMeta::new(self.community_token_staking_rewards, false),
                AccountMeta::new(self.community_token_staking_rewards_counter, false),
                AccountMeta::new_readonly(sysvar::rent::id(), false),
                AccountMeta::new_readonly(system_program::id(), false),
            ],
            data: StakePoolInstruction::CreateCommunityTokenStakingRewards.pack(),
        }
    }
}
