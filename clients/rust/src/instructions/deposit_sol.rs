use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use super::StakePoolInstruction;

/// Accounts of the plain `DepositSol` instruction.
#[derive(Clone, Debug)]
pub struct DepositSol {
    pub stake_pool: Pubkey,
    pub withdraw_authority: Pubkey,
    pub reserve_stake: Pubkey,
    /// Lamport source, must sign.
    pub lamports_from: Pubkey,
    pub pool_tokens_to: Pubkey,
    pub manager_fee_account: Pubkey,
    pub referrer_pool_tokens_account: Pubkey,
    pub pool_mint: Pubkey,
    pub token_program: Pubkey,
    /// Required when the pool has a SOL deposit authority.
    pub deposit_authority: Option<Pubkey>,
}

impl DepositSol {
    pub fn instruction(&self, program_id: &Pubkey, lamports: u64) -> Instruction {
        let mut accounts = vec![
            AccountMeta::new(self.stake_pool, false),
            AccountMeta::new_readonly(self.withdraw_authority, false),
            AccountMeta::new(self.reserve_stake, false),
            AccountMeta::new_readonly(self.lamports_from, true),
            AccountMeta::new(self.pool_tokens_to, false),
            AccountMeta::new(self.manager_fee_account, false),
            AccountMeta::new(self.referrer_pool_tokens_account, false),
            AccountMeta::new(self.pool_mint, false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(self.token_program, false),
        ];
        // The program rejects the deposit unless the pool's SOL deposit
        // authority signs (`check_sol_deposit_authority`).
        if let Some(deposit_authority) = self.deposit_authority {
            accounts.push(AccountMeta::new_readonly(deposit_authority, true));
        }

        Instruction {
            program_id: *program_id,
            accounts,
            data: StakePoolInstruction::DepositSol(lamports).pack(),
        }
    }
}

/// Accounts of `DepositSolWithDao`.
///
/// Same as [`DepositSol`] with the community token receiver after the pool
/// token receiver, and the staking rewards record, the owner wallet and the
/// community token record after the token program.
#[derive(Clone, Debug)]
pub struct DepositSolWithDao {
    pub stake_pool: Pubkey,
    pub withdraw_authority: Pubkey,
    pub reserve_stake: Pubkey,
    pub lamports_from: Pubkey,
    pub pool_tokens_to: Pubkey,
    pub dao_community_tokens_to: Pubkey,
    pub manager_fee_account: Pubkey,
    pub referrer_pool_tokens_account: Pubkey,
    pub pool_mint: Pubkey,
    pub token_program: Pubkey,
    pub community_token_staking_rewards: Pubkey,
    /// User wallet, must sign.
    pub owner_wallet: Pubkey,
    pub community_token: Pubkey,
    pub deposit_authority: Option<Pubkey>,
}

impl DepositSolWithDao {
    pub fn instruction(&self, program_id: &Pubkey, lamports: u64) -> Instruction {
        let mut accounts = vec![
            AccountMeta::new(self.stake_pool, false),
            AccountMeta::new_readonly(self.withdraw_authority, false),
            AccountMeta::new(self.reserve_stake, false),
            AccountMeta::new_readonly(self.lamports_from, true),
            AccountMeta::new(self.pool_tokens_to, false),
            AccountMeta::new_readonly(self.dao_community_tokens_to, false),
            AccountMeta::new(self.manager_fee_account, false),
            AccountMeta::new(self.referrer_pool_tokens_account, false),
            AccountMeta::new(self.pool_mint, false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new(self.community_token_staking_rewards, false),
            AccountMeta::new_readonly(self.owner_wallet, true),
            AccountMeta::new_readonly(self.community_token, false),
        ];
        if let Some(deposit_authority) = self.deposit_authority {
            accounts.push(AccountMeta::new_readonly(deposit_authority, true));
        }

        Instruction {
            program_id: *program_id,
            accounts,
            data: StakePoolInstruction::DepositSolWithDao(lamports).pack(),
        }
    }
}
