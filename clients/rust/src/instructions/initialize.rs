use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use super::StakePoolInstruction;
use crate::accounts::Fee;

/// Accounts of `Initialize`.
#[derive(Clone, Debug)]
pub struct Initialize {
    pub stake_pool: Pubkey,
    /// Pool manager, must sign.
    pub manager: Pubkey,
    pub staker: Pubkey,
    pub withdraw_authority: Pubkey,
    pub validator_list: Pubkey,
    pub reserve_stake: Pubkey,
    pub pool_mint: Pubkey,
    pub manager_fee_account: Pubkey,
    pub token_program: Pubkey,
    /// Restricts stake deposits to this authority when set.
    pub deposit_authority: Option<Pubkey>,
}

pub struct InitializeInstructionArgs {
    pub fee: Fee,
    pub withdrawal_fee: Fee,
    pub max_validators: u32,
}

impl Initialize {
    pub fn instruction(&self, program_id: &Pubkey, args: InitializeInstructionArgs) -> Instruction {
        let mut accounts = vec![
            AccountMeta::new(self.stake_pool, false),
            AccountMeta::new_readonly(self.manager, true),
            AccountMeta::new_readonly(self.staker, false),
            AccountMeta::new_readonly(self.withdraw_authority, false),
            AccountMeta::new(self.validator_list, false),
            AccountMeta::new_readonly(self.reserve_stake, false),
            AccountMeta::new_readonly(self.pool_mint, false),
            AccountMeta::new_readonly(self.manager_fee_account, false),
            AccountMeta::new_readonly(self.token_program, false),
        ];
        if let Some(deposit_authority) = self.deposit_authority {
            accounts.push(AccountMeta::new_readonly(deposit_authority, false));
        }

        Instruction {
            program_id: *program_id,
            accounts,
            data: StakePoolInstruction::Initialize {
                fee: args.fee,
                withdrawal_fee: args.withdrawal_fee,
                max_validators: args.max_validators,
            }
            .pack(),
        }
    }
}
