use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

use super::{FundingType, StakePoolInstruction};

/// Accounts of `SetFundingAuthority`.
#[derive(Clone, Debug)]
pub struct SetFundingAuthority {
    pub stake_pool: Pubkey,
    /// Pool manager, must sign.
    pub manager: Pubkey,
    /// `None` removes the authority.
    pub new_authority: Option<Pubkey>,
}

impl SetFundingAuthority {
    pub fn instruction(&self, program_id: &Pubkey, funding_type: FundingType) -> Instruction {
        let mut accounts = vec![
            AccountMeta::new(self.stake_pool, false),
            AccountMeta::new_readonly(self.manager, true),
        ];
        if let Some(new_authority) = self.new_authority {
            accounts.push(AccountMeta::new_readonly(new_authority, false));
        }

        Instruction {
            program_id: *program_id,
            accounts,
            data: StakePoolInstruction::SetFundingAuthority(funding_type).pack(),
        }
    }
}
