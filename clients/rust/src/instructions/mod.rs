//! Stake pool program instructions.
//!
//! [`StakePoolInstruction`] is the wire payload: a 1-byte opcode followed by
//! fixed-width little-endian arguments. The builders in the submodules pair a
//! payload with the ordered account list the program expects.

mod create_community_token_staking_rewards;
mod deposit_sol;
mod deposit_stake;
mod initialize;
mod set_funding_authority;
mod withdraw_sol;
mod withdraw_stake;

use arrayref::array_ref;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use solana_program::program_error::ProgramError;

pub use create_community_token_staking_rewards::*;
pub use deposit_sol::*;
pub use deposit_stake::*;
pub use initialize::*;
pub use set_funding_authority::*;
pub use withdraw_sol::*;
pub use withdraw_stake::*;

use crate::{accounts::Fee, errors::StakePoolClientError};

/// Instructions supported by the stake pool program that this client emits.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StakePoolInstruction {
    /// Initializes a new stake pool.
    Initialize {
        fee: Fee,
        withdrawal_fee: Fee,
        max_validators: u32,
    },
    /// Deposits a stake account into the pool in exchange for pool tokens.
    DepositStake,
    /// Burns pool tokens and splits the matching stake off a validator stake
    /// account into a user stake account.
    WithdrawStake(u64),
    /// Deposits lamports into the reserve in exchange for pool tokens.
    DepositSol(u64),
    SetFundingAuthority(FundingType),
    /// Burns pool tokens and withdraws lamports from the reserve.
    WithdrawSol(u64),
    /// Creates the per-user community token staking rewards record.
    CreateCommunityTokenStakingRewards,
    DepositSolWithDao(u64),
    WithdrawSolWithDao(u64),
    WithdrawStakeWithDao(u64),
}

impl StakePoolInstruction {
    pub const INITIALIZE: u8 = 0;
    pub const DEPOSIT_STAKE: u8 = 9;
    pub const WITHDRAW_STAKE: u8 = 10;
    pub const DEPOSIT_SOL: u8 = 14;
    pub const SET_FUNDING_AUTHORITY: u8 = 15;
    pub const WITHDRAW_SOL: u8 = 16;
    pub const CREATE_COMMUNITY_TOKEN_STAKING_REWARDS: u8 = 21;
    pub const DEPOSIT_SOL_WITH_DAO: u8 = 22;
    pub const WITHDRAW_SOL_WITH_DAO: u8 = 23;
    pub const WITHDRAW_STAKE_WITH_DAO: u8 = 24;

    pub fn opcode(&self) -> u8 {
        match self {
            StakePoolInstruction::Initialize { .. } => Self::INITIALIZE,
            StakePoolInstruction::DepositStake => Self::DEPOSIT_STAKE,
            StakePoolInstruction::WithdrawStake(_) => Self::WITHDRAW_STAKE,
            StakePoolInstruction::DepositSol(_) => Self::DEPOSIT_SOL,
            StakePoolInstruction::SetFundingAuthority(_) => Self::SET_FUNDING_AUTHORITY,
            StakePoolInstruction::WithdrawSol(_) => Self::WITHDRAW_SOL,
            StakePoolInstruction::CreateCommunityTokenStakingRewards => {
                Self::CREATE_COMMUNITY_TOKEN_STAKING_REWARDS
            }
            StakePoolInstruction::DepositSolWithDao(_) => Self::DEPOSIT_SOL_WITH_DAO,
            StakePoolInstruction::WithdrawSolWithDao(_) => Self::WITHDRAW_SOL_WITH_DAO,
            StakePoolInstruction::WithdrawStakeWithDao(_) => Self::WITHDRAW_STAKE_WITH_DAO,
        }
    }

    /// Packs a [StakePoolInstruction](enum.StakePoolInstruction.html) into a byte buffer.
    pub fn pack(&self) -> Vec<u8> {
        match self {
            StakePoolInstruction::Initialize {
                fee,
                withdrawal_fee,
                max_validators,
            } => {
                let mut data = Vec::with_capacity(37);
                data.push(Self::INITIALIZE);
                data.extend_from_slice(&fee.denominator.to_le_bytes());
                data.extend_from_slice(&fee.numerator.to_le_bytes());
                data.extend_from_slice(&withdrawal_fee.denominator.to_le_bytes());
                data.extend_from_slice(&withdrawal_fee.numerator.to_le_bytes());
                data.extend_from_slice(&max_validators.to_le_bytes());
                data
            }
            StakePoolInstruction::DepositStake => vec![Self::DEPOSIT_STAKE],
            StakePoolInstruction::CreateCommunityTokenStakingRewards => {
                vec![Self::CREATE_COMMUNITY_TOKEN_STAKING_REWARDS]
            }
            StakePoolInstruction::SetFundingAuthority(funding_type) => {
                let mut data = Vec::with_capacity(5);
                data.push(Self::SET_FUNDING_AUTHORITY);
                data.extend_from_slice(&(*funding_type as u32).to_le_bytes());
                data
            }
            StakePoolInstruction::WithdrawStake(amount)
            | StakePoolInstruction::DepositSol(amount)
            | StakePoolInstruction::WithdrawSol(amount)
            | StakePoolInstruction::DepositSolWithDao(amount)
            | StakePoolInstruction::WithdrawSolWithDao(amount)
            | StakePoolInstruction::WithdrawStakeWithDao(amount) => {
                let mut data = Vec::with_capacity(9);
                data.push(self.opcode());
                data.extend_from_slice(&amount.to_le_bytes());
                data
            }
        }
    }

    /// Unpacks a byte buffer into a [StakePoolInstruction](enum.StakePoolInstruction.html).
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        match input.split_first() {
            // 0 - Initialize: 4 x u64 (32) + u32 (4)
            Some((&Self::INITIALIZE, rest)) if rest.len() == 36 => {
                let fee = Fee {
                    denominator: u64::from_le_bytes(*array_ref![rest, 0, 8]),
                    numerator: u64::from_le_bytes(*array_ref![rest, 8, 8]),
                };
                let withdrawal_fee = Fee {
                    denominator: u64::from_le_bytes(*array_ref![rest, 16, 8]),
                    numerator: u64::from_le_bytes(*array_ref![rest, 24, 8]),
                };
                let max_validators = u32::from_le_bytes(*array_ref![rest, 32, 4]);

                Ok(StakePoolInstruction::Initialize {
                    fee,
                    withdrawal_fee,
                    max_validators,
                })
            }
            // 9 - DepositStake
            Some((&Self::DEPOSIT_STAKE, _)) => Ok(StakePoolInstruction::DepositStake),
            // 15 - SetFundingAuthority: FundingType (u32)
            Some((&Self::SET_FUNDING_AUTHORITY, rest)) if rest.len() == 4 => {
                let funding_type =
                    FromPrimitive::from_u32(u32::from_le_bytes(*array_ref![rest, 0, 4]))
                        .ok_or(ProgramError::InvalidInstructionData)?;

                Ok(StakePoolInstruction::SetFundingAuthority(funding_type))
            }
            // 21 - CreateCommunityTokenStakingRewards
            Some((&Self::CREATE_COMMUNITY_TOKEN_STAKING_REWARDS, _)) => {
                Ok(StakePoolInstruction::CreateCommunityTokenStakingRewards)
            }
            // 10, 14, 16, 22, 23, 24: u64 (8)
            Some((&opcode, rest)) if rest.len() == 8 => {
                let amount = u64::from_le_bytes(*array_ref![rest, 0, 8]);

                match opcode {
                    Self::WITHDRAW_STAKE => Ok(StakePoolInstruction::WithdrawStake(amount)),
                    Self::DEPOSIT_SOL => Ok(StakePoolInstruction::DepositSol(amount)),
                    Self::WITHDRAW_SOL => Ok(StakePoolInstruction::WithdrawSol(amount)),
                    Self::DEPOSIT_SOL_WITH_DAO => {
                        Ok(StakePoolInstruction::DepositSolWithDao(amount))
                    }
                    Self::WITHDRAW_SOL_WITH_DAO => {
                        Ok(StakePoolInstruction::WithdrawSolWithDao(amount))
                    }
                    Self::WITHDRAW_STAKE_WITH_DAO => {
                        Ok(StakePoolInstruction::WithdrawStakeWithDao(amount))
                    }
                    _ => Err(ProgramError::InvalidInstructionData),
                }
            }
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// Decodes `data`, requiring its leading opcode to be `expected`.
pub fn decode_instruction(
    expected: u8,
    data: &[u8],
) -> Result<StakePoolInstruction, StakePoolClientError> {
    let actual = *data
        .first()
        .ok_or(StakePoolClientError::InvalidInstructionData)?;
    if actual != expected {
        return Err(StakePoolClientError::InstructionMismatch { expected, actual });
    }
    StakePoolInstruction::unpack(data).map_err(|_| StakePoolClientError::InvalidInstructionData)
}

/// Funding authority updated by `SetFundingAuthority`.
#[derive(Clone, Copy, Debug, Eq, FromPrimitive, PartialEq)]
pub enum FundingType {
    StakeDeposit = 0,
    SolDeposit = 1,
    SolWithdraw = 2,
}
