use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::codec::AccountSchema;

/// Account discriminant shared by the pool and the validator list.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccountType {
    #[default]
    Uninitialized,
    StakePool,
    ValidatorList,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lockup {
    pub unix_timestamp: i64,
    pub epoch: u64,
    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub custodian: Pubkey,
}

/// Fee expressed as a fraction.
///
/// A zero denominator means the fee is not configured.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fee {
    pub denominator: u64,
    pub numerator: u64,
}

impl Fee {
    pub fn is_configured(&self) -> bool {
        self.denominator != 0
    }
}

/// Lamports per pool token, as a fraction. A zero denominator reads as 1:1.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateOfExchange {
    pub denominator: u64,
    pub numerator: u64,
}

/// Stake pool state.
///
/// Field order is the on-chain layout and must not change.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StakePool {
    pub account_type: AccountType,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub manager: Pubkey,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub staker: Pubkey,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub stake_deposit_authority: Pubkey,

    /// Bump seed of the withdraw authority PDA.
    pub stake_withdraw_bump_seed: u8,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub validator_list: Pubkey,

    /// Undelegated coin buffer used for direct withdrawals.
    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub reserve_stake: Pubkey,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub pool_mint: Pubkey,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub manager_fee_account: Pubkey,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub token_program_id: Pubkey,

    pub total_lamports: u64,

    pub pool_token_supply: u64,

    pub last_update_epoch: u64,

    pub lockup: Lockup,

    pub epoch_fee: Fee,

    pub next_epoch_fee: Option<Fee>,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<Option<serde_with::DisplayFromStr>>")
    )]
    pub preferred_deposit_validator_vote_address: Option<Pubkey>,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<Option<serde_with::DisplayFromStr>>")
    )]
    pub preferred_withdraw_validator_vote_address: Option<Pubkey>,

    pub stake_deposit_fee: Fee,

    pub stake_withdrawal_fee: Fee,

    pub next_withdrawal_fee: Option<Fee>,

    /// Percentage (0-100) of the stake deposit fee paid to the referrer.
    pub stake_referral_fee: u8,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<Option<serde_with::DisplayFromStr>>")
    )]
    pub sol_deposit_authority: Option<Pubkey>,

    pub sol_deposit_fee: Fee,

    pub sol_referral_fee: u8,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<Option<serde_with::DisplayFromStr>>")
    )]
    pub sol_withdraw_authority: Option<Pubkey>,

    pub sol_withdrawal_fee: Fee,

    pub next_sol_withdrawal_fee: Option<Fee>,

    pub last_epoch_pool_token_supply: u64,

    pub last_epoch_total_lamports: u64,

    /// Absent means one pool token is worth one lamport.
    pub rate_of_exchange: Option<RateOfExchange>,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub treasury_fee_account: Pubkey,

    pub treasury_fee: Fee,

    pub total_lamports_liquidity: u64,
}

impl AccountSchema for StakePool {
    const NAME: &'static str = "stake pool";
}
