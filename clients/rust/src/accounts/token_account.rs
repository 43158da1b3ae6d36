use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::{codec::AccountSchema, hooked::COption};

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenAccountState {
    #[default]
    Uninitialized,
    Initialized,
    Frozen,
}

/// SPL token account.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAccount {
    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub mint: Pubkey,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub owner: Pubkey,

    pub amount: u64,

    pub delegate: COption<Pubkey>,

    pub state: TokenAccountState,

    /// Rent-exempt reserve when the account wraps native coin.
    pub is_native: COption<u64>,

    pub delegated_amount: u64,

    pub close_authority: COption<Pubkey>,
}

impl TokenAccount {
    pub const LEN: usize = 165;
}

impl AccountSchema for TokenAccount {
    const NAME: &'static str = "token";
}
