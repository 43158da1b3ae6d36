use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::codec::AccountSchema;

/// Whether community token bookkeeping is active for a pool.
///
/// PDA of `['dao_state', stake_pool, program_id]`.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaoState {
    pub is_enabled: bool,
}

impl AccountSchema for DaoState {
    const NAME: &'static str = "DAO state";
}

/// Mint of the DAO community token.
///
/// PDA of `['community_token', stake_pool, program_id]`.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommunityToken {
    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub token_mint: Pubkey,
}

impl AccountSchema for CommunityToken {
    const NAME: &'static str = "community token";
}
