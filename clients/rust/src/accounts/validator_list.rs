use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

use super::AccountType;
use crate::codec::AccountSchema;

#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StakeStatus {
    /// Stake account is active, there may be a transient stake as well.
    #[default]
    Active,
    /// Only the transient stake account remains, deactivating.
    DeactivatingTransient,
    /// No more validator stake accounts exist, entry ready for removal.
    ReadyForRemoval,
}

/// Per-validator entry of the validator list.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidatorStakeInfo {
    /// Amount of active stake delegated to this validator. May be stale when
    /// `last_update_epoch` is not the current epoch.
    pub active_stake_lamports: u64,

    /// Amount of transient stake delegated to this validator.
    pub transient_stake_lamports: u64,

    /// Last epoch the lamport fields were updated.
    pub last_update_epoch: u64,

    /// Start of the validator transient account seed suffixes.
    pub transient_seed_suffix_start: u64,

    /// End of the validator transient account seed suffixes.
    pub transient_seed_suffix_end: u64,

    pub status: StakeStatus,

    #[cfg_attr(
        feature = "serde",
        serde(with = "serde_with::As::<serde_with::DisplayFromStr>")
    )]
    pub vote_account_address: Pubkey,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidatorList {
    pub account_type: AccountType,

    /// Capacity the account was allocated for.
    pub max_validators: u32,

    pub validators: Vec<ValidatorStakeInfo>,
}

impl ValidatorList {
    pub fn active_validators(&self) -> impl Iterator<Item = &ValidatorStakeInfo> {
        self.validators
            .iter()
            .filter(|validator| validator.status == StakeStatus::Active)
    }
}

impl AccountSchema for ValidatorList {
    const NAME: &'static str = "validator list";
}
