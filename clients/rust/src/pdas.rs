use solana_program::pubkey::Pubkey;

use crate::{
    SEED_PREFIX_COMMUNITY_TOKEN, SEED_PREFIX_COMMUNITY_TOKEN_STAKING_REWARDS,
    SEED_PREFIX_COMMUNITY_TOKEN_STAKING_REWARDS_COUNTER, SEED_PREFIX_DAO_STATE,
    SEED_PREFIX_TRANSIENT_STAKE, SEED_SUFFIX_WITHDRAW_AUTHORITY,
};

/// Pool withdraw authority, PDA of `[stake_pool, 'withdraw']`.
pub fn find_withdraw_authority_pda(stake_pool: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[stake_pool.as_ref(), SEED_SUFFIX_WITHDRAW_AUTHORITY],
        program_id,
    )
}

pub fn find_dao_state_pda(stake_pool: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            SEED_PREFIX_DAO_STATE,
            stake_pool.as_ref(),
            program_id.as_ref(),
        ],
        program_id,
    )
}

pub fn find_community_token_pda(stake_pool: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            SEED_PREFIX_COMMUNITY_TOKEN,
            stake_pool.as_ref(),
            program_id.as_ref(),
        ],
        program_id,
    )
}

/// Per-user community token staking rewards record.
pub fn find_community_token_staking_rewards_pda(
    stake_pool: &Pubkey,
    owner: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            SEED_PREFIX_COMMUNITY_TOKEN_STAKING_REWARDS,
            stake_pool.as_ref(),
            owner.as_ref(),
            program_id.as_ref(),
        ],
        program_id,
    )
}

pub fn find_community_token_staking_rewards_counter_pda(
    stake_pool: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            SEED_PREFIX_COMMUNITY_TOKEN_STAKING_REWARDS_COUNTER,
            stake_pool.as_ref(),
            program_id.as_ref(),
        ],
        program_id,
    )
}

/// Validator stake account owned by the pool, PDA of `[vote, stake_pool]`.
pub fn find_stake_pda(
    validator_vote: &Pubkey,
    stake_pool: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[validator_vote.as_ref(), stake_pool.as_ref()], program_id)
}

pub fn find_transient_stake_pda(
    validator_vote: &Pubkey,
    stake_pool: &Pubkey,
    seed_suffix: u64,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            SEED_PREFIX_TRANSIENT_STAKE,
            validator_vote.as_ref(),
            stake_pool.as_ref(),
            &seed_suffix.to_le_bytes(),
        ],
        program_id,
    )
}
