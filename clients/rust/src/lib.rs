//! Client for the eSOL stake pool program.
//!
//! Decodes pool state, encodes program instructions and assembles unsigned
//! deposit, undelegate and withdraw transactions that include the DAO
//! community token bookkeeping accounts.

pub mod accounts;
pub mod codec;
pub mod config;
pub mod errors;
pub mod flows;
pub mod hooked;
pub mod instructions;
pub mod math;
pub mod pdas;
pub mod rpc;
pub mod withdraw_accounts;

pub use config::{Cluster, StakePoolConfig};
pub use errors::StakePoolClientError;

/// Seed prefix of the DAO state record.
pub const SEED_PREFIX_DAO_STATE: &[u8] = b"dao_state";

/// Seed prefix of the community token record.
pub const SEED_PREFIX_COMMUNITY_TOKEN: &[u8] = b"community_token";

/// Seed prefix of the per-user community token staking rewards record.
pub const SEED_PREFIX_COMMUNITY_TOKEN_STAKING_REWARDS: &[u8] = b"c_t_staking_rewards";

/// Seed prefix of the staking rewards counter record.
pub const SEED_PREFIX_COMMUNITY_TOKEN_STAKING_REWARDS_COUNTER: &[u8] =
    b"c_t_staking_rewards_counter";

/// Seed suffix of the pool withdraw authority.
pub const SEED_SUFFIX_WITHDRAW_AUTHORITY: &[u8] = b"withdraw";

/// Seed prefix of validator transient stake accounts.
pub const SEED_PREFIX_TRANSIENT_STAKE: &[u8] = b"transient";
