use solana_program::{program_error::ProgramError, pubkey::Pubkey, pubkey::PubkeyError};
use solana_sdk::signer::SignerError;
use thiserror::Error;

/// Boxed error returned by an RPC collaborator. It is carried unchanged.
pub type RpcError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum StakePoolClientError {
    /// Account bytes do not match the expected layout.
    #[error("malformed {account} account data: {reason}")]
    MalformedAccountData {
        account: &'static str,
        reason: String,
    },

    /// A required on-chain record does not exist.
    #[error("{account} account {address} not found")]
    AccountNotFound {
        account: &'static str,
        address: Pubkey,
    },

    /// Requested amount is larger than what is available. `available` is the
    /// largest amount the caller can retry with.
    #[error("insufficient funds: requested {requested}, maximum available is {available}")]
    InsufficientFunds { requested: u64, available: u64 },

    /// No single validator stake account can cover the withdrawal.
    #[error(
        "no validator stake account can cover the withdrawal, at most {max_pool_tokens} pool tokens \
         can be undelegated in one transaction"
    )]
    NoEligibleWithdrawAccount { max_pool_tokens: u64 },

    #[error("authority mismatch: expected {expected:?}, received {received}")]
    AuthorityMismatch {
        expected: Option<Pubkey>,
        received: Pubkey,
    },

    #[error("instruction mismatch: expected opcode {expected}, found {actual}")]
    InstructionMismatch { expected: u8, actual: u8 },

    #[error("invalid instruction data")]
    InvalidInstructionData,

    /// The pool's DAO state record says community token bookkeeping is off.
    #[error("DAO is not enabled for this stake pool")]
    DaoNotEnabled,

    #[error("invalid token account {address}, expected mint {expected_mint}")]
    InvalidTokenAccount {
        address: Pubkey,
        expected_mint: Pubkey,
    },

    #[error("withdrawal stake account limit of {limit} reached, wait for a new epoch")]
    StakeAccountLimitReached { limit: u64 },

    #[error("signing error: {0}")]
    Signing(#[from] SignerError),

    #[error("program error: {0}")]
    Program(#[from] ProgramError),

    #[error("address derivation error: {0}")]
    AddressDerivation(#[from] PubkeyError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("rpc error: {0}")]
    Rpc(#[source] RpcError),
}

impl From<RpcError> for StakePoolClientError {
    fn from(error: RpcError) -> Self {
        StakePoolClientError::Rpc(error)
    }
}
