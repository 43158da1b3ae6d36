use solana_program::{pubkey, pubkey::Pubkey};

/// Clusters with a deployed eSOL stake pool.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cluster {
    Testnet,
    MainnetBeta,
}

impl Cluster {
    pub const TESTNET_PROGRAM_ID: Pubkey = pubkey!("CgymamZFh5aVZhoSRtV2QrEZ58X4N1o2H5ZQPF4L5jj8");
    pub const TESTNET_STAKE_POOL: Pubkey = pubkey!("4QRsVADHap1AgtpryYB2vz4htG3ysJcaXFkcFqkGjaF1");
    pub const MAINNET_PROGRAM_ID: Pubkey = pubkey!("EverSFw9uN5t1V8kS3ficHUcKffSjwpGzUSGd7mgmSks");
    pub const MAINNET_STAKE_POOL: Pubkey = pubkey!("GUAMR8ciiaijraJeLDEDrFVaueLm9YzWWY9R7CBPL9rA");

    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
        }
    }

    pub fn config(&self) -> StakePoolConfig {
        match self {
            Cluster::Testnet => StakePoolConfig::new(
                Self::TESTNET_PROGRAM_ID,
                Self::TESTNET_STAKE_POOL,
            ),
            Cluster::MainnetBeta => StakePoolConfig::new(
                Self::MAINNET_PROGRAM_ID,
                Self::MAINNET_STAKE_POOL,
            ),
        }
    }
}

impl std::str::FromStr for Cluster {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "testnet" => Ok(Cluster::Testnet),
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            other => Err(format!("unsupported cluster: {other}")),
        }
    }
}

/// Program identity of the pool a client talks to.
///
/// Every flow takes this by reference, so pointing at another deployment is a
/// matter of building another value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StakePoolConfig {
    pub program_id: Pubkey,
    pub stake_pool: Pubkey,
}

impl StakePoolConfig {
    pub fn new(program_id: Pubkey, stake_pool: Pubkey) -> Self {
        Self {
            program_id,
            stake_pool,
        }
    }
}

impl Default for StakePoolConfig {
    fn default() -> Self {
        Cluster::Testnet.config()
    }
}
