pub mod deposit_sol;
pub mod show;
pub mod undelegate_sol;
pub mod withdraw_sol;

use async_trait::async_trait;
use clap::{Parser, Subcommand, ValueEnum};
use esol_stake_pool_client::{errors::RpcError, rpc::StakePoolRpc};
use solana_clap_v3_utils::input_parsers::{
    parse_url_or_moniker, signer::SignerSourceParserBuilder,
};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    hash::Hash, pubkey::Pubkey, signature::Signature, signer::Signer, transaction::Transaction,
};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(about, author, version)]
#[rustfmt::skip]
pub struct Arguments {
    /// Configuration file to use [default: system configuration file].
    #[clap(
        short,
        long = "config",
        global = true,
        value_name = "PATH",
    )]
    pub config_file: Option<String>,

    /// Filepath or URL to a keypair [default: client keypair].
    #[clap(
        long,
        global = true,
        value_name = "PATH",
        value_parser = SignerSourceParserBuilder::default().allow_all().build()
    )]
    pub keypair: Option<PathBuf>,

    /// Show additional information.
    #[clap(
        short,
        long,
        global = true
    )]
    pub verbose: bool,

    /// JSON RPC URL for the cluster [default: value from configuration file].
    #[clap(
        short,
        long = "url",
        global = true,
        value_name = "URL",
        value_parser = parse_url_or_moniker
    )]
    pub json_rpc_url: Option<String>,

    /// Cluster whose stake pool deployment to use: testnet or mainnet-beta.
    #[clap(
        long,
        global = true,
        value_name = "CLUSTER",
        default_value = "testnet",
    )]
    pub cluster: String,

    /// Stake pool program id [default: cluster deployment].
    #[clap(
        long,
        global = true,
        value_name = "ADDRESS",
    )]
    pub program_id: Option<String>,

    /// Stake pool address [default: cluster deployment].
    #[clap(
        long,
        global = true,
        value_name = "ADDRESS",
    )]
    pub stake_pool: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
#[rustfmt::skip]
pub enum Commands {
    /// Shows the stake pool, its exchange rate and validators.
    Show {
        /// Output format.
        #[clap(
            long,
            value_enum,
            value_name = "FORMAT",
            default_value = "display",
        )]
        output: OutputFormat,
    },

    /// Deposits SOL into the stake pool reserve for pool tokens.
    DepositSol {
        /// Amount of SOL to deposit.
        #[clap(
            value_name = "AMOUNT",
        )]
        amount: f64,

        /// Pool token account to receive the minted tokens
        /// [default: associated token account].
        #[clap(
            long,
            value_name = "ADDRESS",
        )]
        pool_token_receiver: Option<String>,

        /// Community token account to receive DAO rewards
        /// [default: associated token account].
        #[clap(
            long,
            value_name = "ADDRESS",
        )]
        community_token_receiver: Option<String>,

        /// Pool token account receiving the referral fee
        /// [default: pool token receiver].
        #[clap(
            long,
            value_name = "ADDRESS",
        )]
        referrer: Option<String>,
    },

    /// Withdraws pool tokens into a new deactivating stake account.
    UndelegateSol {
        /// Amount of pool tokens to withdraw.
        #[clap(
            value_name = "AMOUNT",
        )]
        amount: f64,
    },

    /// Withdraws pool tokens for SOL straight from the pool reserve.
    WithdrawSol {
        /// Amount of pool tokens to withdraw.
        #[clap(
            value_name = "AMOUNT",
        )]
        amount: f64,

        /// Filepath to the SOL withdraw authority keypair, when the pool
        /// requires one.
        #[clap(
            long,
            value_name = "PATH",
        )]
        sol_withdraw_authority: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Display,
    Json,
}

/// JSON RPC client behind the reads the transaction flows need.
pub struct ClusterRpc(pub RpcClient);

#[async_trait]
impl StakePoolRpc for ClusterRpc {
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, RpcError> {
        let response = self
            .0
            .get_account_with_commitment(address, self.0.commitment())
            .await?;
        Ok(response.value.map(|account| account.data))
    }

    async fn get_balance(&self, address: &Pubkey) -> Result<u64, RpcError> {
        Ok(self.0.get_balance(address).await?)
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError> {
        Ok(self.0.get_minimum_balance_for_rent_exemption(data_len).await?)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError> {
        Ok(self.0.get_latest_blockhash().await?)
    }
}

/// Adds the remaining signatures to a transaction built by the client and
/// submits it.
pub async fn sign_and_send(
    rpc_client: &RpcClient,
    mut transaction: Transaction,
    signers: &[&dyn Signer],
) -> Result<Signature, Box<dyn std::error::Error>> {
    let blockhash = transaction.message.recent_blockhash;
    transaction
        .try_partial_sign(signers, blockhash)
        .map_err(|err| format!("error: failed to sign transaction: {err}"))?;

    let signature = rpc_client
        .send_and_confirm_transaction_with_spinner(&transaction)
        .await
        .map_err(|err| format!("error: send transaction: {err}"))?;

    Ok(signature)
}
