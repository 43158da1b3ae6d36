use std::str::FromStr;

use esol_stake_pool_client::{
    flows::{deposit_sol, DepositSolArgs},
    StakePoolConfig,
};
use solana_sdk::{
    native_token::sol_to_lamports, pubkey::Pubkey, signature::Signature, signer::Signer,
};

use super::{sign_and_send, ClusterRpc};

pub struct DepositSolCommandArgs {
    /// Amount of SOL to deposit.
    pub amount: f64,

    pub pool_token_receiver: Option<String>,

    pub community_token_receiver: Option<String>,

    pub referrer: Option<String>,
}

pub async fn process_deposit_sol(
    rpc: &ClusterRpc,
    config: &StakePoolConfig,
    signer: &dyn Signer,
    args: DepositSolCommandArgs,
) -> Result<Signature, Box<dyn std::error::Error>> {
    let parse = |address: Option<String>| address.as_deref().map(Pubkey::from_str).transpose();

    let transaction = deposit_sol(
        rpc,
        config,
        DepositSolArgs {
            user: signer.pubkey(),
            lamports: sol_to_lamports(args.amount),
            pool_token_receiver: parse(args.pool_token_receiver)?,
            community_token_receiver: parse(args.community_token_receiver)?,
            referrer: parse(args.referrer)?,
        },
    )
    .await?;

    sign_and_send(&rpc.0, transaction, &[signer]).await
}
