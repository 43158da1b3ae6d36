use std::path::PathBuf;

use esol_stake_pool_client::{
    flows::{withdraw_sol, WithdrawSolArgs},
    StakePoolConfig,
};
use solana_sdk::{
    native_token::sol_to_lamports,
    signature::{read_keypair_file, Signature},
    signer::Signer,
};

use super::{sign_and_send, ClusterRpc};

pub struct WithdrawSolCommandArgs {
    /// Amount of pool tokens to withdraw.
    pub amount: f64,

    /// SOL withdraw authority keypair file.
    pub sol_withdraw_authority: Option<PathBuf>,
}

pub async fn process_withdraw_sol(
    rpc: &ClusterRpc,
    config: &StakePoolConfig,
    signer: &dyn Signer,
    args: WithdrawSolCommandArgs,
) -> Result<Signature, Box<dyn std::error::Error>> {
    let authority = args
        .sol_withdraw_authority
        .map(read_keypair_file)
        .transpose()?;

    let transaction = withdraw_sol(
        rpc,
        config,
        WithdrawSolArgs {
            user: signer.pubkey(),
            pool_tokens: sol_to_lamports(args.amount),
            sol_withdraw_authority: authority.as_ref().map(|authority| authority.pubkey()),
        },
    )
    .await?;

    let mut signers = vec![signer];
    if let Some(authority) = &authority {
        signers.push(authority);
    }
    sign_and_send(&rpc.0, transaction, &signers).await
}
