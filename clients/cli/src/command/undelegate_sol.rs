use esol_stake_pool_client::{
    flows::{undelegate_sol, UndelegateSolArgs},
    StakePoolConfig,
};
use solana_sdk::{native_token::sol_to_lamports, signature::Signature, signer::Signer};

use super::{sign_and_send, ClusterRpc};

pub async fn process_undelegate_sol(
    rpc: &ClusterRpc,
    config: &StakePoolConfig,
    signer: &dyn Signer,
    amount: f64,
) -> Result<Signature, Box<dyn std::error::Error>> {
    let transaction = undelegate_sol(
        rpc,
        config,
        UndelegateSolArgs {
            user: signer.pubkey(),
            pool_tokens: sol_to_lamports(amount),
        },
    )
    .await?;

    sign_and_send(&rpc.0, transaction, &[signer]).await
}
