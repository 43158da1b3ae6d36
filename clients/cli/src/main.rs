mod command;
use command::*;

use clap::{IntoApp, Parser};
use deposit_sol::{process_deposit_sol, DepositSolCommandArgs};
use esol_stake_pool_client::{Cluster, StakePoolConfig};
use show::process_show;
use solana_clap_v3_utils::{
    input_parsers::signer::SignerSource, input_validators::normalize_to_url_if_moniker,
    keypair::signer_from_path,
};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_remote_wallet::remote_wallet::RemoteWalletManager;
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey, signer::Signer};
use std::{process::exit, rc::Rc, str::FromStr};
use undelegate_sol::process_undelegate_sol;
use withdraw_sol::{process_withdraw_sol, WithdrawSolCommandArgs};

struct Config {
    commitment_config: CommitmentConfig,
    default_signer: Box<dyn Signer>,
    json_rpc_url: String,
    stake_pool: StakePoolConfig,
    verbose: bool,
    websocket_url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Arguments::parse();
    let mut wallet_manager: Option<Rc<RemoteWalletManager>> = None;

    let config = {
        let cli_config =
            solana_cli_config::Config::load(if let Some(config_file) = &args.config_file {
                config_file
            } else if let Some(ref config_file) = *solana_cli_config::CONFIG_FILE {
                config_file
            } else {
                eprintln!("missing configuration file");
                exit(1);
            })
            .unwrap_or_default();

        let cluster = Cluster::from_str(&args.cluster)?;
        let mut stake_pool = cluster.config();
        if let Some(program_id) = &args.program_id {
            stake_pool.program_id = Pubkey::from_str(program_id)?;
        }
        if let Some(address) = &args.stake_pool {
            stake_pool.stake_pool = Pubkey::from_str(address)?;
        }

        let matches = Arguments::command().get_matches();
        let Some((_, matches)) = matches.subcommand() else {
            eprintln!("error: no subcommand provided");
            exit(1);
        };
        let default_signer = if let Ok(Some((signer, _))) =
            SignerSource::try_get_signer(matches, "keypair", &mut wallet_manager)
        {
            Box::new(signer)
        } else {
            signer_from_path(
                matches,
                &cli_config.keypair_path,
                "keypair",
                &mut wallet_manager,
            )?
        };

        let json_rpc_url = normalize_to_url_if_moniker(
            args.json_rpc_url
                .clone()
                .unwrap_or(cli_config.json_rpc_url),
        );
        let websocket_url = solana_cli_config::Config::compute_websocket_url(&json_rpc_url);

        Config {
            commitment_config: CommitmentConfig::confirmed(),
            default_signer,
            json_rpc_url,
            stake_pool,
            verbose: args.verbose,
            websocket_url,
        }
    };
    solana_logger::setup_with_default("solana=info");

    if config.verbose {
        println!("JSON RPC URL: {}", config.json_rpc_url);
        println!("Websocket URL: {}", config.websocket_url);
        println!("Program id: {}", config.stake_pool.program_id);
        println!("Stake pool: {}", config.stake_pool.stake_pool);
    }
    let rpc = ClusterRpc(RpcClient::new_with_commitment(
        config.json_rpc_url.clone(),
        config.commitment_config,
    ));
    let signer = config.default_signer.as_ref();

    let result = match args.command {
        Commands::Show { output } => process_show(&rpc, &config.stake_pool, output)
            .await
            .map(|_| None),
        Commands::DepositSol {
            amount,
            pool_token_receiver,
            community_token_receiver,
            referrer,
        } => process_deposit_sol(
            &rpc,
            &config.stake_pool,
            signer,
            DepositSolCommandArgs {
                amount,
                pool_token_receiver,
                community_token_receiver,
                referrer,
            },
        )
        .await
        .map(Some),
        Commands::UndelegateSol { amount } => {
            process_undelegate_sol(&rpc, &config.stake_pool, signer, amount)
                .await
                .map(Some)
        }
        Commands::WithdrawSol {
            amount,
            sol_withdraw_authority,
        } => process_withdraw_sol(
            &rpc,
            &config.stake_pool,
            signer,
            WithdrawSolCommandArgs {
                amount,
                sol_withdraw_authority,
            },
        )
        .await
        .map(Some),
    };

    match result {
        Ok(Some(signature)) => println!("Signature: {signature}"),
        Ok(None) => {}
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    }

    Ok(())
}
