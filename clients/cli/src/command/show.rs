use esol_stake_pool_client::{
    accounts::{StakePool, ValidatorList},
    math::divide_to_f64,
    rpc::fetch_required_account,
    StakePoolConfig,
};
use serde_json::json;
use solana_sdk::native_token::lamports_to_sol;

use super::{ClusterRpc, OutputFormat};

pub async fn process_show(
    rpc: &ClusterRpc,
    config: &StakePoolConfig,
    output: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stake_pool: StakePool = fetch_required_account(rpc, &config.stake_pool).await?;
    let validator_list: ValidatorList =
        fetch_required_account(rpc, &stake_pool.validator_list).await?;

    if let OutputFormat::Json = output {
        let value = json!({
            "address": config.stake_pool.to_string(),
            "stakePool": stake_pool,
            "validatorList": validator_list,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Stake pool: {}", config.stake_pool);
    println!("Program id: {}", config.program_id);
    println!("Manager: {}", stake_pool.manager);
    println!("Staker: {}", stake_pool.staker);
    println!("Reserve stake: {}", stake_pool.reserve_stake);
    println!("Pool mint: {}", stake_pool.pool_mint);
    println!(
        "Total lamports: ◎{}",
        lamports_to_sol(stake_pool.total_lamports)
    );
    println!(
        "Pool token supply: {}",
        lamports_to_sol(stake_pool.pool_token_supply)
    );
    println!(
        "SOL per pool token: {}",
        divide_to_f64(
            stake_pool.total_lamports as u128,
            stake_pool.pool_token_supply as u128
        )
    );
    if let Some(rate) = &stake_pool.rate_of_exchange {
        println!(
            "Rate of exchange: {}",
            divide_to_f64(rate.numerator as u128, rate.denominator as u128)
        );
    }
    println!("Last update epoch: {}", stake_pool.last_update_epoch);
    if let Some(authority) = stake_pool.sol_deposit_authority {
        println!("SOL deposit authority: {authority}");
    }
    if let Some(authority) = stake_pool.sol_withdraw_authority {
        println!("SOL withdraw authority: {authority}");
    }

    println!(
        "\nValidators ({}/{}):",
        validator_list.validators.len(),
        validator_list.max_validators
    );
    for validator in &validator_list.validators {
        println!(
            "  {} {:?} active ◎{} transient ◎{}",
            validator.vote_account_address,
            validator.status,
            lamports_to_sol(validator.active_stake_lamports),
            lamports_to_sol(validator.transient_stake_lamports),
        );
    }

    Ok(())
}
