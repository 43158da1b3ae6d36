mod setup;

use assert_matches::assert_matches;
use esol_stake_pool_client::{
    accounts::RateOfExchange,
    errors::StakePoolClientError,
    flows::{withdraw_sol, WithdrawSolArgs},
    instructions::StakePoolInstruction,
};
use setup::{instruction_accounts, instruction_data, is_signed_by, program_ids, PoolFixture};
use solana_program::stake::state::StakeStateV2;
use solana_sdk::{native_token::LAMPORTS_PER_SOL, pubkey::Pubkey, rent::Rent};

fn args(fixture: &PoolFixture, pool_tokens: u64) -> WithdrawSolArgs {
    WithdrawSolArgs {
        user: fixture.user,
        pool_tokens,
        sol_withdraw_authority: None,
    }
}

fn ready_fixture() -> PoolFixture {
    let mut fixture = PoolFixture::new();
    fixture.fund_pool_tokens(100 * LAMPORTS_PER_SOL);
    fixture.create_community_token_ata();
    fixture.create_staking_rewards();
    fixture
}

#[tokio::test]
async fn withdraw_sol_from_reserve() {
    // Given a reserve holding 50 SOL and a user with 100 pool tokens.

    let fixture = ready_fixture();

    // When the user withdraws 10 pool tokens.

    let transaction = withdraw_sol(
        &fixture.rpc,
        &fixture.config,
        args(&fixture, 10 * LAMPORTS_PER_SOL),
    )
    .await
    .unwrap();

    // Then the tokens are approved and burned for lamports from the reserve.

    assert_eq!(
        program_ids(&transaction),
        vec![spl_token::id(), fixture.config.program_id]
    );
    assert_eq!(
        StakePoolInstruction::unpack(instruction_data(&transaction, 1)).unwrap(),
        StakePoolInstruction::WithdrawSolWithDao(10 * LAMPORTS_PER_SOL)
    );

    let withdraw_accounts = instruction_accounts(&transaction, 1);
    assert_eq!(withdraw_accounts.len(), 16);
    assert_eq!(withdraw_accounts[3], fixture.pool_token_ata());
    assert_eq!(withdraw_accounts[4], fixture.community_token_ata());
    assert_eq!(withdraw_accounts[5], fixture.stake_pool.reserve_stake);
    assert_eq!(withdraw_accounts[6], fixture.user);
    assert_eq!(withdraw_accounts[13], fixture.staking_rewards());

    let transfer_authority = withdraw_accounts[2];
    assert_eq!(instruction_accounts(&transaction, 0)[1], transfer_authority);
    assert!(is_signed_by(&transaction, &transfer_authority));
}

#[tokio::test]
async fn withdraw_sol_with_sol_withdraw_authority() {
    // Given a pool that restricts SOL withdrawals to an authority.

    let mut fixture = ready_fixture();
    let authority = Pubkey::new_unique();
    fixture.stake_pool.sol_withdraw_authority = Some(authority);
    fixture.write_pool();

    // When the authority is passed along.

    let transaction = withdraw_sol(
        &fixture.rpc,
        &fixture.config,
        WithdrawSolArgs {
            sol_withdraw_authority: Some(authority),
            ..args(&fixture, LAMPORTS_PER_SOL)
        },
    )
    .await
    .unwrap();

    // Then it is the last account and still has to sign.

    let withdraw_accounts = instruction_accounts(&transaction, 1);
    assert_eq!(withdraw_accounts.len(), 17);
    assert_eq!(withdraw_accounts[16], authority);
    assert!(transaction.message.is_signer(
        transaction
            .message
            .account_keys
            .iter()
            .position(|key| *key == authority)
            .unwrap()
    ));
    assert!(!is_signed_by(&transaction, &authority));
}

#[tokio::test]
async fn fail_withdraw_sol_with_wrong_authority() {
    let mut fixture = ready_fixture();

    // The pool has no authority.

    let received = Pubkey::new_unique();
    let err = withdraw_sol(
        &fixture.rpc,
        &fixture.config,
        WithdrawSolArgs {
            sol_withdraw_authority: Some(received),
            ..args(&fixture, LAMPORTS_PER_SOL)
        },
    )
    .await
    .unwrap_err();
    assert_matches!(
        err,
        StakePoolClientError::AuthorityMismatch { expected: None, received: r } if r == received
    );

    // The pool has another authority.

    let expected = Pubkey::new_unique();
    fixture.stake_pool.sol_withdraw_authority = Some(expected);
    fixture.write_pool();

    let err = withdraw_sol(
        &fixture.rpc,
        &fixture.config,
        WithdrawSolArgs {
            sol_withdraw_authority: Some(received),
            ..args(&fixture, LAMPORTS_PER_SOL)
        },
    )
    .await
    .unwrap_err();
    assert_matches!(
        err,
        StakePoolClientError::AuthorityMismatch { expected: Some(e), .. } if e == expected
    );
}

#[tokio::test]
async fn fail_withdraw_sol_above_reserve_liquidity() {
    // Given a reserve holding 50 SOL.

    let fixture = ready_fixture();
    let stake_rent = Rent::default().minimum_balance(StakeStateV2::size_of());

    // When the user withdraws 60 pool tokens at 1:1.

    let err = withdraw_sol(
        &fixture.rpc,
        &fixture.config,
        args(&fixture, 60 * LAMPORTS_PER_SOL),
    )
    .await
    .unwrap_err();

    // Then the error reports what the reserve can cover.

    assert_matches!(
        err,
        StakePoolClientError::InsufficientFunds {
            requested,
            available,
        } if requested == 60 * LAMPORTS_PER_SOL && available == 50 * LAMPORTS_PER_SOL - stake_rent
    );
}

#[tokio::test]
async fn reserve_liquidity_follows_rate_of_exchange() {
    // Given a pool paying 2 lamports per pool token and a 50 SOL reserve.

    let mut fixture = ready_fixture();
    fixture.stake_pool.rate_of_exchange = Some(RateOfExchange {
        denominator: 1,
        numerator: 2,
    });
    fixture.write_pool();
    let stake_rent = Rent::default().minimum_balance(StakeStateV2::size_of());

    // Then 20 pool tokens fit.

    withdraw_sol(
        &fixture.rpc,
        &fixture.config,
        args(&fixture, 20 * LAMPORTS_PER_SOL),
    )
    .await
    .unwrap();

    // And 30 pool tokens do not.

    let err = withdraw_sol(
        &fixture.rpc,
        &fixture.config,
        args(&fixture, 30 * LAMPORTS_PER_SOL),
    )
    .await
    .unwrap_err();
    assert_matches!(
        err,
        StakePoolClientError::InsufficientFunds { available, .. }
            if available == (50 * LAMPORTS_PER_SOL - stake_rent) / 2
    );
}
