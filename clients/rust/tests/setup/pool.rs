use esol_stake_pool_client::{
    accounts::{
        AccountType, CommunityToken, DaoState, Fee, Lockup, StakePool, StakeStatus,
        ValidatorList, ValidatorStakeInfo,
    },
    codec::AccountSchema,
    pdas::{
        find_community_token_pda, find_community_token_staking_rewards_counter_pda,
        find_community_token_staking_rewards_pda, find_dao_state_pda,
    },
    StakePoolConfig,
};
use solana_sdk::{native_token::LAMPORTS_PER_SOL, pubkey::Pubkey};
use spl_associated_token_account::get_associated_token_address;

use super::{token_account_bytes, MockRpc};

/// A pool with DAO bookkeeping enabled, one active validator and a funded
/// user wallet.
pub struct PoolFixture {
    pub rpc: MockRpc,
    pub config: StakePoolConfig,
    pub stake_pool: StakePool,
    pub validator_list: ValidatorList,
    pub user: Pubkey,
    pub community_token_mint: Pubkey,
}

impl PoolFixture {
    pub fn new() -> Self {
        let config = StakePoolConfig::new(Pubkey::new_unique(), Pubkey::new_unique());
        let community_token_mint = Pubkey::new_unique();
        let user = Pubkey::new_unique();

        let stake_pool = stake_pool(10_000 * LAMPORTS_PER_SOL, 9_000 * LAMPORTS_PER_SOL);
        let validator_list = ValidatorList {
            account_type: AccountType::ValidatorList,
            max_validators: 100,
            validators: vec![validator(
                StakeStatus::Active,
                5_000 * LAMPORTS_PER_SOL,
                0,
            )],
        };

        let mut fixture = Self {
            rpc: MockRpc::new(),
            config,
            stake_pool,
            validator_list,
            user,
            community_token_mint,
        };
        fixture.write_pool();
        fixture.write_validator_list();

        let rpc = &mut fixture.rpc;
        rpc.set_account(
            find_dao_state_pda(&config.stake_pool, &config.program_id).0,
            DaoState { is_enabled: true }.to_bytes().unwrap(),
        );
        rpc.set_account(
            find_community_token_pda(&config.stake_pool, &config.program_id).0,
            CommunityToken {
                token_mint: community_token_mint,
            }
            .to_bytes()
            .unwrap(),
        );
        rpc.set_account(
            find_community_token_staking_rewards_counter_pda(&config.stake_pool, &config.program_id)
                .0,
            vec![0; 16],
        );
        rpc.set_balance(user, 100 * LAMPORTS_PER_SOL);
        rpc.set_balance(fixture.stake_pool.reserve_stake, 50 * LAMPORTS_PER_SOL);

        fixture
    }

    pub fn write_pool(&mut self) {
        let data = self.stake_pool.to_bytes().unwrap();
        self.rpc.set_account(self.config.stake_pool, data);
    }

    pub fn write_validator_list(&mut self) {
        let mut data = self.validator_list.to_bytes().unwrap();
        // unused capacity
        data.resize(data.len() + 73 * 4, 0);
        self.rpc.set_account(self.stake_pool.validator_list, data);
    }

    pub fn staking_rewards(&self) -> Pubkey {
        find_community_token_staking_rewards_pda(
            &self.config.stake_pool,
            &self.user,
            &self.config.program_id,
        )
        .0
    }

    pub fn pool_token_ata(&self) -> Pubkey {
        get_associated_token_address(&self.user, &self.stake_pool.pool_mint)
    }

    pub fn community_token_ata(&self) -> Pubkey {
        get_associated_token_address(&self.user, &self.community_token_mint)
    }

    /// Gives the user an associated pool token account holding `amount`.
    pub fn fund_pool_tokens(&mut self, amount: u64) {
        let data = token_account_bytes(&self.stake_pool.pool_mint, &self.user, amount);
        self.rpc.set_account(self.pool_token_ata(), data);
    }

    pub fn create_community_token_ata(&mut self) {
        let data = token_account_bytes(&self.community_token_mint, &self.user, 0);
        self.rpc.set_account(self.community_token_ata(), data);
    }

    pub fn create_staking_rewards(&mut self) {
        self.rpc.set_account(self.staking_rewards(), vec![0; 105]);
    }
}

pub fn stake_pool(total_lamports: u64, pool_token_supply: u64) -> StakePool {
    StakePool {
        account_type: AccountType::StakePool,
        manager: Pubkey::new_unique(),
        staker: Pubkey::new_unique(),
        stake_deposit_authority: Pubkey::new_unique(),
        stake_withdraw_bump_seed: 253,
        validator_list: Pubkey::new_unique(),
        reserve_stake: Pubkey::new_unique(),
        pool_mint: Pubkey::new_unique(),
        manager_fee_account: Pubkey::new_unique(),
        token_program_id: spl_token::id(),
        total_lamports,
        pool_token_supply,
        last_update_epoch: 512,
        lockup: Lockup::default(),
        epoch_fee: Fee {
            denominator: 100,
            numerator: 5,
        },
        next_epoch_fee: None,
        preferred_deposit_validator_vote_address: None,
        preferred_withdraw_validator_vote_address: None,
        stake_deposit_fee: Fee::default(),
        stake_withdrawal_fee: Fee::default(),
        next_withdrawal_fee: None,
        stake_referral_fee: 0,
        sol_deposit_authority: None,
        sol_deposit_fee: Fee::default(),
        sol_referral_fee: 0,
        sol_withdraw_authority: None,
        sol_withdrawal_fee: Fee::default(),
        next_sol_withdrawal_fee: None,
        last_epoch_pool_token_supply: pool_token_supply,
        last_epoch_total_lamports: total_lamports,
        rate_of_exchange: None,
        treasury_fee_account: Pubkey::new_unique(),
        treasury_fee: Fee::default(),
        total_lamports_liquidity: 0,
    }
}

pub fn validator(status: StakeStatus, active: u64, transient: u64) -> ValidatorStakeInfo {
    ValidatorStakeInfo {
        active_stake_lamports: active,
        transient_stake_lamports: transient,
        last_update_epoch: 512,
        transient_seed_suffix_start: 0,
        transient_seed_suffix_end: 0,
        status,
        vote_account_address: Pubkey::new_unique(),
    }
}
