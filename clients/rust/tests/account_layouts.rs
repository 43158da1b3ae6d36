use assert_matches::assert_matches;
use esol_stake_pool_client::{
    accounts::{
        AccountType, CommunityToken, DaoState, Fee, RateOfExchange, StakePool, StakeStatus,
        TokenAccount, TokenAccountState, ValidatorList,
    },
    codec::AccountSchema,
    errors::StakePoolClientError,
};
use solana_sdk::pubkey::Pubkey;
use spl_token::solana_program::{program_option::COption, program_pack::Pack};

/// Little-endian byte writer for hand-built account fixtures.
#[derive(Default)]
struct Bytes(Vec<u8>);

impl Bytes {
    fn u8(mut self, value: u8) -> Self {
        self.0.push(value);
        self
    }

    fn u32(mut self, value: u32) -> Self {
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }

    fn u64(mut self, value: u64) -> Self {
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }

    fn i64(mut self, value: i64) -> Self {
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }

    fn key(mut self, key: &Pubkey) -> Self {
        self.0.extend_from_slice(key.as_ref());
        self
    }

    fn fee(self, denominator: u64, numerator: u64) -> Self {
        self.u64(denominator).u64(numerator)
    }
}

#[test]
fn stake_pool_layout() {
    let keys: Vec<Pubkey> = (0..12).map(|_| Pubkey::new_unique()).collect();

    let bytes = Bytes::default()
        .u8(1) // account type
        .key(&keys[0]) // manager
        .key(&keys[1]) // staker
        .key(&keys[2]) // stake deposit authority
        .u8(254)
        .key(&keys[3]) // validator list
        .key(&keys[4]) // reserve
        .key(&keys[5]) // pool mint
        .key(&keys[6]) // manager fee account
        .key(&spl_token::id())
        .u64(1_000_000)
        .u64(900_000)
        .u64(600)
        .i64(-1)
        .u64(7)
        .key(&keys[7]) // lockup custodian
        .fee(100, 3) // epoch fee
        .u8(1)
        .fee(100, 4) // next epoch fee
        .u8(0) // preferred deposit validator
        .u8(1)
        .key(&keys[8]) // preferred withdraw validator
        .fee(0, 0) // stake deposit fee
        .fee(1000, 1) // stake withdrawal fee
        .u8(0) // next withdrawal fee
        .u8(50)
        .u8(1)
        .key(&keys[9]) // sol deposit authority
        .fee(0, 0)
        .u8(0)
        .u8(0) // sol withdraw authority
        .fee(200, 1)
        .u8(0)
        .u64(890_000)
        .u64(990_000)
        .u8(1)
        .fee(100, 105) // rate of exchange
        .key(&keys[10]) // treasury fee account
        .fee(10, 1)
        .u64(42)
        .0;

    let stake_pool = StakePool::from_bytes(&bytes).unwrap();

    assert_eq!(stake_pool.account_type, AccountType::StakePool);
    assert_eq!(stake_pool.manager, keys[0]);
    assert_eq!(stake_pool.stake_withdraw_bump_seed, 254);
    assert_eq!(stake_pool.reserve_stake, keys[4]);
    assert_eq!(stake_pool.token_program_id, spl_token::id());
    assert_eq!(stake_pool.total_lamports, 1_000_000);
    assert_eq!(stake_pool.pool_token_supply, 900_000);
    assert_eq!(stake_pool.lockup.unix_timestamp, -1);
    assert_eq!(stake_pool.lockup.custodian, keys[7]);
    assert_eq!(
        stake_pool.next_epoch_fee,
        Some(Fee {
            denominator: 100,
            numerator: 4
        })
    );
    assert_eq!(stake_pool.preferred_deposit_validator_vote_address, None);
    assert_eq!(
        stake_pool.preferred_withdraw_validator_vote_address,
        Some(keys[8])
    );
    assert_eq!(stake_pool.stake_referral_fee, 50);
    assert_eq!(stake_pool.sol_deposit_authority, Some(keys[9]));
    assert_eq!(stake_pool.sol_withdraw_authority, None);
    assert_eq!(
        stake_pool.rate_of_exchange,
        Some(RateOfExchange {
            denominator: 100,
            numerator: 105
        })
    );
    assert_eq!(stake_pool.treasury_fee_account, keys[10]);
    assert_eq!(stake_pool.total_lamports_liquidity, 42);

    // Encoding gives back the exact bytes.
    assert_eq!(stake_pool.packed_len(), bytes.len());
    assert_eq!(stake_pool.to_bytes().unwrap(), bytes);
}

#[test]
fn fail_stake_pool_with_invalid_account_type() {
    let mut bytes = vec![3];
    bytes.extend_from_slice(&[0; 600]);

    let err = StakePool::from_bytes(&bytes).unwrap_err();
    assert_matches!(
        err,
        StakePoolClientError::MalformedAccountData {
            account: "stake pool",
            ..
        }
    );
}

#[test]
fn validator_list_with_spare_capacity() {
    let vote = Pubkey::new_unique();

    let mut bytes = Bytes::default()
        .u8(2) // account type
        .u32(10) // max validators
        .u32(1) // validators
        .u64(5_000)
        .u64(250)
        .u64(600)
        .u64(3)
        .u64(4)
        .u8(1)
        .key(&vote)
        .0;
    let len = bytes.len();
    // room for the remaining validators
    bytes.resize(len + 73 * 9, 0);

    let validator_list = ValidatorList::from_bytes(&bytes).unwrap();

    assert_eq!(validator_list.account_type, AccountType::ValidatorList);
    assert_eq!(validator_list.max_validators, 10);
    assert_eq!(validator_list.validators.len(), 1);

    let validator = &validator_list.validators[0];
    assert_eq!(validator.active_stake_lamports, 5_000);
    assert_eq!(validator.transient_stake_lamports, 250);
    assert_eq!(validator.transient_seed_suffix_start, 3);
    assert_eq!(validator.status, StakeStatus::DeactivatingTransient);
    assert_eq!(validator.vote_account_address, vote);
    assert_eq!(validator_list.active_validators().count(), 0);

    assert_eq!(validator_list.to_bytes().unwrap(), &bytes[..len]);
}

#[test]
fn fail_validator_list_shorter_than_its_count() {
    let bytes = Bytes::default().u8(2).u32(10).u32(2).u64(5_000).0;

    assert_matches!(
        ValidatorList::from_bytes(&bytes),
        Err(StakePoolClientError::MalformedAccountData {
            account: "validator list",
            ..
        })
    );
}

#[test]
fn token_account_matches_spl_token_layout() {
    let account = spl_token::state::Account {
        mint: Pubkey::new_unique(),
        owner: Pubkey::new_unique(),
        amount: 77,
        delegate: COption::Some(Pubkey::new_unique()),
        state: spl_token::state::AccountState::Initialized,
        is_native: COption::None,
        delegated_amount: 12,
        close_authority: COption::None,
    };
    let mut bytes = vec![0; spl_token::state::Account::LEN];
    spl_token::state::Account::pack(account, &mut bytes).unwrap();

    let token_account = TokenAccount::from_bytes(&bytes).unwrap();

    assert_eq!(TokenAccount::LEN, spl_token::state::Account::LEN);
    assert_eq!(token_account.mint, account.mint);
    assert_eq!(token_account.owner, account.owner);
    assert_eq!(token_account.amount, 77);
    assert_eq!(token_account.delegate.value(), Some(&account.delegate.unwrap()));
    assert_eq!(token_account.state, TokenAccountState::Initialized);
    assert!(!token_account.is_native.is_some());
    assert_eq!(token_account.delegated_amount, 12);
    assert!(!token_account.close_authority.is_some());

    assert_eq!(token_account.to_bytes().unwrap(), bytes);
}

#[test]
fn fail_token_account_with_payload_under_none_tag() {
    let mut bytes = vec![0; TokenAccount::LEN];
    // delegate tag stays 0, its payload is set
    bytes[76] = 9;
    // state: initialized
    bytes[108] = 1;

    assert_matches!(
        TokenAccount::from_bytes(&bytes),
        Err(StakePoolClientError::MalformedAccountData {
            account: "token",
            ..
        })
    );

    bytes[76] = 0;
    assert!(TokenAccount::from_bytes(&bytes).is_ok());
}

#[test]
fn dao_records() {
    assert!(DaoState::from_bytes(&[1]).unwrap().is_enabled);
    assert!(!DaoState::from_bytes(&[0]).unwrap().is_enabled);
    assert_matches!(
        DaoState::from_bytes(&[2]),
        Err(StakePoolClientError::MalformedAccountData { .. })
    );
    assert_matches!(
        DaoState::from_bytes(&[]),
        Err(StakePoolClientError::MalformedAccountData { .. })
    );

    let mint = Pubkey::new_unique();
    let community_token = CommunityToken::from_bytes(mint.as_ref()).unwrap();
    assert_eq!(community_token.token_mint, mint);
    assert_matches!(
        CommunityToken::from_bytes(&mint.as_ref()[..31]),
        Err(StakePoolClientError::MalformedAccountData {
            account: "community token",
            ..
        })
    );
}
