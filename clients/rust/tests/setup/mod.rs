#![allow(dead_code)]

pub mod pool;
pub mod token;

use std::collections::HashMap;

use async_trait::async_trait;
use esol_stake_pool_client::{errors::RpcError, rpc::StakePoolRpc};
use solana_sdk::{hash::Hash, pubkey::Pubkey, rent::Rent, transaction::Transaction};

pub use pool::*;
pub use token::*;

/// In-memory chain state served through [`StakePoolRpc`].
#[derive(Default)]
pub struct MockRpc {
    pub accounts: HashMap<Pubkey, Vec<u8>>,
    pub balances: HashMap<Pubkey, u64>,
    pub blockhash: Hash,
}

impl MockRpc {
    pub fn new() -> Self {
        Self {
            blockhash: Hash::new_unique(),
            ..Self::default()
        }
    }

    pub fn set_account(&mut self, address: Pubkey, data: Vec<u8>) {
        self.accounts.insert(address, data);
    }

    pub fn remove_account(&mut self, address: &Pubkey) {
        self.accounts.remove(address);
    }

    pub fn set_balance(&mut self, address: Pubkey, lamports: u64) {
        self.balances.insert(address, lamports);
    }
}

#[async_trait]
impl StakePoolRpc for MockRpc {
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, RpcError> {
        Ok(self.accounts.get(address).cloned())
    }

    async fn get_balance(&self, address: &Pubkey) -> Result<u64, RpcError> {
        Ok(self.balances.get(address).copied().unwrap_or_default())
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError> {
        Ok(Rent::default().minimum_balance(data_len))
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError> {
        Ok(self.blockhash)
    }
}

/// RPC double whose every call fails.
pub struct FailingRpc;

#[async_trait]
impl StakePoolRpc for FailingRpc {
    async fn get_account_data(&self, _address: &Pubkey) -> Result<Option<Vec<u8>>, RpcError> {
        Err("connection refused".into())
    }

    async fn get_balance(&self, _address: &Pubkey) -> Result<u64, RpcError> {
        Err("connection refused".into())
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        _data_len: usize,
    ) -> Result<u64, RpcError> {
        Err("connection refused".into())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError> {
        Err("connection refused".into())
    }
}

/// Program id of every instruction of `transaction`, in order.
pub fn program_ids(transaction: &Transaction) -> Vec<Pubkey> {
    transaction
        .message
        .instructions
        .iter()
        .map(|instruction| *instruction.program_id(&transaction.message.account_keys))
        .collect()
}

/// Accounts referenced by the `index`-th instruction of `transaction`.
pub fn instruction_accounts(transaction: &Transaction, index: usize) -> Vec<Pubkey> {
    transaction.message.instructions[index]
        .accounts
        .iter()
        .map(|account| transaction.message.account_keys[*account as usize])
        .collect()
}

pub fn instruction_data(transaction: &Transaction, index: usize) -> &[u8] {
    &transaction.message.instructions[index].data
}

/// Whether `signer` already signed `transaction`.
pub fn is_signed_by(transaction: &Transaction, signer: &Pubkey) -> bool {
    transaction
        .message
        .account_keys
        .iter()
        .position(|key| key == signer)
        .and_then(|position| transaction.signatures.get(position))
        .map(|signature| *signature != Default::default())
        .unwrap_or(false)
}
