//! Network reads the flows depend on.
//!
//! The flows never submit transactions, so the seam only covers account
//! reads, balances, rent and the latest blockhash.

use async_trait::async_trait;
use log::debug;
use solana_program::{hash::Hash, pubkey::Pubkey};

use crate::{
    codec::AccountSchema,
    errors::{RpcError, StakePoolClientError},
};

#[async_trait]
pub trait StakePoolRpc: Send + Sync {
    /// Raw account data, `None` when the account does not exist.
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, RpcError>;

    async fn get_balance(&self, address: &Pubkey) -> Result<u64, RpcError>;

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, RpcError>;

    async fn get_latest_blockhash(&self) -> Result<Hash, RpcError>;
}

/// Fetches and decodes `address`, `None` when it does not exist.
pub async fn fetch_account<T: AccountSchema>(
    rpc: &dyn StakePoolRpc,
    address: &Pubkey,
) -> Result<Option<T>, StakePoolClientError> {
    match rpc.get_account_data(address).await? {
        Some(data) => {
            debug!("Fetched {} account {} ({} bytes)", T::NAME, address, data.len());
            T::from_bytes(&data).map(Some)
        }
        None => Ok(None),
    }
}

/// Fetches and decodes `address`, which must exist.
pub async fn fetch_required_account<T: AccountSchema>(
    rpc: &dyn StakePoolRpc,
    address: &Pubkey,
) -> Result<T, StakePoolClientError> {
    fetch_account(rpc, address)
        .await?
        .ok_or(StakePoolClientError::AccountNotFound {
            account: T::NAME,
            address: *address,
        })
}

pub async fn account_exists(
    rpc: &dyn StakePoolRpc,
    address: &Pubkey,
) -> Result<bool, StakePoolClientError> {
    Ok(rpc.get_account_data(address).await?.is_some())
}
