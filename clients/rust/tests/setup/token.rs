use solana_sdk::pubkey::Pubkey;

/// Writes an initialized SPL token account by hand.
pub fn token_account_bytes(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(165);
    data.extend_from_slice(mint.as_ref());
    data.extend_from_slice(owner.as_ref());
    data.extend_from_slice(&amount.to_le_bytes());
    // delegate: none
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&[0; 32]);
    // state: initialized
    data.push(1);
    // is_native: none
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&0u64.to_le_bytes());
    // delegated_amount
    data.extend_from_slice(&0u64.to_le_bytes());
    // close_authority: none
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(&[0; 32]);
    data
}
