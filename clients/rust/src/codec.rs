//! Fixed-layout account codec.
//!
//! Account layouts are declared with `borsh` derives, whose primitives are the
//! wire primitives used by the stake pool program: little-endian integers,
//! raw 32-byte addresses, `0`/`1` booleans, options with a 1-byte presence tag
//! and vectors prefixed by a `u32` element count. The SPL token `COption` is
//! provided separately in [`crate::hooked`].

use std::io::{Result as IoResult, Write};

use borsh::{BorshDeserialize, BorshSerialize};

use crate::errors::StakePoolClientError;

/// A named on-chain account layout.
pub trait AccountSchema: BorshSerialize + BorshDeserialize + Sized {
    /// Name used in error messages.
    const NAME: &'static str;

    /// Decodes the account from the start of `data`.
    ///
    /// Bytes after the layout are ignored, since accounts are usually
    /// allocated with spare capacity (e.g. the validator list).
    fn from_bytes(data: &[u8]) -> Result<Self, StakePoolClientError> {
        let mut data = data;
        Self::deserialize(&mut data).map_err(|err| StakePoolClientError::MalformedAccountData {
            account: Self::NAME,
            reason: err.to_string(),
        })
    }

    /// Encodes the account into a buffer sized by [`AccountSchema::packed_len`].
    fn to_bytes(&self) -> Result<Vec<u8>, StakePoolClientError> {
        let mut data = Vec::with_capacity(self.packed_len());
        self.serialize(&mut data)?;
        Ok(data)
    }

    /// Number of bytes the encoded value occupies, computed from its fields.
    fn packed_len(&self) -> usize {
        let mut counter = ByteCounter::default();
        // Writing into the counter never fails.
        let _ = self.serialize(&mut counter);
        counter.len
    }
}

#[derive(Default)]
struct ByteCounter {
    len: usize,
}

impl Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        self.len += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}
