use std::io::{Error, ErrorKind, Read, Result, Write};

use borsh::{BorshDeserialize, BorshSerialize};

/// Optional value in the SPL token layout.
///
/// Unlike a borsh `Option`, the presence tag is a little-endian `u32` and the
/// payload span is always present, zero-filled when the value is absent.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct COption<T>(Option<T>);

impl<T> COption<T> {
    pub fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn is_some(&self) -> bool {
        self.0.is_some()
    }
}

impl<T> From<Option<T>> for COption<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<COption<T>> for Option<T> {
    fn from(value: COption<T>) -> Self {
        value.0
    }
}

impl<T: BorshSerialize + Default> BorshSerialize for COption<T> {
    fn serialize<W: Write>(&self, writer: &mut W) -> Result<()> {
        match &self.0 {
            Some(value) => {
                1u32.serialize(writer)?;
                value.serialize(writer)
            }
            None => {
                0u32.serialize(writer)?;
                T::default().serialize(writer)
            }
        }
    }
}

impl<T: BorshDeserialize + Default + PartialEq> BorshDeserialize for COption<T> {
    fn deserialize_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let tag = u32::deserialize_reader(reader)?;
        // The payload is read in both cases so the cursor always advances by
        // the full span.
        let value = T::deserialize_reader(reader)?;

        match tag {
            0 if value == T::default() => Ok(Self(None)),
            0 => Err(Error::new(
                ErrorKind::InvalidData,
                "COption without value has a non-zero payload",
            )),
            1 => Ok(Self(Some(value))),
            _ => Err(Error::new(
                ErrorKind::InvalidData,
                format!("invalid COption tag {tag}"),
            )),
        }
    }
}
