//! Account and token identity.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SwapError;

/// Byte length of an [`Address`].
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte identity shared by token ledgers, pools and account holders.
///
/// The same type names a token (the ledger that tracks it), the pool (the
/// account holding the reserves) and every caller or recipient.  The
/// all-zero address is reserved as the mint/burn counterparty of the share
/// ledger and is rejected wherever a real account is required.
///
/// Addresses render as lowercase `0x`-prefixed hex and parse from the same
/// form (the prefix is optional).
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Address;
///
/// let addr: Address = "0x0101010101010101010101010101010101010101".parse().expect("valid");
/// assert_eq!(addr, Address::repeat_byte(1));
/// assert_eq!(addr.to_string(), "0x0101010101010101010101010101010101010101");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; ADDRESS_LEN]);

    /// Creates an address from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Creates an address with every byte set to `byte`.
    #[must_use]
    pub const fn repeat_byte(byte: u8) -> Self {
        Self([byte; ADDRESS_LEN])
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Returns `true` for [`Address::ZERO`].
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LEN]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl FromStr for Address {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| SwapError::InvalidAddress("expected 40 hex digits"))?;
        Ok(Self(bytes))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
