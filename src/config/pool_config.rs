//! Configuration for a two-asset constant-product pool.

use serde::{Deserialize, Serialize};

use super::ShareTokenConfig;
use crate::domain::{Address, TokenPair};
use crate::error::{Result, SwapError};

/// Immutable deployment parameters of a pool (`x · y = k`, no fee).
///
/// Names the account that holds the reserves, the two pooled tokens in
/// configured order, and the metadata of the share token the pool issues.
/// Reserves are not part of the configuration: they are always read from
/// the token ledgers.
///
/// # Validation
///
/// - The pool address and both token identities must be non-zero.
/// - `token_a` and `token_b` must differ.
/// - The pool address must not be one of the tokens.
/// - The share-token metadata must itself be valid.
///
/// # Serialisation
///
/// ```
/// use simple_swap::config::PoolConfig;
///
/// let json = r#"{
///     "address": "0x0000000000000000000000000000000000000099",
///     "token_a": "0x0101010101010101010101010101010101010101",
///     "token_b": "0x0202020202020202020202020202020202020202"
/// }"#;
/// let config: PoolConfig = serde_json::from_str(json).expect("valid json");
/// assert!(config.validate().is_ok());
/// assert_eq!(config.share_token().symbol(), "SST");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    address: Address,
    token_a: Address,
    token_b: Address,
    #[serde(default)]
    share: ShareTokenConfig,
}

impl PoolConfig {
    /// Creates a validated configuration with default share-token metadata.
    ///
    /// # Errors
    ///
    /// See [`PoolConfig::validate`].
    pub fn new(address: Address, token_a: Address, token_b: Address) -> Result<Self> {
        let config = Self {
            address,
            token_a,
            token_b,
            share: ShareTokenConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the share-token metadata.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if `share` is invalid.
    pub fn with_share_token(mut self, share: ShareTokenConfig) -> Result<Self> {
        share.validate()?;
        self.share = share;
        Ok(self)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ZeroAddress`] for a zero pool or token address.
    /// - [`SwapError::IdenticalTokens`] if both tokens are equal.
    /// - [`SwapError::InvalidConfiguration`] if the pool address is one of
    ///   the tokens or the share metadata is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.address.is_zero() {
            return Err(SwapError::ZeroAddress("pool address"));
        }
        if self.token_a.is_zero() || self.token_b.is_zero() {
            return Err(SwapError::ZeroAddress("token"));
        }
        self.token_pair()?;
        if self.address == self.token_a || self.address == self.token_b {
            return Err(SwapError::InvalidConfiguration(
                "pool address collides with a pooled token",
            ));
        }
        self.share.validate()
    }

    /// Returns the account holding the reserves.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the configured first token.
    #[must_use]
    pub const fn token_a(&self) -> Address {
        self.token_a
    }

    /// Returns the configured second token.
    #[must_use]
    pub const fn token_b(&self) -> Address {
        self.token_b
    }

    /// Returns the pooled pair in configured order.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::IdenticalTokens`] if both tokens are equal.
    pub fn token_pair(&self) -> Result<TokenPair> {
        TokenPair::new(self.token_a, self.token_b)
    }

    /// Returns the share-token metadata.
    #[must_use]
    pub const fn share_token(&self) -> &ShareTokenConfig {
        &self.share
    }
}
