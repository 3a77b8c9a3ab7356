//! Metadata of the liquidity-share token.

use serde::{Deserialize, Serialize};

use crate::domain::Decimals;
use crate::error::{Result, SwapError};

/// Default share-token name.
pub const DEFAULT_SHARE_NAME: &str = "SimpleSwap Token";

/// Default share-token symbol.
pub const DEFAULT_SHARE_SYMBOL: &str = "SST";

/// Default number of share events retained between drains.
pub const DEFAULT_EVENT_CAPACITY: usize = 1_024;

/// Name, symbol and display decimals of the share token a pool issues,
/// plus how many undrained share events the pool keeps.
///
/// Missing fields deserialise to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareTokenConfig {
    name: String,
    symbol: String,
    decimals: Decimals,
    event_capacity: usize,
}

impl ShareTokenConfig {
    /// Creates validated share-token metadata.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the name or symbol is
    /// blank.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: Decimals) -> Result<Self> {
        let config = Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the metadata.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the name or symbol is
    /// blank.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SwapError::InvalidConfiguration("share token name is empty"));
        }
        if self.symbol.trim().is_empty() {
            return Err(SwapError::InvalidConfiguration(
                "share token symbol is empty",
            ));
        }
        Ok(())
    }

    /// Token name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Display decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Maximum number of undrained share events; `0` disables the journal.
    #[must_use]
    pub const fn event_capacity(&self) -> usize {
        self.event_capacity
    }

    /// Replaces the event journal capacity.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }
}

impl Default for ShareTokenConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SHARE_NAME.to_owned(),
            symbol: DEFAULT_SHARE_SYMBOL.to_owned(),
            decimals: Decimals::STANDARD,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}
