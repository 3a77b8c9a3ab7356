//! The configured pair of pooled tokens and caller-order normalisation.

use super::Address;
use crate::error::SwapError;

/// One side of the configured pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The configured `token_a`.
    A,
    /// The configured `token_b`.
    B,
}

/// How a caller-supplied `(first, second)` pair lines up with the
/// configured `(token_a, token_b)`.
///
/// Obtained once per operation from [`TokenPair::orient`]; afterwards the
/// operation addresses ledgers and reserves through [`PairOrder::sides`]
/// instead of branching on addresses again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairOrder {
    /// `first == token_a`, `second == token_b`.
    Forward,
    /// `first == token_b`, `second == token_a`.
    Reversed,
}

impl PairOrder {
    /// Returns the configured sides of the caller's `(first, second)`.
    #[must_use]
    pub const fn sides(self) -> (Side, Side) {
        match self {
            Self::Forward => (Side::A, Side::B),
            Self::Reversed => (Side::B, Side::A),
        }
    }
}

/// Two distinct token identities in configured order.
///
/// Unlike a canonically sorted pair, the order here is the deployment
/// order: `token_a` is whatever the pool was configured with first.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, PairOrder, TokenPair};
///
/// let x = Address::repeat_byte(1);
/// let y = Address::repeat_byte(2);
/// let pair = TokenPair::new(x, y).expect("distinct");
/// assert_eq!(pair.orient(&y, &x), Ok(PairOrder::Reversed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    token_a: Address,
    token_b: Address,
}

impl TokenPair {
    /// Creates a pair from two distinct token identities.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::IdenticalTokens`] if both identities are equal.
    pub fn new(token_a: Address, token_b: Address) -> Result<Self, SwapError> {
        if token_a == token_b {
            return Err(SwapError::IdenticalTokens);
        }
        Ok(Self { token_a, token_b })
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

    /// Matches a caller-supplied pair against the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidTokens`] unless `{first, second}` is
    /// exactly `{token_a, token_b}`.
    pub fn orient(&self, first: &Address, second: &Address) -> Result<PairOrder, SwapError> {
        if *first == self.token_a && *second == self.token_b {
            Ok(PairOrder::Forward)
        } else if *first == self.token_b && *second == self.token_a {
            Ok(PairOrder::Reversed)
        } else {
            Err(SwapError::InvalidTokens)
        }
    }
}
