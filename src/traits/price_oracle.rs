//! Read-only spot price view.

use crate::domain::{Address, Amount, Price};
use crate::error::Result;

/// Trait for pools that quote a spot price from their reserves.
///
/// Reads never mutate the pool.  The quoted price is the instantaneous
/// reserve ratio, so it moves with every swap and donation.
pub trait PriceOracle {
    /// Units of `second` per unit of `first`, scaled by `10^18`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidTokens`](crate::error::SwapError::InvalidTokens)
    ///   unless `{first, second}` is the configured pair.
    /// - [`SwapError::NoLiquidity`](crate::error::SwapError::NoLiquidity)
    ///   if either reserve is zero.
    /// - [`SwapError::Overflow`](crate::error::SwapError::Overflow) if the
    ///   scaled ratio does not fit in `u128`.
    fn get_price(&self, first: &Address, second: &Address) -> Result<Price>;

    /// Current reserves in configured order.
    #[must_use]
    fn reserves(&self) -> (Amount, Amount);
}
