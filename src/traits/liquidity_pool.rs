//! Liquidity management trait extending [`SwapPool`].
//!
//! [`LiquidityPool`] adds share-issuing deposits and proportional
//! withdrawals on top of the swap functionality of [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! [`LiquidityPool::total_supply`] **only** changes through
//! [`LiquidityPool::add_liquidity`] and [`LiquidityPool::remove_liquidity`].
//! Swaps, share transfers and price reads never alter it.
//!
//! For a deposit of `(a, b)` into reserves `(ra, rb)` with supply `S`:
//!
//! ```text
//! S = 0 :  minted = ⌊√(a·b)⌋
//! S > 0 :  minted = ⌊a·S / ra⌋       (a, b chosen so that a/b ≈ ra/rb)
//! ```
//!
//! and burning `l` shares pays out `⌊l·ra / S⌋` and `⌊l·rb / S⌋`.

use super::SwapPool;
use crate::domain::{Address, AddLiquidity, Deposit, Liquidity, RemoveLiquidity, Withdrawal};
use crate::error::Result;

/// Trait for pools that accept deposits against liquidity shares.
pub trait LiquidityPool: SwapPool {
    /// Deposits both tokens and mints shares to `request.to`.
    ///
    /// Tokens are pulled from `caller`, who must have approved the pool on
    /// both token ledgers.  Amounts are interpreted in the caller's token
    /// order and reported back in the same order.
    ///
    /// # Errors
    ///
    /// - [`SwapError::Expired`](crate::error::SwapError::Expired),
    ///   [`SwapError::InvalidTokens`](crate::error::SwapError::InvalidTokens),
    ///   [`SwapError::ZeroAddress`](crate::error::SwapError::ZeroAddress)
    ///   before anything is computed.
    /// - [`SwapError::NoLiquidity`](crate::error::SwapError::NoLiquidity)
    ///   if shares exist but a reserve is empty.
    /// - [`SwapError::BelowMinimumA`](crate::error::SwapError::BelowMinimumA) /
    ///   [`SwapError::BelowMinimumB`](crate::error::SwapError::BelowMinimumB).
    /// - [`SwapError::ZeroLiquidity`](crate::error::SwapError::ZeroLiquidity)
    ///   if no shares would be minted.
    /// - [`SwapError::Overflow`](crate::error::SwapError::Overflow).
    /// - any token-ledger refusal during settlement.
    fn add_liquidity(&self, caller: Address, request: &AddLiquidity) -> Result<Deposit>;

    /// Burns `request.liquidity` of `caller`'s shares and pays out the
    /// proportional reserves to `request.to`.
    ///
    /// # Errors
    ///
    /// - The same entry checks as [`LiquidityPool::add_liquidity`].
    /// - [`SwapError::InsufficientBalance`](crate::error::SwapError::InsufficientBalance)
    ///   if `caller` holds fewer shares than requested.
    /// - [`SwapError::ZeroLiquidity`](crate::error::SwapError::ZeroLiquidity)
    ///   for a zero burn.
    /// - [`SwapError::NoLiquidity`](crate::error::SwapError::NoLiquidity)
    ///   if no shares exist.
    /// - [`SwapError::BelowMinimumA`](crate::error::SwapError::BelowMinimumA) /
    ///   [`SwapError::BelowMinimumB`](crate::error::SwapError::BelowMinimumB).
    /// - any token-ledger refusal during settlement, or
    ///   [`SwapError::SettlementFailed`](crate::error::SwapError::SettlementFailed)
    ///   if a payout failed after another had completed.  In that case the
    ///   shares are burned and the undelivered amount is held for
    ///   `request.to` to claim.
    fn remove_liquidity(&self, caller: Address, request: &RemoveLiquidity) -> Result<Withdrawal>;

    /// Returns the outstanding share supply.
    #[must_use]
    fn total_supply(&self) -> Liquidity;
}
