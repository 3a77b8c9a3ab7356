//! Core swap trait.
//!
//! [`SwapPool`] is the foundational abstraction of a pool: it executes an
//! exact-input swap between the two configured tokens and reports which
//! tokens it trades.
//!
//! # Pricing Invariant
//!
//! Swaps follow the fee-less constant-product rule
//!
//! ```text
//! amount_out = amount_in · reserve_out / (reserve_in + amount_in)
//! ```
//!
//! floored, so the product of reserves never decreases: `k' ≥ k`.
//!
//! # Atomicity
//!
//! A swap either settles both legs or neither.  If a leg fails after the
//! input was pulled, the input is refunded before the error is returned.

use crate::domain::{Address, Amount, SwapExactIn, TokenPair};
use crate::error::Result;

/// Trait for pools that execute exact-input swaps.
///
/// Methods take `&self`: a pool serialises concurrent callers internally
/// so that it can be shared behind an `Arc`.
pub trait SwapPool {
    /// Sells exactly `request.amount_in` of `path[0]` for `path[1]`.
    ///
    /// The input is pulled from `caller` (who must have approved the
    /// pool on the sold token's ledger) and the output is paid to
    /// `request.to`.
    ///
    /// # Returns
    ///
    /// The amount of `path[1]` paid out.
    ///
    /// # Errors
    ///
    /// In the order they are checked:
    ///
    /// - [`SwapError::Expired`](crate::error::SwapError::Expired)
    /// - [`SwapError::InvalidPath`](crate::error::SwapError::InvalidPath)
    /// - [`SwapError::InvalidTokens`](crate::error::SwapError::InvalidTokens)
    /// - [`SwapError::ZeroAddress`](crate::error::SwapError::ZeroAddress)
    ///   for a zero recipient
    /// - [`SwapError::ZeroInput`](crate::error::SwapError::ZeroInput)
    /// - [`SwapError::NoLiquidity`](crate::error::SwapError::NoLiquidity)
    /// - [`SwapError::InsufficientOutput`](crate::error::SwapError::InsufficientOutput)
    /// - any token-ledger refusal during settlement, or
    ///   [`SwapError::SettlementFailed`](crate::error::SwapError::SettlementFailed)
    ///   if a refund itself failed, in which case the refund is held for
    ///   `caller` to claim
    fn swap_exact_tokens_for_tokens(&self, caller: Address, request: &SwapExactIn)
        -> Result<Amount>;

    /// Returns the pooled pair in configured order.
    #[must_use]
    fn token_pair(&self) -> TokenPair;
}
