//! Core trait abstractions for pool operations.
//!
//! This module defines the traits a pool implementation satisfies:
//! [`SwapPool`] for executing swaps, [`LiquidityPool`] for share-issuing
//! deposits and withdrawals, and [`PriceOracle`] for read-only quotes.
//! The collaborator traits the pool *consumes* live elsewhere:
//! [`TokenLedger`](crate::ledger::TokenLedger) and
//! [`Clock`](crate::clock::Clock).

mod liquidity_pool;
mod price_oracle;
mod swap_pool;

pub use liquidity_pool::LiquidityPool;
pub use price_oracle::PriceOracle;
pub use swap_pool::SwapPool;
