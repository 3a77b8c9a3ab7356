//! The constant-product pool and its pure pricing functions.
//!
//! | Item | Role |
//! |------|------|
//! | [`PairPool`] | Stateful pool: locking, settlement, share token |
//! | [`get_amount_out`] | Swap quote (`x · y = k`, no fee) |
//! | [`quote_deposit`] / [`quote_withdrawal`] | Share minting and redemption math |
//!
//! Operations are split by concern: `swap` implements
//! [`SwapPool`](crate::traits::SwapPool), `liquidity` implements
//! [`LiquidityPool`](crate::traits::LiquidityPool), and `oracle`
//! implements [`PriceOracle`](crate::traits::PriceOracle), all on the same
//! [`PairPool`].

mod liquidity;
mod oracle;
mod pair_pool;
mod settlement;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use liquidity::{quote_deposit, quote_withdrawal};
pub use pair_pool::PairPool;
pub use swap::get_amount_out;
