//! Fundamental domain value types used throughout the exchange.
//!
//! This module contains the value types that model the pool domain:
//! token identities, amounts, liquidity shares, prices, deadlines, and the
//! request/receipt types of each pool operation.  Newtypes with validated
//! constructors enforce invariants at the boundary.

mod address;
mod amount;
mod decimals;
mod liquidity;
mod liquidity_change;
mod price;
mod swap_spec;
mod timestamp;
mod token_pair;

pub use address::{Address, ADDRESS_LEN};
pub use amount::Amount;
pub use decimals::Decimals;
pub use liquidity::Liquidity;
pub use liquidity_change::{AddLiquidity, Deposit, RemoveLiquidity, Withdrawal};
pub use price::Price;
pub use swap_spec::SwapExactIn;
pub use timestamp::Timestamp;
pub use token_pair::{PairOrder, Side, TokenPair};
