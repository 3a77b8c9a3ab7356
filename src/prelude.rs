//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use simple_swap::prelude::*;
//! ```

pub use crate::domain::{
    AddLiquidity, Address, Amount, Decimals, Deposit, Liquidity, PairOrder, Price,
    RemoveLiquidity, SwapExactIn, Timestamp, TokenPair, Withdrawal,
};

pub use crate::traits::{LiquidityPool, PriceOracle, SwapPool};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{PoolConfig, ShareTokenConfig};

pub use crate::clock::{Clock, ManualClock, SystemClock};

pub use crate::ledger::{MemoryTokenLedger, ShareEvent, TokenLedger};

pub use crate::pools::{get_amount_out, PairPool};

pub use crate::error::{Result, SwapError};
