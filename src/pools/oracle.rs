//! Spot price reads.

use super::PairPool;
use crate::clock::Clock;
use crate::domain::{Address, Amount, Price, Side};
use crate::error::{Result, SwapError};
use crate::ledger::TokenLedger;
use crate::traits::PriceOracle;

impl<L: TokenLedger + ?Sized, C: Clock> PriceOracle for PairPool<L, C> {
    fn get_price(&self, first: &Address, second: &Address) -> Result<Price> {
        // held so the read cannot interleave with a half-settled operation
        let state = self.lock();
        let order = self.pair().orient(first, second)?;
        let (reserve_first, reserve_second) = self.reserves_in(&state, order);
        if reserve_first.is_zero() || reserve_second.is_zero() {
            return Err(SwapError::NoLiquidity);
        }
        Price::from_ratio(reserve_second, reserve_first)
    }

    fn reserves(&self) -> (Amount, Amount) {
        let state = self.lock();
        (self.reserve(&state, Side::A), self.reserve(&state, Side::B))
    }
}
