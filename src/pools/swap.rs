//! Exact-input swaps.
//!
//! # Swap Algorithm (sold → bought)
//!
//! 1. `amount_out = ⌊amount_in · reserve_bought / (reserve_sold + amount_in)⌋`
//! 2. pull `amount_in` of the sold token from the caller
//! 3. push `amount_out` of the bought token to the recipient
//!
//! No fee is charged.  Flooring leaves the rounding remainder in the pool,
//! so `k_after ≥ k_before`.

use tracing::debug;

use super::settlement::Journal;
use super::PairPool;
use crate::clock::Clock;
use crate::domain::{Address, Amount, SwapExactIn, TokenPair};
use crate::error::{Result, SwapError};
use crate::ledger::TokenLedger;
use crate::math::{narrow, U256};
use crate::traits::SwapPool;

/// Output of selling `amount_in` into reserves `(reserve_in, reserve_out)`.
///
/// # Errors
///
/// - [`SwapError::ZeroInput`] if `amount_in` is zero.
/// - [`SwapError::NoLiquidity`] if either reserve is zero.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Amount;
/// use simple_swap::pools::get_amount_out;
///
/// let ten = Amount::new(10_000_000_000_000_000_000);
/// let hundred = Amount::new(100_000_000_000_000_000_000);
/// let out = get_amount_out(ten, hundred, hundred).expect("liquid");
/// assert_eq!(out.get(), 9_090_909_090_909_090_909);
/// ```
pub fn get_amount_out(amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(SwapError::ZeroInput);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(SwapError::NoLiquidity);
    }
    // the denominator may exceed u128; the quotient never exceeds reserve_out
    let denominator = U256::from(reserve_in.get()) + U256::from(amount_in.get());
    let numerator = U256::from(amount_in.get()) * U256::from(reserve_out.get());
    narrow(numerator / denominator, "swap output").map(Amount::new)
}

impl<L: TokenLedger + ?Sized, C: Clock> PairPool<L, C> {
    fn try_swap(&self, caller: Address, req: &SwapExactIn) -> Result<Amount> {
        let mut state = self.lock();
        self.enter(req.deadline)?;
        let [sold, bought] = req.path[..] else {
            return Err(SwapError::InvalidPath(req.path.len()));
        };
        let order = self.pair().orient(&sold, &bought)?;
        if req.to.is_zero() {
            return Err(SwapError::ZeroAddress("swap recipient"));
        }

        let (reserve_sold, reserve_bought) = self.reserves_in(&state, order);
        let amount_out = get_amount_out(req.amount_in, reserve_sold, reserve_bought)?;
        if amount_out < req.amount_out_min {
            return Err(SwapError::InsufficientOutput {
                amount_out,
                min: req.amount_out_min,
            });
        }

        let (side_sold, side_bought) = order.sides();
        let (ledger_a, ledger_b) = self.ledgers();
        let mut journal = Journal::new(self.address(), ledger_a, ledger_b);
        let settled = journal
            .pull(side_sold, caller, req.amount_in)
            .and_then(|()| journal.push(side_bought, req.to, amount_out));
        if let Err(cause) = settled {
            return Err(self.settle_failure(&mut state, journal.abort(cause)));
        }

        debug!(
            pool = %self.address(),
            %caller,
            to = %req.to,
            sold = %sold,
            amount_in = %req.amount_in,
            amount_out = %amount_out,
            "swap executed"
        );
        Ok(amount_out)
    }
}

impl<L: TokenLedger + ?Sized, C: Clock> SwapPool for PairPool<L, C> {
    fn swap_exact_tokens_for_tokens(&self, caller: Address, request: &SwapExactIn) -> Result<Amount> {
        self.try_swap(caller, request)
            .map_err(|e| self.rejected("swap", &caller, e))
    }

    fn token_pair(&self) -> TokenPair {
        *self.pair()
    }
}
