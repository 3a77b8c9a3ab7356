//! Deposits and withdrawals.
//!
//! # Deposit Algorithm
//!
//! With reserves `(ra, rb)` and share supply `S`, in the caller's order:
//!
//! 1. `S == 0`: take the desired amounts as-is and mint `⌊√(a·b)⌋`.
//! 2. Otherwise `b* = ⌊a_desired · rb / ra⌋`.  If `b* ≤ b_desired` deposit
//!    `(a_desired, b*)`, else `a* = ⌊b_desired · ra / rb⌋` and deposit
//!    `(a*, b_desired)`.
//! 3. Mint `⌊a · S / ra⌋`.
//!
//! # Withdrawal Algorithm
//!
//! Burning `l` shares pays `⌊l · ra / S⌋` and `⌊l · rb / S⌋`; rounding dust
//! stays in the pool.

use tracing::debug;

use super::settlement::{Journal, Unwind};
use super::PairPool;
use crate::clock::Clock;
use crate::domain::{
    Address, AddLiquidity, Amount, Deposit, Liquidity, RemoveLiquidity, Withdrawal,
};
use crate::error::{Result, SwapError};
use crate::ledger::TokenLedger;
use crate::math::{mul_div, sqrt_product, CheckedArithmetic};
use crate::traits::LiquidityPool;

/// Computes the amounts a deposit will use and the shares it will mint.
///
/// All pairs are in the same token order.  Does not check minimums.
///
/// The first-deposit branch is chosen by `supply == 0`, not by empty
/// reserves: tokens donated to an unminted pool are ignored, and the
/// first depositor receives `⌊√(a·b)⌋` shares over whatever balance is
/// already there.
///
/// # Errors
///
/// - [`SwapError::NoLiquidity`] if shares exist but a reserve is zero.
/// - [`SwapError::ZeroLiquidity`] if no shares would be minted.
/// - [`SwapError::Overflow`] if an amount or the minted shares exceed `u128`.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, Liquidity};
/// use simple_swap::pools::quote_deposit;
///
/// let (a, b, minted) = quote_deposit(
///     (Amount::new(50), Amount::new(75)),
///     (Amount::new(100), Amount::new(100)),
///     Liquidity::new(100),
/// )
/// .expect("quote");
/// assert_eq!((a.get(), b.get(), minted.get()), (50, 50, 50));
/// ```
pub fn quote_deposit(
    desired: (Amount, Amount),
    reserves: (Amount, Amount),
    supply: Liquidity,
) -> Result<(Amount, Amount, Liquidity)> {
    let (desired_a, desired_b) = desired;
    let (reserve_a, reserve_b) = reserves;

    if supply.is_zero() {
        let minted = sqrt_product(desired_a, desired_b)?;
        if minted.is_zero() {
            return Err(SwapError::ZeroLiquidity);
        }
        return Ok((desired_a, desired_b, minted));
    }

    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(SwapError::NoLiquidity);
    }

    let (amount_a, amount_b) = match desired_a.safe_mul_div(reserve_b, reserve_a) {
        Ok(b_optimal) if b_optimal <= desired_b => (desired_a, b_optimal),
        // an optimal B too large for u128 is certainly above desired_b
        Ok(_) | Err(SwapError::Overflow(_)) => {
            (desired_b.safe_mul_div(reserve_a, reserve_b)?, desired_b)
        }
        Err(e) => return Err(e),
    };

    let minted = Liquidity::new(mul_div(amount_a.get(), supply.get(), reserve_a.get())?);
    if minted.is_zero() {
        return Err(SwapError::ZeroLiquidity);
    }
    Ok((amount_a, amount_b, minted))
}

/// Computes the payout for burning `liquidity` of `supply` shares.
///
/// # Errors
///
/// - [`SwapError::ZeroLiquidity`] if `liquidity` is zero.
/// - [`SwapError::NoLiquidity`] if `supply` is zero.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, Liquidity};
/// use simple_swap::pools::quote_withdrawal;
///
/// let (a, b) = quote_withdrawal(
///     Liquidity::new(50),
///     (Amount::new(150), Amount::new(151)),
///     Liquidity::new(150),
/// )
/// .expect("quote");
/// assert_eq!((a.get(), b.get()), (50, 50));
/// ```
pub fn quote_withdrawal(
    liquidity: Liquidity,
    reserves: (Amount, Amount),
    supply: Liquidity,
) -> Result<(Amount, Amount)> {
    if liquidity.is_zero() {
        return Err(SwapError::ZeroLiquidity);
    }
    if supply.is_zero() {
        return Err(SwapError::NoLiquidity);
    }
    let amount_a = reserves.0.safe_mul_div(liquidity, supply)?;
    let amount_b = reserves.1.safe_mul_div(liquidity, supply)?;
    Ok((amount_a, amount_b))
}

fn check_minimums(amounts: (Amount, Amount), min_a: Amount, min_b: Amount) -> Result<()> {
    if amounts.0 < min_a {
        return Err(SwapError::BelowMinimumA {
            amount: amounts.0,
            min: min_a,
        });
    }
    if amounts.1 < min_b {
        return Err(SwapError::BelowMinimumB {
            amount: amounts.1,
            min: min_b,
        });
    }
    Ok(())
}

impl<L: TokenLedger + ?Sized, C: Clock> PairPool<L, C> {
    fn try_add_liquidity(&self, caller: Address, req: &AddLiquidity) -> Result<Deposit> {
        let mut state = self.lock();
        self.enter(req.deadline)?;
        let order = self.pair().orient(&req.token_a, &req.token_b)?;
        if req.to.is_zero() {
            return Err(SwapError::ZeroAddress("liquidity recipient"));
        }

        let supply = state.shares.total_supply();
        let (amount_a, amount_b, minted) = quote_deposit(
            (req.amount_a_desired, req.amount_b_desired),
            self.reserves_in(&state, order),
            supply,
        )?;
        check_minimums((amount_a, amount_b), req.amount_a_min, req.amount_b_min)?;
        supply.safe_add(&minted)?;

        let (ledger_a, ledger_b) = self.ledgers();
        let mut journal = Journal::new(self.address(), ledger_a, ledger_b);
        let settled = journal
            .pull_pair(order, caller, (amount_a, amount_b))
            .and_then(|()| state.shares.mint(req.to, minted));
        if let Err(cause) = settled {
            return Err(self.settle_failure(&mut state, journal.abort(cause)));
        }

        debug!(
            pool = %self.address(),
            %caller,
            to = %req.to,
            amount_a = %amount_a,
            amount_b = %amount_b,
            liquidity = %minted,
            "liquidity added"
        );
        Ok(Deposit::new(amount_a, amount_b, minted))
    }

    fn try_remove_liquidity(&self, caller: Address, req: &RemoveLiquidity) -> Result<Withdrawal> {
        let mut state = self.lock();
        self.enter(req.deadline)?;
        let order = self.pair().orient(&req.token_a, &req.token_b)?;
        if req.to.is_zero() {
            return Err(SwapError::ZeroAddress("withdrawal recipient"));
        }
        let held = state.shares.balance_of(&caller);
        if held < req.liquidity {
            return Err(SwapError::InsufficientBalance {
                have: held.get(),
                need: req.liquidity.get(),
            });
        }

        let (amount_a, amount_b) = quote_withdrawal(
            req.liquidity,
            self.reserves_in(&state, order),
            state.shares.total_supply(),
        )?;
        check_minimums((amount_a, amount_b), req.amount_a_min, req.amount_b_min)?;

        let (ledger_a, ledger_b) = self.ledgers();
        let mut journal = Journal::new(self.address(), ledger_a, ledger_b);
        if let Err(cause) = journal.push_pair(order, req.to, (amount_a, amount_b)) {
            let unwind = journal.abort(cause);
            let spent = matches!(unwind, Unwind::Stranded { .. });
            let err = self.settle_failure(&mut state, unwind);
            if spent {
                // part of the payout left the pool and the rest is held for
                // the recipient
                state.shares.burn(caller, req.liquidity)?;
            }
            return Err(err);
        }
        // cannot fail: the balance was checked under the same lock
        state.shares.burn(caller, req.liquidity)?;

        debug!(
            pool = %self.address(),
            %caller,
            to = %req.to,
            amount_a = %amount_a,
            amount_b = %amount_b,
            liquidity = %req.liquidity,
            "liquidity removed"
        );
        Ok(Withdrawal::new(amount_a, amount_b))
    }
}

impl<L: TokenLedger + ?Sized, C: Clock> LiquidityPool for PairPool<L, C> {
    fn add_liquidity(&self, caller: Address, request: &AddLiquidity) -> Result<Deposit> {
        self.try_add_liquidity(caller, request)
            .map_err(|e| self.rejected("add_liquidity", &caller, e))
    }

    fn remove_liquidity(&self, caller: Address, request: &RemoveLiquidity) -> Result<Withdrawal> {
        self.try_remove_liquidity(caller, request)
            .map_err(|e| self.rejected("remove_liquidity", &caller, e))
    }

    fn total_supply(&self) -> Liquidity {
        self.lock().shares.total_supply()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn amt(v: u128) -> Amount {
        Amount::new(v)
    }

    #[test]
    fn first_deposit_mints_sqrt() {
        let Ok(q) = quote_deposit((amt(100), amt(400)), (amt(0), amt(0)), Liquidity::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(q, (amt(100), amt(400), Liquidity::new(200)));
    }

    #[test]
    fn first_deposit_ignores_donated_reserves() {
        let Ok(q) = quote_deposit((amt(9), amt(4)), (amt(5), amt(0)), Liquidity::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(q, (amt(9), amt(4), Liquidity::new(6)));
    }

    #[test]
    fn first_deposit_of_zero_rejected() {
        assert_eq!(
            quote_deposit((amt(0), amt(100)), (amt(0), amt(0)), Liquidity::ZERO),
            Err(SwapError::ZeroLiquidity)
        );
    }

    #[test]
    fn proportional_deposit_trims_b() {
        let Ok(q) = quote_deposit((amt(50), amt(75)), (amt(100), amt(100)), Liquidity::new(100))
        else {
            panic!("expected Ok");
        };
        assert_eq!(q, (amt(50), amt(50), Liquidity::new(50)));
    }

    #[test]
    fn proportional_deposit_trims_a() {
        let Ok(q) = quote_deposit((amt(80), amt(20)), (amt(100), amt(200)), Liquidity::new(100))
        else {
            panic!("expected Ok");
        };
        assert_eq!(q, (amt(10), amt(20), Liquidity::new(10)));
    }

    #[test]
    fn empty_reserve_with_supply_rejected() {
        assert_eq!(
            quote_deposit((amt(10), amt(10)), (amt(0), amt(100)), Liquidity::new(10)),
            Err(SwapError::NoLiquidity)
        );
    }

    #[test]
    fn dust_deposit_mints_nothing() {
        assert_eq!(
            quote_deposit((amt(1), amt(1)), (amt(1_000), amt(1_000)), Liquidity::new(10)),
            Err(SwapError::ZeroLiquidity)
        );
    }

    #[test]
    fn huge_optimal_b_falls_back_to_a() {
        // MAX * 1_000 / 1 does not fit in u128
        let Ok(q) = quote_deposit(
            (Amount::MAX, amt(10_000)),
            (amt(1), amt(1_000)),
            Liquidity::new(1),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(q, (amt(10), amt(10_000), Liquidity::new(10)));
    }

    #[test]
    fn withdrawal_is_proportional_and_floors() {
        let Ok(w) = quote_withdrawal(Liquidity::new(1), (amt(10), amt(7)), Liquidity::new(3))
        else {
            panic!("expected Ok");
        };
        assert_eq!(w, (amt(3), amt(2)));
    }

    #[test]
    fn withdrawal_edge_cases() {
        assert_eq!(
            quote_withdrawal(Liquidity::ZERO, (amt(10), amt(10)), Liquidity::new(10)),
            Err(SwapError::ZeroLiquidity)
        );
        assert_eq!(
            quote_withdrawal(Liquidity::new(1), (amt(10), amt(10)), Liquidity::ZERO),
            Err(SwapError::NoLiquidity)
        );
    }

    #[test]
    fn minimums_checked_a_first() {
        assert_eq!(
            check_minimums((amt(5), amt(5)), amt(6), amt(6)),
            Err(SwapError::BelowMinimumA {
                amount: amt(5),
                min: amt(6)
            })
        );
        assert_eq!(
            check_minimums((amt(6), amt(5)), amt(6), amt(6)),
            Err(SwapError::BelowMinimumB {
                amount: amt(5),
                min: amt(6)
            })
        );
        assert_eq!(check_minimums((amt(6), amt(6)), amt(6), amt(6)), Ok(()));
    }
}
