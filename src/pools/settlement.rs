//! Ordered settlement of external token transfers.
//!
//! A pool operation moves tokens in two directions:
//!
//! - a **pull** takes tokens from the caller into the pool
//!   (`transfer_from`, spending the caller's approval);
//! - a **push** pays tokens out of the pool (`transfer`).
//!
//! The [`Journal`] records each completed leg.  Operations schedule every
//! pull before any push.  When a later step fails, [`Journal::abort`]
//! refunds completed pulls newest-first and hands the original error back.
//! A completed push cannot be clawed back: once one exists, or once a
//! refund itself fails, the failure is [`Unwind::Stranded`] and carries
//! the legs that were never delivered so the pool can hold them for their
//! recipients.

use tracing::warn;

use crate::domain::{Address, Amount, PairOrder, Side};
use crate::error::{Result, SwapError};
use crate::ledger::TokenLedger;

/// How an aborted settlement ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Unwind {
    /// Every completed pull was refunded; the pool is as before.
    Reverted(SwapError),
    /// Tokens moved and could not be restored.
    Stranded {
        /// Human-readable account of what went wrong.
        reason: String,
        /// Transfers still owed by the pool.
        unpaid: Vec<Owed>,
    },
}

/// A transfer the pool owes but did not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Owed {
    pub(crate) to: Address,
    pub(crate) side: Side,
    pub(crate) amount: Amount,
}

#[derive(Debug, Clone, Copy)]
struct Pulled {
    side: Side,
    from: Address,
    amount: Amount,
}

/// Record of completed transfers for one operation.
pub(crate) struct Journal<'a, L: TokenLedger + ?Sized> {
    pool: Address,
    ledgers: (&'a L, &'a L),
    pulled: Vec<Pulled>,
    pushed: usize,
    unpaid: Vec<Owed>,
}

impl<'a, L: TokenLedger + ?Sized> Journal<'a, L> {
    /// Starts an empty journal for the pool at `pool`.
    pub(crate) fn new(pool: Address, ledger_a: &'a L, ledger_b: &'a L) -> Self {
        Self {
            pool,
            ledgers: (ledger_a, ledger_b),
            pulled: Vec::with_capacity(2),
            pushed: 0,
            unpaid: Vec::new(),
        }
    }

    fn ledger(&self, side: Side) -> &'a L {
        match side {
            Side::A => self.ledgers.0,
            Side::B => self.ledgers.1,
        }
    }

    /// Pulls `amount` of the `side` token from `from` into the pool.
    ///
    /// Zero amounts are skipped.
    pub(crate) fn pull(&mut self, side: Side, from: Address, amount: Amount) -> Result<()> {
        debug_assert_eq!(self.pushed, 0, "pull scheduled after a push");
        if amount.is_zero() {
            return Ok(());
        }
        self.ledger(side)
            .transfer_from(self.pool, from, self.pool, amount)?;
        self.pulled.push(Pulled { side, from, amount });
        Ok(())
    }

    /// Pays `amount` of the `side` token from the pool to `to`.
    ///
    /// Zero amounts are skipped.  A refused payment is remembered as owed.
    pub(crate) fn push(&mut self, side: Side, to: Address, amount: Amount) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        if let Err(e) = self.ledger(side).transfer(self.pool, to, amount) {
            self.unpaid.push(Owed { to, side, amount });
            return Err(e);
        }
        self.pushed += 1;
        Ok(())
    }

    /// Pulls a pair of amounts given in the caller's token order.
    pub(crate) fn pull_pair(
        &mut self,
        order: PairOrder,
        from: Address,
        amounts: (Amount, Amount),
    ) -> Result<()> {
        let (first, second) = order.sides();
        self.pull(first, from, amounts.0)?;
        self.pull(second, from, amounts.1)
    }

    /// Pushes a pair of amounts given in the caller's token order.
    pub(crate) fn push_pair(
        &mut self,
        order: PairOrder,
        to: Address,
        amounts: (Amount, Amount),
    ) -> Result<()> {
        let (first, second) = order.sides();
        if let Err(e) = self.push(first, to, amounts.0) {
            if !amounts.1.is_zero() {
                self.unpaid.push(Owed {
                    to,
                    side: second,
                    amount: amounts.1,
                });
            }
            return Err(e);
        }
        self.push(second, to, amounts.1)
    }

    /// Reverses what can be reversed after `cause` stopped the operation.
    ///
    /// Owed payouts only survive into [`Unwind::Stranded`] when some push
    /// had already completed; otherwise the pulls are refunded and the
    /// operation is reverted.  A refund the ledger refuses becomes owed to
    /// the account it was pulled from, and the remaining refunds still run.
    pub(crate) fn abort(self, cause: SwapError) -> Unwind {
        if self.pushed > 0 {
            return Unwind::Stranded {
                reason: format!("{cause} after {} payout(s) had completed", self.pushed),
                unpaid: self.unpaid,
            };
        }
        if !self.pulled.is_empty() {
            warn!(
                pool = %self.pool,
                refunds = self.pulled.len(),
                error = %cause,
                "settlement aborted, refunding pulled tokens"
            );
        }
        let mut unpaid = Vec::new();
        let mut failures = Vec::new();
        for leg in self.pulled.iter().rev() {
            if let Err(refund) = self.ledger(leg.side).transfer(self.pool, leg.from, leg.amount) {
                failures.push(format!(
                    "refund of {} to {} failed ({refund})",
                    leg.amount, leg.from
                ));
                unpaid.push(Owed {
                    to: leg.from,
                    side: leg.side,
                    amount: leg.amount,
                });
            }
        }
        if failures.is_empty() {
            Unwind::Reverted(cause)
        } else {
            Unwind::Stranded {
                reason: format!("{} while unwinding {cause}", failures.join("; ")),
                unpaid,
            }
        }
    }
}
