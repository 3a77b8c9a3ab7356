//! Payouts a pool owes but could not deliver.
//!
//! A withdrawal pays token A and then token B.  Once the first payout has
//! landed it cannot be taken back, so if the second one fails the pool
//! keeps the unpaid amount aside for the recipient instead of failing
//! the whole pool.  The same applies to a refund that a token ledger
//! refuses while a failed swap or deposit unwinds.
//!
//! Held tokens stay in the pool's balance on the token ledger but are not
//! part of its reserves: the pool subtracts [`PendingPayouts::total`]
//! before pricing anything, so other liquidity providers never trade
//! against them.

use std::collections::HashMap;

use crate::domain::{Address, Amount, Side};

/// Per-account amounts held for later collection, with running totals.
///
/// Invariant: for each side, the sum over accounts equals
/// [`PendingPayouts::total`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingPayouts {
    owed: HashMap<(Address, Side), Amount>,
    total_a: Amount,
    total_b: Amount,
}

impl PendingPayouts {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Amounts held for `account`, in configured `(token_a, token_b)` order.
    #[must_use]
    pub fn owed(&self, account: &Address) -> (Amount, Amount) {
        (self.owed_on(account, Side::A), self.owed_on(account, Side::B))
    }

    /// Everything held on `side`, across all accounts.
    #[must_use]
    pub const fn total(&self, side: Side) -> Amount {
        match side {
            Side::A => self.total_a,
            Side::B => self.total_b,
        }
    }

    /// Returns `true` if nothing is held for anyone.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owed.is_empty()
    }

    /// Holds `amount` of the `side` token for `account`.
    ///
    /// Credits are bounded by the pool's token balance, which fits in
    /// `u128`, so the running sums saturate rather than fail.
    pub fn credit(&mut self, account: Address, side: Side, amount: Amount) {
        if amount.is_zero() {
            return;
        }
        let slot = self.owed.entry((account, side)).or_default();
        *slot = slot.checked_add(&amount).unwrap_or(Amount::MAX);
        let total = self.total_mut(side);
        *total = total.checked_add(&amount).unwrap_or(Amount::MAX);
    }

    /// Removes everything held for `account` on `side` and returns it.
    pub fn release(&mut self, account: &Address, side: Side) -> Amount {
        let Some(amount) = self.owed.remove(&(*account, side)) else {
            return Amount::ZERO;
        };
        let total = self.total_mut(side);
        *total = total.checked_sub(&amount).unwrap_or(Amount::ZERO);
        amount
    }

    fn owed_on(&self, account: &Address, side: Side) -> Amount {
        self.owed
            .get(&(*account, side))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn total_mut(&mut self, side: Side) -> &mut Amount {
        match side {
            Side::A => &mut self.total_a,
            Side::B => &mut self.total_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Address {
        Address::repeat_byte(0xa1)
    }

    fn bob() -> Address {
        Address::repeat_byte(0xb0)
    }

    #[test]
    fn credits_accumulate_per_account_and_side() {
        let mut p = PendingPayouts::new();
        p.credit(alice(), Side::B, Amount::new(10));
        p.credit(alice(), Side::B, Amount::new(5));
        p.credit(bob(), Side::A, Amount::new(7));
        assert_eq!(p.owed(&alice()), (Amount::ZERO, Amount::new(15)));
        assert_eq!(p.owed(&bob()), (Amount::new(7), Amount::ZERO));
        assert_eq!(p.total(Side::A), Amount::new(7));
        assert_eq!(p.total(Side::B), Amount::new(15));
    }

    #[test]
    fn zero_credit_is_ignored() {
        let mut p = PendingPayouts::new();
        p.credit(alice(), Side::A, Amount::ZERO);
        assert!(p.is_empty());
    }

    #[test]
    fn release_clears_one_side() {
        let mut p = PendingPayouts::new();
        p.credit(alice(), Side::A, Amount::new(3));
        p.credit(alice(), Side::B, Amount::new(4));
        assert_eq!(p.release(&alice(), Side::B), Amount::new(4));
        assert_eq!(p.release(&alice(), Side::B), Amount::ZERO);
        assert_eq!(p.owed(&alice()), (Amount::new(3), Amount::ZERO));
        assert_eq!(p.total(Side::B), Amount::ZERO);
        assert_eq!(p.release(&alice(), Side::A), Amount::new(3));
        assert!(p.is_empty());
    }
}
