//! Liquidity-share token ledger.
//!
//! The pool's share token is an ordinary fungible token: holders transfer
//! shares, approve spenders and spend allowances.  Only the owning pool
//! mints and burns.  Every successful mutation appends a [`ShareEvent`] to
//! an in-memory journal that callers drain with [`ShareLedger::take_events`].
//! The journal is bounded by [`ShareTokenConfig::event_capacity`]; once full,
//! the oldest undrained event is dropped for each new one.

use std::collections::VecDeque;

use super::Balances;
use crate::config::ShareTokenConfig;
use crate::domain::{Address, Decimals, Liquidity};
use crate::error::Result;

/// Observable change to the share ledger.
///
/// Mints are reported as transfers from [`Address::ZERO`] and burns as
/// transfers to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareEvent {
    /// Shares moved between holders, or were minted or burned.
    Transfer {
        /// Sending holder, or zero for a mint.
        from: Address,
        /// Receiving holder, or zero for a burn.
        to: Address,
        /// Shares moved.
        value: Liquidity,
    },
    /// An allowance was set or changed by spending.
    Approval {
        /// Holder granting the allowance.
        owner: Address,
        /// Account allowed to spend.
        spender: Address,
        /// New allowance.
        value: Liquidity,
    },
}

/// Balances, allowances and metadata of the pool's share token.
#[derive(Debug, Clone)]
pub struct ShareLedger {
    name: String,
    symbol: String,
    decimals: Decimals,
    book: Balances,
    events: VecDeque<ShareEvent>,
    event_capacity: usize,
}

impl ShareLedger {
    /// Creates an empty ledger with the given metadata.
    #[must_use]
    pub fn new(meta: &ShareTokenConfig) -> Self {
        Self {
            name: meta.name().to_owned(),
            symbol: meta.symbol().to_owned(),
            decimals: meta.decimals(),
            book: Balances::new(),
            events: VecDeque::new(),
            event_capacity: meta.event_capacity(),
        }
    }

    /// Token name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Display decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Outstanding shares.
    #[must_use]
    pub fn total_supply(&self) -> Liquidity {
        Liquidity::new(self.book.total_supply())
    }

    /// Shares held by `owner`.
    #[must_use]
    pub fn balance_of(&self, owner: &Address) -> Liquidity {
        Liquidity::new(self.book.balance_of(owner))
    }

    /// Shares `spender` may still move out of `owner`'s balance.
    #[must_use]
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Liquidity {
        Liquidity::new(self.book.allowance(owner, spender))
    }

    /// Current holders and their nonzero balances, in no particular order.
    pub fn holders(&self) -> impl Iterator<Item = (Address, Liquidity)> + '_ {
        self.book
            .holders()
            .map(|(holder, value)| (*holder, Liquidity::new(value)))
    }

    /// Issues new shares to `to`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ZeroAddress`](crate::error::SwapError::ZeroAddress)
    ///   if `to` is the zero address.
    /// - [`SwapError::Overflow`](crate::error::SwapError::Overflow) if the
    ///   supply would exceed `u128::MAX`.
    pub fn mint(&mut self, to: Address, value: Liquidity) -> Result<()> {
        self.book.mint(to, value.get())?;
        self.record(ShareEvent::Transfer {
            from: Address::ZERO,
            to,
            value,
        });
        Ok(())
    }

    /// Destroys shares held by `from`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InsufficientBalance`](crate::error::SwapError::InsufficientBalance)
    /// if `from` holds fewer than `value`.
    pub fn burn(&mut self, from: Address, value: Liquidity) -> Result<()> {
        self.book.burn(from, value.get())?;
        self.record(ShareEvent::Transfer {
            from,
            to: Address::ZERO,
            value,
        });
        Ok(())
    }

    /// Moves shares from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ZeroAddress`](crate::error::SwapError::ZeroAddress)
    ///   for a zero sender or recipient.
    /// - [`SwapError::InsufficientBalance`](crate::error::SwapError::InsufficientBalance).
    pub fn transfer(&mut self, from: Address, to: Address, value: Liquidity) -> Result<()> {
        self.book.transfer(from, to, value.get())?;
        self.record(ShareEvent::Transfer { from, to, value });
        Ok(())
    }

    /// Sets `spender`'s allowance over `owner`'s shares.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ZeroAddress`](crate::error::SwapError::ZeroAddress)
    /// if either party is the zero address.
    pub fn approve(&mut self, owner: Address, spender: Address, value: Liquidity) -> Result<()> {
        self.book.approve(owner, spender, value.get())?;
        self.record(ShareEvent::Approval {
            owner,
            spender,
            value,
        });
        Ok(())
    }

    /// Moves shares from `from` to `to` on behalf of `spender`.
    ///
    /// An allowance of [`Liquidity::MAX`] is treated as unlimited and is not
    /// decremented; any other allowance shrinks by `value` and an
    /// `Approval` with the remainder is journaled.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientAllowance`](crate::error::SwapError::InsufficientAllowance).
    /// - Any error of [`ShareLedger::transfer`].
    pub fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        value: Liquidity,
    ) -> Result<()> {
        let before = self.book.allowance(&from, &spender);
        let remaining = self.book.transfer_from(spender, from, to, value.get())?;
        if remaining != before {
            self.record(ShareEvent::Approval {
                owner: from,
                spender,
                value: Liquidity::new(remaining),
            });
        }
        self.record(ShareEvent::Transfer { from, to, value });
        Ok(())
    }

    /// Drains the event journal, oldest first.
    pub fn take_events(&mut self) -> Vec<ShareEvent> {
        self.events.drain(..).collect()
    }

    fn record(&mut self, event: ShareEvent) {
        if self.event_capacity == 0 {
            return;
        }
        if self.events.len() == self.event_capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::SwapError;

    fn alice() -> Address {
        Address::repeat_byte(0xa1)
    }

    fn bob() -> Address {
        Address::repeat_byte(0xb0)
    }

    fn ledger() -> ShareLedger {
        ShareLedger::new(&ShareTokenConfig::default())
    }

    #[test]
    fn default_metadata() {
        let l = ledger();
        assert_eq!(l.name(), "SimpleSwap Token");
        assert_eq!(l.symbol(), "SST");
        assert_eq!(l.decimals().get(), 18);
        assert_eq!(l.total_supply(), Liquidity::ZERO);
    }

    #[test]
    fn mint_and_burn_emit_zero_address_transfers() {
        let mut l = ledger();
        assert_eq!(l.mint(alice(), Liquidity::new(100)), Ok(()));
        assert_eq!(l.burn(alice(), Liquidity::new(40)), Ok(()));
        assert_eq!(
            l.take_events(),
            vec![
                ShareEvent::Transfer {
                    from: Address::ZERO,
                    to: alice(),
                    value: Liquidity::new(100),
                },
                ShareEvent::Transfer {
                    from: alice(),
                    to: Address::ZERO,
                    value: Liquidity::new(40),
                },
            ]
        );
        assert!(l.take_events().is_empty());
    }

    #[test]
    fn failed_burn_emits_nothing() {
        let mut l = ledger();
        let Err(SwapError::InsufficientBalance { have: 0, need: 1 }) =
            l.burn(alice(), Liquidity::new(1))
        else {
            panic!("expected InsufficientBalance");
        };
        assert!(l.take_events().is_empty());
    }

    #[test]
    fn transfer_from_reports_remaining_allowance() {
        let mut l = ledger();
        let carol = Address::repeat_byte(0xc0);
        assert_eq!(l.mint(alice(), Liquidity::new(100)), Ok(()));
        assert_eq!(l.approve(alice(), bob(), Liquidity::new(60)), Ok(()));
        let _ = l.take_events();

        assert_eq!(
            l.transfer_from(bob(), alice(), carol, Liquidity::new(25)),
            Ok(())
        );
        assert_eq!(l.allowance(&alice(), &bob()), Liquidity::new(35));
        assert_eq!(l.balance_of(&carol), Liquidity::new(25));
        assert_eq!(
            l.take_events(),
            vec![
                ShareEvent::Approval {
                    owner: alice(),
                    spender: bob(),
                    value: Liquidity::new(35),
                },
                ShareEvent::Transfer {
                    from: alice(),
                    to: carol,
                    value: Liquidity::new(25),
                },
            ]
        );
    }

    #[test]
    fn unlimited_allowance_emits_no_approval() {
        let mut l = ledger();
        assert_eq!(l.mint(alice(), Liquidity::new(10)), Ok(()));
        assert_eq!(l.approve(alice(), bob(), Liquidity::MAX), Ok(()));
        let _ = l.take_events();
        assert_eq!(l.transfer_from(bob(), alice(), bob(), Liquidity::new(10)), Ok(()));
        assert_eq!(l.allowance(&alice(), &bob()), Liquidity::MAX);
        assert_eq!(l.take_events().len(), 1);
    }

    #[test]
    fn journal_keeps_only_newest_events() {
        let mut l = ShareLedger::new(&ShareTokenConfig::default().with_event_capacity(3));
        assert_eq!(l.mint(alice(), Liquidity::new(100)), Ok(()));
        for v in 1..=5 {
            assert_eq!(l.transfer(alice(), bob(), Liquidity::new(v)), Ok(()));
        }
        let values: Vec<_> = l
            .take_events()
            .into_iter()
            .map(|e| match e {
                ShareEvent::Transfer { value, .. } | ShareEvent::Approval { value, .. } => {
                    value.get()
                }
            })
            .collect();
        assert_eq!(values, vec![3, 4, 5]);
        assert_eq!(l.balance_of(&bob()), Liquidity::new(15));
    }

    #[test]
    fn zero_capacity_disables_journal() {
        let mut l = ShareLedger::new(&ShareTokenConfig::default().with_event_capacity(0));
        assert_eq!(l.mint(alice(), Liquidity::new(100)), Ok(()));
        assert_eq!(l.approve(alice(), bob(), Liquidity::new(5)), Ok(()));
        assert!(l.take_events().is_empty());
        assert_eq!(l.total_supply(), Liquidity::new(100));
    }

    #[test]
    fn holders_lists_balances() {
        let mut l = ledger();
        assert_eq!(l.mint(alice(), Liquidity::new(10)), Ok(()));
        assert_eq!(l.transfer(alice(), bob(), Liquidity::new(4)), Ok(()));
        let mut holders: Vec<_> = l.holders().collect();
        holders.sort();
        assert_eq!(
            holders,
            vec![(alice(), Liquidity::new(6)), (bob(), Liquidity::new(4))]
        );
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone)]
    enum Op {
        Mint(u8, u64),
        Burn(u8, u64),
        Transfer(u8, u8, u64),
        Approve(u8, u8, u64),
        TransferFrom(u8, u8, u8, u64),
    }

    fn holder(i: u8) -> Address {
        // 0 maps to the zero address so guards are exercised too
        if i == 0 {
            Address::ZERO
        } else {
            Address::repeat_byte(i)
        }
    }

    fn op() -> impl Strategy<Value = Op> {
        let who = 0u8..5;
        let amount = 0u64..1_000;
        prop_oneof![
            (who.clone(), amount.clone()).prop_map(|(a, v)| Op::Mint(a, v)),
            (who.clone(), amount.clone()).prop_map(|(a, v)| Op::Burn(a, v)),
            (who.clone(), who.clone(), amount.clone()).prop_map(|(a, b, v)| Op::Transfer(a, b, v)),
            (who.clone(), who.clone(), amount.clone()).prop_map(|(a, b, v)| Op::Approve(a, b, v)),
            (who.clone(), who.clone(), who, amount)
                .prop_map(|(s, a, b, v)| Op::TransferFrom(s, a, b, v)),
        ]
    }

    fn apply(l: &mut ShareLedger, op: &Op) -> Result<()> {
        match *op {
            Op::Mint(a, v) => l.mint(holder(a), Liquidity::new(u128::from(v))),
            Op::Burn(a, v) => l.burn(holder(a), Liquidity::new(u128::from(v))),
            Op::Transfer(a, b, v) => l.transfer(holder(a), holder(b), Liquidity::new(u128::from(v))),
            Op::Approve(a, b, v) => l.approve(holder(a), holder(b), Liquidity::new(u128::from(v))),
            Op::TransferFrom(s, a, b, v) => {
                l.transfer_from(holder(s), holder(a), holder(b), Liquidity::new(u128::from(v)))
            }
        }
    }

    proptest! {
        #[test]
        fn supply_equals_sum_of_balances(ops in prop::collection::vec(op(), 1..60)) {
            let mut l = ShareLedger::new(&ShareTokenConfig::default());
            for op in &ops {
                let _ = apply(&mut l, op);
                let sum: u128 = l.holders().map(|(_, v)| v.get()).sum();
                prop_assert_eq!(sum, l.total_supply().get());
            }
        }

        #[test]
        fn failed_ops_change_nothing(ops in prop::collection::vec(op(), 1..60)) {
            let mut l = ShareLedger::new(&ShareTokenConfig::default());
            for op in &ops {
                let before = l.book.clone();
                let events_before = l.events.len();
                if apply(&mut l, op).is_err() {
                    prop_assert_eq!(&l.book, &before);
                    prop_assert_eq!(l.events.len(), events_before);
                }
            }
        }

        #[test]
        fn zero_address_never_holds_shares(ops in prop::collection::vec(op(), 1..60)) {
            let mut l = ShareLedger::new(&ShareTokenConfig::default());
            for op in &ops {
                let _ = apply(&mut l, op);
            }
            prop_assert_eq!(l.balance_of(&Address::ZERO), Liquidity::ZERO);
        }
    }
}
