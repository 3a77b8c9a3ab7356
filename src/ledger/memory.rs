//! In-memory [`TokenLedger`] for simulations and tests.

use std::collections::HashSet;

use parking_lot::Mutex;

use super::{Balances, TokenLedger};
use crate::domain::{Address, Amount};
use crate::error::{Result, SwapError};

#[derive(Debug, Default)]
struct Inner {
    book: Balances,
    frozen: HashSet<Address>,
}

impl Inner {
    fn ensure_unfrozen(&self, accounts: &[&Address]) -> Result<()> {
        match accounts.iter().find(|a| self.frozen.contains(**a)) {
            Some(account) => Err(SwapError::LedgerRejected(format!(
                "account {account} is frozen"
            ))),
            None => Ok(()),
        }
    }
}

/// A token ledger held entirely in memory.
///
/// Besides the [`TokenLedger`] surface it offers a faucet
/// ([`MemoryTokenLedger::mint`]) and per-account freezing: any transfer
/// touching a frozen account is refused with
/// [`SwapError::LedgerRejected`], which lets tests make a chosen
/// settlement leg fail.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, Amount};
/// use simple_swap::ledger::{MemoryTokenLedger, TokenLedger};
///
/// let usdc = MemoryTokenLedger::new(Address::repeat_byte(0x01));
/// let alice = Address::repeat_byte(0xa1);
/// let bob = Address::repeat_byte(0xb0);
///
/// usdc.mint(alice, Amount::new(100)).expect("mint");
/// usdc.transfer(alice, bob, Amount::new(40)).expect("transfer");
/// assert_eq!(usdc.balance_of(&bob), Amount::new(40));
///
/// usdc.freeze(bob);
/// assert!(usdc.transfer(bob, alice, Amount::new(1)).is_err());
/// ```
#[derive(Debug)]
pub struct MemoryTokenLedger {
    token: Address,
    inner: Mutex<Inner>,
}

impl MemoryTokenLedger {
    /// Creates an empty ledger for `token`.
    #[must_use]
    pub fn new(token: Address) -> Self {
        Self {
            token,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Credits `to` with freshly created tokens.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ZeroAddress`] if `to` is the zero address.
    /// - [`SwapError::Overflow`] if the total supply would exceed `u128::MAX`.
    pub fn mint(&self, to: Address, amount: Amount) -> Result<()> {
        self.inner.lock().book.mint(to, amount.get())
    }

    /// Total tokens in existence.
    #[must_use]
    pub fn total_supply(&self) -> Amount {
        Amount::new(self.inner.lock().book.total_supply())
    }

    /// Refuses every later transfer to or from `account`.
    pub fn freeze(&self, account: Address) {
        self.inner.lock().frozen.insert(account);
    }

    /// Lifts a freeze placed by [`MemoryTokenLedger::freeze`].
    pub fn unfreeze(&self, account: &Address) {
        self.inner.lock().frozen.remove(account);
    }
}

impl TokenLedger for MemoryTokenLedger {
    fn token(&self) -> Address {
        self.token
    }

    fn balance_of(&self, owner: &Address) -> Amount {
        Amount::new(self.inner.lock().book.balance_of(owner))
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        Amount::new(self.inner.lock().book.allowance(owner, spender))
    }

    fn approve(&self, owner: Address, spender: Address, amount: Amount) -> Result<()> {
        self.inner.lock().book.approve(owner, spender, amount.get())
    }

    fn transfer(&self, from: Address, to: Address, amount: Amount) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.ensure_unfrozen(&[&from, &to])?;
        inner.book.transfer(from, to, amount.get())
    }

    fn transfer_from(
        &self,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.ensure_unfrozen(&[&from, &to])?;
        inner
            .book
            .transfer_from(spender, from, to, amount.get())
            .map(|_| ())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> Address {
        Address::repeat_byte(0xa1)
    }

    fn bob() -> Address {
        Address::repeat_byte(0xb0)
    }

    fn funded() -> MemoryTokenLedger {
        let ledger = MemoryTokenLedger::new(Address::repeat_byte(0x01));
        let Ok(()) = ledger.mint(alice(), Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        ledger
    }

    #[test]
    fn reports_token() {
        assert_eq!(funded().token(), Address::repeat_byte(0x01));
    }

    #[test]
    fn mint_updates_supply() {
        let l = funded();
        assert_eq!(l.total_supply(), Amount::new(1_000));
        assert_eq!(l.balance_of(&alice()), Amount::new(1_000));
    }

    #[test]
    fn transfer_from_needs_allowance() {
        let l = funded();
        assert_eq!(
            l.transfer_from(bob(), alice(), bob(), Amount::new(1)),
            Err(SwapError::InsufficientAllowance { have: 0, need: 1 })
        );
        assert_eq!(l.approve(alice(), bob(), Amount::new(10)), Ok(()));
        assert_eq!(l.transfer_from(bob(), alice(), bob(), Amount::new(10)), Ok(()));
        assert_eq!(l.allowance(&alice(), &bob()), Amount::ZERO);
        assert_eq!(l.balance_of(&bob()), Amount::new(10));
    }

    #[test]
    fn frozen_accounts_reject_both_directions() {
        let l = funded();
        l.freeze(bob());
        let Err(SwapError::LedgerRejected(msg)) = l.transfer(alice(), bob(), Amount::new(1)) else {
            panic!("expected LedgerRejected");
        };
        assert!(msg.contains("frozen"));
        assert_eq!(l.balance_of(&alice()), Amount::new(1_000));

        l.unfreeze(&bob());
        assert_eq!(l.transfer(alice(), bob(), Amount::new(1)), Ok(()));
    }

    #[test]
    fn frozen_source_blocks_transfer_from() {
        let l = funded();
        assert_eq!(l.approve(alice(), bob(), Amount::new(10)), Ok(()));
        l.freeze(alice());
        let Err(SwapError::LedgerRejected(_)) =
            l.transfer_from(bob(), alice(), bob(), Amount::new(5))
        else {
            panic!("expected LedgerRejected");
        };
        assert_eq!(l.allowance(&alice(), &bob()), Amount::new(10));
    }
}
