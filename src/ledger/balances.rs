//! Fungible balance book shared by the share ledger and the in-memory token
//! ledger.
//!
//! Every mutating method validates all of its preconditions before touching
//! state, so a returned error always means nothing changed.

use std::collections::HashMap;

use crate::domain::Address;
use crate::error::{Result, SwapError};

/// Allowance value that `spend_allowance` never decrements.
pub const UNLIMITED_ALLOWANCE: u128 = u128::MAX;

/// Holder balances, spender allowances and the running total supply.
///
/// Invariant: the sum of all balances equals `total_supply`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balances {
    balances: HashMap<Address, u128>,
    allowances: HashMap<(Address, Address), u128>,
    total_supply: u128,
}

impl Balances {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all balances.
    #[must_use]
    pub const fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// Balance of `owner`, zero if unknown.
    #[must_use]
    pub fn balance_of(&self, owner: &Address) -> u128 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    /// Remaining allowance of `spender` over `owner`'s balance.
    #[must_use]
    pub fn allowance(&self, owner: &Address, spender: &Address) -> u128 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    /// Holders with a nonzero balance.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, u128)> {
        self.balances
            .iter()
            .filter(|(_, v)| **v > 0)
            .map(|(k, v)| (k, *v))
    }

    /// Creates `amount` new units in `to`'s balance.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ZeroAddress`] if `to` is the zero address.
    /// - [`SwapError::Overflow`] if the total supply would exceed `u128::MAX`.
    pub fn mint(&mut self, to: Address, amount: u128) -> Result<()> {
        if to.is_zero() {
            return Err(SwapError::ZeroAddress("mint recipient"));
        }
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(SwapError::Overflow("total supply"))?;
        // balance <= supply, so the credit cannot overflow once supply fits
        let balance = self.balance_of(&to) + amount;
        self.total_supply = supply;
        self.set_balance(to, balance);
        Ok(())
    }

    /// Destroys `amount` units from `from`'s balance.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InsufficientBalance`] if `from` holds less.
    pub fn burn(&mut self, from: Address, amount: u128) -> Result<()> {
        let balance = self.balance_of(&from);
        if balance < amount {
            return Err(SwapError::InsufficientBalance {
                have: balance,
                need: amount,
            });
        }
        self.set_balance(from, balance - amount);
        self.total_supply -= amount;
        Ok(())
    }

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ZeroAddress`] if either side is the zero address.
    /// - [`SwapError::InsufficientBalance`] if `from` holds less than `amount`.
    pub fn transfer(&mut self, from: Address, to: Address, amount: u128) -> Result<()> {
        if from.is_zero() {
            return Err(SwapError::ZeroAddress("transfer sender"));
        }
        if to.is_zero() {
            return Err(SwapError::ZeroAddress("transfer recipient"));
        }
        let balance = self.balance_of(&from);
        if balance < amount {
            return Err(SwapError::InsufficientBalance {
                have: balance,
                need: amount,
            });
        }
        if from != to {
            let credited = self.balance_of(&to) + amount;
            self.set_balance(from, balance - amount);
            self.set_balance(to, credited);
        }
        Ok(())
    }

    /// Sets `spender`'s allowance over `owner`'s balance, replacing any
    /// previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ZeroAddress`] if either party is the zero address.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: u128) -> Result<()> {
        if owner.is_zero() {
            return Err(SwapError::ZeroAddress("approval owner"));
        }
        if spender.is_zero() {
            return Err(SwapError::ZeroAddress("approval spender"));
        }
        if amount == 0 {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
        Ok(())
    }

    /// Moves `amount` from `from` to `to` on behalf of `spender`, consuming
    /// allowance.  Returns the allowance left afterwards.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientAllowance`] if the allowance is too small.
    /// - Any error of [`Balances::transfer`].
    pub fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<u128> {
        let allowed = self.allowance(&from, &spender);
        if allowed < amount {
            return Err(SwapError::InsufficientAllowance {
                have: allowed,
                need: amount,
            });
        }
        self.transfer(from, to, amount)?;
        if allowed == UNLIMITED_ALLOWANCE {
            return Ok(allowed);
        }
        let remaining = allowed - amount;
        if remaining == 0 {
            self.allowances.remove(&(from, spender));
        } else {
            self.allowances.insert((from, spender), remaining);
        }
        Ok(remaining)
    }

    fn set_balance(&mut self, owner: Address, value: u128) {
        if value == 0 {
            self.balances.remove(&owner);
        } else {
            self.balances.insert(owner, value);
        }
    }
}
