//! Interface to the ledger of one pooled token.

use std::sync::Arc;

use crate::domain::{Address, Amount};
use crate::error::Result;

/// Balance book of a single fungible token, as seen by the pool.
///
/// The pool never stores reserves; it reads its own balance here on every
/// operation.  Implementations must make each call atomic: a call that
/// returns an error must not have moved any balance.
///
/// Methods take `&self` so one ledger can be shared by several pools and
/// by the callers that fund them; implementations synchronise internally.
///
/// # Errors
///
/// Implementations report refusals as
/// [`SwapError::InsufficientBalance`](crate::error::SwapError::InsufficientBalance),
/// [`SwapError::InsufficientAllowance`](crate::error::SwapError::InsufficientAllowance),
/// [`SwapError::ZeroAddress`](crate::error::SwapError::ZeroAddress) or
/// [`SwapError::LedgerRejected`](crate::error::SwapError::LedgerRejected).
pub trait TokenLedger: Send + Sync {
    /// Identity of the token this ledger tracks.
    fn token(&self) -> Address;

    /// Balance of `owner`.
    fn balance_of(&self, owner: &Address) -> Amount;

    /// Remaining allowance of `spender` over `owner`'s balance.
    fn allowance(&self, owner: &Address, spender: &Address) -> Amount;

    /// Sets `spender`'s allowance over `owner`'s balance.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn approve(&self, owner: Address, spender: Address, amount: Amount) -> Result<()>;

    /// Moves `amount` from `from` to `to`, authorised by `from`.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn transfer(&self, from: Address, to: Address, amount: Amount) -> Result<()>;

    /// Moves `amount` from `from` to `to` on behalf of `spender`.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn transfer_from(&self, spender: Address, from: Address, to: Address, amount: Amount)
        -> Result<()>;
}

impl<L: TokenLedger + ?Sized> TokenLedger for Arc<L> {
    fn token(&self) -> Address {
        (**self).token()
    }

    fn balance_of(&self, owner: &Address) -> Amount {
        (**self).balance_of(owner)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        (**self).allowance(owner, spender)
    }

    fn approve(&self, owner: Address, spender: Address, amount: Amount) -> Result<()> {
        (**self).approve(owner, spender, amount)
    }

    fn transfer(&self, from: Address, to: Address, amount: Amount) -> Result<()> {
        (**self).transfer(from, to, amount)
    }

    fn transfer_from(
        &self,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<()> {
        (**self).transfer_from(spender, from, to, amount)
    }
}
