//! Liquidity deposit and withdrawal requests, and their receipts.
//!
//! Requests carry every caller-supplied parameter of one operation; they
//! are plain data and are validated by the pool, not at construction.
//! All per-token fields are in the **caller's** token order: `amount_a_*`
//! belongs to `token_a` as the caller named it, whichever configured side
//! that turns out to be.

use core::fmt;

use super::{Address, Amount, Liquidity, Timestamp};

/// Parameters of an add-liquidity call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidity {
    /// First token as named by the caller.
    pub token_a: Address,
    /// Second token as named by the caller.
    pub token_b: Address,
    /// Most of `token_a` the caller is willing to deposit.
    pub amount_a_desired: Amount,
    /// Most of `token_b` the caller is willing to deposit.
    pub amount_b_desired: Amount,
    /// Least of `token_a` the caller accepts depositing.
    pub amount_a_min: Amount,
    /// Least of `token_b` the caller accepts depositing.
    pub amount_b_min: Amount,
    /// Recipient of the minted shares.
    pub to: Address,
    /// Last timestamp at which the call is still valid.
    pub deadline: Timestamp,
}

/// Parameters of a remove-liquidity call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidity {
    /// First token as named by the caller.
    pub token_a: Address,
    /// Second token as named by the caller.
    pub token_b: Address,
    /// Shares to burn from the caller.
    pub liquidity: Liquidity,
    /// Least of `token_a` the caller accepts receiving.
    pub amount_a_min: Amount,
    /// Least of `token_b` the caller accepts receiving.
    pub amount_b_min: Amount,
    /// Recipient of the withdrawn tokens.
    pub to: Address,
    /// Last timestamp at which the call is still valid.
    pub deadline: Timestamp,
}

/// Outcome of a successful deposit, in the caller's token order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deposit {
    amount_a: Amount,
    amount_b: Amount,
    liquidity: Liquidity,
}

impl Deposit {
    /// Creates a deposit receipt.
    pub const fn new(amount_a: Amount, amount_b: Amount, liquidity: Liquidity) -> Self {
        Self {
            amount_a,
            amount_b,
            liquidity,
        }
    }

    /// Amount of the caller's `token_a` pulled into the pool.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of the caller's `token_b` pulled into the pool.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Shares minted to the recipient.
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }
}

impl fmt::Display for Deposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(a={}, b={}, liquidity={})",
            self.amount_a, self.amount_b, self.liquidity
        )
    }
}

/// Outcome of a successful withdrawal, in the caller's token order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Withdrawal {
    amount_a: Amount,
    amount_b: Amount,
}

impl Withdrawal {
    /// Creates a withdrawal receipt.
    pub const fn new(amount_a: Amount, amount_b: Amount) -> Self {
        Self { amount_a, amount_b }
    }

    /// Amount of the caller's `token_a` paid out.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of the caller's `token_b` paid out.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Withdrawal(a={}, b={})", self.amount_a, self.amount_b)
    }
}
