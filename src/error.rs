//! Unified error type for the pool engine.
//!
//! Every fallible operation in the crate returns [`SwapError`].  Each
//! variant is terminal for the operation that produced it: the engine never
//! retries internally, and the caller decides whether to resubmit with
//! adjusted parameters.
//!
//! The display strings of the validation variants match the revert reasons
//! that front-ends of constant-product pools conventionally surface
//! (`"Expired"`, `"Invalid tokens"`, `"A not min"`, ...).

use thiserror::Error;

use crate::domain::{Amount, Timestamp};

/// Errors raised by the pool engine, the share ledger and token ledgers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    /// The operation arrived after its deadline.
    #[error("Expired: deadline {deadline} is before current time {now}")]
    Expired {
        /// Deadline supplied by the caller.
        deadline: Timestamp,
        /// Clock reading at operation entry.
        now: Timestamp,
    },

    /// The supplied token pair is not the configured pair.
    #[error("Invalid tokens")]
    InvalidTokens,

    /// A pool was configured with the same token on both sides.
    #[error("Identical tokens")]
    IdenticalTokens,

    /// A swap path did not contain exactly two entries.
    #[error("Invalid path: expected 2 entries, got {0}")]
    InvalidPath(usize),

    /// A swap was requested with a zero input amount.
    #[error("Zero input")]
    ZeroInput,

    /// One or both reserves (or the share supply) are zero.
    #[error("No liquidity")]
    NoLiquidity,

    /// The token-A leg fell below the caller's minimum.
    #[error("A not min: {amount} < {min}")]
    BelowMinimumA {
        /// Amount the pool would have used.
        amount: Amount,
        /// Caller-supplied lower bound.
        min: Amount,
    },

    /// The token-B leg fell below the caller's minimum.
    #[error("B not min: {amount} < {min}")]
    BelowMinimumB {
        /// Amount the pool would have used.
        amount: Amount,
        /// Caller-supplied lower bound.
        min: Amount,
    },

    /// A swap output fell below the caller's minimum.
    #[error("Output too low: {amount_out} < {min}")]
    InsufficientOutput {
        /// Output the pool would have paid.
        amount_out: Amount,
        /// Caller-supplied lower bound.
        min: Amount,
    },

    /// A holder tried to move or burn more than it owns.
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance {
        /// Current balance.
        have: u128,
        /// Requested amount.
        need: u128,
    },

    /// A spender tried to move more than its allowance.
    #[error("insufficient allowance: have {have}, need {need}")]
    InsufficientAllowance {
        /// Current allowance.
        have: u128,
        /// Requested amount.
        need: u128,
    },

    /// A liquidity operation would mint or burn zero shares.
    #[error("zero liquidity")]
    ZeroLiquidity,

    /// The zero address was used where a real account is required.
    #[error("zero address used as {0}")]
    ZeroAddress(&'static str),

    /// A result does not fit in its target type.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A division had a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// A decimals value is out of range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// An address string could not be parsed.
    #[error("invalid address: {0}")]
    InvalidAddress(&'static str),

    /// Pool configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A token ledger refused a transfer for a ledger-specific reason.
    #[error("token ledger rejected transfer: {0}")]
    LedgerRejected(String),

    /// A settlement could not be fully reversed.  Payouts that never
    /// arrived are held for their recipients.
    #[error("settlement failed past the point of no return: {0}")]
    SettlementFailed(String),

    /// A claim was made by an account the pool holds nothing for.
    #[error("nothing to claim")]
    NothingToClaim,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SwapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_revert_reasons() {
        assert_eq!(SwapError::InvalidTokens.to_string(), "Invalid tokens");
        assert_eq!(SwapError::IdenticalTokens.to_string(), "Identical tokens");
        assert_eq!(SwapError::ZeroInput.to_string(), "Zero input");
        assert_eq!(SwapError::NoLiquidity.to_string(), "No liquidity");
    }

    #[test]
    fn minimum_errors_carry_amounts() {
        let err = SwapError::BelowMinimumA {
            amount: Amount::new(5),
            min: Amount::new(6),
        };
        assert_eq!(err.to_string(), "A not min: 5 < 6");

        let err = SwapError::InsufficientOutput {
            amount_out: Amount::new(9),
            min: Amount::new(100),
        };
        assert!(err.to_string().starts_with("Output too low"));
    }

    #[test]
    fn expired_mentions_both_timestamps() {
        let err = SwapError::Expired {
            deadline: Timestamp::from_secs(10),
            now: Timestamp::from_secs(11),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Expired"));
        assert!(msg.contains("10"));
        assert!(msg.contains("11"));
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(SwapError::Overflow("x"), SwapError::Overflow("x"));
        assert_ne!(SwapError::Overflow("x"), SwapError::DivisionByZero);
    }
}
