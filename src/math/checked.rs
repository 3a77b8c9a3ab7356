//! Checked arithmetic trait for domain wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<Self, SwapError>`](crate::error::SwapError) instead
//! of panicking on overflow or division by zero.
//!
//! # Implementations
//!
//! - [`Amount`]: token quantities (`u128`)
//! - [`Liquidity`]: pool share quantities (`u128`)
//!
//! # Examples
//!
//! ```
//! use simple_swap::domain::Amount;
//! use simple_swap::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(1_000);
//! let out = Amount::new(90).safe_mul_div(reserve, Amount::new(1_090));
//! assert_eq!(out, Ok(Amount::new(82)));
//! ```

use super::mul_div;
use crate::domain::{Amount, Liquidity};
use crate::error::{Result, SwapError};

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
/// - Division always floors.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the sum exceeds `u128::MAX`.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// `self * numerator / denominator`, floored, with a 256-bit product.
    ///
    /// # Errors
    ///
    /// - [`SwapError::DivisionByZero`] if `denominator` is zero.
    /// - [`SwapError::Overflow`] if the quotient exceeds `u128::MAX`.
    fn safe_mul_div<N, D>(&self, numerator: N, denominator: D) -> Result<Self>
    where
        N: Into<u128>,
        D: Into<u128>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(SwapError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_mul_div<N, D>(&self, numerator: N, denominator: D) -> Result<Self>
    where
        N: Into<u128>,
        D: Into<u128>,
    {
        mul_div(self.get(), numerator.into(), denominator.into()).map(Amount::new)
    }
}

impl CheckedArithmetic for Liquidity {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(SwapError::Overflow("liquidity addition overflow"))
    }

    #[inline]
    fn safe_mul_div<N, D>(&self, numerator: N, denominator: D) -> Result<Self>
    where
        N: Into<u128>,
        D: Into<u128>,
    {
        mul_div(self.get(), numerator.into(), denominator.into()).map(Liquidity::new)
    }
}
