//! Spot price as an 18-decimal fixed-point ratio.

use core::fmt;

use super::{Amount, Decimals};
use crate::math::{mul_div, WAD};

/// Exchange rate between two tokens, scaled by `10^18`.
///
/// A `Price` read for `(first, second)` is "units of `second` per one unit
/// of `first`": `reserve(second) * 10^18 / reserve(first)`, floored.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, Price};
///
/// let price = Price::from_ratio(Amount::new(200), Amount::new(100)).expect("non-zero");
/// assert_eq!(price.get(), 2_000_000_000_000_000_000);
/// assert_eq!(price.to_string(), "2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u128);

impl Price {
    /// Fixed-point scale (`10^18`).
    pub const SCALE: u128 = WAD;

    /// A 1:1 rate.
    pub const ONE: Self = Self(WAD);

    /// Wraps an already-scaled value.
    #[must_use]
    pub const fn from_scaled(value: u128) -> Self {
        Self(value)
    }

    /// Computes `numerator * 10^18 / denominator`, floored.
    ///
    /// # Errors
    ///
    /// - [`SwapError::DivisionByZero`](crate::error::SwapError::DivisionByZero)
    ///   if `denominator` is zero.
    /// - [`SwapError::Overflow`](crate::error::SwapError::Overflow) if the
    ///   scaled ratio does not fit in `u128`.
    pub fn from_ratio(numerator: Amount, denominator: Amount) -> crate::error::Result<Self> {
        mul_div(numerator.get(), WAD, denominator.get()).map(Self)
    }

    /// Returns the scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Decimals::STANDARD.format(self.0))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::SwapError;

    #[test]
    fn ratio_scales_by_wad() {
        let Ok(p) = Price::from_ratio(Amount::new(100), Amount::new(200)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.get(), WAD / 2);
        assert_eq!(p.to_string(), "0.5");
    }

    #[test]
    fn ratio_floors() {
        let Ok(p) = Price::from_ratio(Amount::new(1), Amount::new(3)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.get(), 333_333_333_333_333_333);
    }

    #[test]
    fn zero_denominator_rejected() {
        let result = Price::from_ratio(Amount::new(1), Amount::ZERO);
        assert_eq!(result, Err(SwapError::DivisionByZero));
    }

    #[test]
    fn huge_ratio_overflows() {
        let result = Price::from_ratio(Amount::MAX, Amount::new(1));
        assert!(matches!(result, Err(SwapError::Overflow(_))));
    }

    #[test]
    fn one_is_scale() {
        assert_eq!(Price::ONE.get(), Price::SCALE);
        assert_eq!(Price::ONE, Price::from_scaled(WAD));
    }
}
