//! Integer arithmetic for pool calculations.
//!
//! All pool math runs on `u128` token quantities with 256-bit
//! intermediates and floor rounding.  This module provides:
//!
//! - [`mul_div`] and [`CheckedArithmetic`] for overflow-safe scaling,
//! - [`integer_sqrt`] and [`sqrt_product`] for first-deposit share minting,
//! - [`WAD`], the `10^18` scale of [`Price`](crate::domain::Price).

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{integer_sqrt, mul_div, narrow, U256, WAD};

use crate::domain::{Amount, Liquidity};
use crate::error::Result;

/// `floor(sqrt(a * b))` as a share quantity.
///
/// The product is formed in 256 bits, so the result always fits back into
/// `u128`; the `Result` is kept for symmetry with the other helpers.
///
/// # Errors
///
/// Returns [`SwapError::Overflow`](crate::error::SwapError::Overflow) if
/// the root does not fit in `u128`, which cannot happen for `u128` inputs.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, Liquidity};
/// use simple_swap::math::sqrt_product;
///
/// assert_eq!(sqrt_product(Amount::new(100), Amount::new(100)), Ok(Liquidity::new(100)));
/// assert_eq!(sqrt_product(Amount::new(2), Amount::new(3)), Ok(Liquidity::new(2)));
/// ```
pub fn sqrt_product(a: Amount, b: Amount) -> Result<Liquidity> {
    let product = U256::from(a.get()) * U256::from(b.get());
    narrow(integer_sqrt(product), "sqrt product").map(Liquidity::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_product_examples() {
        assert_eq!(
            sqrt_product(Amount::new(10), Amount::new(10)),
            Ok(Liquidity::new(10))
        );
        assert_eq!(
            sqrt_product(Amount::new(100), Amount::new(400)),
            Ok(Liquidity::new(200))
        );
        assert_eq!(sqrt_product(Amount::ZERO, Amount::new(5)), Ok(Liquidity::ZERO));
    }

    #[test]
    fn sqrt_product_max_inputs() {
        assert_eq!(
            sqrt_product(Amount::MAX, Amount::MAX),
            Ok(Liquidity::new(u128::MAX))
        );
    }
}
