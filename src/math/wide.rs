//! 256-bit intermediates for `u128` products.
//!
//! Every product of two reserves or of a reserve and the share supply is
//! formed in [`U256`], so the only overflow an operation can report is a
//! final result that does not fit back into `u128`.

use crate::error::{Result, SwapError};

#[allow(clippy::manual_div_ceil, clippy::assign_op_pattern, clippy::ptr_offset_with_cast)]
mod uint_impl {
    use uint::construct_uint;
    construct_uint! {
        /// 256-bit unsigned integer.
        pub struct U256(4);
    }
}

pub use uint_impl::U256;

/// Fixed-point scale of prices (`10^18`).
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Narrows a 256-bit value back to `u128`.
///
/// # Errors
///
/// Returns [`SwapError::Overflow`] tagged with `context` if `value` does
/// not fit.
pub fn narrow(value: U256, context: &'static str) -> Result<u128> {
    if value.bits() > 128 {
        return Err(SwapError::Overflow(context));
    }
    Ok(value.low_u128())
}

/// Computes `a * b / denominator`, floored, with a 256-bit product.
///
/// # Errors
///
/// - [`SwapError::DivisionByZero`] if `denominator` is zero.
/// - [`SwapError::Overflow`] if the quotient exceeds `u128::MAX`.
///
/// # Examples
///
/// ```
/// use simple_swap::math::mul_div;
///
/// // u128::MAX * 2 would overflow a plain u128 multiply.
/// assert_eq!(mul_div(u128::MAX, 2, 4), Ok(u128::MAX / 2));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128> {
    if denominator == 0 {
        return Err(SwapError::DivisionByZero);
    }
    let product = U256::from(a) * U256::from(b);
    narrow(product / U256::from(denominator), "mul_div quotient")
}

/// Floor of the square root of `n` (Babylonian iteration).
///
/// Starts from `ceil(n / 2)` (or `n` itself for `n < 4`) and iterates
/// `x' = (x + n / x) / 2` while the estimate keeps decreasing.
#[must_use]
pub fn integer_sqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::zero();
    }
    let one = U256::one();
    let three = U256::from(3u8);
    if n <= three {
        return one;
    }
    let mut x = n;
    let mut y = (n >> 1) + (n & one);
    while y < x {
        x = y;
        y = (x + n / x) >> 1;
    }
    x
}
