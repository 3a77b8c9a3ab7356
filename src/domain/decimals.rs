//! Display precision of a fungible token.

use serde::{Deserialize, Serialize};

use crate::error::SwapError;

/// Largest supported number of decimal places.
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places a token uses for display.
///
/// Ledgers only ever store raw integer units; decimals tell a front-end how
/// to render them.  Valid range is `0..=18`.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Decimals;
///
/// let d = Decimals::STANDARD;
/// assert_eq!(d.to_raw(3), 3_000_000_000_000_000_000);
/// assert_eq!(d.format(1_500_000_000_000_000_000), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Decimals {
    /// The EVM-standard 18 decimal places, used by the share token.
    pub const STANDARD: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, SwapError> {
        if value > MAX_DECIMALS {
            return Err(SwapError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`, the raw size of one whole token.
    #[must_use]
    pub const fn unit(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }

    /// Converts whole tokens to raw units.
    ///
    /// Cannot overflow: `u64::MAX * 10^18 < u128::MAX`.
    #[must_use]
    pub const fn to_raw(&self, whole: u64) -> u128 {
        (whole as u128) * self.unit()
    }

    /// Renders raw units as a decimal string without trailing zeros.
    #[must_use]
    pub fn format(&self, raw: u128) -> String {
        let unit = self.unit();
        let whole = raw / unit;
        let frac = raw % unit;
        if frac == 0 {
            return whole.to_string();
        }
        let digits = format!("{frac:0width$}", width = usize::from(self.0));
        format!("{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl Default for Decimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<u8> for Decimals {
    type Error = SwapError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}
