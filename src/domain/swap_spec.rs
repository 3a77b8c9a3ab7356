//! Exact-input swap request.

use super::{Address, Amount, Timestamp};

/// Parameters of a `swap_exact_tokens_for_tokens` call.
///
/// `path[0]` is the token sold and `path[1]` the token bought.  The path
/// is kept as a vector so that malformed paths reach the pool and are
/// rejected there with [`SwapError::InvalidPath`](crate::error::SwapError::InvalidPath).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapExactIn {
    /// Exact amount of `path[0]` to sell.
    pub amount_in: Amount,
    /// Least amount of `path[1]` the caller accepts.
    pub amount_out_min: Amount,
    /// Sold token followed by bought token.
    pub path: Vec<Address>,
    /// Recipient of the bought tokens.
    pub to: Address,
    /// Last timestamp at which the call is still valid.
    pub deadline: Timestamp,
}

impl SwapExactIn {
    /// Builds a request for the two-hop path `sell -> buy`.
    #[must_use]
    pub fn new(
        amount_in: Amount,
        amount_out_min: Amount,
        sell: Address,
        buy: Address,
        to: Address,
        deadline: Timestamp,
    ) -> Self {
        Self {
            amount_in,
            amount_out_min,
            path: vec![sell, buy],
            to,
            deadline,
        }
    }
}
