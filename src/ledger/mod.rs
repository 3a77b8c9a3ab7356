//! Token and share bookkeeping.
//!
//! - [`TokenLedger`]: the pool's view of an external pooled-token ledger.
//! - [`MemoryTokenLedger`]: an in-memory implementation with a faucet and
//!   account freezing.
//! - [`ShareLedger`]: the pool's own liquidity-share token.
//! - [`PendingPayouts`]: payouts held for recipients after a failed transfer.
//! - [`Balances`]: the balance/allowance book both in-memory ledgers use.

mod balances;
mod memory;
mod pending;
mod shares;
mod token;

pub use balances::{Balances, UNLIMITED_ALLOWANCE};
pub use memory::MemoryTokenLedger;
pub use pending::PendingPayouts;
pub use shares::{ShareEvent, ShareLedger};
pub use token::TokenLedger;
