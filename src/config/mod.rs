//! Pool configuration structs.
//!
//! [`PoolConfig`] is the declarative blueprint of one pool: where its
//! reserves live, which two tokens it trades, and the metadata of the
//! share token it issues ([`ShareTokenConfig`]).  Both structs validate on
//! construction and (de)serialise with `serde`.

mod pool_config;
mod share_token;

pub use pool_config::PoolConfig;
pub use share_token::{
    ShareTokenConfig, DEFAULT_EVENT_CAPACITY, DEFAULT_SHARE_NAME, DEFAULT_SHARE_SYMBOL,
};
