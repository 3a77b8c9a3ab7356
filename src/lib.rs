//! # SimpleSwap
//!
//! Two-asset constant-product pool engine: custody reserves of two
//! fungible tokens, issue a proportional liquidity-share token against
//! deposits, and swap between the assets under `x · y = k` with no fee.
//!
//! The pool does not keep its own copy of the reserves.  It reads its
//! balance from one [`TokenLedger`](ledger::TokenLedger) per token on every
//! operation, pulls deposits and swap inputs with `transfer_from` (so
//! callers approve the pool first), and pays out with `transfer`.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use simple_swap::prelude::*;
//!
//! let usdc = Address::repeat_byte(0x01);
//! let weth = Address::repeat_byte(0x02);
//! let pool_addr = Address::repeat_byte(0x99);
//! let alice = Address::repeat_byte(0xa1);
//!
//! // 1. Two token ledgers, with alice funded and the pool approved
//! let usdc_ledger = Arc::new(MemoryTokenLedger::new(usdc));
//! let weth_ledger = Arc::new(MemoryTokenLedger::new(weth));
//! for ledger in [&usdc_ledger, &weth_ledger] {
//!     ledger.mint(alice, Amount::new(1_000_000)).expect("mint");
//!     ledger.approve(alice, pool_addr, Amount::MAX).expect("approve");
//! }
//!
//! // 2. Create the pool
//! let config = PoolConfig::new(pool_addr, usdc, weth).expect("valid config");
//! let pool = PairPool::new(config, usdc_ledger, weth_ledger.clone(), SystemClock)
//!     .expect("pool created");
//!
//! // 3. Seed liquidity
//! let deposit = pool
//!     .add_liquidity(alice, &AddLiquidity {
//!         token_a: usdc,
//!         token_b: weth,
//!         amount_a_desired: Amount::new(100_000),
//!         amount_b_desired: Amount::new(100_000),
//!         amount_a_min: Amount::ZERO,
//!         amount_b_min: Amount::ZERO,
//!         to: alice,
//!         deadline: Timestamp::NEVER,
//!     })
//!     .expect("deposit");
//! assert_eq!(deposit.liquidity(), Liquidity::new(100_000));
//!
//! // 4. Sell 10 000 USDC for WETH
//! let swap = SwapExactIn::new(Amount::new(10_000), Amount::new(9_000), usdc, weth, alice, Timestamp::NEVER);
//! let out = pool.swap_exact_tokens_for_tokens(alice, &swap).expect("swap");
//! assert_eq!(out, Amount::new(9_090));
//!
//! // 5. Quote the new price of USDC in WETH (scaled by 10^18)
//! let price = pool.get_price(&usdc, &weth).expect("price");
//! assert!(price < Price::ONE);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Caller     │  caller address + request struct
//! └──────┬───────┘
//!        │ SwapPool / LiquidityPool / PriceOracle
//!        ▼
//! ┌──────────────┐
//! │   PairPool   │  lock, validate, quote, settle, mint/burn shares
//! └──────┬───────┘
//!        │ Journal (pulls before pushes, refund or hold)
//!        ▼
//! ┌──────────────┐
//! │ TokenLedgers │  one per pooled token; reserves = pool balance - held
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`Price`](domain::Price), request and receipt structs |
//! | [`traits`] | Pool abstractions: [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`PriceOracle`](traits::PriceOracle) |
//! | [`config`] | Declarative pool blueprint: [`PoolConfig`](config::PoolConfig) |
//! | [`pools`]  | [`PairPool`](pools::PairPool) and the pure quote functions |
//! | [`ledger`] | [`TokenLedger`](ledger::TokenLedger), the share ledger and an in-memory token ledger |
//! | [`clock`]  | [`Clock`](clock::Clock) time sources for deadlines |
//! | [`math`]   | 256-bit `mul_div`, integer square root, checked arithmetic |
//! | [`error`]  | [`SwapError`](error::SwapError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (pool creation at `info`, operations
//! and rejections at `debug`, refunds and held payouts at `warn`, failed settlements at `error`) and
//! installs no subscriber.

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
