//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **First deposit**: mints `⌊√(a·b)⌋` and sets reserves to `(a, b)`.
//! 2. **Round trip**: a lone provider's deposit then full withdrawal
//!    returns exactly what was deposited.
//! 3. **Invariant preservation**: `k` never decreases across swaps.
//! 4. **Rounding direction**: swap output never overpays the trader.
//! 5. **Price reciprocity**: `price(A,B) · price(B,A) ≤ 10^36` and within
//!    flooring error of it.
//! 6. **Deposit bounds**: a proportional deposit never takes more than
//!    desired nor mints more than its share.

use std::sync::Arc;

use proptest::prelude::*;

use super::{get_amount_out, quote_deposit, PairPool};
use crate::clock::ManualClock;
use crate::config::PoolConfig;
use crate::domain::{
    Address, AddLiquidity, Amount, Liquidity, RemoveLiquidity, SwapExactIn, Timestamp,
};
use crate::ledger::{MemoryTokenLedger, TokenLedger};
use crate::math::{integer_sqrt, U256, WAD};
use crate::traits::{LiquidityPool, PriceOracle, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn tok_x() -> Address {
    Address::repeat_byte(0x01)
}

fn tok_y() -> Address {
    Address::repeat_byte(0x02)
}

fn pool_addr() -> Address {
    Address::repeat_byte(0x99)
}

fn alice() -> Address {
    Address::repeat_byte(0xa1)
}

struct Fixture {
    pool: PairPool<MemoryTokenLedger, ManualClock>,
    x: Arc<MemoryTokenLedger>,
    y: Arc<MemoryTokenLedger>,
}

/// A pool with no shares; `alice` holds `funds` of each token and has
/// approved the pool for all of it.
fn fixture(funds: u128) -> Fixture {
    let x = Arc::new(MemoryTokenLedger::new(tok_x()));
    let y = Arc::new(MemoryTokenLedger::new(tok_y()));
    for l in [&x, &y] {
        let Ok(()) = l.mint(alice(), Amount::new(funds)) else {
            panic!("mint");
        };
        let Ok(()) = l.approve(alice(), pool_addr(), Amount::MAX) else {
            panic!("approve");
        };
    }
    let Ok(cfg) = PoolConfig::new(pool_addr(), tok_x(), tok_y()) else {
        panic!("valid config");
    };
    let Ok(pool) = PairPool::new(
        cfg,
        Arc::clone(&x),
        Arc::clone(&y),
        ManualClock::new(Timestamp::from_secs(1)),
    ) else {
        panic!("valid pool");
    };
    Fixture { pool, x, y }
}

fn deposit(a: u128, b: u128) -> AddLiquidity {
    AddLiquidity {
        token_a: tok_x(),
        token_b: tok_y(),
        amount_a_desired: Amount::new(a),
        amount_b_desired: Amount::new(b),
        amount_a_min: Amount::ZERO,
        amount_b_min: Amount::ZERO,
        to: alice(),
        deadline: Timestamp::NEVER,
    }
}

fn product(a: Amount, b: Amount) -> U256 {
    U256::from(a.get()) * U256::from(b.get())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [1_000, 10^24] to cover 18-decimal tokens.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000_000_000_000_000u128
}

/// Reserves whose ratio, scaled by 10^18, always fits in `u128`.
fn priced_reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000_000_000_000u128
}

/// Swap sizes from dust up to twice a typical reserve.
fn swap_strategy() -> impl Strategy<Value = u128> {
    1u128..=2_000_000_000_000_000_000_000_000u128
}

// ---------------------------------------------------------------------------
// Properties 1-2: share minting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_first_deposit_mints_sqrt(a in reserve_strategy(), b in reserve_strategy()) {
        let f = fixture(a.max(b));
        let Ok(d) = f.pool.add_liquidity(alice(), &deposit(a, b)) else {
            return Err(TestCaseError::fail("first deposit failed"));
        };
        let expected = integer_sqrt(product(Amount::new(a), Amount::new(b)));
        prop_assert_eq!(U256::from(d.liquidity().get()), expected);
        prop_assert_eq!(f.pool.reserves(), (Amount::new(a), Amount::new(b)));
        prop_assert_eq!(f.pool.total_supply(), d.liquidity());
        prop_assert_eq!(f.pool.balance_of(&alice()), d.liquidity());
    }

    #[test]
    fn prop_deposit_withdraw_round_trip(a in reserve_strategy(), b in reserve_strategy()) {
        let f = fixture(a.max(b));
        let Ok(d) = f.pool.add_liquidity(alice(), &deposit(a, b)) else {
            return Err(TestCaseError::fail("deposit failed"));
        };
        let Ok(w) = f.pool.remove_liquidity(alice(), &RemoveLiquidity {
            token_a: tok_x(),
            token_b: tok_y(),
            liquidity: d.liquidity(),
            amount_a_min: Amount::new(a),
            amount_b_min: Amount::new(b),
            to: alice(),
            deadline: Timestamp::NEVER,
        }) else {
            return Err(TestCaseError::fail("withdrawal failed"));
        };
        prop_assert_eq!((w.amount_a(), w.amount_b()), (Amount::new(a), Amount::new(b)));
        prop_assert_eq!(f.pool.total_supply(), Liquidity::ZERO);
        prop_assert_eq!(f.x.balance_of(&alice()), Amount::new(a.max(b)));
        prop_assert_eq!(f.y.balance_of(&alice()), Amount::new(a.max(b)));
    }
}

// ---------------------------------------------------------------------------
// Properties 3-4: swaps
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swaps_never_decrease_k(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swaps in prop::collection::vec((swap_strategy(), any::<bool>()), 1..8),
    ) {
        let total_in: u128 = swaps.iter().map(|(v, _)| *v).sum();
        let f = fixture(ra.max(rb) + total_in);
        let Ok(_) = f.pool.add_liquidity(alice(), &deposit(ra, rb)) else {
            return Err(TestCaseError::fail("deposit failed"));
        };
        for (amount_in, x_to_y) in swaps {
            let (before_a, before_b) = f.pool.reserves();
            let (sell, buy) = if x_to_y { (tok_x(), tok_y()) } else { (tok_y(), tok_x()) };
            let req = SwapExactIn::new(
                Amount::new(amount_in), Amount::ZERO, sell, buy, alice(), Timestamp::NEVER,
            );
            if f.pool.swap_exact_tokens_for_tokens(alice(), &req).is_err() {
                continue;
            }
            let (after_a, after_b) = f.pool.reserves();
            prop_assert!(product(after_a, after_b) >= product(before_a, before_b));
        }
    }

    #[test]
    fn prop_swap_output_rounds_toward_pool(
        amount_in in swap_strategy(),
        rin in reserve_strategy(),
        rout in reserve_strategy(),
    ) {
        let Ok(out) = get_amount_out(Amount::new(amount_in), Amount::new(rin), Amount::new(rout))
        else {
            return Err(TestCaseError::fail("quote failed"));
        };
        prop_assert!(out.get() < rout);
        let paid = U256::from(out.get()) * (U256::from(rin) + U256::from(amount_in));
        prop_assert!(paid <= U256::from(amount_in) * U256::from(rout));
    }
}

// ---------------------------------------------------------------------------
// Properties 5-6: prices and proportional deposits
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_price_reciprocity(ra in priced_reserve_strategy(), rb in priced_reserve_strategy()) {
        let f = fixture(ra.max(rb));
        let Ok(_) = f.pool.add_liquidity(alice(), &deposit(ra, rb)) else {
            return Err(TestCaseError::fail("deposit failed"));
        };
        let (Ok(p), Ok(q)) = (
            f.pool.get_price(&tok_x(), &tok_y()),
            f.pool.get_price(&tok_y(), &tok_x()),
        ) else {
            return Err(TestCaseError::fail("price failed"));
        };
        let wad_sq = U256::from(WAD) * U256::from(WAD);
        let p = U256::from(p.get());
        let q = U256::from(q.get());
        prop_assert!(p * q <= wad_sq);
        // each side is floored by less than one unit
        prop_assert!((p + U256::one()) * (q + U256::one()) > wad_sq);
    }

    #[test]
    fn prop_proportional_deposit_bounds(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        supply in 1u128..=1_000_000_000_000_000_000_000u128,
        da in reserve_strategy(),
        db in reserve_strategy(),
    ) {
        let reserves = (Amount::new(ra), Amount::new(rb));
        let Ok((a, b, minted)) =
            quote_deposit((Amount::new(da), Amount::new(db)), reserves, Liquidity::new(supply))
        else {
            return Ok(());
        };
        prop_assert!(a.get() <= da);
        prop_assert!(b.get() <= db);
        prop_assert!(a.get() == da || b.get() == db);
        let minted_value = U256::from(minted.get()) * U256::from(ra);
        prop_assert!(minted_value <= U256::from(a.get()) * U256::from(supply));
    }
}
