//! The two-asset pool and its share-token surface.
//!
//! [`PairPool`] owns the share ledger and the book of held payouts behind
//! a single mutex.  Every operation (swap, deposit, withdrawal, share
//! transfer and even price reads) runs while holding that lock, so
//! concurrent callers observe one total order of operations.  Reserves are
//! never cached: each operation reads the pool's balance from the two
//! token ledgers and subtracts whatever is held for claimants.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use super::settlement::Unwind;
use crate::clock::{Clock, SystemClock};
use crate::config::PoolConfig;
use crate::domain::{Address, Amount, Decimals, Liquidity, PairOrder, Side, Timestamp, TokenPair};
use crate::error::{Result, SwapError};
use crate::ledger::{PendingPayouts, ShareEvent, ShareLedger, TokenLedger};

/// Mutable pool state guarded by the pool lock.
#[derive(Debug)]
pub(super) struct PoolState {
    pub(super) shares: ShareLedger,
    pending: PendingPayouts,
}

/// A constant-product pool over two token ledgers.
///
/// `L` is the token-ledger type (`dyn TokenLedger` by default, so the two
/// sides may be different implementations) and `C` the clock used for
/// deadlines.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use simple_swap::clock::SystemClock;
/// use simple_swap::config::PoolConfig;
/// use simple_swap::domain::{Address, AddLiquidity, Amount, SwapExactIn, Timestamp};
/// use simple_swap::ledger::{MemoryTokenLedger, TokenLedger};
/// use simple_swap::pools::PairPool;
/// use simple_swap::traits::{LiquidityPool, SwapPool};
///
/// let (x, y, pool_addr) = (Address::repeat_byte(1), Address::repeat_byte(2), Address::repeat_byte(9));
/// let alice = Address::repeat_byte(0xa1);
///
/// let ledger_x = Arc::new(MemoryTokenLedger::new(x));
/// let ledger_y = Arc::new(MemoryTokenLedger::new(y));
/// for l in [&ledger_x, &ledger_y] {
///     l.mint(alice, Amount::new(1_000)).expect("mint");
///     l.approve(alice, pool_addr, Amount::new(1_000)).expect("approve");
/// }
///
/// let config = PoolConfig::new(pool_addr, x, y).expect("valid config");
/// let pool = PairPool::new(config, ledger_x.clone(), ledger_y.clone(), SystemClock)
///     .expect("pool created");
///
/// let deposit = pool
///     .add_liquidity(alice, &AddLiquidity {
///         token_a: x,
///         token_b: y,
///         amount_a_desired: Amount::new(100),
///         amount_b_desired: Amount::new(100),
///         amount_a_min: Amount::ZERO,
///         amount_b_min: Amount::ZERO,
///         to: alice,
///         deadline: Timestamp::NEVER,
///     })
///     .expect("deposit");
/// assert_eq!(deposit.liquidity().get(), 100);
///
/// let out = pool
///     .swap_exact_tokens_for_tokens(
///         alice,
///         &SwapExactIn::new(Amount::new(10), Amount::new(8), x, y, alice, Timestamp::NEVER),
///     )
///     .expect("swap");
/// assert_eq!(out, Amount::new(9));
/// assert_eq!(ledger_y.balance_of(&alice), Amount::new(909));
/// ```
pub struct PairPool<L: TokenLedger + ?Sized = dyn TokenLedger, C: Clock = SystemClock> {
    config: PoolConfig,
    pair: TokenPair,
    ledger_a: Arc<L>,
    ledger_b: Arc<L>,
    clock: C,
    state: Mutex<PoolState>,
}

impl<L: TokenLedger + ?Sized, C: Clock> PairPool<L, C> {
    /// Creates a pool with an empty share supply.
    ///
    /// # Errors
    ///
    /// - Any error of [`PoolConfig::validate`].
    /// - [`SwapError::InvalidConfiguration`] if a ledger tracks a token
    ///   other than the one configured for its side.
    pub fn new(config: PoolConfig, ledger_a: Arc<L>, ledger_b: Arc<L>, clock: C) -> Result<Self> {
        config.validate()?;
        let pair = config.token_pair()?;
        if ledger_a.token() != pair.token_a() {
            return Err(SwapError::InvalidConfiguration(
                "ledger_a does not track token_a",
            ));
        }
        if ledger_b.token() != pair.token_b() {
            return Err(SwapError::InvalidConfiguration(
                "ledger_b does not track token_b",
            ));
        }
        let shares = ShareLedger::new(config.share_token());
        info!(
            pool = %config.address(),
            token_a = %pair.token_a(),
            token_b = %pair.token_b(),
            share_symbol = shares.symbol(),
            "pool created"
        );
        Ok(Self {
            config,
            pair,
            ledger_a,
            ledger_b,
            clock,
            state: Mutex::new(PoolState {
                shares,
                pending: PendingPayouts::new(),
            }),
        })
    }

    /// Returns the account that holds the reserves.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.config.address()
    }

    /// Returns the configured first token.
    #[must_use]
    pub const fn token_a(&self) -> Address {
        self.pair.token_a()
    }

    /// Returns the configured second token.
    #[must_use]
    pub const fn token_b(&self) -> Address {
        self.pair.token_b()
    }

    /// Amounts held for `account` after failed payouts, in configured
    /// `(token_a, token_b)` order.
    #[must_use]
    pub fn pending_payout(&self, account: &Address) -> (Amount, Amount) {
        self.state.lock().pending.owed(account)
    }

    /// Pays everything held for `caller` to `to`, returning the amounts in
    /// configured `(token_a, token_b)` order.
    ///
    /// Each side is released only once its transfer succeeds, so a side
    /// the ledger refuses stays held and can be claimed again, possibly to
    /// a different recipient.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ZeroAddress`] for a zero recipient.
    /// - [`SwapError::NothingToClaim`] if nothing is held for `caller`.
    /// - Any error of the token ledger's `transfer`.
    pub fn claim(&self, caller: Address, to: Address) -> Result<(Amount, Amount)> {
        self.try_claim(caller, to).map_err(|e| self.rejected("claim", &caller, e))
    }

    fn try_claim(&self, caller: Address, to: Address) -> Result<(Amount, Amount)> {
        let mut state = self.state.lock();
        if to.is_zero() {
            return Err(SwapError::ZeroAddress("claim recipient"));
        }
        let (owed_a, owed_b) = state.pending.owed(&caller);
        if owed_a.is_zero() && owed_b.is_zero() {
            return Err(SwapError::NothingToClaim);
        }
        for (side, amount) in [(Side::A, owed_a), (Side::B, owed_b)] {
            if amount.is_zero() {
                continue;
            }
            self.ledger(side).transfer(self.address(), to, amount)?;
            state.pending.release(&caller, side);
        }
        debug!(
            pool = %self.address(),
            %caller,
            %to,
            amount_a = %owed_a,
            amount_b = %owed_b,
            "held payout claimed"
        );
        Ok((owed_a, owed_b))
    }

    // -- share token -------------------------------------------------------

    /// Share-token name.
    #[must_use]
    pub fn name(&self) -> String {
        self.state.lock().shares.name().to_owned()
    }

    /// Share-token symbol.
    #[must_use]
    pub fn symbol(&self) -> String {
        self.state.lock().shares.symbol().to_owned()
    }

    /// Share-token decimals.
    #[must_use]
    pub fn decimals(&self) -> Decimals {
        self.state.lock().shares.decimals()
    }

    /// Shares held by `owner`.
    #[must_use]
    pub fn balance_of(&self, owner: &Address) -> Liquidity {
        self.state.lock().shares.balance_of(owner)
    }

    /// Shares `spender` may move on behalf of `owner`.
    #[must_use]
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Liquidity {
        self.state.lock().shares.allowance(owner, spender)
    }

    /// Lets `spender` move up to `value` of `caller`'s shares.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ZeroAddress`] for a zero owner or spender.
    pub fn approve(&self, caller: Address, spender: Address, value: Liquidity) -> Result<()> {
        self.state.lock().shares.approve(caller, spender, value)
    }

    /// Moves `value` of `caller`'s shares to `to`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::ZeroAddress`] for a zero sender or recipient.
    /// - [`SwapError::InsufficientBalance`].
    pub fn transfer(&self, caller: Address, to: Address, value: Liquidity) -> Result<()> {
        self.state.lock().shares.transfer(caller, to, value)
    }

    /// Moves `value` of `from`'s shares to `to`, spending `caller`'s
    /// allowance.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientAllowance`].
    /// - Any error of [`PairPool::transfer`].
    pub fn transfer_from(
        &self,
        caller: Address,
        from: Address,
        to: Address,
        value: Liquidity,
    ) -> Result<()> {
        self.state
            .lock()
            .shares
            .transfer_from(caller, from, to, value)
    }

    /// Drains the share-token event journal, oldest first.
    pub fn take_share_events(&self) -> Vec<ShareEvent> {
        self.state.lock().shares.take_events()
    }

    // -- internals shared by the operation modules -------------------------

    pub(super) fn pair(&self) -> &TokenPair {
        &self.pair
    }

    pub(super) fn ledgers(&self) -> (&L, &L) {
        (&*self.ledger_a, &*self.ledger_b)
    }

    pub(super) fn lock(&self) -> MutexGuard<'_, PoolState> {
        self.state.lock()
    }

    fn ledger(&self, side: Side) -> &L {
        match side {
            Side::A => &*self.ledger_a,
            Side::B => &*self.ledger_b,
        }
    }

    /// Pool balance of the `side` token, less what is held for claimants.
    pub(super) fn reserve(&self, state: &PoolState, side: Side) -> Amount {
        let balance = self.ledger(side).balance_of(&self.config.address());
        balance
            .checked_sub(&state.pending.total(side))
            .unwrap_or(Amount::ZERO)
    }

    /// Reserves of the caller's `(first, second)` tokens.
    pub(super) fn reserves_in(&self, state: &PoolState, order: PairOrder) -> (Amount, Amount) {
        let (first, second) = order.sides();
        (self.reserve(state, first), self.reserve(state, second))
    }

    /// Entry check common to every mutating pool operation: `deadline` has
    /// not passed.  Reads the clock once.
    pub(super) fn enter(&self, deadline: Timestamp) -> Result<Timestamp> {
        let now = self.clock.now();
        if deadline.is_expired_at(now) {
            return Err(SwapError::Expired { deadline, now });
        }
        Ok(now)
    }

    /// Turns an aborted settlement into the operation's error.  Payouts
    /// that were never delivered are held for their recipients.
    pub(super) fn settle_failure(&self, state: &mut PoolState, unwind: Unwind) -> SwapError {
        match unwind {
            Unwind::Reverted(cause) => cause,
            Unwind::Stranded { reason, unpaid } => {
                error!(pool = %self.address(), %reason, "settlement failed");
                for owed in unpaid {
                    warn!(
                        pool = %self.address(),
                        to = %owed.to,
                        side = ?owed.side,
                        amount = %owed.amount,
                        "payout held for claim"
                    );
                    state.pending.credit(owed.to, owed.side, owed.amount);
                }
                SwapError::SettlementFailed(reason)
            }
        }
    }

    /// Logs a rejected operation and passes the error through.
    pub(super) fn rejected(&self, op: &'static str, caller: &Address, err: SwapError) -> SwapError {
        debug!(pool = %self.address(), %caller, op, error = %err, "operation rejected");
        err
    }
}

impl<L: TokenLedger + ?Sized, C: Clock> fmt::Debug for PairPool<L, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("PairPool")
            .field("address", &self.config.address())
            .field("pair", &self.pair)
            .field("total_supply", &state.shares.total_supply())
            .field("pending", &state.pending)
            .finish_non_exhaustive()
    }
}
