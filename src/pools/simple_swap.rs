//! The lock-guarded constant-product pool.
//!
//! # Swap Algorithm (token in → token out)
//!
//! 1. `amount_out = reserve_out × amount_in / (reserve_in + amount_in)`
//! 2. `reserve_in += amount_in`
//! 3. `reserve_out -= amount_out`
//!
//! No fee is charged; floor rounding alone keeps `k = reserve_a × reserve_b`
//! from decreasing.
//!
//! # Atomicity
//!
//! Every mutating call holds the pool mutex for its whole duration.  Ledger
//! changes are staged on a clone of the [`PoolLedger`], token movements run
//! through a rollback log, and the clone replaces the live ledger only once
//! both have succeeded.  A failed call leaves reserves, positions, token
//! balances and the event log exactly as they were.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{info, warn};

use super::transfers::TransferBatch;
use super::{liquidity, price, swap, PoolLedger, PoolSnapshot};
use crate::config::PoolConfig;
use crate::domain::{
    AddLiquidity, AddLiquidityReceipt, Address, Amount, EventLog, Liquidity, LiquidityAdded,
    LiquidityRemoved, PoolEvent, Price, RemoveLiquidity, RemoveLiquidityReceipt, SwapExactIn,
    SwapReceipt, TokenPair, TokensSwapped,
};
use crate::environment::SystemClock;
use crate::error::AmmError;
use crate::math;
use crate::traits::{Clock, FromConfig, LiquidityPool, SwapPool, TokenLedger};

/// Everything guarded by the pool mutex.
#[derive(Debug)]
struct PoolState {
    ledger: PoolLedger,
    events: EventLog,
}

/// A single constant-product pool bound to one token pair.
///
/// The pool is `Sync`: share it behind an `Arc` and call it from any
/// thread.  Calls are serialised.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use simple_swap::config::PoolConfig;
/// use simple_swap::domain::{AddLiquidity, Address, Amount, Deadline};
/// use simple_swap::environment::{InMemoryTokenLedger, ManualClock};
/// use simple_swap::pools::SimpleSwapPool;
/// use simple_swap::traits::{LiquidityPool, SwapPool, TokenLedger};
///
/// let (token_a, token_b) = (Address::from_low_u64(1), Address::from_low_u64(2));
/// let pool_account = Address::from_low_u64(100);
/// let alice = Address::from_low_u64(10);
///
/// let tokens = Arc::new(InMemoryTokenLedger::new());
/// tokens.mint_whole(token_a, alice, 100).expect("mint");
/// tokens.mint_whole(token_b, alice, 200).expect("mint");
/// tokens.approve(token_a, alice, pool_account, Amount::MAX);
/// tokens.approve(token_b, alice, pool_account, Amount::MAX);
///
/// let config = PoolConfig::for_tokens(token_a, token_b, pool_account).expect("config");
/// let pool = SimpleSwapPool::new(config, tokens, Arc::new(ManualClock::new(0)))
///     .expect("pool");
///
/// let request = AddLiquidity::exact(
///     token_a,
///     token_b,
///     Amount::from_whole(100),
///     Amount::from_whole(200),
///     alice,
///     Deadline::at(60),
/// );
/// pool.add_liquidity(alice, &request).expect("deposit");
/// assert_eq!(pool.get_price(token_a, token_b).expect("price").to_string(), "2.000000000000000000");
/// ```
pub struct SimpleSwapPool<T: TokenLedger, C: Clock = SystemClock> {
    config: PoolConfig,
    tokens: Arc<T>,
    clock: Arc<C>,
    state: Mutex<PoolState>,
}

impl<T: TokenLedger, C: Clock> SimpleSwapPool<T, C> {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` does not
    /// validate.
    pub fn new(config: PoolConfig, tokens: Arc<T>, clock: Arc<C>) -> Result<Self, AmmError> {
        let ledger = PoolLedger::from_config(&config)?;
        info!(
            token_a = %config.token_pair().token_a(),
            token_b = %config.token_pair().token_b(),
            pool_account = %config.pool_account(),
            "pool created"
        );
        Ok(Self {
            config,
            tokens,
            clock,
            state: Mutex::new(PoolState {
                ledger,
                events: EventLog::new(),
            }),
        })
    }

    /// Returns the pool configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the token ledger the pool moves tokens through.
    #[must_use]
    pub fn tokens(&self) -> &Arc<T> {
        &self.tokens
    }

    /// Returns the clock used for deadlines.
    #[must_use]
    pub fn clock(&self) -> &Arc<C> {
        &self.clock
    }

    /// Current reserve of `token_a`.
    pub fn reserve_a(&self) -> Amount {
        self.state.lock().ledger.reserve_a()
    }

    /// Current reserve of `token_b`.
    pub fn reserve_b(&self) -> Amount {
        self.state.lock().ledger.reserve_b()
    }

    /// Reserves and supply read under a single lock acquisition.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        self.state.lock().ledger.snapshot()
    }

    /// A copy of the pool ledger, including every position.
    #[must_use]
    pub fn ledger(&self) -> PoolLedger {
        self.state.lock().ledger.clone()
    }

    /// Every event committed so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<PoolEvent> {
        self.state.lock().events.to_vec()
    }

    /// Removes and returns every event committed so far.
    pub fn drain_events(&self) -> Vec<PoolEvent> {
        self.state.lock().events.drain()
    }

    /// Fee-less swap output for explicit reserves.
    ///
    /// # Errors
    ///
    /// See [`math::get_amount_out`].
    pub fn get_amount_out(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount, AmmError> {
        math::get_amount_out(amount_in, reserve_in, reserve_out)
    }

    /// Amount of B that matches `amount_a` at the given reserve ratio.
    ///
    /// # Errors
    ///
    /// See [`math::quote`].
    pub fn quote(
        &self,
        amount_a: Amount,
        reserve_a: Amount,
        reserve_b: Amount,
    ) -> Result<Amount, AmmError> {
        math::quote(amount_a, reserve_a, reserve_b)
    }

    fn try_add_liquidity(
        &self,
        state: &mut PoolState,
        caller: Address,
        request: &AddLiquidity,
        now: u64,
    ) -> Result<AddLiquidityReceipt, AmmError> {
        request.deadline.check(now)?;
        let pair = self.config.token_pair();
        let orientation = pair.orient(request.token_a, request.token_b)?;
        let desired = orientation.arrange(request.amount_a_desired, request.amount_b_desired);
        let min = orientation.arrange(request.amount_a_min, request.amount_b_min);

        let mut staged = state.ledger.clone();
        let deposit = liquidity::add(&mut staged, desired, min, request.to)?;

        let mut batch = TransferBatch::new(&*self.tokens, self.config.pool_account());
        batch.pull(pair.token_a(), caller, deposit.amount_a)?;
        batch.pull(pair.token_b(), caller, deposit.amount_b)?;
        batch.commit();

        state.ledger = staged;
        let event = LiquidityAdded {
            provider: caller,
            amount_a: deposit.amount_a,
            amount_b: deposit.amount_b,
            liquidity_minted: deposit.liquidity,
        };
        state.events.push(event);
        info!(
            %caller,
            to = %request.to,
            amount_a = %deposit.amount_a,
            amount_b = %deposit.amount_b,
            minted = %deposit.liquidity,
            reserve_a = %state.ledger.reserve_a(),
            reserve_b = %state.ledger.reserve_b(),
            "liquidity added"
        );

        let (amount_a, amount_b) = orientation.arrange(deposit.amount_a, deposit.amount_b);
        Ok(AddLiquidityReceipt::new(
            amount_a,
            amount_b,
            deposit.liquidity,
            event,
        ))
    }

    fn try_remove_liquidity(
        &self,
        state: &mut PoolState,
        caller: Address,
        request: &RemoveLiquidity,
        now: u64,
    ) -> Result<RemoveLiquidityReceipt, AmmError> {
        request.deadline.check(now)?;
        let pair = self.config.token_pair();
        let orientation = pair.orient(request.token_a, request.token_b)?;
        let min = orientation.arrange(request.amount_a_min, request.amount_b_min);

        let mut staged = state.ledger.clone();
        let withdrawal = liquidity::remove(&mut staged, caller, request.liquidity, min)?;

        let mut batch = TransferBatch::new(&*self.tokens, self.config.pool_account());
        batch.push(pair.token_a(), request.to, withdrawal.amount_a)?;
        batch.push(pair.token_b(), request.to, withdrawal.amount_b)?;
        batch.commit();

        state.ledger = staged;
        let event = LiquidityRemoved {
            provider: caller,
            amount_a: withdrawal.amount_a,
            amount_b: withdrawal.amount_b,
            liquidity_burned: request.liquidity,
        };
        state.events.push(event);
        info!(
            %caller,
            to = %request.to,
            amount_a = %withdrawal.amount_a,
            amount_b = %withdrawal.amount_b,
            burned = %request.liquidity,
            reserve_a = %state.ledger.reserve_a(),
            reserve_b = %state.ledger.reserve_b(),
            "liquidity removed"
        );

        let (amount_a, amount_b) = orientation.arrange(withdrawal.amount_a, withdrawal.amount_b);
        Ok(RemoveLiquidityReceipt::new(amount_a, amount_b, event))
    }

    fn try_swap(
        &self,
        state: &mut PoolState,
        caller: Address,
        request: &SwapExactIn,
        now: u64,
    ) -> Result<SwapReceipt, AmmError> {
        let route = swap::resolve_route(self.config.token_pair(), &request.path)?;
        request.deadline.check(now)?;

        let mut staged = state.ledger.clone();
        let amount_out = swap::execute(
            &mut staged,
            route,
            request.amount_in,
            request.amount_out_min,
        )?;

        let token_in = route.path.token_in();
        let token_out = route.path.token_out();
        let mut batch = TransferBatch::new(&*self.tokens, self.config.pool_account());
        batch.pull(token_in, caller, request.amount_in)?;
        batch.push(token_out, request.to, amount_out)?;
        batch.commit();

        state.ledger = staged;
        let event = TokensSwapped {
            swapper: caller,
            token_in,
            token_out,
            amount_in: request.amount_in,
            amount_out,
        };
        state.events.push(event);
        info!(
            %caller,
            to = %request.to,
            %token_in,
            amount_in = %request.amount_in,
            %amount_out,
            reserve_a = %state.ledger.reserve_a(),
            reserve_b = %state.ledger.reserve_b(),
            "tokens swapped"
        );
        Ok(SwapReceipt::new(event))
    }
}

impl<T: TokenLedger, C: Clock> SwapPool for SimpleSwapPool<T, C> {
    fn swap_exact_tokens_for_tokens(
        &self,
        caller: Address,
        request: &SwapExactIn,
    ) -> Result<SwapReceipt, AmmError> {
        let now = self.clock.now();
        let mut state = self.state.lock();
        self.try_swap(&mut state, caller, request, now)
            .inspect_err(|e| warn!(%caller, error = %e, "swap rejected"))
    }

    fn get_price(&self, token_a: Address, token_b: Address) -> Result<Price, AmmError> {
        price::spot_price(&self.state.lock().ledger, token_a, token_b)
    }

    fn quote_amount_out(
        &self,
        amount_in: Amount,
        token_in: Address,
        token_out: Address,
    ) -> Result<Amount, AmmError> {
        price::quote_amount_out(&self.state.lock().ledger, amount_in, token_in, token_out)
    }

    fn token_pair(&self) -> &TokenPair {
        self.config.token_pair()
    }
}

impl<T: TokenLedger, C: Clock> LiquidityPool for SimpleSwapPool<T, C> {
    fn add_liquidity(
        &self,
        caller: Address,
        request: &AddLiquidity,
    ) -> Result<AddLiquidityReceipt, AmmError> {
        let now = self.clock.now();
        let mut state = self.state.lock();
        self.try_add_liquidity(&mut state, caller, request, now)
            .inspect_err(|e| warn!(%caller, error = %e, "add liquidity rejected"))
    }

    fn remove_liquidity(
        &self,
        caller: Address,
        request: &RemoveLiquidity,
    ) -> Result<RemoveLiquidityReceipt, AmmError> {
        let now = self.clock.now();
        let mut state = self.state.lock();
        self.try_remove_liquidity(&mut state, caller, request, now)
            .inspect_err(|e| warn!(%caller, error = %e, "remove liquidity rejected"))
    }

    fn total_liquidity(&self) -> Liquidity {
        self.state.lock().ledger.total_liquidity()
    }

    fn liquidity_balance(&self, owner: Address) -> Liquidity {
        self.state.lock().ledger.liquidity_of(&owner)
    }
}

impl<T: TokenLedger, C: Clock> core::fmt::Debug for SimpleSwapPool<T, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SimpleSwapPool")
            .field("config", &self.config)
            .field("snapshot", &self.snapshot())
            .finish_non_exhaustive()
    }
}
