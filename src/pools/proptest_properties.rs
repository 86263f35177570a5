//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Swap reversibility**: round-trip A→B→A returns ≤ original.
//! 2. **Product preservation**: `reserve_a × reserve_b` never decreases on swaps.
//! 3. **Reserve safety**: a swap never drains the output reserve.
//! 4. **Price movement direction**: selling A lowers the price of A.
//! 5. **Liquidity conservation**: a proportional add then remove returns the
//!    deposit to within one unit per token.
//! 6. **Supply accounting**: positions always sum to the total supply.

use std::sync::Arc;

use primitive_types::U256;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use super::SimpleSwapPool;
use crate::config::PoolConfig;
use crate::domain::{
    AddLiquidity, Address, Amount, Deadline, Liquidity, RemoveLiquidity, Rounding, SwapExactIn,
    SwapPath,
};
use crate::environment::{InMemoryTokenLedger, ManualClock};
use crate::math::mul_div;
use crate::traits::{LiquidityPool, SwapPool, TokenLedger};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

type Pool = SimpleSwapPool<InMemoryTokenLedger, ManualClock>;

fn addr(v: u64) -> Address {
    Address::from_low_u64(v)
}

fn tok_a() -> Address {
    addr(1)
}

fn tok_b() -> Address {
    addr(2)
}

const POOL: u64 = 100;
const SEEDER: u64 = 10;
const TRADER: u64 = 11;
const PROVIDER: u64 = 12;

fn funded_pool() -> Pool {
    let tokens = Arc::new(InMemoryTokenLedger::new());
    let balance = Amount::new(U256::MAX / U256::from(8u8));
    for who in [SEEDER, TRADER, PROVIDER] {
        for token in [tok_a(), tok_b()] {
            let Ok(()) = tokens.mint(token, addr(who), balance) else {
                panic!("mint failed");
            };
            assert!(tokens.approve(token, addr(who), addr(POOL), Amount::MAX));
        }
    }
    let Ok(cfg) = PoolConfig::for_tokens(tok_a(), tok_b(), addr(POOL)) else {
        panic!("valid config");
    };
    let Ok(pool) = SimpleSwapPool::new(cfg, tokens, Arc::new(ManualClock::new(0))) else {
        panic!("valid pool");
    };
    pool
}

fn make_pool(ra: u128, rb: u128) -> Pool {
    let pool = funded_pool();
    let request = AddLiquidity::exact(
        tok_a(),
        tok_b(),
        Amount::from(ra),
        Amount::from(rb),
        addr(SEEDER),
        Deadline::NEVER,
    );
    let Ok(_) = pool.add_liquidity(addr(SEEDER), &request) else {
        panic!("seed deposit failed");
    };
    pool
}

fn swap(pool: &Pool, token_in: Address, token_out: Address, amount_in: Amount) -> Option<Amount> {
    let request = SwapExactIn::new(
        amount_in,
        Amount::ZERO,
        SwapPath::new(token_in, token_out),
        addr(TRADER),
        Deadline::NEVER,
    );
    pool.swap_exact_tokens_for_tokens(addr(TRADER), &request)
        .ok()
        .map(|r| r.amount_out())
}

fn share(amount: Amount, bps: u128) -> Amount {
    mul_div(amount.get(), U256::from(bps), U256::from(10_000u64), Rounding::Down)
        .map(Amount::new)
        .unwrap_or_default()
}

/// `deposited - withdrawn`, failing the case if the withdrawal exceeds the
/// deposit.
fn shortfall(deposited: Amount, withdrawn: Amount) -> Result<Amount, TestCaseError> {
    deposited.checked_sub(&withdrawn).ok_or_else(|| {
        TestCaseError::fail(format!("withdrew more than deposited: {withdrawn} > {deposited}"))
    })
}

fn position_sum(pool: &Pool) -> Option<Liquidity> {
    pool.ledger()
        .positions()
        .try_fold(Liquidity::ZERO, |acc, (_, l)| acc.checked_add(l))
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10^15, 10^27]: 0.001 to one billion whole tokens.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000_000_000_000_000u128..=1_000_000_000_000_000_000_000_000_000u128
}

/// Reserve units per thousandth of the pool, in [10^12, 10^24].
///
/// Seeding with `unit × 1000` makes every deposit of `unit × m` an exact
/// thousandth multiple of the reserves.
fn unit_strategy() -> impl Strategy<Value = u128> {
    1_000_000_000_000u128..=1_000_000_000_000_000_000_000_000u128
}

/// Swap size as a fraction of the input reserve, in basis points.
fn fraction_strategy() -> impl Strategy<Value = u128> {
    1u128..=20_000u128
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        bps in fraction_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let swap_in = Amount::from((ra / 10_000 * bps).max(1));

        let Some(received_b) = swap(&pool, tok_a(), tok_b(), swap_in) else {
            return Ok(());
        };
        let Some(final_a) = swap(&pool, tok_b(), tok_a(), received_b) else {
            return Ok(());
        };

        prop_assert!(
            final_a <= swap_in,
            "round-trip should not gain value: final={} > original={}",
            final_a, swap_in
        );
    }

    #[test]
    fn prop_product_preservation(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        bps in fraction_strategy(),
        flips in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        let pool = make_pool(ra, rb);
        let mut k_before = pool.snapshot().product();

        for a_to_b in flips {
            let (token_in, token_out, reserve_in) = if a_to_b {
                (tok_a(), tok_b(), pool.reserve_a())
            } else {
                (tok_b(), tok_a(), pool.reserve_b())
            };
            let amount_in = share(reserve_in, bps);
            if swap(&pool, token_in, token_out, amount_in).is_none() {
                continue;
            }
            let k_after = pool.snapshot().product();
            prop_assert!(
                k_after >= k_before,
                "product should not decrease: after={:?} < before={:?}",
                k_after, k_before
            );
            k_before = k_after;
        }
    }

    #[test]
    fn prop_swap_never_drains_reserve(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        multiple in 1u128..=1_000_000u128,
    ) {
        let pool = make_pool(ra, rb);
        let amount_in = Amount::from(ra.saturating_mul(multiple));
        let Some(out) = swap(&pool, tok_a(), tok_b(), amount_in) else {
            return Ok(());
        };
        prop_assert!(out < Amount::from(rb));
        prop_assert!(!pool.reserve_b().is_zero());
    }

    #[test]
    fn prop_price_moves_against_seller(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        bps in fraction_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let Ok(before) = pool.get_price(tok_a(), tok_b()) else {
            return Ok(());
        };
        let swap_in = Amount::from((ra / 10_000 * bps).max(1));
        if swap(&pool, tok_a(), tok_b(), swap_in).is_none() {
            return Ok(());
        }
        let Ok(after) = pool.get_price(tok_a(), tok_b()) else {
            return Ok(());
        };
        prop_assert!(
            after <= before,
            "selling A should not raise its price: before={} after={}",
            before, after
        );
    }

    #[test]
    fn prop_liquidity_conservation(
        unit_a in unit_strategy(),
        unit_b in unit_strategy(),
        thousandths in 1u128..=1_000u128,
        surplus_bps in 0u128..=10_000u128,
    ) {
        let pool = make_pool(unit_a * 1_000, unit_b * 1_000);
        let deposit_a = Amount::from(unit_a * thousandths);
        let deposit_b = Amount::from(unit_b * thousandths);
        // Offer extra B: the deposit is trimmed back to the pool ratio.
        let offered_b = Amount::from(unit_b * thousandths / 10_000 * (10_000 + surplus_bps));
        let request = AddLiquidity::exact(
            tok_a(),
            tok_b(),
            deposit_a,
            offered_b.max(deposit_b),
            addr(PROVIDER),
            Deadline::NEVER,
        )
        .with_minimums(Amount::ZERO, Amount::ZERO);
        let added = pool
            .add_liquidity(addr(PROVIDER), &request)
            .map_err(|e| TestCaseError::fail(format!("deposit failed: {e}")))?;
        prop_assert_eq!(added.amount_a(), deposit_a);
        prop_assert_eq!(added.amount_b(), deposit_b);

        let burn = RemoveLiquidity::new(
            tok_a(),
            tok_b(),
            added.liquidity_minted(),
            addr(PROVIDER),
            Deadline::NEVER,
        );
        let removed = pool
            .remove_liquidity(addr(PROVIDER), &burn)
            .map_err(|e| TestCaseError::fail(format!("withdrawal failed: {e}")))?;

        let lost_a = shortfall(added.amount_a(), removed.amount_a())?;
        let lost_b = shortfall(added.amount_b(), removed.amount_b())?;
        prop_assert!(lost_a <= Amount::from(1u64), "lost {} of A", lost_a);
        prop_assert!(lost_b <= Amount::from(1u64), "lost {} of B", lost_b);
        prop_assert!(pool.liquidity_balance(addr(PROVIDER)).is_zero());
    }

    #[test]
    fn prop_sole_provider_round_trip_is_exact(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let pool = make_pool(ra, rb);
        let all = pool.liquidity_balance(addr(SEEDER));
        let burn = RemoveLiquidity::new(tok_a(), tok_b(), all, addr(SEEDER), Deadline::NEVER);
        let Ok(removed) = pool.remove_liquidity(addr(SEEDER), &burn) else {
            panic!("full withdrawal failed");
        };
        prop_assert_eq!(removed.amount_a(), Amount::from(ra));
        prop_assert_eq!(removed.amount_b(), Amount::from(rb));
        prop_assert!(pool.total_liquidity().is_zero());
    }

    #[test]
    fn prop_positions_sum_to_supply(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in proptest::collection::vec((any::<bool>(), 1u128..=5_000u128), 1..10),
    ) {
        let pool = make_pool(ra, rb);
        for (deposit, bps) in ops {
            if deposit {
                let amount_a = share(pool.reserve_a(), bps);
                let request = AddLiquidity::exact(
                    tok_a(),
                    tok_b(),
                    amount_a,
                    Amount::MAX,
                    addr(PROVIDER),
                    Deadline::NEVER,
                )
                .with_minimums(Amount::ZERO, Amount::ZERO);
                let _ = pool.add_liquidity(addr(PROVIDER), &request);
            } else {
                let held = pool.liquidity_balance(addr(PROVIDER));
                let part = Liquidity::new(held.get() / U256::from(2u8));
                let burn = RemoveLiquidity::new(tok_a(), tok_b(), part, addr(PROVIDER), Deadline::NEVER);
                let _ = pool.remove_liquidity(addr(PROVIDER), &burn);
            }
            prop_assert_eq!(position_sum(&pool), Some(pool.total_liquidity()));
            prop_assert_eq!(
                pool.tokens().balance_of(tok_a(), addr(POOL)),
                pool.reserve_a()
            );
        }
    }
}
