//! Constant-product pool walkthrough.
//!
//! Seeds a pool, trades against it in both directions, shows a rejected
//! call leaving the pool untouched, and withdraws the liquidity.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=simple_swap=debug cargo run --example simple_swap
//! ```

use std::sync::Arc;

use simple_swap::config::PoolConfig;
use simple_swap::domain::{
    AddLiquidity, Address, Amount, Deadline, RemoveLiquidity, SwapExactIn, SwapPath,
};
use simple_swap::environment::{InMemoryTokenLedger, ManualClock};
use simple_swap::pools::SimpleSwapPool;
use simple_swap::traits::{Clock, LiquidityPool, SwapPool, TokenLedger};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Simple Swap (constant product, no fee) ===\n");

    // ── 1. Accounts and tokens ──────────────────────────────────────────
    let usdc = Address::from_low_u64(0xA);
    let weth = Address::from_low_u64(0xB);
    let pool_account = Address::from_low_u64(0x100);
    let alice = Address::from_low_u64(1);
    let bob = Address::from_low_u64(2);

    let tokens = Arc::new(InMemoryTokenLedger::with_tokens([usdc, weth]));
    for (who, units) in [(alice, 1_000), (bob, 50)] {
        for token in [usdc, weth] {
            tokens.mint_whole(token, who, units)?;
            tokens.approve(token, who, pool_account, Amount::MAX);
        }
    }

    // ── 2. Pool ─────────────────────────────────────────────────────────
    let start = 1_700_000_000;
    let clock = Arc::new(ManualClock::new(start));
    let config = PoolConfig::for_tokens(usdc, weth, pool_account)?;
    let pool = SimpleSwapPool::new(config, Arc::clone(&tokens), Arc::clone(&clock))?;
    let deadline = Deadline::after(start, 300);

    // ── 3. Seed liquidity ───────────────────────────────────────────────
    let seed = AddLiquidity::exact(
        usdc,
        weth,
        Amount::from_whole(100),
        Amount::from_whole(200),
        alice,
        deadline,
    );
    let added = pool.add_liquidity(alice, &seed)?;
    println!("Seeded:   {added}");
    println!("Price:    1 USDC = {} WETH", pool.get_price(usdc, weth)?);
    println!("Snapshot: {:?}\n", pool.snapshot());

    // ── 4. Trade both ways ──────────────────────────────────────────────
    let quoted = pool.quote_amount_out(Amount::from_whole(10), usdc, weth)?;
    let buy = SwapExactIn::new(
        Amount::from_whole(10),
        quoted,
        SwapPath::new(usdc, weth),
        bob,
        deadline,
    );
    let swapped = pool.swap_exact_tokens_for_tokens(bob, &buy)?;
    println!("Swap 1:   {swapped}");

    let sell = SwapExactIn::new(
        swapped.amount_out(),
        Amount::ZERO,
        SwapPath::new(weth, usdc),
        bob,
        deadline,
    );
    let back = pool.swap_exact_tokens_for_tokens(bob, &sell)?;
    println!("Swap 2:   {back}");
    println!(
        "Round trip cost Bob {} USDC",
        Amount::from_whole(10)
            .checked_sub(&back.amount_out())
            .unwrap_or_default()
    );
    println!("Price:    1 USDC = {} WETH\n", pool.get_price(usdc, weth)?);

    // ── 5. A rejected call changes nothing ──────────────────────────────
    clock.advance(600);
    let before = pool.snapshot();
    match pool.swap_exact_tokens_for_tokens(bob, &buy) {
        Ok(receipt) => println!("Unexpected success: {receipt}"),
        Err(e) => println!("Late swap rejected: {e}"),
    }
    assert_eq!(pool.snapshot(), before);

    // ── 6. Withdraw ─────────────────────────────────────────────────────
    let held = pool.liquidity_balance(alice);
    let burn = RemoveLiquidity::new(usdc, weth, held, alice, Deadline::after(clock.now(), 60));
    let removed = pool.remove_liquidity(alice, &burn)?;
    println!("\nWithdrew: {removed}");
    println!("Snapshot: {:?}", pool.snapshot());

    println!("\nEvents:");
    for event in pool.events() {
        println!("  {event}");
    }
    Ok(())
}
