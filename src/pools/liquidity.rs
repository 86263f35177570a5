//! Deposit and withdrawal arithmetic against a [`PoolLedger`].
//!
//! These functions mutate a (staged) ledger and report what token
//! movements the caller must perform; they never touch the token ledger
//! themselves.  All amounts are in pool `(token_a, token_b)` order.

use tracing::debug;

use super::PoolLedger;
use crate::domain::{Address, Amount, Liquidity, ReserveDelta};
use crate::error::AmmError;
use crate::math::{burn_amounts, initial_liquidity, proportional_liquidity, quote};

/// Amounts taken by a deposit and the units it minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Deposit {
    pub(crate) amount_a: Amount,
    pub(crate) amount_b: Amount,
    pub(crate) liquidity: Liquidity,
}

/// Amounts released by a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Withdrawal {
    pub(crate) amount_a: Amount,
    pub(crate) amount_b: Amount,
}

/// Picks the deposit amounts that keep the reserve ratio.
///
/// Tries the full `desired_a` first and falls back to the full `desired_b`.
fn optimal_amounts(
    ledger: &PoolLedger,
    desired: (Amount, Amount),
    min: (Amount, Amount),
) -> Result<(Amount, Amount), AmmError> {
    let (desired_a, desired_b) = desired;
    let (min_a, min_b) = min;
    let (reserve_a, reserve_b) = (ledger.reserve_a(), ledger.reserve_b());

    let optimal_b = quote(desired_a, reserve_a, reserve_b)?;
    if optimal_b <= desired_b {
        if optimal_b < min_b {
            return Err(AmmError::InsufficientAmountB);
        }
        return Ok((desired_a, optimal_b));
    }

    let optimal_a = quote(desired_b, reserve_b, reserve_a)?;
    // optimal_b > desired_b implies optimal_a <= desired_a, up to rounding.
    if optimal_a < min_a {
        return Err(AmmError::InsufficientAmountA);
    }
    Ok((optimal_a, desired_b))
}

/// Stages a deposit: updates reserves and mints units to `to`.
///
/// The first deposit takes `desired` as given and mints
/// `integer_sqrt(a × b)`; later ones are reduced to the reserve ratio and
/// mint proportionally.
pub(crate) fn add(
    ledger: &mut PoolLedger,
    desired: (Amount, Amount),
    min: (Amount, Amount),
    to: Address,
) -> Result<Deposit, AmmError> {
    let deposit = if ledger.is_empty() {
        let (amount_a, amount_b) = desired;
        let liquidity = initial_liquidity(amount_a, amount_b)?;
        if liquidity.is_zero() {
            return Err(AmmError::InsufficientLiquidityMinted);
        }
        ledger.set_reserves(amount_a, amount_b);
        Deposit {
            amount_a,
            amount_b,
            liquidity,
        }
    } else {
        let (amount_a, amount_b) = optimal_amounts(ledger, desired, min)?;
        let liquidity = proportional_liquidity(
            amount_a,
            amount_b,
            ledger.reserve_a(),
            ledger.reserve_b(),
            ledger.total_liquidity(),
        )?;
        if liquidity.is_zero() {
            return Err(AmmError::InsufficientLiquidityMinted);
        }
        ledger.adjust_reserves(
            ReserveDelta::Increase(amount_a),
            ReserveDelta::Increase(amount_b),
        )?;
        Deposit {
            amount_a,
            amount_b,
            liquidity,
        }
    };

    ledger.mint(to, deposit.liquidity)?;
    debug!(
        amount_a = %deposit.amount_a,
        amount_b = %deposit.amount_b,
        minted = %deposit.liquidity,
        %to,
        "staged deposit"
    );
    Ok(deposit)
}

/// Stages a withdrawal: burns `liquidity` from `owner` and lowers reserves.
pub(crate) fn remove(
    ledger: &mut PoolLedger,
    owner: Address,
    liquidity: Liquidity,
    min: (Amount, Amount),
) -> Result<Withdrawal, AmmError> {
    if ledger.liquidity_of(&owner) < liquidity || ledger.is_empty() {
        return Err(AmmError::InsufficientLiquidity);
    }

    // Floored shares: a small burn may release nothing of one token.
    let (amount_a, amount_b) = burn_amounts(
        liquidity,
        ledger.reserve_a(),
        ledger.reserve_b(),
        ledger.total_liquidity(),
    )?;
    let (min_a, min_b) = min;
    if amount_a < min_a || amount_b < min_b {
        return Err(AmmError::InsufficientOutputAmount);
    }

    ledger.burn(owner, liquidity)?;
    ledger.adjust_reserves(
        ReserveDelta::Decrease(amount_a),
        ReserveDelta::Decrease(amount_b),
    )?;
    debug!(%amount_a, %amount_b, burned = %liquidity, %owner, "staged withdrawal");
    Ok(Withdrawal { amount_a, amount_b })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::TokenPair;

    fn addr(v: u64) -> Address {
        Address::from_low_u64(v)
    }

    fn amt(v: u64) -> Amount {
        Amount::from(v)
    }

    fn empty() -> PoolLedger {
        let Ok(pair) = TokenPair::new(addr(1), addr(2)) else {
            panic!("valid pair");
        };
        PoolLedger::new(pair)
    }

    /// 1_000 / 1_000 reserves with 7_853 units held by owner 10.
    fn seeded() -> PoolLedger {
        let mut l = empty();
        let Ok(_) = add(&mut l, (amt(1_000), amt(1_000)), (amt(0), amt(0)), addr(10)) else {
            panic!("seed failed");
        };
        l
    }

    #[test]
    fn first_deposit_uses_desired_amounts() {
        let mut l = empty();
        let Ok(d) = add(&mut l, (amt(1_000), amt(1_000)), (amt(1_000), amt(1_000)), addr(10))
        else {
            panic!("expected Ok");
        };
        assert_eq!((d.amount_a, d.amount_b), (amt(1_000), amt(1_000)));
        assert_eq!(d.liquidity, Liquidity::from(7_853u64));
        assert_eq!((l.reserve_a(), l.reserve_b()), (amt(1_000), amt(1_000)));
        assert_eq!(l.liquidity_of(&addr(10)), l.total_liquidity());
    }

    #[test]
    fn first_deposit_one_sided_mints_nothing() {
        let mut l = empty();
        assert_eq!(
            add(&mut l, (amt(1_000), Amount::ZERO), (amt(0), amt(0)), addr(10)),
            Err(AmmError::InsufficientLiquidityMinted)
        );
    }

    #[test]
    fn matching_ratio_mints_total() {
        let mut l = seeded();
        let Ok(d) = add(&mut l, (amt(1_000), amt(1_000)), (amt(0), amt(0)), addr(11)) else {
            panic!("expected Ok");
        };
        assert_eq!(d.liquidity, Liquidity::from(7_853u64));
        assert_eq!(l.total_liquidity(), Liquidity::from(15_706u64));
    }

    #[test]
    fn excess_b_is_trimmed() {
        let mut l = seeded();
        let Ok(d) = add(&mut l, (amt(100), amt(500)), (amt(0), amt(0)), addr(11)) else {
            panic!("expected Ok");
        };
        assert_eq!((d.amount_a, d.amount_b), (amt(100), amt(100)));
    }

    #[test]
    fn excess_a_is_trimmed() {
        let mut l = seeded();
        let Ok(d) = add(&mut l, (amt(500), amt(100)), (amt(0), amt(0)), addr(11)) else {
            panic!("expected Ok");
        };
        assert_eq!((d.amount_a, d.amount_b), (amt(100), amt(100)));
    }

    #[test]
    fn minimum_b_enforced() {
        let mut l = seeded();
        let before = l.clone();
        assert_eq!(
            add(&mut l, (amt(100), amt(500)), (amt(0), amt(150)), addr(11)),
            Err(AmmError::InsufficientAmountB)
        );
        assert_eq!(l, before);
    }

    #[test]
    fn minimum_a_enforced() {
        let mut l = seeded();
        assert_eq!(
            add(&mut l, (amt(500), amt(100)), (amt(150), amt(0)), addr(11)),
            Err(AmmError::InsufficientAmountA)
        );
    }

    #[test]
    fn dust_deposit_mints_nothing() {
        let mut l = seeded();
        // quote(0) = 0 on both sides.
        assert_eq!(
            add(&mut l, (Amount::ZERO, amt(10)), (amt(0), amt(0)), addr(11)),
            Err(AmmError::InsufficientLiquidityMinted)
        );
    }

    #[test]
    fn full_removal_empties_pool() {
        let mut l = seeded();
        let all = l.liquidity_of(&addr(10));
        let Ok(w) = remove(&mut l, addr(10), all, (amt(0), amt(0))) else {
            panic!("expected Ok");
        };
        assert_eq!((w.amount_a, w.amount_b), (amt(1_000), amt(1_000)));
        assert!(l.is_empty());
        assert_eq!((l.reserve_a(), l.reserve_b()), (Amount::ZERO, Amount::ZERO));
        assert_eq!(l.position_count(), 0);
    }

    #[test]
    fn partial_removal_is_floored() {
        let mut l = seeded();
        let Ok(w) = remove(&mut l, addr(10), Liquidity::from(1_000u64), (amt(0), amt(0))) else {
            panic!("expected Ok");
        };
        // 1_000 × 1_000 / 7_853 = 127.3
        assert_eq!((w.amount_a, w.amount_b), (amt(127), amt(127)));
        assert_eq!(l.reserve_a(), amt(873));
    }

    #[test]
    fn removal_beyond_position() {
        let mut l = seeded();
        assert_eq!(
            remove(&mut l, addr(11), Liquidity::from(1u64), (amt(0), amt(0))),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn removal_from_empty_pool() {
        let mut l = empty();
        assert_eq!(
            remove(&mut l, addr(10), Liquidity::ZERO, (amt(0), amt(0))),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn tiny_removal_releases_floored_shares() {
        let mut l = seeded();
        // 1 × 1_000 / 7_853 = 0 of each token, the unit is still burned.
        let Ok(w) = remove(&mut l, addr(10), Liquidity::from(1u64), (amt(0), amt(0))) else {
            panic!("expected Ok");
        };
        assert_eq!((w.amount_a, w.amount_b), (Amount::ZERO, Amount::ZERO));
        assert_eq!(l.total_liquidity(), Liquidity::from(7_852u64));
        assert_eq!((l.reserve_a(), l.reserve_b()), (amt(1_000), amt(1_000)));
    }

    #[test]
    fn round_trip_with_one_sided_zero_payout() {
        // 4 / 9 seeds 6 units; 1 A is matched by 2 B and mints 1 unit.
        let mut l = empty();
        let Ok(_) = add(&mut l, (amt(4), amt(9)), (amt(0), amt(0)), addr(10)) else {
            panic!("seed failed");
        };
        assert_eq!(l.total_liquidity(), Liquidity::from(6u64));
        let Ok(d) = add(&mut l, (amt(1), amt(3)), (amt(0), amt(0)), addr(11)) else {
            panic!("deposit failed");
        };
        assert_eq!((d.amount_a, d.amount_b, d.liquidity), (amt(1), amt(2), Liquidity::from(1u64)));

        // 1 × 5 / 7 = 0 and 1 × 11 / 7 = 1: within one unit of (1, 2).
        let Ok(w) = remove(&mut l, addr(11), d.liquidity, (amt(0), amt(0))) else {
            panic!("withdrawal failed");
        };
        assert_eq!((w.amount_a, w.amount_b), (amt(0), amt(1)));
        assert_eq!(l.liquidity_of(&addr(11)), Liquidity::ZERO);
        assert_eq!((l.reserve_a(), l.reserve_b()), (amt(5), amt(10)));
    }

    #[test]
    fn removal_minimum_enforced() {
        let mut l = seeded();
        let before = l.clone();
        let all = l.liquidity_of(&addr(10));
        assert_eq!(
            remove(&mut l, addr(10), all, (amt(1_001), amt(0))),
            Err(AmmError::InsufficientOutputAmount)
        );
        assert_eq!(l, before);
    }
}
