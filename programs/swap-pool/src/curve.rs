// Constant Product Curve
//
// Pure swap pricing for x * y = k with no fee:
//   amount_out = floor(amount_in * reserve_out / (reserve_in + amount_in))
//
// All intermediate values are u128 with checked operations. Flooring
// always rounds in favor of the pool, so the product never decreases.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

use crate::{constants::*, errors::*, state::SwapDirection};

// Snapshot of both vault balances, read immediately before use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserves {
    pub a: u64,
    pub b: u64,
}

impl Reserves {
    pub fn from_vaults(vault_a: &TokenAccount, vault_b: &TokenAccount) -> Self {
        Self {
            a: vault_a.amount,
            b: vault_b.amount,
        }
    }

    // (reserve_in, reserve_out) for a direction
    pub fn oriented(&self, direction: SwapDirection) -> (u64, u64) {
        match direction {
            SwapDirection::AToB => (self.a, self.b),
            SwapDirection::BToA => (self.b, self.a),
        }
    }

    // u64 * u64 always fits in u128
    pub fn product(&self) -> u128 {
        (self.a as u128) * (self.b as u128)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    pub direction: SwapDirection,
    pub amount_in: u64,
    pub amount_out: u64,
    pub reserve_in_after: u64,
    pub reserve_out_after: u64,
}

impl SwapQuote {
    // Reserves as they will be once both transfers land
    pub fn reserves_after(&self) -> Reserves {
        match self.direction {
            SwapDirection::AToB => Reserves {
                a: self.reserve_in_after,
                b: self.reserve_out_after,
            },
            SwapDirection::BToA => Reserves {
                a: self.reserve_out_after,
                b: self.reserve_in_after,
            },
        }
    }

    pub fn check_minimum_output(&self, minimum_amount_out: u64) -> Result<()> {
        require!(
            self.amount_out >= minimum_amount_out,
            AmmError::SlippageTooHigh
        );
        Ok(())
    }
}

pub fn calculate_swap_output(amount_in: u64, reserve_in: u64, reserve_out: u64) -> Result<u64> {
    let numerator = (amount_in as u128)
        .checked_mul(reserve_out as u128)
        .ok_or(AmmError::ArithmeticOverflow)?;

    let denominator = (reserve_in as u128)
        .checked_add(amount_in as u128)
        .ok_or(AmmError::ArithmeticOverflow)?;

    let amount_out = numerator
        .checked_div(denominator)
        .ok_or(AmmError::ArithmeticOverflow)?;

    Ok(u64::try_from(amount_out).map_err(|_| AmmError::ArithmeticOverflow)?)
}

// Price a swap against a reserve snapshot without moving anything
pub fn quote(reserves: Reserves, amount_in: u64, direction: SwapDirection) -> Result<SwapQuote> {
    require!(amount_in > 0, AmmError::InvalidAmount);

    let (reserve_in, reserve_out) = reserves.oriented(direction);
    require!(reserve_in > 0, AmmError::EmptyReserve);
    require!(reserve_out > 0, AmmError::EmptyReserve);

    let amount_out = calculate_swap_output(amount_in, reserve_in, reserve_out)?;

    let reserve_in_after = reserve_in
        .checked_add(amount_in)
        .ok_or(AmmError::ArithmeticOverflow)?;
    let reserve_out_after = reserve_out
        .checked_sub(amount_out)
        .ok_or(AmmError::ArithmeticOverflow)?;

    Ok(SwapQuote {
        direction,
        amount_in,
        amount_out,
        reserve_in_after,
        reserve_out_after,
    })
}

// Lowest acceptable output for a tolerance in basis points (100 = 1%)
pub fn minimum_out_with_tolerance(expected_out: u64, tolerance_bps: u16) -> Result<u64> {
    let tolerance_bps = tolerance_bps as u64;
    require!(tolerance_bps <= BASIS_POINTS_DIVISOR, AmmError::InvalidAmount);

    let minimum = (expected_out as u128)
        .checked_mul((BASIS_POINTS_DIVISOR - tolerance_bps) as u128)
        .ok_or(AmmError::ArithmeticOverflow)?
        / BASIS_POINTS_DIVISOR as u128;

    Ok(u64::try_from(minimum).map_err(|_| AmmError::ArithmeticOverflow)?)
}
