// Swap Pool Program
//
// Two-asset constant product pool (x * y = k) without fees or LP shares.
//
// Instructions:
// - initialize_pool: Create the pool record and its two vaults for an asset pair
// - add_liquidity: Move both assets from a depositor into the vaults
// - swap: Exchange one asset for the other with a minimum output bound

use anchor_lang::prelude::*;

pub mod constants;
pub mod curve;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod identity;
pub mod instructions;
pub mod state;

use instructions::*;
use state::*;

declare_id!("AyxQR32gUiJKt2L87tmHuwZvC9EwWq3fwjsvbUMvuX1U");

#[program]
pub mod swap_pool {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<Pubkey> {
        ctx.accounts.initialize_pool(&ctx.bumps)
    }

    pub fn add_liquidity(
        ctx: Context<AddLiquidity>,
        amount_a: u64,
        amount_b: u64,
    ) -> Result<VaultBalances> {
        ctx.accounts.add_liquidity(amount_a, amount_b)
    }

    pub fn swap(
        ctx: Context<Swap>,
        amount_in: u64,
        minimum_amount_out: u64,
        direction: SwapDirection,
    ) -> Result<u64> {
        ctx.accounts.swap(amount_in, minimum_amount_out, direction)
    }
}
