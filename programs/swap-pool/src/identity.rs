// Pool Identity
//
// Pool and vault addresses are PDAs, so any caller can recompute them
// from the asset mints alone. The mint order is part of the seeds:
// (A, B) and (B, A) are two distinct pools.

use anchor_lang::prelude::*;

use crate::{constants::*, state::VaultSide};

pub fn derive_pool_address(mint_a: &Pubkey, mint_b: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED, mint_a.as_ref(), mint_b.as_ref()], &crate::ID)
}

pub fn derive_vault_address(pool: &Pubkey, side: VaultSide) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[side.seed(), pool.as_ref()], &crate::ID)
}
