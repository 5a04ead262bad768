// Pool State

use anchor_lang::prelude::*;

use crate::constants::*;

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub authority: Pubkey,    // Signer that created the pool
    pub mint_a: Pubkey,       // Asset A
    pub mint_b: Pubkey,       // Asset B
    pub vault_a: Pubkey,      // Custody for asset A
    pub vault_b: Pubkey,      // Custody for asset B
    pub bump: u8,             // PDA bump for pool
    pub vault_a_bump: u8,     // PDA bump for vault A
    pub vault_b_bump: u8,     // PDA bump for vault B
}

impl Pool {
    // A freshly allocated account is zeroed, so the authority is the default key
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    // Seeds for signing vault transfers as the pool PDA
    pub fn signer_seeds(&self) -> [&[u8]; 4] {
        [
            POOL_SEED,
            self.mint_a.as_ref(),
            self.mint_b.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }
}
