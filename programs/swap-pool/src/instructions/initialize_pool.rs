// Initialize Pool Instruction
//
// Creates the pool record and both vaults for an ordered asset pair.
// Accounts use init_if_needed so that a second call reaches the handler
// and fails with AlreadyInitialized instead of a system program error.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    pub mint_a: Box<InterfaceAccount<'info, Mint>>,
    pub mint_b: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Pool::INIT_SPACE,
        seeds = [
            POOL_SEED,
            mint_a.key().as_ref(),
            mint_b.key().as_ref(),
        ],
        bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [VAULT_A_SEED, pool.key().as_ref()],
        bump,
        token::mint = mint_a,
        token::authority = pool,
        token::token_program = token_program,
    )]
    pub vault_a: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = authority,
        seeds = [VAULT_B_SEED, pool.key().as_ref()],
        bump,
        token::mint = mint_b,
        token::authority = pool,
        token::token_program = token_program,
    )]
    pub vault_b: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializePool<'info> {
    pub fn initialize_pool(&mut self, bumps: &InitializePoolBumps) -> Result<Pubkey> {
        require_keys_neq!(
            self.mint_a.key(),
            self.mint_b.key(),
            AmmError::InvalidAssetPair
        );

        // Existing record stays untouched
        require!(!self.pool.is_initialized(), AmmError::AlreadyInitialized);

        self.pool.set_inner(Pool {
            authority: self.authority.key(),
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            vault_a: self.vault_a.key(),
            vault_b: self.vault_b.key(),
            bump: bumps.pool,
            vault_a_bump: bumps.vault_a,
            vault_b_bump: bumps.vault_b,
        });

        emit!(PoolInitialized {
            pool: self.pool.key(),
            authority: self.authority.key(),
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            vault_a: self.vault_a.key(),
            vault_b: self.vault_b.key(),
        });

        msg!(
            "Pool initialized: {} / {}",
            self.mint_a.key(),
            self.mint_b.key()
        );

        Ok(self.pool.key())
    }
}
