// Add Liquidity Instruction
//
// Moves amount_a and amount_b from the depositor into the vaults.
// Any ratio is accepted and no share record is issued.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
    pub depositor: Signer<'info>,

    #[account(
        seeds = [
            POOL_SEED,
            pool.mint_a.as_ref(),
            pool.mint_b.as_ref(),
        ],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(address = pool.mint_a)]
    pub mint_a: Box<InterfaceAccount<'info, Mint>>,

    #[account(address = pool.mint_b)]
    pub mint_b: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = mint_a,
        token::authority = depositor,
        token::token_program = token_program,
    )]
    pub depositor_token_a: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint_b,
        token::authority = depositor,
        token::token_program = token_program,
    )]
    pub depositor_token_b: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [VAULT_A_SEED, pool.key().as_ref()],
        bump = pool.vault_a_bump,
        token::mint = mint_a,
        token::authority = pool,
        token::token_program = token_program,
    )]
    pub vault_a: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [VAULT_B_SEED, pool.key().as_ref()],
        bump = pool.vault_b_bump,
        token::mint = mint_b,
        token::authority = pool,
        token::token_program = token_program,
    )]
    pub vault_b: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> AddLiquidity<'info> {
    pub fn add_liquidity(&mut self, amount_a: u64, amount_b: u64) -> Result<VaultBalances> {
        require!(amount_a > 0, AmmError::InvalidAmount);
        require!(amount_b > 0, AmmError::InvalidAmount);

        let vault_a_before = self.vault_a.amount;
        let vault_b_before = self.vault_b.amount;

        // Both legs share this instruction; a failed second leg reverts the first
        transfer_to_vault(
            amount_a,
            &self.token_program.to_account_info(),
            &self.mint_a,
            &self.depositor_token_a,
            &self.vault_a,
            &self.depositor.to_account_info(),
        )?;

        transfer_to_vault(
            amount_b,
            &self.token_program.to_account_info(),
            &self.mint_b,
            &self.depositor_token_b,
            &self.vault_b,
            &self.depositor.to_account_info(),
        )?;

        self.vault_a.reload()?;
        self.vault_b.reload()?;

        check_credited(vault_a_before, self.vault_a.amount, amount_a)?;
        check_credited(vault_b_before, self.vault_b.amount, amount_b)?;

        let balances = VaultBalances {
            vault_a: self.vault_a.amount,
            vault_b: self.vault_b.amount,
        };

        emit!(LiquidityAdded {
            pool: self.pool.key(),
            depositor: self.depositor.key(),
            amount_a,
            amount_b,
            vault_a_balance: balances.vault_a,
            vault_b_balance: balances.vault_b,
        });

        msg!(
            "Deposited: {} A, {} B -> vaults {} A, {} B",
            amount_a,
            amount_b,
            balances.vault_a,
            balances.vault_b
        );

        Ok(balances)
    }
}
