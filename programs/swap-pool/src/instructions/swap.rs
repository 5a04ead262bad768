// Swap Instruction
//
// Swaps one pool asset for the other using the constant product formula.
// Reserves are read from the vault accounts loaded for this instruction.
// The debit and the credit share one instruction, so either both land or
// neither does. Both vaults and the trader's output account must end exactly
// where the quote says they will.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::*,
    curve::{self, Reserves},
    errors::*,
    events::*,
    helpers::*,
    state::*,
};

#[derive(Accounts)]
pub struct Swap<'info> {
    pub trader: Signer<'info>,

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
        token::authority = trader,
        token::token_program = token_program,
    )]
    pub trader_token_a: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint_b,
        token::authority = trader,
        token::token_program = token_program,
    )]
    pub trader_token_b: Box<InterfaceAccount<'info, TokenAccount>>,

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

impl<'info> Swap<'info> {
    pub fn swap(
        &mut self,
        amount_in: u64,
        minimum_amount_out: u64,
        direction: SwapDirection,
    ) -> Result<u64> {
        let reserves_before = Reserves::from_vaults(&self.vault_a, &self.vault_b);

        let quote = curve::quote(reserves_before, amount_in, direction)?;
        quote.check_minimum_output(minimum_amount_out)?;

        let input = direction.input_side();
        let output = direction.output_side();
        let trader_out_before = self.trader_account(output).amount;

        transfer_to_vault(
            quote.amount_in,
            &self.token_program.to_account_info(),
            self.mint(input),
            self.trader_account(input),
            self.vault(input),
            &self.trader.to_account_info(),
        )?;

        let pool_seeds = self.pool.signer_seeds();
        transfer_from_vault(
            quote.amount_out,
            &self.token_program.to_account_info(),
            self.mint(output),
            self.vault(output),
            self.trader_account(output),
            &self.pool.to_account_info(),
            &pool_seeds,
        )?;

        self.vault_a.reload()?;
        self.vault_b.reload()?;
        match output {
            VaultSide::A => self.trader_token_a.reload()?,
            VaultSide::B => self.trader_token_b.reload()?,
        }

        let reserves_after = Reserves::from_vaults(&self.vault_a, &self.vault_b);
        require!(
            reserves_after.product() >= reserves_before.product(),
            AmmError::InvariantViolated
        );
        require!(
            reserves_after == quote.reserves_after(),
            AmmError::TransferAmountMismatch
        );
        check_credited(
            trader_out_before,
            self.trader_account(output).amount,
            quote.amount_out,
        )?;

        emit!(Swapped {
            pool: self.pool.key(),
            trader: self.trader.key(),
            direction,
            amount_in: quote.amount_in,
            amount_out: quote.amount_out,
        });

        msg!(
            "Swapped {} {:?} -> {} {:?}",
            quote.amount_in,
            input,
            quote.amount_out,
            output
        );

        Ok(quote.amount_out)
    }

    fn mint(&self, side: VaultSide) -> &InterfaceAccount<'info, Mint> {
        match side {
            VaultSide::A => &self.mint_a,
            VaultSide::B => &self.mint_b,
        }
    }

    fn vault(&self, side: VaultSide) -> &InterfaceAccount<'info, TokenAccount> {
        match side {
            VaultSide::A => &self.vault_a,
            VaultSide::B => &self.vault_b,
        }
    }

    fn trader_account(&self, side: VaultSide) -> &InterfaceAccount<'info, TokenAccount> {
        match side {
            VaultSide::A => &self.trader_token_a,
            VaultSide::B => &self.trader_token_b,
        }
    }
}
