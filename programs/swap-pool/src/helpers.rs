// Ledger Helpers
//
// The token program is the ledger. Every balance change the pool makes
// goes through one of these two checked transfers.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, Mint, TokenAccount, TransferChecked};

use crate::errors::*;

// Debit a user-owned account into a vault; the user signs the transaction
pub fn transfer_to_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    from: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    require!(from.amount >= amount, AmmError::InsufficientFunds);

    transfer_checked(
        CpiContext::new(
            token_program.clone(),
            TransferChecked {
                from: from.to_account_info(),
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: authority.clone(),
            },
        ),
        amount,
        mint.decimals,
    )
}

// Credit a user-owned account from a vault; the pool PDA signs
pub fn transfer_from_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    from: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    transfer_checked(
        CpiContext::new_with_signer(
            token_program.clone(),
            TransferChecked {
                from: from.to_account_info(),
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
        mint.decimals,
    )
}

// Balance growth of an account across a transfer must equal the amount sent.
// Token-2022 transfer fees are withheld on the destination and fail here.
pub fn check_credited(before: u64, after: u64, amount: u64) -> Result<()> {
    let credited = after
        .checked_sub(before)
        .ok_or(AmmError::TransferAmountMismatch)?;
    require!(credited == amount, AmmError::TransferAmountMismatch);
    Ok(())
}
