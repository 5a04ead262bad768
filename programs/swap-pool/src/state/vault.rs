// Vault Types
//
// A vault is a token account at a PDA whose token authority is the pool.
// Its balance lives in the token program; nothing here caches it.

use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

use crate::constants::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VaultSide {
    A,
    B,
}

impl VaultSide {
    pub fn seed(self) -> &'static [u8] {
        match self {
            VaultSide::A => VAULT_A_SEED,
            VaultSide::B => VAULT_B_SEED,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            VaultSide::A => VaultSide::B,
            VaultSide::B => VaultSide::A,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    AToB,
    BToA,
}

impl SwapDirection {
    // Side that receives the trader's input
    pub fn input_side(self) -> VaultSide {
        match self {
            SwapDirection::AToB => VaultSide::A,
            SwapDirection::BToA => VaultSide::B,
        }
    }

    // Side that pays out to the trader
    pub fn output_side(self) -> VaultSide {
        self.input_side().opposite()
    }
}

// Vault balances after a deposit, returned to the caller
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultBalances {
    pub vault_a: u64,
    pub vault_b: u64,
}
