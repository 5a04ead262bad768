// Swap Pool Program Constants

pub const POOL_SEED: &[u8] = b"pool";
pub const VAULT_A_SEED: &[u8] = b"vault_a";
pub const VAULT_B_SEED: &[u8] = b"vault_b";
pub const ANCHOR_DISCRIMINATOR: usize = 8;
pub const BASIS_POINTS_DIVISOR: u64 = 10_000;
