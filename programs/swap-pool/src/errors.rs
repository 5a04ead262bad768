use anchor_lang::prelude::*;

// Declaration order fixes the numeric codes (6000 + index).
// Clients match on SlippageTooHigh = 6000 to retry with a looser minimum.
#[error_code]
pub enum AmmError {
    #[msg("Slippage tolerance exceeded: output amount is below minimum required")]
    SlippageTooHigh,

    #[msg("Asset mints must be different - cannot create pool with same asset")]
    InvalidAssetPair,

    #[msg("Pool for this asset pair is already initialized")]
    AlreadyInitialized,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Insufficient funds in source token account")]
    InsufficientFunds,

    #[msg("Pool reserve is empty - price is undefined")]
    EmptyReserve,

    #[msg("Arithmetic overflow occurred")]
    ArithmeticOverflow,

    #[msg("Constant product decreased across swap")]
    InvariantViolated,

    #[msg("Token program moved a different amount than requested")]
    TransferAmountMismatch,
}
