// Instructions Module
//
// Exports all instruction handlers for the swap pool program

pub mod add_liquidity;
pub mod initialize_pool;
pub mod swap;

pub use add_liquidity::*;
pub use initialize_pool::*;
pub use swap::*;
