pub mod pool;
pub mod vault;

pub use pool::*;
pub use vault::*;
