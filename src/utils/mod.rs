pub mod constants;
pub mod money;

pub use constants::*;
pub use money::parse_amount;
