pub mod pack;
pub mod token;

pub use pack::*;
pub use token::*;
