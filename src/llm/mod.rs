pub mod interface;
pub mod openai_compatible;

pub use interface::*;
pub use openai_compatible::*;
