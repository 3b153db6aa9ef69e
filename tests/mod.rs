mod common;
pub mod macros;
pub mod stack;
