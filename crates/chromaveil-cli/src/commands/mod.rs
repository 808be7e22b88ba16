pub mod filter;
pub mod reveal;
