pub mod filter;
pub mod stats;
