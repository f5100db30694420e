pub mod core;
pub mod emotion;
pub mod error;
