pub mod error;
pub mod prediction;
