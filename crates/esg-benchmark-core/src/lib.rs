pub mod analysis;
pub mod benchmark;
pub mod catalog;
pub mod company;
pub mod error;
pub mod scoring;
pub mod stats;
pub mod types;

pub use error::EsgBenchError;
pub use types::*;

/// Standard result type for all benchmark operations
pub type EsgBenchResult<T> = Result<T, EsgBenchError>;
