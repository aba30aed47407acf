/// Shared utilities - error types and string helpers
pub mod casing;
pub mod error;
pub mod result;

pub use result::Result;
