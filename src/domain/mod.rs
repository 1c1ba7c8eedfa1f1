//! Core domain types
//!
//! Error hierarchy and the crate-wide `Result` alias.

pub mod errors;

pub use errors::CloakError;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, CloakError>;
