//! Shared domain types and errors for the remat backend.

pub mod error;
pub mod types;
