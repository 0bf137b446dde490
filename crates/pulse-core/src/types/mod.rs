//! Shared value types used across Pulse crates.

pub mod id;

pub use id::UserId;
