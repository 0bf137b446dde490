//! # pulse-store
//!
//! Process-wide in-memory state for Pulse: the user registry and the
//! per-user session lists. Both stores are explicit objects constructed
//! once at startup and shared behind `Arc`; `DashMap`'s per-entry locking
//! guards concurrent read-modify-write sequences.
//!
//! Nothing here is ever persisted or evicted: lifetime is the life of
//! the running process.

pub mod registry;
pub mod sessions;

pub use registry::UserRegistry;
pub use sessions::SessionStore;
