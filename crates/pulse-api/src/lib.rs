//! # pulse-api
//!
//! HTTP API layer for Pulse built on Axum: route definitions, query
//! parameter handling, the error-to-response mapping, and shared
//! application state.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
