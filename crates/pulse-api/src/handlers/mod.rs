//! Route handlers, one module per domain.
//!
//! The reference interface passes every input as a query parameter, POST
//! routes included, so each handler declares an `Option`-field parameter
//! struct and reports missing parameters itself rather than letting the
//! extractor reject the request.

pub mod analytics;
pub mod health;
pub mod session;
pub mod status;
pub mod user;
