//! # pulse-service
//!
//! Business logic for Pulse: the analytics engine that derives activity
//! figures from the stores, and the status classifier built on top of it.

pub mod analytics;
pub mod status;

pub use analytics::AnalyticsService;
pub use status::StatusService;
