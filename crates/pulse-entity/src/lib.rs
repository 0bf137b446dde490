//! # pulse-entity
//!
//! Domain entity models for Pulse: users, sessions, and the derived
//! activity types (status classification, calendar months).

pub mod activity;
pub mod session;
pub mod user;
