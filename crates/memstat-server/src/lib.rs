//! memstat server library entry.
//!
//! Wires config, application state, and the update handler into an axum
//! router. Consumed by the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod app_state;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
