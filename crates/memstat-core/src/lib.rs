//! memstat core: metric update parsing, the in-memory store, and error types.
//!
//! This crate defines the update contract and the concurrent aggregation
//! semantics shared by the HTTP server and its tests. It carries no transport
//! or runtime dependencies.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here; every fallible path
//! surfaces as `MemstatError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod store;
pub mod update;
mod value;

pub use error::{ClientCode, MemstatError, Result};
pub use store::MemStorage;
pub use update::{MetricKind, MetricUpdate};
