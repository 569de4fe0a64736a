//! Relay: a minimal HTTP chat relay with SQLite persistence.
//!
//! Clients post messages with `POST /newmessage` and poll for new ones with
//! `GET /messages?since=<id>`. Message identifiers are issued by an in-process
//! allocator seeded from the store at startup, so ids are strictly increasing
//! in creation order across concurrent writers.
//!
//! # Modules
//!
//! - [`allocator`]: Monotonic message id allocation
//! - [`config`]: CLI and environment configuration
//! - [`observability`]: Tracing setup
//! - [`server`]: HTTP server setup and shared state
//! - [`service`]: Request handlers and router
//! - [`storage`]: SQLite persistence layer

// Lint configuration
#![warn(clippy::all)]
#![allow(
    clippy::module_name_repetitions,    // storage::store::StoreError is fine
    clippy::must_use_candidate,         // Not all functions need #[must_use]
    clippy::missing_errors_doc,         // Error docs can be verbose
    clippy::needless_raw_string_hashes  // r#""# is fine for SQL
)]

pub mod allocator;
pub mod config;
pub mod observability;
pub mod server;
pub mod service;
pub mod storage;
