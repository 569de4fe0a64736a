//! SQLite storage layer for the relay.
//!
//! Provides:
//! - Schema initialization (create-if-absent)
//! - A pooled store with transactional append and cursor reads

pub mod schema;
pub mod store;

pub use store::{Message, MessageStore, StoreError};
