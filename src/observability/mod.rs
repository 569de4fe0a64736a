//! Observability setup for the relay.
//!
//! Structured logging via tracing; per-request spans are attached by the
//! router's `TraceLayer`.

pub mod tracing;
