//! Observability for pagecheck.
//! `tracing` crate with `EnvFilter`, per-module log levels.
//!
//! Structured fields used across crates: `audit_id`, `artifact_record_count`,
//! `audit_evaluation_time_us`, `catalog_messages_loaded`.

pub mod setup;

pub use setup::init_tracing;
