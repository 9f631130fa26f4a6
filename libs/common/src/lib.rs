//! Common library for the photoshare application
//!
//! Shared infrastructure for the photoshare services: PostgreSQL pooling
//! and migrations, the Redis session cache, HTTP listener settings, and
//! the store error types.

pub mod cache;
pub mod database;
pub mod error;
pub mod settings;
