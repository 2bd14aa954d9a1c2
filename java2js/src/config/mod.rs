//! Configuration for the translator
//!
//! Limits are compile-time constants; everything a user may tune lives in
//! [`runtime`] and is read from `JAVA2JS_*` environment variables or a TOML file.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{ConfigError, RuntimeConfig};
