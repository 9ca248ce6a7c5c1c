//! # Factify Common Library
//!
//! Shared code for the Factify services:
//! - Configuration schema and layered loading (defaults, TOML, environment)
//! - Common error type
//! - Timestamp helpers

pub mod config;
pub mod error;
pub mod time;

pub use config::Settings;
pub use error::{Error, Result};
