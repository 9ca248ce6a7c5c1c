//! Utility modules

pub mod text;

pub use text::{excerpt, truncate_chars};
