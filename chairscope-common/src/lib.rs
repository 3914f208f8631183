//! # chairscope Common Library
//!
//! Shared foundation for the chairscope reporting tool:
//! - Error types (`Error`, `Result`)
//! - Configuration loading (TOML with compiled defaults)
//! - Review-platform access layer (wire types, REST client, `Platform` trait)

pub mod config;
pub mod error;
pub mod platform;

pub use config::Config;
pub use error::{Error, Result};
