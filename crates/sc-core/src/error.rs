//! Core error types for SupportChat RS
//!
//! The intake core resolves nearly everything locally — skipped files and
//! capacity notices are reported, not thrown — so the only fault that can
//! surface from this crate is a bad configuration value.

use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
