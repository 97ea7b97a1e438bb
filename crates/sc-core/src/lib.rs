//! # sc-core
//!
//! Core types, errors, and configuration for SupportChat RS.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Configuration error type
//! - Widget configuration (attachment capacity, file-type policy)

pub mod config;
pub mod error;

pub use config::*;
pub use error::*;
