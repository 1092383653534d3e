//! Error handling for Deckscan.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Detection and matching are deliberately infallible: malformed shapes
//! degrade to zero/absent fields, no-detection and no-merge are ordinary
//! negative results, and a cross-document comparison scores 0.0 instead of
//! raising. The only fallible surface is configuration.

pub mod config_error;

pub use config_error::ConfigError;
