//! Error types for modreport operations.
//!
//! This module defines [`ModReportError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ModReportError` for failures the user must act on (bad config,
//!   missing docroot)
//! - Package metadata lookups never surface here: they fail with
//!   [`MetadataError`](crate::composer::MetadataError) and degrade to
//!   "no data" inside the report layer
//! - Use `anyhow::Error` (via `ModReportError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for modreport operations.
#[derive(Debug, Error)]
pub enum ModReportError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// No Drupal docroot could be located.
    #[error("Drupal docroot not found: {path}")]
    DocrootNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for modreport operations.
pub type Result<T> = std::result::Result<T, ModReportError>;
