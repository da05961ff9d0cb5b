//! # Error Handling
//!
//! This module defines the centralized error type for `manifest-resolver`.
//! It uses `thiserror` to derive a single `Error` enum covering every failure
//! the library can raise, together with a crate-wide `Result<T>` alias.
//!
//! Only two kinds of failure are structural in the resolution engine itself:
//!
//! - **Precondition violations**, raised at the very start of a resolution
//!   pass when the project lacks the packaging toolchain.
//! - **Archive patch failures**, raised when the external archiver exits with
//!   a non-zero status while patching an already built archive.
//!
//! Everything else the resolver decides (blank suppression, unresolved
//! placeholders, a missing extension) is an outcome rather than an error and
//! never shows up here. The remaining variants cover reading the project
//! description and property files.

use thiserror::Error;

/// Main error type for manifest-resolver operations
#[derive(Error, Debug)]
pub enum Error {
    /// The project description could not be understood.
    ///
    /// Includes an optional hint about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A prerequisite of the resolution pass is missing.
    #[error("Precondition violated: {requirement} - {message}")]
    PreconditionViolation { requirement: String, message: String },

    /// The archiver returned a non-zero exit status while patching an archive.
    ///
    /// `exit_code` is `None` when the process was terminated by a signal.
    #[error("Patching archive '{archive}' failed with exit code: {}", exit_code.map(|c| c.to_string()).unwrap_or_else(|| "none (terminated by signal)".to_string()))]
    ArchivePatch {
        archive: String,
        exit_code: Option<i32>,
    },

    /// The archiver executable could not be started at all.
    #[error("Failed to run archiver '{command}': {message}")]
    ArchiverLaunch { command: String, message: String },

    /// A `KEY=VALUE` definition could not be split.
    #[error("Invalid definition '{definition}': expected KEY=VALUE")]
    InvalidDefinition { definition: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A properties file parsing error, wrapped from `ini::ParseError`.
    #[error("Properties parsing error: {0}")]
    Ini(#[from] ini::ParseError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
