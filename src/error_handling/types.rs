//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! categories used to tally probe transport failures.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Fatal configuration errors. These terminate the process.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The user's home directory could not be determined.
    #[error("User is not configured properly. Unable to retrieve home directory")]
    HomeDirectoryUnavailable,

    /// The configuration directory could not be created.
    #[error("Unable to create configuration directory {path}: {source}")]
    CreateDirectory {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Errors writing the host list or credentials.
///
/// Reads never produce this error: a missing or malformed file is an empty
/// collection.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Serialization to JSON failed.
    #[error("Unable to marshal json: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the file failed.
    #[error("Unable to write file {path}: {source}")]
    Write {
        /// Target file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Errors sending the alert email.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// A configured address is not a valid mailbox.
    #[error("Invalid email address '{address}': {source}")]
    Address {
        /// Offending address
        address: String,
        /// Parse error
        source: lettre::address::AddressError,
    },

    /// The message could not be assembled.
    #[error("Unable to build email: {0}")]
    Message(#[from] lettre::error::Error),

    /// The SMTP transport failed (connection, TLS, authentication, rejection).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Categories of transport-level probe failures.
///
/// A probe that receives any HTTP response is never a transport failure, even
/// when the status is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Display)]
pub enum ProbeErrorKind {
    /// The request timed out
    #[strum(to_string = "Timeout")]
    Timeout,
    /// DNS failure, refused connection or TLS handshake failure
    #[strum(to_string = "Connect error")]
    Connect,
    /// Redirect loop or too many redirects
    #[strum(to_string = "Redirect error")]
    Redirect,
    /// The endpoint is not a usable URL
    #[strum(to_string = "Invalid request")]
    Builder,
    /// The request failed after connecting
    #[strum(to_string = "Request error")]
    Request,
    /// The probe task did not complete (panicked or was cancelled)
    #[strum(to_string = "Task failure")]
    Task,
    /// Anything else
    #[strum(to_string = "Other error")]
    Other,
}
