//! Flat-file persistence for the host list and email credentials.

pub mod credentials;
pub mod hosts;
mod write;

// Re-export commonly used items
pub use credentials::CredentialStore;
pub use hosts::HostStore;
