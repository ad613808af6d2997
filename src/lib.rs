//! # textio - Scoped Text File Access
//!
//! A small library for reading, writing, appending and copying text files where
//! every operation acquires its file, does its work and releases it again on
//! every exit path, plus a console menu that exercises each operation.
//!
//! ## Architecture
//!
//! - [`error`] - Error taxonomy and the crate-wide `Result`
//! - [`file_handler`] - Access modes, file handles and whole-file operations
//! - [`shell`] - Numbered-menu console driving [`file_handler::FileAccess`]
//! - [`config`] - Command-line configuration for the console

// Core modules
pub mod error;
pub mod file_handler;

// Console front end
pub mod config;
pub mod shell;

// Re-export commonly used types for convenience
pub use error::{FileIoError, IoErrorKind, Result};

// Public API surface for external usage
pub use config::ShellConfig;
pub use file_handler::{AccessMode, FileAccess, FileHandle};
pub use shell::Shell;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
