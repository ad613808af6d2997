//! Error types and handling infrastructure for textio.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! the library error type. The binary layers `anyhow` on top for context.
//!
//! ## Design Principles
//!
//! - **Small taxonomy**: every error classifies into one [`IoErrorKind`]
//! - **Context preservation**: file errors carry the path they happened on
//! - **Nothing fatal**: every operation returns an error, callers decide what to do

use crate::file_handler::AccessMode;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of failures surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IoErrorKind {
    NotFound,
    PermissionDenied,
    AlreadyExists,
    DiskFull,
    Other,
}

impl IoErrorKind {
    /// Classify an OS-level error kind.
    pub fn from_io(kind: std::io::ErrorKind) -> Self {
        match kind {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists,
            std::io::ErrorKind::StorageFull => Self::DiskFull,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for IoErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "not found",
            Self::PermissionDenied => "permission denied",
            Self::AlreadyExists => "already exists",
            Self::DiskFull => "disk full",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// The main error type for textio operations.
#[derive(Error, Debug)]
pub enum FileIoError {
    /// Underlying OS failure (missing file, permission, disk full, ...)
    #[error("{kind}: {path}: {source}")]
    File {
        kind: IoErrorKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Operation not permitted by the handle's access mode
    #[error("cannot {operation} {path}: opened in {mode} mode")]
    ModeViolation {
        path: PathBuf,
        mode: AccessMode,
        operation: &'static str,
    },

    /// File content is not valid UTF-8
    #[error("File is not valid UTF-8: {path}")]
    InvalidUtf8 { path: PathBuf },

    /// A line transformation failed while copying
    #[error("Transform failed on line {line_number}: {message}")]
    Transform { line_number: usize, message: String },

    /// Invalid argument passed by the caller
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for textio operations.
pub type Result<T> = std::result::Result<T, FileIoError>;

impl FileIoError {
    /// Create a File error from an io::Error, classifying its kind
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            kind: IoErrorKind::from_io(source.kind()),
            path: path.into(),
            source,
        }
    }

    /// Create a Transform error for the given 1-based line number
    pub fn transform(line_number: usize, message: impl Into<String>) -> Self {
        Self::Transform {
            line_number,
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Taxonomy kind of this error
    pub fn kind(&self) -> IoErrorKind {
        match self {
            Self::File { kind, .. } => *kind,
            Self::ModeViolation { .. }
            | Self::InvalidUtf8 { .. }
            | Self::Transform { .. }
            | Self::InvalidArgument { .. } => IoErrorKind::Other,
        }
    }
}
