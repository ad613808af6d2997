//! Text file access with deterministic resource lifetimes.
//!
//! This module provides the core file access functionality for textio: access
//! modes, the filesystem seam, RAII file handles and the whole-file operations
//! built on top of them.

pub mod access;
pub mod fs;
pub mod handle;
pub mod mode;

// Re-export public API
pub use access::{uppercase, FileAccess};
pub use fs::{FileSystem, OsFileSystem, RawFile};
pub use handle::{FileHandle, LineSequence};
pub use mode::AccessMode;
