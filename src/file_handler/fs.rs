//! Filesystem seam used to acquire OS resources.
//!
//! Everything in [`crate::file_handler`] opens files through the [`FileSystem`]
//! trait so tests can substitute a double that counts releases and injects
//! failures. [`OsFileSystem`] is the production implementation.

use crate::file_handler::mode::AccessMode;
use std::fmt;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// An opened, exclusively-owned stream. Dropping it releases the OS resource.
pub trait RawFile: Read + Write + fmt::Debug {}
impl<T: Read + Write + fmt::Debug> RawFile for T {}

/// Core trait for acquiring file resources.
pub trait FileSystem: fmt::Debug {
    /// Open `path` according to `mode`.
    fn open(&self, path: &Path, mode: AccessMode) -> io::Result<Box<dyn RawFile>>;

    /// Resolve `path` to an absolute path with symlinks followed.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}

/// Real filesystem via `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn open(&self, path: &Path, mode: AccessMode) -> io::Result<Box<dyn RawFile>> {
        let file = mode.open_options().open(path)?;
        Ok(Box::new(file))
    }
}
