//! Whole-file operations built on scoped acquisition.
//!
//! Every operation in [`FileAccess`] opens its file(s), does its work and releases
//! them before returning, on success and on every failure path.

use crate::error::{FileIoError, Result};
use crate::file_handler::fs::{FileSystem, OsFileSystem};
use crate::file_handler::handle::FileHandle;
use crate::file_handler::mode::AccessMode;
use log::debug;
use std::ffi::OsString;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Default per-line transform used by the copy operations.
pub fn uppercase(line: &str) -> String {
    line.to_uppercase()
}

/// File access layer over a [`FileSystem`].
#[derive(Debug, Default, Clone)]
pub struct FileAccess<F: FileSystem = OsFileSystem> {
    fs: F,
}

impl FileAccess<OsFileSystem> {
    /// Access layer over the real filesystem
    pub fn new() -> Self {
        Self { fs: OsFileSystem }
    }
}

impl<F: FileSystem> FileAccess<F> {
    pub fn with_file_system(fs: F) -> Self {
        Self { fs }
    }

    /// Acquire a handle the caller owns. It is released when closed or dropped.
    pub fn open(&self, path: impl AsRef<Path>, mode: AccessMode) -> Result<FileHandle> {
        FileHandle::open(&self.fs, path.as_ref(), mode)
    }

    /// Run `body` against a freshly opened handle and release it on every exit path.
    ///
    /// An error from `body` takes precedence over any failure during release.
    pub fn with_file<T>(
        &self,
        path: impl AsRef<Path>,
        mode: AccessMode,
        body: impl FnOnce(&mut FileHandle) -> Result<T>,
    ) -> Result<T> {
        let mut handle = self.open(path, mode)?;
        let value = body(&mut handle)?;
        handle.close()?;
        Ok(value)
    }

    /// Open for reading and release immediately.
    pub fn open_close(&self, path: impl AsRef<Path>) -> Result<()> {
        self.with_file(path, AccessMode::Read, |_| Ok(()))
    }

    /// Content up to `max_bytes` bytes, or the whole file when `None`.
    pub fn read_all(&self, path: impl AsRef<Path>, max_bytes: Option<usize>) -> Result<String> {
        self.with_file(path, AccessMode::Read, |handle| {
            handle.read_to_string(max_bytes)
        })
    }

    /// First line including its terminator; empty for an empty file.
    pub fn read_line(&self, path: impl AsRef<Path>) -> Result<String> {
        self.with_file(path, AccessMode::Read, |handle| {
            handle.lines()?.next().unwrap_or_else(|| Ok(String::new()))
        })
    }

    /// First `count` lines in file order, or all lines when `None`.
    pub fn read_lines(&self, path: impl AsRef<Path>, count: Option<usize>) -> Result<Vec<String>> {
        self.with_file(path, AccessMode::Read, |handle| {
            handle
                .lines()?
                .take(count.unwrap_or(usize::MAX))
                .collect()
        })
    }

    /// Replace the file's content with `content`.
    ///
    /// Prior content is destroyed at open time, even when `content` is empty.
    pub fn write_all(&self, path: impl AsRef<Path>, content: &str) -> Result<()> {
        self.with_file(path, AccessMode::WriteTruncate, |handle| {
            handle.write_str(content)
        })
    }

    /// Replace the file's content with `lines` written verbatim in order.
    pub fn write_lines<I, S>(&self, path: impl AsRef<Path>, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.with_file(path, AccessMode::WriteTruncate, |handle| {
            handle.write_lines(lines)
        })
    }

    /// Add `content` after the existing content.
    pub fn append_all(&self, path: impl AsRef<Path>, content: &str) -> Result<()> {
        self.with_file(path, AccessMode::Append, |handle| handle.write_str(content))
    }

    /// Copy `src` to `dst` line by line through `transform`. Returns the line count.
    pub fn copy_transform(
        &self,
        src: impl AsRef<Path>,
        dst: impl AsRef<Path>,
        mut transform: impl FnMut(&str) -> String,
    ) -> Result<usize> {
        self.try_copy_transform(src, dst, |line| {
            Ok::<_, std::convert::Infallible>(transform(line))
        })
    }

    /// Like [`Self::copy_transform`] with a transform that may fail.
    ///
    /// The source is acquired first and the destination second; both are
    /// released in reverse order whatever happens. A failing transform is
    /// reported with the 1-based number of the offending line.
    pub fn try_copy_transform<E: Display>(
        &self,
        src: impl AsRef<Path>,
        dst: impl AsRef<Path>,
        mut transform: impl FnMut(&str) -> std::result::Result<String, E>,
    ) -> Result<usize> {
        let (src, dst) = (src.as_ref(), dst.as_ref());
        self.reject_same_file(src, dst)?;

        let mut source = self.open(src, AccessMode::Read)?;
        let mut target = self.open(dst, AccessMode::WriteTruncate)?;

        let mut copied = 0;
        for (index, line) in source.lines()?.enumerate() {
            let line = line?;
            let transformed = transform(line.as_str())
                .map_err(|e| FileIoError::transform(index + 1, e.to_string()))?;
            target.write_str(&transformed)?;
            copied += 1;
        }

        target.close()?;
        source.close()?;
        debug!("copied {} lines from {} to {}", copied, src.display(), dst.display());
        Ok(copied)
    }

    /// Directory containing `path` and its file name, after resolving symlinks.
    pub fn folder_path(&self, path: impl AsRef<Path>) -> Result<(PathBuf, OsString)> {
        let path = path.as_ref();
        let resolved = self
            .fs
            .canonicalize(path)
            .map_err(|e| FileIoError::io(path, e))?;
        match (resolved.parent(), resolved.file_name()) {
            (Some(parent), Some(name)) => Ok((parent.to_path_buf(), name.to_os_string())),
            _ => Err(FileIoError::invalid_argument(format!(
                "{} has no parent directory",
                resolved.display()
            ))),
        }
    }

    /// Truncating the destination would wipe a source that is the same file.
    fn reject_same_file(&self, src: &Path, dst: &Path) -> Result<()> {
        let same = match (self.fs.canonicalize(src), self.fs.canonicalize(dst)) {
            (Ok(a), Ok(b)) => a == b,
            _ => src == dst,
        };
        if same {
            return Err(FileIoError::invalid_argument(format!(
                "source and destination are the same file: {}",
                src.display()
            )));
        }
        Ok(())
    }
}
