//! Exclusively-owned file handles with deterministic release.
//!
//! A [`FileHandle`] owns one OS resource from the moment it is opened until it is
//! either closed explicitly with [`FileHandle::close`] or dropped. Either path
//! releases the resource exactly once; `close` additionally reports flush
//! failures that a drop can only log.

use crate::error::{FileIoError, Result};
use crate::file_handler::fs::{FileSystem, RawFile};
use crate::file_handler::mode::AccessMode;
use log::{debug, warn};
use memchr::memchr;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

type Stream = BufReader<Box<dyn RawFile>>;

/// An opened file bound to a path and an access mode.
#[derive(Debug)]
pub struct FileHandle {
    path: PathBuf,
    mode: AccessMode,
    /// `None` once released
    stream: Option<Stream>,
}

impl FileHandle {
    /// Acquire `path` through `fs` in the given mode.
    pub fn open<F: FileSystem + ?Sized>(fs: &F, path: &Path, mode: AccessMode) -> Result<Self> {
        let raw = fs
            .open(path, mode)
            .map_err(|e| FileIoError::io(path, e))?;
        debug!("acquired {} ({})", path.display(), mode);
        Ok(Self {
            path: path.to_path_buf(),
            mode,
            stream: Some(BufReader::new(raw)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Read up to `max_bytes` bytes, or everything left when `None`.
    ///
    /// A file shorter than the cap yields all available bytes. When the cap
    /// splits a multi-byte character, the incomplete tail is dropped; an
    /// incomplete character at end of file is invalid UTF-8.
    pub fn read_to_string(&mut self, max_bytes: Option<usize>) -> Result<String> {
        let path = self.path.clone();
        let stream = self.stream_for("read", AccessMode::permits_read)?;

        let mut bytes = Vec::new();
        let outcome = match max_bytes {
            Some(limit) => stream.take(limit as u64).read_to_end(&mut bytes),
            None => stream.read_to_end(&mut bytes),
        };
        outcome.map_err(|e| FileIoError::io(&path, e))?;

        decode(&path, bytes, max_bytes)
    }

    /// Lazy sequence of the remaining lines, each keeping its terminator.
    ///
    /// Lines consumed from the sequence are gone; starting over requires
    /// opening the file again.
    pub fn lines(&mut self) -> Result<LineSequence<'_>> {
        if !self.mode.permits_read() {
            return Err(self.mode_violation("read"));
        }
        match self.stream.as_mut() {
            Some(stream) => Ok(LineSequence {
                stream,
                path: &self.path,
                finished: false,
            }),
            None => Err(released_error(&self.path)),
        }
    }

    /// Write `content` verbatim at the current position.
    pub fn write_str(&mut self, content: &str) -> Result<()> {
        let path = self.path.clone();
        let stream = self.stream_for("write", AccessMode::permits_write)?;
        stream
            .get_mut()
            .write_all(content.as_bytes())
            .map_err(|e| FileIoError::io(&path, e))
    }

    /// Write each line verbatim in order. No terminators are inserted.
    pub fn write_lines<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write_str(line.as_ref())?;
        }
        Ok(())
    }

    /// Release the resource now, reporting a failed flush.
    pub fn close(mut self) -> Result<()> {
        self.release().map_err(|e| FileIoError::io(&self.path, e))
    }

    fn stream_for(
        &mut self,
        operation: &'static str,
        permitted: fn(AccessMode) -> bool,
    ) -> Result<&mut Stream> {
        if !permitted(self.mode) {
            return Err(self.mode_violation(operation));
        }
        match self.stream.as_mut() {
            Some(stream) => Ok(stream),
            None => Err(released_error(&self.path)),
        }
    }

    fn mode_violation(&self, operation: &'static str) -> FileIoError {
        FileIoError::ModeViolation {
            path: self.path.clone(),
            mode: self.mode,
            operation,
        }
    }

    /// Flush (for writable modes) and drop the stream. A no-op once released.
    fn release(&mut self) -> io::Result<()> {
        let Some(mut stream) = self.stream.take() else {
            return Ok(());
        };
        let flushed = if self.mode.permits_write() {
            stream.get_mut().flush()
        } else {
            Ok(())
        };
        drop(stream);
        debug!("released {} ({})", self.path.display(), self.mode);
        flushed
    }
}

impl Drop for FileHandle {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!("failed to flush {} on release: {}", self.path.display(), e);
        }
    }
}

fn released_error(path: &Path) -> FileIoError {
    FileIoError::io(
        path,
        io::Error::new(io::ErrorKind::Other, "handle already released"),
    )
}

fn decode(path: &Path, bytes: Vec<u8>, limit: Option<usize>) -> Result<String> {
    let cut_by_limit = limit == Some(bytes.len());
    let invalid = || FileIoError::InvalidUtf8 {
        path: path.to_path_buf(),
    };
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            let utf8 = err.utf8_error();
            // error_len() is None only for a sequence cut short at the end
            if cut_by_limit && utf8.error_len().is_none() {
                let valid_up_to = utf8.valid_up_to();
                let mut bytes = err.into_bytes();
                bytes.truncate(valid_up_to);
                String::from_utf8(bytes).map_err(|_| invalid())
            } else {
                Err(invalid())
            }
        }
    }
}

/// Lazy, finite sequence of lines read from a Read-mode handle.
#[derive(Debug)]
pub struct LineSequence<'a> {
    stream: &'a mut Stream,
    path: &'a Path,
    finished: bool,
}

impl Iterator for LineSequence<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match next_line(&mut *self.stream) {
            Ok(Some(bytes)) => Some(String::from_utf8(bytes).map_err(|_| {
                self.finished = true;
                FileIoError::InvalidUtf8 {
                    path: self.path.to_path_buf(),
                }
            })),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(FileIoError::io(self.path, e)))
            }
        }
    }
}

/// Read through the next `\n` (inclusive), or to EOF for an unterminated last line.
fn next_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    loop {
        let (consumed, found) = {
            let available = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }
            match memchr(b'\n', available) {
                Some(pos) => {
                    line.extend_from_slice(&available[..=pos]);
                    (pos + 1, true)
                }
                None => {
                    line.extend_from_slice(available);
                    (available.len(), false)
                }
            }
        };
        reader.consume(consumed);
        if found {
            break;
        }
    }
    Ok(if line.is_empty() { None } else { Some(line) })
}
