//! Open disciplines for file handles.

use std::fmt;
use std::fs::OpenOptions;

/// How a file is opened, governing permitted operations and initial file state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    /// Read-only, the file must exist
    Read,
    /// Write-only, creates the file or discards its existing content at open time
    WriteTruncate,
    /// Write-only, creates the file if needed and positions every write at end-of-file
    Append,
}

impl AccessMode {
    /// OS open options implementing this mode.
    pub fn open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            AccessMode::Read => {
                options.read(true);
            }
            AccessMode::WriteTruncate => {
                options.write(true).create(true).truncate(true);
            }
            AccessMode::Append => {
                options.append(true).create(true);
            }
        }
        options
    }

    pub fn permits_read(self) -> bool {
        matches!(self, AccessMode::Read)
    }

    pub fn permits_write(self) -> bool {
        !self.permits_read()
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccessMode::Read => "read",
            AccessMode::WriteTruncate => "write-truncate",
            AccessMode::Append => "append",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    #[test]
    fn test_permissions_by_mode() {
        assert!(AccessMode::Read.permits_read());
        assert!(!AccessMode::Read.permits_write());
        assert!(AccessMode::WriteTruncate.permits_write());
        assert!(AccessMode::Append.permits_write());
        assert!(!AccessMode::Append.permits_read());
    }

    #[test]
    fn test_read_mode_requires_existing_file() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let err = AccessMode::Read
            .open_options()
            .open(dir.path().join("absent.txt"))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_truncate_and_append_semantics() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("modes.txt");
        std::fs::write(&path, "old content\n").unwrap();

        let mut file = AccessMode::Append.open_options().open(&path).unwrap();
        file.write_all(b"tail\n").unwrap();
        drop(file);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "old content\ntail\n");

        let file = AccessMode::WriteTruncate.open_options().open(&path).unwrap();
        drop(file);
        let mut content = String::new();
        std::fs::File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert!(content.is_empty());
    }
}
