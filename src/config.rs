//! Command-line configuration for the console shell.
//!
//! There is no configuration file; every setting comes from flags with defaults
//! matching the demo file names the menus operate on.

use clap::{value_parser, Arg, ArgMatches, Command};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Files and limits the menu actions operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Directory every demo file is resolved against
    pub dir: PathBuf,
    /// Target of the open/close, read and append actions
    pub read_file: PathBuf,
    /// Target of the write actions
    pub write_file: PathBuf,
    pub copy_from: PathBuf,
    pub copy_to: PathBuf,
    /// Byte cap used by "Read File"
    pub read_bytes: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            read_file: PathBuf::from("test.txt"),
            write_file: PathBuf::from("test_write.txt"),
            copy_from: PathBuf::from("test_in.txt"),
            copy_to: PathBuf::from("test_out.txt"),
            read_bytes: 10,
        }
    }
}

impl ShellConfig {
    /// Command-line definition
    pub fn command() -> Command {
        Command::new("textio")
            .version(crate::VERSION)
            .about("Console menu exercising scoped text file operations")
            .arg(
                Arg::new("dir")
                    .long("dir")
                    .value_name("DIR")
                    .help("Directory containing the demo files")
                    .default_value(".")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(path_arg("read-file", "File used by open, read and append actions", "test.txt"))
            .arg(path_arg("write-file", "File used by write actions", "test_write.txt"))
            .arg(path_arg("copy-from", "Source of the uppercase copy", "test_in.txt"))
            .arg(path_arg("copy-to", "Destination of the uppercase copy", "test_out.txt"))
            .arg(
                Arg::new("read-bytes")
                    .long("read-bytes")
                    .value_name("N")
                    .help("Byte cap for the \"Read File\" action")
                    .default_value("10")
                    .value_parser(value_parser!(usize)),
            )
    }

    /// Parse from the process arguments, exiting with usage on error.
    pub fn from_env() -> Self {
        Self::from_matches(&Self::command().get_matches())
    }

    /// Parse from an explicit argument list (first item is the program name).
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let defaults = Self::default();
        let path = |id: &str, fallback: PathBuf| {
            matches.get_one::<PathBuf>(id).cloned().unwrap_or(fallback)
        };
        Self {
            dir: path("dir", defaults.dir),
            read_file: path("read-file", defaults.read_file),
            write_file: path("write-file", defaults.write_file),
            copy_from: path("copy-from", defaults.copy_from),
            copy_to: path("copy-to", defaults.copy_to),
            read_bytes: matches
                .get_one::<usize>("read-bytes")
                .copied()
                .unwrap_or(defaults.read_bytes),
        }
    }

    /// Join `name` onto the configured directory.
    pub fn resolve(&self, name: impl AsRef<Path>) -> PathBuf {
        self.dir.join(name)
    }
}

fn path_arg(id: &'static str, help: &'static str, default: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("FILE")
        .help(help)
        .default_value(default)
        .value_parser(value_parser!(PathBuf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let config = ShellConfig::try_from_args(["textio"]).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = ShellConfig::try_from_args([
            "textio",
            "--dir",
            "/tmp/demo",
            "--read-file",
            "notes.txt",
            "--read-bytes",
            "4",
        ])
        .unwrap();
        assert_eq!(config.dir, PathBuf::from("/tmp/demo"));
        assert_eq!(config.read_file, PathBuf::from("notes.txt"));
        assert_eq!(config.read_bytes, 4);
        assert_eq!(config.write_file, PathBuf::from("test_write.txt"));
        assert_eq!(config.resolve(&config.read_file), PathBuf::from("/tmp/demo/notes.txt"));
    }

    #[test]
    fn test_invalid_byte_cap_is_rejected() {
        assert!(ShellConfig::try_from_args(["textio", "--read-bytes", "lots"]).is_err());
    }

    #[test]
    fn test_command_definition_is_consistent() {
        ShellConfig::command().debug_assert();
    }
}
