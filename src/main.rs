//! textio - Scoped Text File Access
//!
//! Console menu that opens, reads, writes, appends and copies text files.

use anyhow::{Context, Result};
use std::io;
use textio::{FileAccess, Shell, ShellConfig};

fn main() -> Result<()> {
    // Initialize logging, controlled by RUST_LOG
    env_logger::init();

    let config = ShellConfig::from_env();
    log::debug!("starting with {:?}", config);

    if !config.dir.is_dir() {
        anyhow::bail!("Not a directory: {}", config.dir.display());
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(FileAccess::new(), config, stdin.lock(), io::stdout().lock());
    shell.run().context("console I/O failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_constant() {
        // Ensure version is accessible
        assert!(!textio::VERSION.is_empty());
    }
}
