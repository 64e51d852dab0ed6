use std::{fs::OpenOptions, path::Path, sync::Arc};

use tracing_subscriber::EnvFilter;

use crate::error::Result;

pub const LOG_ENV: &str = "FOLIO_LOG";
const DEFAULT_FILTER: &str = "info";

/// Sends tracing output to `path`. The terminal belongs to the UI, so
/// nothing is ever written to stdout or stderr from here.
pub fn init_file_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    // A global subscriber can only be set once per process; the first one stays.
    if let Err(err) = installed {
        tracing::debug!(error = %err, path = %path.display(), "file logging already initialized");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_keeps_first_subscriber() {
        let dir = std::env::temp_dir().join(format!("folio_logging_{}", std::process::id()));
        let first = dir.join("first.log");
        let second = dir.join("second.log");

        assert!(init_file_logging(&first).is_ok());
        assert!(init_file_logging(&second).is_ok());
        assert!(first.exists());
        assert!(second.exists());

        std::fs::remove_dir_all(dir).ok();
    }
}
