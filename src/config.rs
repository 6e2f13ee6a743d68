//! Filesystem layout for the application. There is no user-editable
//! configuration; everything lives in one folder beneath the home directory.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".passbook";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "passwords.sqlite";
/// Log file written by the tracing subscriber.
const LOG_FILE_NAME: &str = "passbook.log";

/// Resolved locations of everything the application writes to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
}

impl AppPaths {
    /// Resolve the default layout inside the user's home directory.
    pub fn resolve() -> Result<Self> {
        let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::in_dir(base_dirs.home_dir().join(DATA_DIR_NAME)))
    }

    /// Lay the files out under an arbitrary data directory.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_path: data_dir.join(LOG_FILE_NAME),
            data_dir,
        }
    }

    /// File name of the log, relative to `data_dir`.
    pub fn log_file_name(&self) -> &Path {
        self.log_path
            .file_name()
            .map(Path::new)
            .unwrap_or_else(|| Path::new(LOG_FILE_NAME))
    }
}
