use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use simplelog::{CombinedLogger, Config, LevelFilter, WriteLogger};

use crate::error::{Result, RingStackError};

fn make_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("dev", "ringstack", "ringstack")
        .ok_or(RingStackError::NoProjectDirs)?;
    Ok(dirs.data_dir().join("info.log"))
}

/// Installs a file logger at the platform data directory.
pub fn init() -> Result<()> {
    init_at(make_path()?)
}

/// Installs a file logger appending to `path`. Fails without touching the
/// filesystem if a logger is already installed.
pub fn init_at(path: impl AsRef<Path>) -> Result<()> {
    if ::log::max_level() != LevelFilter::Off {
        return Err(RingStackError::LoggerInstalled);
    }

    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    CombinedLogger::init(vec![WriteLogger::new(
        LevelFilter::Info,
        Config::default(),
        file,
    )])
    .map_err(|_| RingStackError::LoggerInstalled)
}
