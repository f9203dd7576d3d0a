use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_CAPACITY: usize = 16;

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub capacity: Option<usize>,
}

impl Config {
    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// Reads the config at `path`. A missing file is not an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(data) => Self::from_toml(&data),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn load() -> Self {
        let Some(path) = Self::get_config_path() else {
            return Self::default();
        };
        Self::load_from(&path).unwrap_or_else(|e| {
            warn!("ignoring config at {}: {e}", path.display());
            Self::default()
        })
    }

    pub fn get_config_path() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("dev", "ringstack", "ringstack")?;
        Some(dirs.config_dir().join("ringstack.toml"))
    }

    pub fn capacity(&self) -> usize {
        self.capacity.unwrap_or(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RingStackError;

    #[test]
    fn empty_toml_uses_default_capacity() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn capacity_override() {
        let config = Config::from_toml("capacity = 64\n").unwrap();
        assert_eq!(config.capacity(), 64);
    }

    #[test]
    fn malformed_toml_is_reported() {
        assert!(matches!(
            Config::from_toml("capacity = \"lots\""),
            Err(RingStackError::ConfigParse(_))
        ));
    }

    #[test]
    fn missing_file_yields_default() {
        let path = std::env::temp_dir().join("ringstack-does-not-exist.toml");
        assert_eq!(Config::load_from(path).unwrap(), Config::default());
    }

    #[test]
    fn load_from_reads_file() {
        let path = std::env::temp_dir().join(format!("ringstack-{}.toml", std::process::id()));
        fs::write(&path, "capacity = 3").unwrap();
        let config = Config::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.capacity(), 3);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config { capacity: Some(8) };
        let data = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml(&data).unwrap(), config);
    }
}
