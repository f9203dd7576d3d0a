use thiserror::Error;

#[derive(Error, Debug)]
pub enum RingStackError {
    #[error("ring stack capacity must be at least 1")]
    ZeroCapacity,

    #[error("couldn't parse config")]
    ConfigParse(#[from] toml::de::Error),

    #[error("io error")]
    Io(#[from] std::io::Error),

    #[error("a logger is already installed")]
    LoggerInstalled,

    #[error("no home directory to place project files in")]
    NoProjectDirs,
}

pub type Result<T> = std::result::Result<T, RingStackError>;
