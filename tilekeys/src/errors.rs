use std::path::PathBuf;

use thiserror::Error;
use tilekeys_core::errors::TileError;

macro_rules! exit_on_error {
    ($a: expr) => {
        match $a {
            Ok(value) => value,
            Err(err) => {
                tracing::error!("Exiting due to error: {}", CliError::from(err));
                std::process::exit(1);
            }
        }
    };
}

pub(crate) use exit_on_error;

pub type Result<T> = std::result::Result<T, CliError>;
pub type Error = std::result::Result<(), CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] TileError),
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),
    #[error("Ron error: {0}.")]
    RonError(#[from] ron::error::SpannedError),
    #[error("Inotify error: {0}.")]
    InotifyError(#[from] nix::Error),

    #[error("No config file found at {0}.")]
    NoConfigFound(PathBuf),
}
