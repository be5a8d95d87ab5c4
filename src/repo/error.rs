use std::{io, path::PathBuf};

use thiserror::Error;

use crate::config;

/// Describes the potential error conditions that might arise from opening,
/// creating, or locating a repository.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not a git repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("configuration file missing: {}", .0.display())]
    ConfigMissing(PathBuf),

    #[error(transparent)]
    Config(#[from] config::Error),

    #[error("unsupported repositoryformatversion {0}")]
    UnsupportedVersion(i64),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("{} is not empty", .0.display())]
    NotEmpty(PathBuf),

    #[error(
        "not a git repository (or any of the parent directories): {}",
        .0.display()
    )]
    NoRepositoryFound(PathBuf),

    /// The operation is declared but not yet implemented.
    #[error("{0} is not implemented")]
    Unimplemented(&'static str),

    #[error(transparent)]
    IoError(#[from] io::Error),
}

/// A specialized `Result` type for repository operations.
pub type Result<T> = std::result::Result<T, Error>;
