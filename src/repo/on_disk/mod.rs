//! A repository that stores content on the local file system.
//!
//! This intentionally uses the same `.git` folder format as command-line
//! git, so a repository created by one can be opened by the other.

use std::path::{Path, PathBuf};

use crate::{config::Config, fs_probe};

use super::{Error, Result, GIT_DIR_NAME, REPOSITORY_FORMAT_VERSION};

mod init;

/// Handle to a git repository on the local file system.
///
/// The handle owns its loaded configuration. Nothing is held open, so
/// dropping the handle needs no cleanup.
#[derive(Debug)]
pub struct OnDisk {
    work_dir: PathBuf,
    git_dir: PathBuf,
    config: Option<Config>,
}

impl OnDisk {
    /// Open an existing repository whose work tree is `work_dir`.
    ///
    /// Fails unless `work_dir/.git` is a directory containing a `config`
    /// file whose `core.repositoryformatversion` is `0`.
    pub fn open<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        OnDisk::new(work_dir.as_ref(), false)
    }

    // With `force`, none of the structural or version checks are made and
    // a missing config file is not an error. Only `init` should need this.
    pub(crate) fn new(work_dir: &Path, force: bool) -> Result<Self> {
        let mut repo = OnDisk {
            work_dir: work_dir.to_path_buf(),
            git_dir: work_dir.join(GIT_DIR_NAME),
            config: None,
        };

        if !force && !fs_probe::is_dir(&repo.git_dir) {
            return Err(Error::NotARepository(repo.work_dir));
        }

        match repo.repo_file("config", false)? {
            Some(path) if fs_probe::exists(&path) => {
                repo.config = Some(Config::load(&path)?);
            }
            _ if !force => return Err(Error::ConfigMissing(repo.repo_path("config"))),
            _ => {}
        }

        if !force {
            repo.check_format_version()?;
        }

        tracing::debug!(work_dir = %repo.work_dir.display(), force, "opened repository");
        Ok(repo)
    }

    fn check_format_version(&self) -> Result<()> {
        let config = match &self.config {
            Some(config) => config,
            None => return Err(Error::ConfigMissing(self.repo_path("config"))),
        };

        let version = config.get_int("core", "repositoryformatversion")?;
        if version != REPOSITORY_FORMAT_VERSION {
            return Err(Error::UnsupportedVersion(version));
        }

        Ok(())
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.git_dir.as_path()
    }

    /// Return the loaded configuration.
    ///
    /// Always present for a repository returned by `open`, `init`, or `find`.
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    /// Return the loaded configuration for modification.
    ///
    /// Fails with `Error::ConfigMissing` on a handle that has none.
    pub fn config_mut(&mut self) -> Result<&mut Config> {
        let path = self.repo_path("config");
        self.config.as_mut().ok_or(Error::ConfigMissing(path))
    }

    /// Write the in-memory configuration back to `.git/config`.
    pub fn save_config(&self) -> Result<()> {
        match &self.config {
            Some(config) => Ok(config.save(self.repo_path("config"))?),
            None => Err(Error::ConfigMissing(self.repo_path("config"))),
        }
    }

    /// Compute a path under the `.git` directory. Does no I/O.
    pub fn repo_path<P: AsRef<Path>>(&self, rel: P) -> PathBuf {
        self.git_dir.join(rel)
    }

    /// Resolve a directory under `.git`.
    ///
    /// Returns `Ok(None)` if the directory does not exist and `mkdir` is
    /// false. With `mkdir`, creates it and any missing parents. It is an
    /// error if the path exists but is not a directory.
    pub fn repo_dir<P: AsRef<Path>>(&self, rel: P, mkdir: bool) -> Result<Option<PathBuf>> {
        let path = self.repo_path(rel);

        if fs_probe::exists(&path) {
            return if fs_probe::is_dir(&path) {
                Ok(Some(path))
            } else {
                Err(Error::NotADirectory(path))
            };
        }

        if mkdir {
            std::fs::create_dir_all(&path)?;
            Ok(Some(path))
        } else {
            Ok(None)
        }
    }

    /// Resolve a file under `.git`.
    ///
    /// The file's parent directory is resolved as with `repo_dir` (and
    /// created if `mkdir` is set). The file itself is never created.
    /// Returns `Ok(None)` if the parent directory is absent.
    pub fn repo_file<P: AsRef<Path>>(&self, rel: P, mkdir: bool) -> Result<Option<PathBuf>> {
        let rel = rel.as_ref();
        let parent = rel.parent().unwrap_or_else(|| Path::new(""));

        Ok(self
            .repo_dir(parent, mkdir)?
            .map(|_| self.repo_path(rel)))
    }
}

#[cfg(test)]
mod tests;
