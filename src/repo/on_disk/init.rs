use std::{fs, path::Path};

use crate::{config::Config, fs_probe};

use super::super::{Error, Result, REPOSITORY_FORMAT_VERSION};
use super::OnDisk;

const DESCRIPTION: &str =
    "Unnamed repository; edit this file 'description' to name the repository.\n";

const HEAD: &str = "ref: refs/heads/master\n";

impl OnDisk {
    /// Creates a new, empty git repository on the local file system.
    ///
    /// `work_dir` may be missing (it is created) or an empty directory.
    /// Anything else is an error and leaves the path untouched.
    ///
    /// If a step fails after the `.git` directory has been started, the
    /// partially written directory is left in place.
    ///
    /// Analogous to [`git init`](https://git-scm.com/docs/git-init).
    pub fn init<P: AsRef<Path>>(work_dir: P) -> Result<Self> {
        // Must run before the forced handle reads any existing `.git/config`.
        prepare_work_dir(work_dir.as_ref())?;

        let mut repo = OnDisk::new(work_dir.as_ref(), true)?;

        repo.populate_git_dir().map_err(|err| {
            tracing::warn!(
                git_dir = %repo.git_dir.display(),
                error = %err,
                "repository initialization failed; partial .git directory left behind"
            );
            err
        })?;

        tracing::info!(git_dir = %repo.git_dir.display(), "initialized empty repository");
        Ok(repo)
    }

    pub(super) fn populate_git_dir(&mut self) -> Result<()> {
        for dir in &["branches", "objects", "refs/tags", "refs/heads"] {
            self.repo_dir(dir, true)?;
        }

        fs::write(self.git_file("description")?, DESCRIPTION)?;
        fs::write(self.git_file("HEAD")?, HEAD)?;

        let config_path = self.git_file("config")?;
        fs::write(&config_path, "")?;

        let mut config = Config::load(&config_path)?;
        set_default_config(&mut config);
        config.save(&config_path)?;

        self.config = Some(config);
        Ok(())
    }

    // Like `repo_file` with `mkdir`, but a path is always produced.
    fn git_file(&self, rel: &str) -> Result<std::path::PathBuf> {
        self.repo_file(rel, true)?
            .ok_or_else(|| Error::NotARepository(self.work_dir.clone()))
    }
}

fn prepare_work_dir(work_dir: &Path) -> Result<()> {
    if !fs_probe::exists(work_dir) {
        fs::create_dir_all(work_dir)?;
        return Ok(());
    }

    if !fs_probe::is_dir(work_dir) {
        return Err(Error::NotADirectory(work_dir.to_path_buf()));
    }

    if fs::read_dir(work_dir)?.next().is_some() {
        return Err(Error::NotEmpty(work_dir.to_path_buf()));
    }

    Ok(())
}

fn set_default_config(config: &mut Config) {
    let core = config.section_mut("core");
    core.insert(
        "repositoryformatversion",
        REPOSITORY_FORMAT_VERSION.to_string(),
    );
    core.insert("filemode", "false");
    core.insert("bare", "false");
}
