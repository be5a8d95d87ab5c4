use std::{collections::HashSet, path::Path};

use crate::fs_probe;

use super::{Error, OnDisk, Result, GIT_DIR_NAME};

/// Discover the repository enclosing `start`.
///
/// Walks upward from `start` (the current directory if empty) until a
/// directory containing `.git/` is found, then opens it with full
/// validation. Symlinks are resolved one level at each step.
///
/// If the filesystem root is reached without finding a repository (or
/// symlinks lead the walk back to a directory it already visited),
/// returns `Error::NoRepositoryFound` when `required` is set and
/// `Ok(None)` otherwise.
///
/// Only the plain `.git` directory case is handled. `GIT_DIR`,
/// `GIT_CEILING_DIRECTORIES`, and `.git` files are ignored.
pub fn find<P: AsRef<Path>>(start: P, required: bool) -> Result<Option<OnDisk>> {
    let start = start.as_ref();
    let start = if start.as_os_str().is_empty() {
        Path::new(".")
    } else {
        start
    };

    let mut path = fs_probe::canonicalize(fs_probe::absolutize(start)?)?;
    let mut visited = HashSet::new();

    loop {
        if fs_probe::is_dir(path.join(GIT_DIR_NAME)) {
            tracing::debug!(work_dir = %path.display(), "found repository");
            return OnDisk::open(&path).map(Some);
        }

        let parent = match path.parent() {
            Some(parent) => fs_probe::canonicalize(parent)?,
            None => path.clone(),
        };

        visited.insert(path.clone());

        if parent == path || visited.contains(&parent) {
            tracing::debug!(start = %start.display(), "reached filesystem root");
            return if required {
                Err(Error::NoRepositoryFound(start.to_path_buf()))
            } else {
                Ok(None)
            };
        }

        path = parent;
    }
}
