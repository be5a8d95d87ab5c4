use std::path::Path;

use minigit::repo::{find, Error, OnDisk, Result};

// Discover the git repo enclosing the given path.
//
// Walks upward until a directory containing `.git` is found.
// See `minigit::repo::find` for the details.
//
// Unlike `find` itself, a missing repository is always an error
// here: every command that calls this needs one.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<OnDisk> {
    let path = path.as_ref();
    find(path, true)?.ok_or_else(|| Error::NoRepositoryFound(path.to_path_buf()))
}
