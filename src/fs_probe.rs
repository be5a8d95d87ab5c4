//! Stateless filesystem predicates used throughout the crate.
//!
//! `exists` and `is_dir` treat any `stat` failure (including permission
//! errors) as "not there". Callers that need to distinguish those cases
//! should call `std::fs::metadata` directly.

use std::{
    env, fs, io,
    path::{Component, Path, PathBuf},
};

/// Returns `true` if the path can be `stat`ed without error.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).is_ok()
}

/// Returns `true` if the path can be `stat`ed and is a directory.
///
/// Never fails. A missing path is simply not a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.is_dir(),
        Err(_) => false,
    }
}

/// Resolves one level of symbolic link.
///
/// If `path` is a symlink, returns its target with `.` and `..` removed
/// (relative targets are interpreted relative to the link's parent
/// directory). Otherwise returns `path` unchanged. Fails if `path` can
/// not be `lstat`ed.
pub fn canonicalize<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let path = path.as_ref();
    let meta = fs::symlink_metadata(path)?;

    if !meta.file_type().is_symlink() {
        return Ok(path.to_path_buf());
    }

    let target = fs::read_link(path)?;
    if target.is_absolute() {
        Ok(normalize(&target))
    } else {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(normalize(&parent.join(target)))
    }
}

/// Makes `path` absolute by joining it onto the current directory,
/// then drops `.` and `..` components lexically.
///
/// Does not touch the filesystem except to read the current directory.
pub fn absolutize<P: AsRef<Path>>(path: P) -> io::Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&env::current_dir()?.join(path)))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match result.components().next_back() {
                Some(Component::Normal(_)) => {
                    result.pop();
                }
                // `/..` is `/`.
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => result.push(".."),
            },
            other => result.push(other),
        }
    }

    result
}
