//! Repository location and initialization for a minimal git implementation.
//!
//! Start with `repo::OnDisk::init` to create a repository, `repo::OnDisk::open`
//! to open one whose work tree you know, or `repo::find` to locate the one
//! enclosing a directory.

pub mod config;
pub mod fs_probe;
pub mod object;
pub mod repo;

#[cfg(test)]
mod test_support;
