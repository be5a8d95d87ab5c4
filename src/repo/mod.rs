//! Opening, creating, and locating repositories.
//!
//! A repository is a work tree (the directory the user edits) with a `.git`
//! metadata directory directly beneath it. `OnDisk` is the in-memory handle
//! for one such repository; `OnDisk::init` creates a new one and `find`
//! walks upward from a directory to the nearest enclosing one.
//!
//! ## Concurrency
//!
//! Nothing here takes a lock. Each call returns an independent handle, but
//! two processes running `OnDisk::init` on the same path at the same time
//! can race. Callers that need mutual exclusion must provide it.

mod error;
pub use error::{Error, Result};

mod find;
pub use find::find;

mod on_disk;
pub use on_disk::OnDisk;

/// Name of the metadata directory beneath the work tree.
pub const GIT_DIR_NAME: &str = ".git";

/// The only repository format version this crate understands.
pub const REPOSITORY_FORMAT_VERSION: i64 = 0;
