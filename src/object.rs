//! Extension point for git objects.
//!
//! Objects are not stored or hashed yet. This module only fixes the
//! capability every object kind (blob, tree, commit, tag) will have to
//! provide once the object store exists: turning itself into bytes and
//! back.

use crate::repo::{Error, OnDisk, Result};

/// Capability shared by every git object kind.
pub trait Object {
    /// Encode this object's content (without the `<kind> <len>\0` header).
    fn serialize(&self) -> Result<Vec<u8>>;

    /// Replace this object's content by decoding `data`.
    fn deserialize(&mut self, data: &[u8]) -> Result<()>;
}

/// Undecoded object content belonging to a repository.
///
/// Stands in until concrete object kinds are written. Both halves of the
/// `Object` capability fail with `Error::Unimplemented`.
#[derive(Debug)]
pub struct RawObject<'r> {
    repo: &'r OnDisk,
    data: Vec<u8>,
}

impl<'r> RawObject<'r> {
    /// Create an object owned by `repo`. If `data` is non-empty it is
    /// decoded immediately, so any decoding error surfaces here.
    pub fn new(repo: &'r OnDisk, data: &[u8]) -> Result<Self> {
        let mut object = RawObject {
            repo,
            data: Vec::new(),
        };

        if !data.is_empty() {
            object.deserialize(data)?;
        }

        Ok(object)
    }

    /// Return the repository this object belongs to.
    pub fn repo(&self) -> &OnDisk {
        self.repo
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl<'r> Object for RawObject<'r> {
    fn serialize(&self) -> Result<Vec<u8>> {
        Err(Error::Unimplemented("object serialization"))
    }

    fn deserialize(&mut self, _data: &[u8]) -> Result<()> {
        Err(Error::Unimplemented("object deserialization"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object() {
        let temp_dir = tempfile::tempdir().unwrap();
        let repo = OnDisk::init(temp_dir.path()).unwrap();

        let object = RawObject::new(&repo, b"").unwrap();
        assert_eq!(object.repo().work_dir(), temp_dir.path());
        assert!(object.data().is_empty());

        let err = object.serialize().unwrap_err();
        assert_eq!(err.to_string(), "object serialization is not implemented");
    }

    #[test]
    fn deserialize_is_unimplemented() {
        let temp_dir = tempfile::tempdir().unwrap();
        let repo = OnDisk::init(temp_dir.path()).unwrap();

        let err = RawObject::new(&repo, b"hello").unwrap_err();
        if let Error::Unimplemented(what) = err {
            assert_eq!(what, "object deserialization");
        } else {
            panic!("wrong error: {:?}", err);
        }
    }
}
