use std::fs;

use super::super::*;

fn forced(work_dir: &Path) -> OnDisk {
    OnDisk::new(work_dir, true).unwrap()
}

#[test]
fn repo_path_is_pure() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work_dir = temp_dir.path();
    let r = forced(work_dir);

    assert_eq!(r.repo_path("refs/heads"), work_dir.join(".git/refs/heads"));
    assert!(!work_dir.join(".git").exists());
}

#[test]
fn repo_dir_missing_without_mkdir() {
    let temp_dir = tempfile::tempdir().unwrap();
    let r = forced(temp_dir.path());

    assert_eq!(r.repo_dir("objects", false).unwrap(), None);
    assert!(!temp_dir.path().join(".git").exists());
}

#[test]
fn repo_dir_mkdir_creates_parents() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work_dir = temp_dir.path();
    let r = forced(work_dir);

    let expected = work_dir.join(".git/refs/tags");
    assert_eq!(r.repo_dir("refs/tags", true).unwrap(), Some(expected.clone()));
    assert!(expected.is_dir());

    // Existing directories are returned as-is.
    assert_eq!(r.repo_dir("refs/tags", false).unwrap(), Some(expected));
}

#[test]
fn repo_dir_not_a_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work_dir = temp_dir.path();
    let r = forced(work_dir);

    fs::create_dir(work_dir.join(".git")).unwrap();
    fs::write(work_dir.join(".git/objects"), "").unwrap();

    for mkdir in &[false, true] {
        let err = r.repo_dir("objects", *mkdir).unwrap_err();
        if let Error::NotADirectory(path) = err {
            assert_eq!(path, work_dir.join(".git/objects"));
        } else {
            panic!("wrong error: {:?}", err);
        }
    }
}

#[test]
fn repo_file_does_not_create_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work_dir = temp_dir.path();
    let r = forced(work_dir);

    assert_eq!(r.repo_file("refs/heads/master", false).unwrap(), None);

    let path = r.repo_file("refs/heads/master", true).unwrap().unwrap();
    assert_eq!(path, work_dir.join(".git/refs/heads/master"));
    assert!(work_dir.join(".git/refs/heads").is_dir());
    assert!(!path.exists());
}

#[test]
fn repo_file_parent_not_a_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let work_dir = temp_dir.path();
    let r = forced(work_dir);

    fs::create_dir(work_dir.join(".git")).unwrap();
    fs::write(work_dir.join(".git/refs"), "").unwrap();

    let err = r.repo_file("refs/heads", true).unwrap_err();
    if let Error::NotADirectory(_) = err {
        // expected
    } else {
        panic!("wrong error: {:?}", err);
    }
}
