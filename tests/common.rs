use std::{fs, path::Path};

// Writes the `.git` tree that `minigit init` is expected to produce.
pub fn expected_layout(root: &Path) {
    let git_dir = root.join(".git");
    for dir in &["branches", "objects", "refs/tags", "refs/heads"] {
        fs::create_dir_all(git_dir.join(dir)).unwrap();
    }

    let description_txt =
        "Unnamed repository; edit this file 'description' to name the repository.\n";
    fs::write(git_dir.join("description"), description_txt).unwrap();

    fs::write(git_dir.join("HEAD"), "ref: refs/heads/master\n").unwrap();

    let config_txt = "[core]\nrepositoryformatversion = 0\nfilemode = false\nbare = false\n";
    fs::write(git_dir.join("config"), config_txt).unwrap();
}

#[allow(dead_code)]
pub fn assert_same_tree(expected: &Path, actual: &Path) {
    if dir_diff::is_different(expected, actual).unwrap() {
        panic!(
            "Directories differ:\n\n  expected: {}\n  actual:   {}\n\n",
            expected.display(),
            actual.display()
        );
    }
}
