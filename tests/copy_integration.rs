use std::fs;

use regex::Regex;
use tempfile::tempdir;

use fs_extended::{cat_sync, checksum, copy_recursive_pattern, copy_recursive_sync, copy_sync};

/// copy_sync preserves content exactly: source and destination digest the same.
#[test]
fn copy_sync_is_content_preserving() {
    let root = tempdir().expect("tempdir");
    let src = root.path().join("src.txt");
    let dst = root.path().join("dst.txt");
    fs::write(&src, "the quick brown fox").unwrap();

    copy_sync(&src, &dst);

    assert_eq!(checksum(&cat_sync(&src)), checksum(&cat_sync(&dst)));
}

/// copy_recursive_sync lands the whole tree under target/<basename(source)>.
#[test]
fn copy_recursive_sync_copies_tree_under_basename() {
    let root = tempdir().expect("tempdir");
    let src = root.path().join("project");
    fs::create_dir_all(src.join("sub")).unwrap();
    fs::write(src.join("readme.md"), "top").unwrap();
    fs::write(src.join("sub").join("data.bin"), "deep").unwrap();

    let target = root.path().join("backup");
    fs::create_dir(&target).unwrap();

    copy_recursive_sync(&src, &target);

    let copied = target.join("project");
    assert!(copied.is_dir());
    assert_eq!(fs::read_to_string(copied.join("readme.md")).unwrap(), "top");
    assert_eq!(
        fs::read_to_string(copied.join("sub").join("data.bin")).unwrap(),
        "deep"
    );
    // Source untouched.
    assert!(src.join("readme.md").exists());
}

/// A single-file source copies into the target directory under its own name.
#[test]
fn copy_recursive_sync_single_file() {
    let root = tempdir().expect("tempdir");
    let src = root.path().join("lone.txt");
    fs::write(&src, "solo").unwrap();
    let target = root.path().join("out");
    fs::create_dir(&target).unwrap();

    copy_recursive_sync(&src, &target);

    assert_eq!(fs::read_to_string(target.join("lone.txt")).unwrap(), "solo");
}

/// copy_recursive_pattern mirrors rm_pattern's matching policy: names only,
/// shallow, directories recursed once matched.
#[test]
fn copy_recursive_pattern_copies_matches_only() {
    let root = tempdir().expect("tempdir");
    let src = root.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a.json"), "{}").unwrap();
    fs::write(src.join("b.txt"), "skip").unwrap();
    let nested = src.join("conf.json");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("inner.txt"), "nested").unwrap();

    let target = root.path().join("dst");
    fs::create_dir(&target).unwrap();

    copy_recursive_pattern(&src, &target, &Regex::new(r"\.json$").unwrap());

    assert_eq!(fs::read_to_string(target.join("a.json")).unwrap(), "{}");
    assert!(
        !target.join("b.txt").exists(),
        "non-matching file must not be copied"
    );
    assert_eq!(
        fs::read_to_string(target.join("conf.json").join("inner.txt")).unwrap(),
        "nested"
    );
}
