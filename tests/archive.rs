use std::collections::HashSet;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use pybundle::archive::write_archive;
use pybundle::walk::Scanner;
use tempfile::TempDir;

fn touch(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn archive_entries(archive: &Path) -> HashSet<PathBuf> {
    let file = File::open(archive).unwrap();
    let mut tar = tar::Archive::new(GzDecoder::new(file));
    tar.entries()
        .unwrap()
        .map(|entry| entry.unwrap().path().unwrap().into_owned())
        .collect()
}

#[test]
fn bundles_exactly_the_collected_files() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("proj");
    touch(&root.join("a.py"), "print('a')");
    touch(&root.join("b.ipynb"), "{\"cells\": []}");
    touch(&root.join("c.txt"), "not bundled");
    touch(&root.join("sub/d.py"), "print('d')");

    let files = Scanner::default().scan(&root).unwrap();
    let out = tmp.path().join("proj.tar.gz");
    write_archive(&root, &files, &out).unwrap();

    let expected: HashSet<PathBuf> = [
        PathBuf::from("a.py"),
        PathBuf::from("b.ipynb"),
        PathBuf::from("sub/d.py"),
    ]
    .into_iter()
    .collect();
    assert_eq!(archive_entries(&out), expected);
}

#[test]
fn archived_contents_round_trip() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("proj");
    touch(&root.join("a.py"), "import os\n");

    let files = Scanner::default().scan(&root).unwrap();
    let out = tmp.path().join("out.tar.gz");
    write_archive(&root, &files, &out).unwrap();

    let file = File::open(&out).unwrap();
    let mut tar = tar::Archive::new(GzDecoder::new(file));
    let unpacked = tmp.path().join("unpacked");
    tar.unpack(&unpacked).unwrap();
    assert_eq!(
        fs::read_to_string(unpacked.join("a.py")).unwrap(),
        "import os\n"
    );
}

#[test]
fn empty_scan_produces_an_empty_archive() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("proj");
    fs::create_dir_all(&root).unwrap();

    let out = tmp.path().join("out.tar.gz");
    write_archive(&root, &[], &out).unwrap();
    assert!(archive_entries(&out).is_empty());
}

#[test]
fn unwritable_output_path_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("proj");
    touch(&root.join("a.py"), "");

    let files = Scanner::default().scan(&root).unwrap();
    let out = tmp.path().join("no_such_dir/out.tar.gz");
    assert!(write_archive(&root, &files, &out).is_err());
}
