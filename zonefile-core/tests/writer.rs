use std::fs;

use tempfile::tempdir;
use zonefile_core::{ensure_output_dir, write_zone, Manifest, Record, WriteError, Zone};

#[test]
fn writes_zone_file_named_after_the_zone() {
    let dir = tempdir().expect("tempdir");
    let mut zone = Zone::new("example.com");
    zone.push(Record::A {
        name: "host1".to_string(),
        address: "10.20.30.40".to_string(),
    });

    let path = write_zone(dir.path(), &zone).expect("write zone");
    assert_eq!(path, dir.path().join("example.com"));

    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(contents, zone.render());
}

#[test]
fn rewriting_a_zone_overwrites_deterministically() {
    let dir = tempdir().expect("tempdir");
    let mut zone = Zone::new("example.com");
    zone.push(Record::A {
        name: "host1".to_string(),
        address: "10.20.30.40".to_string(),
    });

    let first = write_zone(dir.path(), &zone).expect("first write");
    let before = fs::read(&first).expect("read first");
    let second = write_zone(dir.path(), &zone).expect("second write");
    let after = fs::read(&second).expect("read second");

    assert_eq!(before, after);
}

#[test]
fn refuses_zone_names_outside_the_output_directory() {
    let dir = tempdir().expect("tempdir");
    let zone = Zone::new("../escape");

    match write_zone(dir.path(), &zone) {
        Err(WriteError::UnsafeZoneName(name)) => assert_eq!(name, "../escape"),
        other => panic!("expected UnsafeZoneName, got {other:?}"),
    }
    assert!(!dir.path().parent().expect("parent").join("escape").exists());
}

#[test]
fn ensure_output_dir_creates_missing_parents() {
    let dir = tempdir().expect("tempdir");
    let nested = dir.path().join("a").join("b");

    ensure_output_dir(&nested).expect("create nested");
    assert!(nested.is_dir());

    // Idempotent on an existing directory.
    ensure_output_dir(&nested).expect("create again");
}

#[cfg(unix)]
#[test]
fn ensure_output_dir_sets_owner_and_group_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("bindconf");
    ensure_output_dir(&out).expect("create");

    // Umask may strip group/other bits; the owner must keep full access.
    let mode = fs::metadata(&out).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o700, 0o700);
}

#[test]
fn manifest_write_lands_inside_the_directory() {
    let dir = tempdir().expect("tempdir");
    let mut manifest = Manifest::default();
    manifest.push("example.com");

    let path = manifest.write(dir.path()).expect("write manifest");
    assert_eq!(path, dir.path().join("named.zones"));
    let contents = fs::read_to_string(path).expect("read back");
    assert!(contents.contains("zone \"example.com\""));
}
