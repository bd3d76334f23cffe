use galmir_fs::{AtomicWriteOptions, atomic_write, ensure_dir, sanitize_component};
use tempfile::tempdir;

#[test]
fn test_atomic_write_replaces_existing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("01_IMG7.jpg");

    std::fs::write(&path, "stale").unwrap();

    atomic_write(&path, b"fresh content", AtomicWriteOptions::new()).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"fresh content");
}

#[test]
fn test_custom_temp_naming_is_cleaned_up() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cover.jpg");

    let options = AtomicWriteOptions::new().prefix("~").suffix(".part");
    atomic_write(&path, b"cover", options).unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("cover.jpg")]);
}

#[test]
fn test_name_at_the_length_limit_is_writable() {
    let dir = tempdir().unwrap();
    let name = format!("00_{}.jpg", "x".repeat(255 - "00_.jpg".len()));
    assert_eq!(name.len(), 255);
    let path = dir.path().join(&name);

    atomic_write(&path, b"long", AtomicWriteOptions::new()).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"long");
}

#[test]
fn test_sanitized_names_stay_inside_root() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("mirror");

    for name in ["..", "a/../../b", "Trips/2020"] {
        let child = root.join(&*sanitize_component(name));
        ensure_dir(&child).unwrap();
        assert_eq!(child.parent(), Some(root.as_path()));
    }
}
