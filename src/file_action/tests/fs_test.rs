use crate::file_action::impl_fs::FileActionFs;
use crate::file_action::interface::{FileAction, FileActionError};
use crate::library::logger::impl_fake::LoggerFake;
use crate::sorter::routing::RoutingAction;
use std::ffi::OsStr;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

fn executor() -> FileActionFs {
    FileActionFs::new(Arc::new(LoggerFake::new()))
}

#[test]
fn test_move_creates_directory_and_moves() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("IMG_0001.JPG"), b"deer").unwrap();

    executor()
        .execute(
            root.path(),
            OsStr::new("IMG_0001.JPG"),
            &RoutingAction::MoveTo("deer".to_string()),
        )
        .unwrap();

    assert!(!root.path().join("IMG_0001.JPG").exists());
    assert_eq!(
        fs::read(root.path().join("deer").join("IMG_0001.JPG")).unwrap(),
        b"deer"
    );
}

#[test]
fn test_move_into_existing_directory() {
    let root = tempdir().unwrap();
    fs::create_dir(root.path().join("_lowq")).unwrap();
    fs::write(root.path().join("blurry.jpg"), b"x").unwrap();

    executor()
        .execute(
            root.path(),
            OsStr::new("blurry.jpg"),
            &RoutingAction::MoveTo("_lowq".to_string()),
        )
        .unwrap();

    assert!(root.path().join("_lowq").join("blurry.jpg").exists());
}

#[test]
fn test_move_refuses_to_overwrite() {
    let root = tempdir().unwrap();
    fs::create_dir(root.path().join("fox")).unwrap();
    fs::write(root.path().join("fox").join("a.jpg"), b"old").unwrap();
    fs::write(root.path().join("a.jpg"), b"new").unwrap();

    let result = executor().execute(
        root.path(),
        OsStr::new("a.jpg"),
        &RoutingAction::MoveTo("fox".to_string()),
    );

    assert!(matches!(result, Err(FileActionError::DestinationExists(_))));
    assert_eq!(fs::read(root.path().join("a.jpg")).unwrap(), b"new");
    assert_eq!(fs::read(root.path().join("fox").join("a.jpg")).unwrap(), b"old");
}

#[test]
fn test_fanout_links_everywhere_then_removes_original() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("clip.mp4"), b"video").unwrap();

    executor()
        .execute(
            root.path(),
            OsStr::new("clip.mp4"),
            &RoutingAction::HardlinkFanout(vec!["deer".to_string(), "fox".to_string()]),
        )
        .unwrap();

    assert!(!root.path().join("clip.mp4").exists());
    assert_eq!(
        fs::read(root.path().join("deer").join("clip.mp4")).unwrap(),
        b"video"
    );
    assert_eq!(
        fs::read(root.path().join("fox").join("clip.mp4")).unwrap(),
        b"video"
    );
}

#[test]
fn test_failed_fanout_rolls_back_links_and_keeps_original() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("clip.mp4"), b"video").unwrap();
    // a plain file where the second directory should go
    fs::write(root.path().join("fox"), b"in the way").unwrap();

    let result = executor().execute(
        root.path(),
        OsStr::new("clip.mp4"),
        &RoutingAction::HardlinkFanout(vec!["deer".to_string(), "fox".to_string()]),
    );

    assert!(matches!(
        result,
        Err(FileActionError::CreateDirectory { .. })
    ));
    assert!(root.path().join("clip.mp4").exists());
    assert!(!root.path().join("deer").join("clip.mp4").exists());
}

#[test]
fn test_names_that_escape_the_root_are_rejected() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("a.jpg"), b"x").unwrap();

    for name in ["..", ".", "", "a/b", "../up"] {
        let result = executor().execute(
            root.path(),
            OsStr::new("a.jpg"),
            &RoutingAction::MoveTo(name.to_string()),
        );
        assert!(
            matches!(result, Err(FileActionError::InvalidDirectoryName(_))),
            "{:?} should be rejected",
            name
        );
    }
    assert!(root.path().join("a.jpg").exists());
}

#[test]
fn test_fanout_validates_every_name_before_linking() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("clip.mp4"), b"video").unwrap();

    let result = executor().execute(
        root.path(),
        OsStr::new("clip.mp4"),
        &RoutingAction::HardlinkFanout(vec!["deer".to_string(), "..".to_string()]),
    );

    assert!(matches!(result, Err(FileActionError::InvalidDirectoryName(_))));
    assert!(!root.path().join("deer").exists());
}
