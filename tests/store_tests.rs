use std::fs;
use std::path::PathBuf;

use fanorona::{encode, Fanorona, GameError, SaveError, SaveFile, Session};

fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("fanorona-{}-{}.save", name, std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_missing_file_is_a_new_game() {
    let path = temp_path("missing");
    let store = SaveFile::new(&path);
    assert!(store.load().unwrap().is_none());

    let engine = Fanorona::new();
    let session = store.load_or_else(|| Session::fresh(&engine)).unwrap();
    assert_eq!(session, Session::fresh(&engine));
    assert!(!path.exists());
}

#[test]
fn test_save_then_load() {
    let path = temp_path("roundtrip");
    let store = SaveFile::new(&path);
    let engine = Fanorona::new();
    let mut session = Session::fresh(&engine);
    session.play(&engine, &["5,2", "North", "y"]).unwrap();

    store.save(&session).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), encode(&session));
    assert_eq!(store.load().unwrap(), Some(session));
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_corrupt_file_is_reported() {
    let path = temp_path("corrupt");
    fs::write(&path, "1_00011_00111").unwrap();
    let store = SaveFile::new(&path);
    let err = store.load().unwrap_err();
    assert!(matches!(
        err,
        GameError::CorruptSave(SaveError::SegmentCount { found: 3 })
    ));
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_unreadable_path_is_io_error() {
    // A directory cannot be read as a save file.
    let store = SaveFile::new(std::env::temp_dir());
    assert!(matches!(store.load(), Err(GameError::Io(_))));
}
