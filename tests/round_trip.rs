//! Load/save fidelity tests
//!
//! A folder that is opened and saved without edits must come back
//! unchanged, both as decoded lines and as bytes on disk.

mod common;

use common::*;
use eodata::{Document, FileId, Session};
use tempfile::TempDir;

#[test]
fn test_read_matches_written_lines() {
    let folder = sample_folder();
    let document = Document::read(folder.path()).unwrap();

    for id in FileId::all() {
        if id == FileId::CHECKSUM {
            continue;
        }
        assert_eq!(document.get(id).lines(), sample_lines(id).as_slice(), "{}", id);
    }
}

#[test]
fn test_unedited_save_is_byte_identical() {
    let folder = sample_folder();
    let before: Vec<Vec<u8>> = FileId::all()
        .map(|id| read_file(folder.path(), id))
        .collect();

    let mut session = Session::default();
    session.open_folder(folder.path()).unwrap();
    session.save().unwrap();

    for (id, original) in FileId::all().zip(before) {
        assert_eq!(read_file(folder.path(), id), original, "{} changed", id);
    }
}

#[test]
fn test_scrambled_files_are_not_plain_text() {
    let folder = sample_folder();

    let credits = read_file(folder.path(), FileId::CREDITS);
    assert!(credits.starts_with(b"Endless Online\r\n"));

    let game = read_file(folder.path(), id(5));
    assert!(!game.starts_with(b"Welcome"));
}

#[test]
fn test_lf_folder_is_rewritten_with_crlf() {
    let folder = TempDir::new().unwrap();
    let source = sample_folder();
    for id in FileId::all() {
        let bytes = read_file(source.path(), id);
        let text = String::from_utf8_lossy(&bytes).replace("\r\n", "\n");
        // Only the plain credits file is safe to rewrite as text
        if id == FileId::CREDITS {
            std::fs::write(folder.path().join(id.file_name()), text).unwrap();
        } else {
            std::fs::write(folder.path().join(id.file_name()), bytes).unwrap();
        }
    }

    let original = Document::read(folder.path()).unwrap();
    let mut document = original.clone();
    document.save(folder.path()).unwrap();

    assert_eq!(
        read_file(folder.path(), FileId::CREDITS),
        b"Endless Online\r\nMade by Vult-r\r\nThanks for playing!".to_vec()
    );
    let reread = Document::read(folder.path()).unwrap();
    assert_eq!(
        reread.get(FileId::CREDITS).lines(),
        original.get(FileId::CREDITS).lines()
    );
}

#[test]
fn test_trailing_terminator_survives() {
    let folder = sample_folder();
    let path = folder.path().join(id(4).file_name());
    let mut bytes = std::fs::read(&path).unwrap();
    bytes.extend_from_slice(b"\r\n");
    std::fs::write(&path, &bytes).unwrap();

    let mut document = Document::read(folder.path()).unwrap();
    assert_eq!(document.get(id(4)).lines().last().map(String::as_str), Some(""));

    document.save(folder.path()).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_save_into_new_folder_round_trips() {
    let folder = sample_folder();
    let dest = TempDir::new().unwrap();
    let nested = dest.path().join("copy").join("data");

    let mut document = Document::read(folder.path()).unwrap();
    let written = document.save_into(&nested).unwrap();
    assert_eq!(written.len(), FileId::COUNT);

    assert_eq!(Document::read(&nested).unwrap(), document);
}
