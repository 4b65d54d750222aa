//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::Path;

use eodata::checksum::Checksum;
use eodata::edf::EdfWriter;
use eodata::{Document, Edf, FileId};
use tempfile::TempDir;

/// Lines of a small but realistic data folder
pub fn sample_lines(id: FileId) -> Vec<String> {
    let lines: &[&str] = match id.get() {
        1 => &["Endless Online", "Made by Vult-r", "Thanks for playing!"],
        2 => &["placeholder"],
        3 => &["darn", "heck", "fiddlesticks"],
        4 => &["Town theme", "Battle theme"],
        5 => &["Welcome to Aeven", "You found a key", "The door is locked"],
        6 => &["Hello traveller", "Need help?"],
        7 => &["Welkom in Aeven", "Je vond een sleutel"],
        8 => &["Hallo reiziger"],
        9 => &["V\u{E4}lkommen till Aeven"],
        10 => &["Hej resen\u{E4}r", "Beh\u{F6}ver du hj\u{E4}lp?"],
        11 => &["Bem-vindo a Aeven", "Voc\u{EA} achou uma chave", "A porta est\u{E1} trancada"],
        12 => &["Ol\u{E1} viajante"],
        _ => &[],
    };
    lines.iter().map(|s| s.to_string()).collect()
}

/// Sample document with a checksum that matches its credits file
pub fn sample_document() -> Document {
    let edfs = FileId::all()
        .map(|id| Edf::new(id, sample_lines(id)))
        .collect();
    let mut document = Document::from_edfs(edfs).unwrap();

    let credits = encoded(document.get(FileId::CREDITS));
    let checksum = Checksum::from_bytes(&credits).to_string();
    document
        .get_mut(FileId::CHECKSUM)
        .replace_lines(vec![checksum]);
    document
}

/// On-disk bytes the writer produces for `edf`
pub fn encoded(edf: &Edf) -> Vec<u8> {
    let dir = TempDir::new().unwrap();
    let path = EdfWriter::new(dir.path()).write(edf).unwrap();
    std::fs::read(path).unwrap()
}

/// Temporary folder holding every file of `document`, written verbatim
pub fn write_folder(document: &Document) -> TempDir {
    let dir = TempDir::new().unwrap();
    let writer = EdfWriter::new(dir.path());
    for edf in document.iter() {
        writer.write(edf).unwrap();
    }
    dir
}

/// Temporary folder holding the sample document
pub fn sample_folder() -> TempDir {
    write_folder(&sample_document())
}

pub fn read_file(folder: &Path, id: FileId) -> Vec<u8> {
    std::fs::read(folder.join(id.file_name())).unwrap()
}

pub fn id(n: u8) -> FileId {
    FileId::new(n).unwrap()
}
