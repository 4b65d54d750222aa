//! Grid editing tests through an open session
//!
//! Edits go through the section grid and are checked against what ends
//! up on disk after a save.

mod common;

use common::*;
use eodata::table::{CellPosition, CellRange};
use eodata::{Document, Edf, FileId, Section, Session};

fn lines(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Game 2 grid with six English rows
fn tall_folder() -> tempfile::TempDir {
    let edfs = FileId::all()
        .map(|id| match id.get() {
            6 => Edf::new(id, lines(&["a", "b", "c", "d", "e", "f"])),
            8 => Edf::new(id, lines(&["nl-a", "nl-b"])),
            _ => Edf::new(id, sample_lines(id)),
        })
        .collect();
    write_folder(&Document::from_edfs(edfs).unwrap())
}

fn open_section(folder: &std::path::Path, section: Section) -> Session {
    let mut session = Session::default();
    session.open_folder(folder).unwrap();
    assert!(session.set_section(section));
    session
}

fn reread(folder: &std::path::Path, id: FileId) -> Vec<String> {
    Document::read(folder).unwrap().get(id).lines().to_vec()
}

#[test]
fn test_game_columns_follow_languages() {
    let folder = sample_folder();
    let session = open_section(folder.path(), Section::Game1);
    let table = session.table().unwrap();

    let labels: Vec<_> = (0..table.column_count())
        .filter_map(|col| table.column_label(col))
        .collect();
    assert_eq!(labels, ["English", "Dutch", "Swedish", "Portuguese"]);
    assert_eq!(session.row_count(), 3);
    assert_eq!(session.cell(1, 1), Some("Je vond een sleutel"));
    // Swedish has one line; the rest of its column reads as empty
    assert_eq!(session.cell(2, 2), Some(""));
    assert_eq!(session.cell(3, 0), None);
}

#[test]
fn test_credits_grid_hides_checksum_file() {
    let folder = sample_folder();
    let session = open_section(folder.path(), Section::Credits);
    assert_eq!(session.table().unwrap().column_count(), 1);
    assert_eq!(session.cell(0, 0), Some("Endless Online"));
    assert_eq!(session.cell(0, 1), None);
}

#[test]
fn test_insert_contiguous_rows_before_selection() {
    let folder = tall_folder();
    let mut session = open_section(folder.path(), Section::Game2);

    assert!(session.select_rows(2, 4));
    assert_eq!(session.insert_row_count(), 3);
    assert_eq!(session.insert_rows(), 3);
    assert_eq!(session.selected_rows(), vec![5, 6, 7]);
    session.save().unwrap();

    assert_eq!(
        reread(folder.path(), id(6)),
        lines(&["a", "b", "", "", "", "c", "d", "e", "f"])
    );
    // Dutch is padded up to the insert point
    assert_eq!(
        reread(folder.path(), id(8)),
        lines(&["nl-a", "nl-b", "", "", ""])
    );
}

#[test]
fn test_split_selection_inserts_nothing() {
    let folder = tall_folder();
    let mut session = open_section(folder.path(), Section::Game2);

    session.select_rows(2, 2);
    session.extend_selection(CellRange::rows(4, 4, 4));
    assert_eq!(session.selected_rows(), vec![2, 4]);
    assert_eq!(session.insert_row_count(), 0);
    assert_eq!(session.insert_rows(), 0);
    assert_eq!(session.row_count(), 6);
}

#[test]
fn test_insert_without_selection_appends_one_row() {
    let folder = tall_folder();
    let mut session = open_section(folder.path(), Section::Game2);

    assert_eq!(session.insert_rows(), 1);
    assert_eq!(session.row_count(), 7);
    assert_eq!(session.cell(6, 0), Some(""));
}

#[test]
fn test_remove_split_selection() {
    let folder = tall_folder();
    let mut session = open_section(folder.path(), Section::Game2);

    session.select_rows(2, 2);
    session.extend_selection(CellRange::rows(4, 4, 4));
    assert_eq!(session.remove_row_count(), 2);
    assert_eq!(session.remove_rows(), 2);
    session.save().unwrap();

    assert_eq!(reread(folder.path(), id(6)), lines(&["a", "b", "d", "f"]));
    assert_eq!(reread(folder.path(), id(8)), lines(&["nl-a", "nl-b"]));
}

#[test]
fn test_edits_stay_inside_section() {
    let folder = tall_folder();
    let mut session = open_section(folder.path(), Section::Game2);
    session.select_rows(0, 1);
    session.remove_rows();
    session.save().unwrap();

    // Game 1 and the other sections are untouched
    for n in [1, 3, 4, 5, 7, 9, 11] {
        assert_eq!(reread(folder.path(), id(n)), sample_lines(id(n)), "dat{:03}", n);
    }
}

#[test]
fn test_copy_one_section_paste_into_another() {
    let folder = sample_folder();
    let mut session = open_section(folder.path(), Section::Game1);

    session.select(CellRange::new(
        CellPosition::new(0, 0),
        CellPosition::new(1, 1),
    ));
    let payload = session.copy().unwrap();
    assert_eq!(
        payload,
        "Welcome to Aeven\tWelkom in Aeven\r\nYou found a key\tJe vond een sleutel\r\n"
    );

    session.set_section(Section::Game2);
    assert!(session.select(CellRange::cell(0, 0)));
    // Game 2 has two rows, so only those are written
    assert_eq!(session.paste(&payload), 4);
    session.save().unwrap();

    assert_eq!(
        reread(folder.path(), id(6)),
        lines(&["Welcome to Aeven", "You found a key"])
    );
    assert_eq!(
        reread(folder.path(), id(8)),
        lines(&["Welkom in Aeven", "Je vond een sleutel"])
    );
}

#[test]
fn test_cut_then_clear() {
    let folder = sample_folder();
    let mut session = open_section(folder.path(), Section::Jukebox);

    session.select(CellRange::cell(0, 0));
    assert_eq!(session.cut().as_deref(), Some("Town theme\r\n"));
    assert_eq!(session.cell(0, 0), Some(""));

    session.select_rows(1, 1);
    assert_eq!(session.clear(), 1);
    session.save().unwrap();

    assert_eq!(reread(folder.path(), id(4)), lines(&["", ""]));
}

#[test]
fn test_pasted_line_breaks_do_not_split_records() {
    let folder = sample_folder();
    let mut session = open_section(folder.path(), Section::CurseFilter);

    session.select(CellRange::cell(0, 0));
    assert_eq!(session.paste("\"two\nlines\"\r\n"), 1);
    session.save().unwrap();

    assert_eq!(
        reread(folder.path(), id(3)),
        lines(&["two lines", "heck", "fiddlesticks"])
    );
}

#[test]
fn test_copy_then_paste_in_place_changes_nothing() {
    let folder = sample_folder();
    let mut session = open_section(folder.path(), Section::Game1);
    let before = session.document().unwrap().clone();

    session.select(CellRange::new(
        CellPosition::new(0, 0),
        CellPosition::new(2, 3),
    ));
    let payload = session.copy().unwrap();
    assert_eq!(session.paste(&payload), 12);

    let after = session.document().unwrap();
    for id in FileId::all() {
        // Empty cells past a short file's end are not materialised
        assert_eq!(after.get(id).lines(), before.get(id).lines(), "{}", id);
    }
}

#[test]
fn test_paste_with_blank_line_lands_on_matching_rows() {
    let folder = sample_folder();
    let mut session = open_section(folder.path(), Section::CurseFilter);

    session.select(CellRange::cell(0, 0));
    assert_eq!(session.paste("a\r\n\r\nb\r\n"), 3);
    assert_eq!(session.cell(0, 0), Some("a"));
    assert_eq!(session.cell(1, 0), Some(""));
    assert_eq!(session.cell(2, 0), Some("b"));

    session.save().unwrap();
    assert_eq!(reread(folder.path(), id(3)), lines(&["a", "", "b"]));
}

#[test]
fn test_removing_every_row_survives_reopen() {
    let folder = sample_folder();
    let mut session = open_section(folder.path(), Section::Jukebox);

    session.select_rows(0, 1);
    assert_eq!(session.remove_rows(), 2);
    let before = session.document().unwrap().get(id(4)).lines().to_vec();
    assert_eq!(session.row_count(), 1);
    session.save().unwrap();

    assert_eq!(reread(folder.path(), id(4)), before);
    session.open_folder(folder.path()).unwrap();
    session.set_section(Section::Jukebox);
    assert_eq!(session.row_count(), 1);
}
