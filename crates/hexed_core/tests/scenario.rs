//! End-to-end editing on a real file.

use hexed_core::search::{search, spawn_search};
use hexed_core::{
    ByteStore, CoreError, EditorConfig, EditorSession, Pattern, PrimitiveDecoder, Selection,
};
use hexed_storage::StorageError;
use std::path::Path;
use tempfile::TempDir;

const ORIGINAL: [u8; 5] = [0x01, 0x02, 0x03, 0x04, 0x05];

fn fresh(dir: &TempDir) -> EditorSession {
    let path = dir.path().join("doc.bin");
    std::fs::write(&path, ORIGINAL).unwrap();
    EditorSession::open(&path, EditorConfig::default()).unwrap()
}

#[test]
fn insert_with_shift() {
    let dir = TempDir::new().unwrap();
    let mut session = fresh(&dir);

    session
        .store_mut()
        .insert_bytes(2, &[0xAA, 0xBB], false)
        .unwrap();
    assert_eq!(
        session.store().read_all().unwrap(),
        vec![0x01, 0x02, 0xAA, 0xBB, 0x03, 0x04, 0x05]
    );
    assert_eq!(session.len().unwrap(), 7);
}

#[test]
fn delete_with_shift() {
    let dir = TempDir::new().unwrap();
    let mut session = fresh(&dir);

    let removed = session.store_mut().delete_bytes(1, 2, true).unwrap();
    assert_eq!(removed, 2);
    assert_eq!(session.store().read_all().unwrap(), vec![0x01, 0x04, 0x05]);
}

#[test]
fn search_without_mask() {
    let dir = TempDir::new().unwrap();
    let mut session = fresh(&dir);

    let matches = session.search(&Pattern::new(vec![0x02, 0x03], None)).unwrap();
    assert_eq!(matches.offsets(), &[1, 2]);
}

#[test]
fn edits_survive_close_and_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.bin");
    std::fs::write(&path, ORIGINAL).unwrap();

    let mut session = EditorSession::open(&path, EditorConfig::default()).unwrap();
    session.set_cell_hex(0, 0, "ff").unwrap();
    session.store_mut().delete_bytes(3, 10, false).unwrap();
    session.close().unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), vec![0xFF, 0x02, 0x03, 0x00, 0x00]);
}

#[test]
fn second_session_on_same_file_is_refused() {
    let dir = TempDir::new().unwrap();
    let first = fresh(&dir);

    let second = EditorSession::open(&dir.path().join("doc.bin"), EditorConfig::default());
    assert!(matches!(
        second,
        Err(CoreError::Storage(StorageError::Locked { .. }))
    ));
    drop(first);
}

#[test]
fn missing_file_honours_create_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.bin");

    assert!(EditorSession::open(&path, EditorConfig::default()).is_err());

    let session = EditorSession::open(&path, EditorConfig::new().create_if_missing(true)).unwrap();
    assert!(session.is_empty().unwrap());
    assert!(Path::new(&path).exists());
}

#[test]
fn oversize_documents_cannot_be_searched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.bin");
    std::fs::write(&path, [0u8; 32]).unwrap();

    let config = EditorConfig::new().max_materialize(16);
    let mut session = EditorSession::open(&path, config).unwrap();
    let result = session.search(&Pattern::exact(vec![0]));
    assert!(matches!(
        result,
        Err(CoreError::Storage(StorageError::Oversize { len: 32, limit: 16 }))
    ));
}

#[test]
fn clipboard_round_trip_between_sessions_cells() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.bin");
    std::fs::write(&path, (0u8..16).collect::<Vec<_>>()).unwrap();
    let config = EditorConfig::new().bytes_per_row(4);
    let mut session = EditorSession::open(&path, config).unwrap();

    let copied = session.selection(&[0, 1], &[0, 1]).unwrap();
    assert_eq!(copied, Selection::from(vec![vec![0, 1], vec![4, 5]]));

    session.paste_replace(2, 2, &copied).unwrap();
    assert_eq!(session.cell(2, 2).unwrap(), Some(0));
    assert_eq!(session.cell(2, 3).unwrap(), Some(1));
    assert_eq!(session.cell(3, 2).unwrap(), Some(4));
    assert_eq!(session.cell(3, 3).unwrap(), Some(5));
    assert_eq!(session.len().unwrap(), 16);
}

#[test]
fn decoding_a_selection_from_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.bin");
    std::fs::write(&path, [0xEF, 0xBE, 0xAD, 0xDE]).unwrap();
    let session = EditorSession::open(&path, EditorConfig::default()).unwrap();

    let selection = session.selection(&[0], &[0, 1, 2, 3]).unwrap();
    let decoder = PrimitiveDecoder::new(&selection);
    assert_eq!(decoder.decode_u32().unwrap(), 3_735_928_559);
    assert_eq!(decoder.decode_f32().unwrap().to_bits(), 0xDEAD_BEEF);
    assert!(decoder.decode_i64().is_err());
}

#[test]
fn worker_search_matches_inline_search() {
    let data: Vec<u8> = (0..4096u32).map(|i| (i % 7) as u8).collect();
    let pattern = Pattern::new(vec![0x03, 0x04], Some(&[0xFF, 0xFE][..]));

    let inline = search(&data, &pattern);
    let threaded = spawn_search(data, pattern).unwrap().wait().unwrap();
    assert_eq!(inline, threaded);
    assert!(!inline.is_empty());
}
