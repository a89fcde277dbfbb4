//! Property tests: block-buffered file edits match the in-memory reference.

use hexed_storage::{ByteStore, FileStore, InMemoryStore, StoreOptions};
use proptest::prelude::*;
use tempfile::TempDir;

#[derive(Debug, Clone)]
enum Edit {
    Insert { offset: u64, data: Vec<u8>, overwrite: bool },
    Delete { offset: u64, count: u64, shift: bool },
    Write { offset: u64, value: u8 },
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0u64..80, prop::collection::vec(any::<u8>(), 0..12), any::<bool>()).prop_map(
            |(offset, data, overwrite)| Edit::Insert {
                offset,
                data,
                overwrite
            }
        ),
        (0u64..80, 0u64..20, any::<bool>()).prop_map(|(offset, count, shift)| Edit::Delete {
            offset,
            count,
            shift
        }),
        (0u64..80, any::<u8>()).prop_map(|(offset, value)| Edit::Write { offset, value }),
    ]
}

fn apply(store: &mut dyn ByteStore, edit: &Edit) -> bool {
    match edit {
        Edit::Insert {
            offset,
            data,
            overwrite,
        } => store.insert_bytes(*offset, data, *overwrite).is_ok(),
        Edit::Delete {
            offset,
            count,
            shift,
        } => store.delete_bytes(*offset, *count, *shift).is_ok(),
        Edit::Write { offset, value } => store.write_byte(*offset, *value).is_ok(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn file_store_matches_memory_store(
        initial in prop::collection::vec(any::<u8>(), 0..64),
        edits in prop::collection::vec(edit_strategy(), 1..16),
        block in 1usize..9,
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.bin");
        std::fs::write(&path, &initial).unwrap();

        let options = StoreOptions::new().shift_buffer_size(block);
        let mut file = FileStore::open(&path, options).unwrap();
        let mut memory = InMemoryStore::with_data(initial);

        for edit in &edits {
            let file_ok = apply(&mut file, edit);
            let memory_ok = apply(&mut memory, edit);
            prop_assert_eq!(file_ok, memory_ok);
            prop_assert_eq!(file.read_all().unwrap(), memory.data());
        }
    }

    #[test]
    fn read_byte_matches_content(data in prop::collection::vec(any::<u8>(), 1..128)) {
        let store = InMemoryStore::with_data(data.clone());
        for (offset, byte) in data.iter().enumerate() {
            prop_assert_eq!(store.read_byte(offset as u64).unwrap(), *byte);
        }
    }

    #[test]
    fn shifting_insert_splices(
        data in prop::collection::vec(any::<u8>(), 0..64),
        inserted in prop::collection::vec(any::<u8>(), 0..16),
        at in any::<prop::sample::Index>(),
    ) {
        let offset = at.index(data.len() + 1);
        let mut store = InMemoryStore::with_data(data.clone());
        store.insert_bytes(offset as u64, &inserted, false).unwrap();

        let mut expected = data[..offset].to_vec();
        expected.extend_from_slice(&inserted);
        expected.extend_from_slice(&data[offset..]);
        prop_assert_eq!(store.len().unwrap(), (data.len() + inserted.len()) as u64);
        prop_assert_eq!(store.read_all().unwrap(), expected);
    }

    #[test]
    fn shifting_delete_removes_clamped_range(
        data in prop::collection::vec(any::<u8>(), 1..64),
        at in any::<prop::sample::Index>(),
        count in 0usize..80,
    ) {
        let offset = at.index(data.len());
        let mut store = InMemoryStore::with_data(data.clone());
        let deleted = store.delete_bytes(offset as u64, count as u64, true).unwrap();

        let end = (offset + count).min(data.len());
        let mut expected = data[..offset].to_vec();
        expected.extend_from_slice(&data[end..]);
        prop_assert_eq!(deleted as usize, end - offset);
        prop_assert_eq!(store.read_all().unwrap(), expected);
    }

    #[test]
    fn zero_fill_delete_keeps_length(
        data in prop::collection::vec(any::<u8>(), 1..64),
        at in any::<prop::sample::Index>(),
        count in 0usize..80,
    ) {
        let offset = at.index(data.len());
        let mut store = InMemoryStore::with_data(data.clone());
        store.delete_bytes(offset as u64, count as u64, false).unwrap();

        let content = store.read_all().unwrap();
        let end = (offset + count).min(data.len());
        prop_assert_eq!(content.len(), data.len());
        prop_assert!(content[offset..end].iter().all(|&b| b == 0));
        prop_assert_eq!(&content[..offset], &data[..offset]);
        prop_assert_eq!(&content[end..], &data[end..]);
    }
}
