use crate::common::{pseudo_random, temp_file_with, test_data::INSTANCE_THREE_CHUNKS};
use iscc::config::DataConfig;
use iscc::hashing::{inner_hash, leaf_hash};
use iscc::identifiers::chunk_features;
use iscc::{data_id, instance_id, IsccError};
use std::fs::File;
use std::io::{self, BufReader, Read};

#[test]
fn test_instance_id_three_chunks() {
    let data = vec![0x02u8; 128_001];
    let id = instance_id(&data[..]).unwrap();
    assert_eq!((id.code.as_str(), id.hash_hex.as_str()), INSTANCE_THREE_CHUNKS);

    // three leaves: the odd one pairs with itself
    let leaves = [
        leaf_hash(&data[..64_000]),
        leaf_hash(&data[64_000..128_000]),
        leaf_hash(&data[128_000..]),
    ];
    let top = inner_hash(
        &inner_hash(&leaves[0], &leaves[1]),
        &inner_hash(&leaves[2], &leaves[2]),
    );
    assert_eq!(id.hash_hex, hex::encode(top));
}

#[test]
fn test_instance_id_from_file_matches_memory() {
    let data = pseudo_random(200_000, 3);
    let file = temp_file_with(&data);
    let from_file = instance_id(BufReader::new(File::open(file.path()).unwrap())).unwrap();
    assert_eq!(from_file, instance_id(&data[..]).unwrap());
}

#[test]
fn test_instance_id_detects_single_byte_change() {
    let data = pseudo_random(10_000, 9);
    let mut altered = data.clone();
    altered[5_000] ^= 0x01;
    assert_ne!(
        instance_id(&data[..]).unwrap().code,
        instance_id(&altered[..]).unwrap().code
    );
}

#[test]
fn test_data_id_from_file_matches_memory() {
    let data = pseudo_random(120_000, 5);
    let file = temp_file_with(&data);
    let from_file = data_id(File::open(file.path()).unwrap()).unwrap();
    assert_eq!(from_file, data_id(&data[..]).unwrap());
    assert!(from_file.starts_with("CD"));
}

#[test]
fn test_data_id_local_edit_keeps_most_chunks() {
    let data = pseudo_random(200_000, 11);
    let mut edited = data.clone();
    edited.splice(100_000..100_000, b"inserted bytes".iter().copied());

    let config = DataConfig::default();
    let before = chunk_features(&data[..], &config).unwrap();
    let after = chunk_features(&edited[..], &config).unwrap();
    let shared = before.iter().filter(|f| after.contains(f)).count();
    assert!(shared * 10 >= before.len() * 8, "{shared} of {}", before.len());
}

#[test]
fn test_empty_streams() {
    assert_eq!(instance_id(io::empty()).unwrap().code, "CR4ATDsziWVwB");
    let empty = data_id(io::empty()).unwrap();
    assert_eq!(empty, data_id(&b""[..]).unwrap());
    assert_eq!(empty.len(), 13);
}

#[test]
fn test_reader_errors_propagate() {
    struct Broken;
    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }
    let err = instance_id(Broken).unwrap_err();
    assert!(matches!(err, IsccError::Io(ref e) if e.to_string() == "device gone"));
    assert!(matches!(data_id(Broken), Err(IsccError::Io(_))));
}
