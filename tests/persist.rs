use chunkdir::{cache_data, ensure_dir, load_json, restore_data, save_json, ChunkError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Manifest {
    name: String,
    chunk_size: usize,
    hashes: Vec<String>,
}

#[test]
fn test_ensure_dir_creates_missing_parents() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("a").join("b").join("c");

    ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());

    // already existing is fine
    ensure_dir(&nested).unwrap();
}

#[test]
fn test_ensure_dir_rejects_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("occupied");
    fs::write(&path, b"a file").unwrap();

    let err = ensure_dir(&path).unwrap_err();
    assert!(matches!(err, ChunkError::NotADirectory(_)));
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("manifest.json");
    let manifest = Manifest {
        name: "backup".to_string(),
        chunk_size: 1_000_000,
        hashes: vec!["abc".to_string(), "def".to_string()],
    };

    save_json(&manifest, &path).unwrap();
    let loaded: Manifest = load_json(&path).unwrap();
    assert_eq!(loaded, manifest);
}

#[test]
/// save_json creates the parent directory of the target path.
fn test_save_json_creates_parent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let mut mapping = HashMap::new();
    mapping.insert("part0000".to_string(), "hash".to_string());

    save_json(&mapping, &path).unwrap();
    let loaded: HashMap<String, String> = load_json(&path).unwrap();
    assert_eq!(loaded, mapping);
}

#[test]
fn test_load_json_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_json::<Manifest, _>(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ChunkError::NotFound(_)));
}

#[test]
fn test_load_json_malformed_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, b"{ not json").unwrap();

    let err = load_json::<Manifest, _>(&path).unwrap_err();
    assert!(matches!(err, ChunkError::Json { .. }));
}

#[test]
fn test_binary_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cache").join("state.bin");
    let manifest = Manifest {
        name: "cached".to_string(),
        chunk_size: 4096,
        hashes: vec!["0011".to_string()],
    };

    cache_data(&manifest, &path).unwrap();
    let restored: Manifest = restore_data(&path).unwrap();
    assert_eq!(restored, manifest);
}

#[test]
fn test_restore_data_missing_file() {
    let dir = tempdir().unwrap();
    let err = restore_data::<Manifest, _>(dir.path().join("nope.bin")).unwrap_err();
    assert!(matches!(err, ChunkError::NotFound(_)));
}

#[test]
fn test_restore_data_corrupt_payload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("corrupt.bin");
    // a length prefix far larger than the file itself
    fs::write(&path, [0xffu8; 8]).unwrap();

    let err = restore_data::<String, _>(&path).unwrap_err();
    assert!(matches!(err, ChunkError::Bin { .. }));
}
