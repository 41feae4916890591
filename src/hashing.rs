//! Content hashing for chunks, files, and directory trees.
//!
//! All digests are blake3, exposed as lowercase hex strings. Hashes identify
//! content only; ordering of multi-file results is defined by the caller
//! (`hash_named_objects`) or by sorted traversal (`hash_tree`).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use blake3::Hasher;
use walkdir::WalkDir;

use crate::error::ChunkError;

/// Hex digest of an in-memory byte slice.
pub fn hash_bytes(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Hex digest of a file's content, computed in streaming fashion.
pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<String, ChunkError> {
    let mut file = File::open(path.as_ref())?;
    let mut hasher = Hasher::new();
    let mut buffer = [0; 8192];

    loop {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(hasher.finalize().to_hex().to_string())
}

/// Hashes the file objects named by `ids` inside `directory`.
///
/// Each id resolves to `directory/<id>`; digests are returned in the order
/// the ids were supplied. If any object is missing or unreadable the whole
/// call fails and no partial result is returned.
pub fn hash_named_objects<P: AsRef<Path>>(
    directory: P,
    ids: &[u64],
) -> Result<Vec<String>, ChunkError> {
    let directory = directory.as_ref();
    let mut hashes = Vec::with_capacity(ids.len());
    for id in ids {
        let path = directory.join(id.to_string());
        if !path.exists() {
            return Err(ChunkError::NotFound(path));
        }
        hashes.push(hash_file(&path)?);
    }
    Ok(hashes)
}

/// Recursively hashes every regular file under `directory`.
///
/// Entries are visited in file-name-sorted order at each level, so the output
/// order is stable across filesystems. Symlinks are not followed; they and
/// other non-regular entries are skipped. Identical files produce identical
/// digests — no deduplication is performed.
pub fn hash_tree<P: AsRef<Path>>(directory: P) -> Result<Vec<String>, ChunkError> {
    let directory = directory.as_ref();
    if !directory.exists() {
        return Err(ChunkError::NotFound(directory.to_path_buf()));
    }
    if !directory.is_dir() {
        return Err(ChunkError::NotADirectory(directory.to_path_buf()));
    }

    let mut hashes = Vec::new();
    for entry in WalkDir::new(directory).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| ChunkError::Io(e.into()))?;
        if entry.file_type().is_file() {
            hashes.push(hash_file(entry.path())?);
        }
    }
    Ok(hashes)
}
