//! Small persistence helpers: JSON documents, binary caches, and directory
//! creation. Each call either succeeds or fails with a typed error; nothing
//! is retried or logged here.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ChunkError;

/// Ensures `path` exists as a directory, creating it and any missing parents.
///
/// Fails with a validation error if `path` already exists as a regular file.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<(), ChunkError> {
    let path = path.as_ref();
    if path.is_file() {
        return Err(ChunkError::NotADirectory(path.to_path_buf()));
    }
    if !path.is_dir() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Loads a JSON document from `path`.
pub fn load_json<T, P>(path: P) -> Result<T, ChunkError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(ChunkError::NotFound(path.to_path_buf()));
    }
    let reader = BufReader::new(File::open(path)?);
    serde_json::from_reader(reader).map_err(|source| ChunkError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Saves `value` as a JSON document at `path`, creating the parent directory
/// if missing.
pub fn save_json<T, P>(value: &T, path: P) -> Result<(), ChunkError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(writer, value).map_err(|source| ChunkError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `value` in binary form at `path`, creating the parent directory
/// if missing.
pub fn cache_data<T, P>(value: &T, path: P) -> Result<(), ChunkError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    let writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(writer, value).map_err(|source| ChunkError::Bin {
        path: path.to_path_buf(),
        source,
    })
}

/// Deserializes a value previously written by [`cache_data`].
pub fn restore_data<T, P>(path: P) -> Result<T, ChunkError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(ChunkError::NotFound(path.to_path_buf()));
    }
    let reader = BufReader::new(File::open(path)?);
    bincode::deserialize_from(reader).map_err(|source| ChunkError::Bin {
        path: path.to_path_buf(),
        source,
    })
}
