//! Fixed-size file chunking.
//!
//! Current behavior:
//! - A file is split into numbered chunk files (`part0000`, `part0001`, ...)
//!   stored flat inside a chunk directory.
//! - Chunk indices are contiguous from 0; the first missing index marks the end
//!   of the sequence when joining.
//! - Splitting purges the previous chunk set first, so a re-split never mixes
//!   old and new chunks. Files not matching the chunk naming pattern are left
//!   alone.
//! - All I/O is synchronous and single-threaded; callers must serialize access
//!   to a chunk directory themselves.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use regex::Regex;

use crate::error::ChunkError;
use crate::hashing::hash_bytes;
use crate::persist::ensure_dir;

/// Default chunk size: 1 MB
pub const DEFAULT_CHUNK_SIZE: usize = 1_000_000;

/// Maximum number of chunks a single directory can hold. The four-digit
/// naming scheme cannot index past `part9999`; splits that would exceed this
/// are rejected rather than silently widening the field.
pub const MAX_CHUNKS: usize = 10_000;

/// Returns the file name for the chunk at `index`, e.g. 0 -> `part0000`,
/// 12 -> `part0012`.
///
/// Indices above 9999 fall outside the on-disk naming contract;
/// [`split_file`] refuses to produce them.
pub fn chunk_file_name(index: usize) -> String {
    format!("part{:04}", index)
}

/// Deletes every chunk file directly inside `chunk_dir`.
///
/// Only names matching the naming scheme exactly (`part` followed by four
/// digits) are removed; everything else, including names like `part000`,
/// `part00001` or `Part0000`, is preserved. The listing is non-recursive.
pub fn delete_chunk_files<P: AsRef<Path>>(chunk_dir: P) -> Result<(), ChunkError> {
    let chunk_dir = chunk_dir.as_ref();
    let pattern = Regex::new(r"^part[0-9]{4}$").unwrap();
    for entry in fs::read_dir(chunk_dir)? {
        let entry = entry?;
        if let Some(name) = entry.file_name().to_str() {
            if pattern.is_match(name) {
                debug!("Removing stale chunk {:?}", entry.path());
                fs::remove_file(entry.path())?;
            }
        }
    }
    Ok(())
}

/// Split `file_path` into chunks of `chunk_size` bytes inside `out_dir`,
/// returning the number of chunks written.
///
/// `out_dir` is created (with parents) if missing. Any chunk files from a
/// previous split are deleted first; other files in `out_dir` are untouched.
/// The final chunk may be shorter than `chunk_size`; an empty source file
/// produces no chunks at all.
pub fn split_file<P, Q>(file_path: P, out_dir: Q, chunk_size: usize) -> Result<usize, ChunkError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    split_into(file_path.as_ref(), out_dir.as_ref(), chunk_size, |_, _| ())
}

/// Split `file_path` into chunks like [`split_file`], additionally returning
/// the hex digest of each chunk, keyed by the chunk's path, in creation order.
///
/// Each digest is computed from the in-memory block as it is written, so it
/// matches what [`crate::hashing::hash_file`] would later report for the
/// chunk file on disk.
pub fn split_file_with_hashes<P, Q>(
    file_path: P,
    out_dir: Q,
    chunk_size: usize,
) -> Result<Vec<(PathBuf, String)>, ChunkError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut hashes = Vec::new();
    split_into(file_path.as_ref(), out_dir.as_ref(), chunk_size, |path, block| {
        hashes.push((path.to_path_buf(), hash_bytes(block)));
    })?;
    Ok(hashes)
}

/// Shared split loop; `sink` observes each chunk after it has been written.
fn split_into<F>(
    file_path: &Path,
    out_dir: &Path,
    chunk_size: usize,
    mut sink: F,
) -> Result<usize, ChunkError>
where
    F: FnMut(&Path, &[u8]),
{
    if !file_path.exists() {
        return Err(ChunkError::NotFound(file_path.to_path_buf()));
    }
    if !file_path.is_file() {
        return Err(ChunkError::NotAFile(file_path.to_path_buf()));
    }
    if chunk_size == 0 {
        return Err(ChunkError::InvalidChunkSize);
    }
    ensure_dir(out_dir)?;

    delete_chunk_files(out_dir)?;

    let mut source = File::open(file_path)?;
    let mut buf = vec![0u8; chunk_size];
    let mut part_num = 0usize;
    loop {
        let n = read_block(&mut source, &mut buf)?;
        if n == 0 {
            break;
        }
        if part_num == MAX_CHUNKS {
            return Err(ChunkError::TooManyChunks { limit: MAX_CHUNKS });
        }
        let chunk_path = out_dir.join(chunk_file_name(part_num));
        let mut chunk = File::create(&chunk_path)?;
        chunk.write_all(&buf[..n])?;
        sink(&chunk_path, &buf[..n]);
        part_num += 1;
    }
    info!(
        "Split {:?} into {} chunks of at most {} bytes",
        file_path, part_num, chunk_size
    );
    Ok(part_num)
}

/// Fill `buf` from `file`, tolerating short reads. Returns the number of
/// bytes read; less than `buf.len()` only at end of file.
fn read_block(file: &mut File, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = file.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

/// Concatenate the chunks in `chunk_dir` into `out_file_path`, returning the
/// number of bytes written.
///
/// Chunks are appended in index order starting at `part0000`; the first
/// missing index ends the sequence. A directory with no `part0000` yields an
/// empty output file, which is a valid (degenerate) result, not an error.
/// The destination is truncated before writing; its parent directory is
/// created if missing. If a chunk cannot be read the join aborts, leaving a
/// partially-written destination the caller must discard.
pub fn join_chunks<P, Q>(chunk_dir: P, out_file_path: Q) -> Result<u64, ChunkError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let chunk_dir = chunk_dir.as_ref();
    let out_file_path = out_file_path.as_ref();
    if !chunk_dir.exists() {
        return Err(ChunkError::NotFound(chunk_dir.to_path_buf()));
    }
    if !chunk_dir.is_dir() {
        return Err(ChunkError::NotADirectory(chunk_dir.to_path_buf()));
    }

    if let Some(parent) = out_file_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut output = File::create(out_file_path)?;
    let mut total_bytes = 0u64;
    let mut part_num = 0usize;
    loop {
        let chunk_path = chunk_dir.join(chunk_file_name(part_num));
        if !chunk_path.exists() {
            break;
        }
        let mut chunk = File::open(&chunk_path)?;
        total_bytes += io::copy(&mut chunk, &mut output)?;
        part_num += 1;
    }
    info!(
        "Joined {} chunks ({} bytes) into {:?}",
        part_num, total_bytes, out_file_path
    );
    Ok(total_bytes)
}
