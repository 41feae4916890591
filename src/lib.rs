//! Project overview:
//! - Split a file into fixed-size, deterministically named chunk files and
//!   reassemble them byte-for-byte
//! - Chunk files are named `part0000`, `part0001`, ... and stored flat inside
//!   a chunk directory; re-splitting purges the previous chunk set first
//! - blake3 content hashes for chunks, whole files, named file objects, and
//!   directory trees, for integrity checks and deduplication
//! - JSON and binary persistence helpers with typed errors
//! - Synchronous, single-threaded blocking I/O; all state lives on the
//!   filesystem

pub mod chunk;
pub mod error;
pub mod hashing;
pub mod persist;

pub use chunk::{
    chunk_file_name, delete_chunk_files, join_chunks, split_file, split_file_with_hashes,
    DEFAULT_CHUNK_SIZE, MAX_CHUNKS,
};
pub use error::ChunkError;
pub use hashing::{hash_bytes, hash_file, hash_named_objects, hash_tree};
pub use persist::{cache_data, ensure_dir, load_json, restore_data, save_json};
