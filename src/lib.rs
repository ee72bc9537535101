//! rabinchunk
//!
//! Content-Defined Chunking (CDC) over a Rabin-style polynomial window.
//!
//! `rabinchunk` splits a byte stream into variable-length chunks whose
//! boundaries are chosen by content, not by fixed offsets: a weighted sum
//! over a sliding window of trailing bytes decides where each chunk ends.
//! Inserting or deleting bytes therefore only disturbs the chunks around the
//! edit, which is the property backup, deduplication, and sync systems need
//! for content-addressed storage and incremental transfer.
//!
//! The crate intentionally:
//! - does NOT manage files or paths
//! - does NOT persist or transmit chunks
//! - does NOT keep a deduplication index
//!
//! It only does one thing: **bytes in → content-aligned chunks out**, each
//! with a rolling checksum and a stable 128-bit key.
//!
//! # Bulk
//!
//! ```
//! use rabinchunk::{Chunker, ChunkerConfig};
//!
//! let chunker = Chunker::new(ChunkerConfig::default());
//! let set = chunker.chunk_bytes(&b"hello world"[..]);
//!
//! for chunk in &set {
//!     println!("{} bytes, key {}", chunk.len(), chunk.key());
//! }
//! ```
//!
//! # Streaming
//!
//! ```no_run
//! use std::fs::File;
//! use rabinchunk::{Chunker, ChunkerConfig, ChunkError};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let file = File::open("data.bin")?;
//!     let chunker = Chunker::new(ChunkerConfig::default());
//!
//!     chunker.chunk_stream(file, |data, checksum, key| {
//!         // `data` is only valid for the duration of this call;
//!         // copy it out if it must outlive the callback.
//!         println!("{} bytes, checksum {}, key {}", data.len(), checksum, key);
//!         Ok(())
//!     })
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod chunker;
mod config;
mod error;

mod buffer; // internal (thread-local reuse)
mod cdc; // internal rabin-window impl
mod hash; // internal md5 impl

//
// Public surface (intentionally tiny)
//

pub use chunk::{Chunk, ChunkKey, ChunkSet};
pub use chunker::Chunker;
pub use config::ChunkerConfig;
pub use error::ChunkError;
