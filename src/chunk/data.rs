//! The Chunk type - represents a content-defined chunk.

use bytes::Bytes;
use std::fmt;

use super::ChunkKey;

/// A content-defined chunk with its rolling checksum and content key.
///
/// `checksum` is the window's weighted sum at the boundary that ended this
/// chunk; it is `0` when the chunk was cut by reaching `max_size` or by end
/// of input rather than by a content match. `key` is the 128-bit digest of
/// `data` and identifies the chunk for deduplication.
///
/// # Example
///
/// ```
/// use rabinchunk::{Chunker, ChunkerConfig};
///
/// let set = Chunker::new(ChunkerConfig::default()).chunk_bytes(&b"tiny"[..]);
/// let chunk = set.at(0)?;
///
/// assert_eq!(chunk.data().as_ref(), b"tiny");
/// assert_eq!(chunk.checksum(), 0); // below min_size: terminal chunk
/// # Ok::<(), rabinchunk::ChunkError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    data: Bytes,
    checksum: i64,
    key: ChunkKey,
}

impl Chunk {
    pub(crate) fn new(data: Bytes, checksum: i64, key: ChunkKey) -> Self {
        Self {
            data,
            checksum,
            key,
        }
    }

    /// Returns the length of the chunk data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the chunk data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the rolling checksum at the boundary that ended this chunk,
    /// or `0` for a forced (max-size or end-of-input) cut.
    pub fn checksum(&self) -> i64 {
        self.checksum
    }

    /// Returns the chunk's content key.
    pub fn key(&self) -> &ChunkKey {
        &self.key
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chunk({} bytes, checksum={}, key={})",
            self.len(),
            self.checksum,
            self.key
        )
    }
}
