//! The ChunkSet type - ordered result of one bulk chunking pass.

use crate::error::ChunkError;

use super::{Chunk, ChunkKey};

/// An ordered sequence of [`Chunk`]s, insertion order = stream order.
///
/// A `ChunkSet` is built by one
/// [`Chunker::chunk_bytes`](crate::Chunker::chunk_bytes) call and is
/// read-only afterwards - there is no removal or mutation. Concatenating
/// the chunks in order reconstructs the original input exactly.
///
/// # Example
///
/// ```
/// use rabinchunk::{Chunker, ChunkerConfig};
///
/// let data: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
/// let set = Chunker::new(ChunkerConfig::default()).chunk_bytes(data.clone());
///
/// let total: usize = set.iter().map(|c| c.len()).sum();
/// assert_eq!(total, data.len());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkSet {
    chunks: Vec<Chunk>,
}

impl ChunkSet {
    pub(crate) fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    pub(crate) fn push(&mut self, chunk: Chunk) {
        self.chunks.push(chunk);
    }

    /// Returns the number of chunks.
    pub fn count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true if the set holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns the chunk at index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::OutOfRange`] when `i >= count()`.
    pub fn at(&self, i: usize) -> Result<&Chunk, ChunkError> {
        self.chunks.get(i).ok_or(ChunkError::OutOfRange {
            index: i,
            len: self.chunks.len(),
        })
    }

    /// Returns the chunk at index `i`, or `None` when out of range.
    pub fn get(&self, i: usize) -> Option<&Chunk> {
        self.chunks.get(i)
    }

    /// Visits every chunk in order as `(data, checksum, key)`.
    ///
    /// Stops at the first visitor error and returns it; otherwise returns
    /// `Ok(())` after the last chunk.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinchunk::{Chunker, ChunkerConfig};
    ///
    /// let set = Chunker::new(ChunkerConfig::default()).chunk_bytes(&b"abc"[..]);
    /// let mut seen = 0usize;
    /// set.range(|data, _checksum, _key| {
    ///     seen += data.len();
    ///     Ok(())
    /// })?;
    /// assert_eq!(seen, 3);
    /// # Ok::<(), rabinchunk::ChunkError>(())
    /// ```
    pub fn range<F>(&self, mut visit: F) -> Result<(), ChunkError>
    where
        F: FnMut(&[u8], i64, &ChunkKey) -> Result<(), ChunkError>,
    {
        for chunk in &self.chunks {
            visit(chunk.data(), chunk.checksum(), chunk.key())?;
        }
        Ok(())
    }

    /// Compares the chunk at `i` against an expected checksum and key.
    ///
    /// Returns `false` when `i` is out of range; otherwise `true` iff both
    /// fields match exactly. This lets callers diff two independently built
    /// sets chunk-by-chunk without recomputing digests.
    pub fn equal(&self, i: usize, checksum: i64, key: &ChunkKey) -> bool {
        match self.chunks.get(i) {
            Some(chunk) => chunk.checksum() == checksum && chunk.key() == key,
            None => false,
        }
    }

    /// Returns an iterator over the chunks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }
}

impl<'a> IntoIterator for &'a ChunkSet {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

impl IntoIterator for ChunkSet {
    type Item = Chunk;
    type IntoIter = std::vec::IntoIter<Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}
