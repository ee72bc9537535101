//! Bulk chunking - Chunker and chunk_bytes.

use bytes::Bytes;

use crate::cdc::BoundaryScanner;
use crate::chunk::{Chunk, ChunkSet};
use crate::config::ChunkerConfig;
use crate::hash::chunk_key;

/// Splits byte input into content-defined chunks.
///
/// `Chunker` holds a [`ChunkerConfig`] and offers two access modes over the
/// same boundary algorithm:
///
/// - [`Chunker::chunk_bytes`] - bulk mode over an in-memory buffer,
///   producing an owned [`ChunkSet`]
/// - [`Chunker::chunk_stream`](Chunker::chunk_stream) - streaming mode over
///   any [`std::io::Read`], delivering each chunk to a callback
///
/// For identical total byte content both modes produce identical
/// boundaries, checksums, and keys.
///
/// # Example
///
/// ```
/// use rabinchunk::{Chunker, ChunkerConfig};
///
/// let data: Vec<u8> = (0..8192u32).map(|i| (i * 31 % 251) as u8).collect();
/// let chunker = Chunker::new(ChunkerConfig::default());
/// let set = chunker.chunk_bytes(data.clone());
///
/// assert!(set.count() >= 1);
/// let total: usize = set.iter().map(|c| c.len()).sum();
/// assert_eq!(total, data.len());
/// ```
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// Creates a new chunker with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinchunk::{Chunker, ChunkerConfig};
    ///
    /// let chunker = Chunker::new(ChunkerConfig::default());
    /// ```
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this chunker.
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Chunks an in-memory buffer.
    ///
    /// Never fails: in the worst case the whole input becomes one chunk.
    /// Input shorter than `min_size` - including empty input - yields
    /// exactly one chunk equal to the whole input with checksum `0`.
    ///
    /// Chunk data are zero-copy slices of the input [`Bytes`].
    ///
    /// # Example
    ///
    /// ```
    /// use rabinchunk::{Chunker, ChunkerConfig};
    ///
    /// let chunker = Chunker::new(ChunkerConfig::default());
    /// let set = chunker.chunk_bytes(&b"below min size"[..]);
    ///
    /// assert_eq!(set.count(), 1);
    /// assert_eq!(set.at(0)?.checksum(), 0);
    /// # Ok::<(), rabinchunk::ChunkError>(())
    /// ```
    pub fn chunk_bytes(&self, data: impl Into<Bytes>) -> ChunkSet {
        let data = data.into();
        let mut set = ChunkSet::new();

        // Whole input below the minimum: a single terminal chunk.
        if data.len() < self.config.min_size() {
            let key = chunk_key(&data);
            set.push(Chunk::new(data, 0, key));
            return set;
        }

        let mut scanner = BoundaryScanner::new(&self.config);
        let mut start = 0usize;

        while start < data.len() {
            // The whole remainder is available, so a cut is always found.
            let Some(cut) = scanner.scan(&data[start..], true) else {
                break;
            };

            let chunk_data = data.slice(start..start + cut.len);
            let key = chunk_key(&chunk_data);
            set.push(Chunk::new(chunk_data, cut.checksum, key));
            start += cut.len;
        }

        set
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkerConfig::default())
    }
}
