//! Streaming chunking - chunk_stream over any `std::io::Read`.

use std::io::Read;

use crate::buffer::Buffer;
use crate::cdc::BoundaryScanner;
use crate::chunk::ChunkKey;
use crate::chunker::engine::Chunker;
use crate::error::ChunkError;
use crate::hash::chunk_key;

impl Chunker {
    /// Chunks an incrementally-read byte source, delivering each chunk to
    /// `handler` as `(data, checksum, key)`.
    ///
    /// Boundaries, checksums, and keys are identical to what
    /// [`Chunker::chunk_bytes`] produces for the same total byte sequence,
    /// regardless of how the reader splits its reads.
    ///
    /// # Buffer reuse
    ///
    /// `data` borrows an internal buffer that is overwritten once the
    /// handler returns. The `&[u8]` lifetime prevents the slice from
    /// escaping; a handler that needs the bytes afterwards must copy them
    /// before returning (for example into a `Vec` or over the network).
    ///
    /// # Errors
    ///
    /// - a handler error aborts chunking immediately and is returned as-is;
    ///   no further bytes are read
    /// - a read error other than end-of-stream is returned as
    ///   [`ChunkError::Io`]
    ///
    /// End-of-stream is normal termination and flushes the final chunk with
    /// checksum `0`. A source that never yields a byte produces no handler
    /// calls and returns `Ok(())`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::io::Cursor;
    /// use rabinchunk::{Chunker, ChunkerConfig};
    ///
    /// let data: Vec<u8> = (0..8192u32).map(|i| (i * 31 % 251) as u8).collect();
    /// let chunker = Chunker::new(ChunkerConfig::default());
    ///
    /// let mut total = 0usize;
    /// chunker.chunk_stream(Cursor::new(&data), |chunk, _checksum, _key| {
    ///     total += chunk.len();
    ///     Ok(())
    /// })?;
    /// assert_eq!(total, data.len());
    /// # Ok::<(), rabinchunk::ChunkError>(())
    /// ```
    pub fn chunk_stream<R, F>(&self, mut reader: R, mut handler: F) -> Result<(), ChunkError>
    where
        R: Read,
        F: FnMut(&[u8], i64, &ChunkKey) -> Result<(), ChunkError>,
    {
        let mut scanner = BoundaryScanner::new(self.config());
        let mut read_buf = Buffer::take();
        // Bytes of the pending chunk; its emitted prefix is reclaimed after
        // every handler call so the allocation is reused.
        let mut chunk_buf: Vec<u8> = Vec::with_capacity(self.config().max_size());
        let mut at_end = false;

        loop {
            while let Some(cut) = scanner.scan(&chunk_buf, at_end) {
                let data = &chunk_buf[..cut.len];
                let key = chunk_key(data);
                handler(data, cut.checksum, &key)?;

                chunk_buf.copy_within(cut.len.., 0);
                chunk_buf.truncate(chunk_buf.len() - cut.len);
            }

            if at_end {
                return Ok(());
            }

            match reader.read(read_buf.as_mut_slice()) {
                Ok(0) => at_end = true,
                Ok(n) => chunk_buf.extend_from_slice(&read_buf.as_slice()[..n]),
                Err(e) => return Err(e.into()),
            }
        }
    }
}
