//! Chunk types.
//!
//! - [`Chunk`] - Content-defined chunk with data, checksum, key
//! - [`ChunkKey`] - 128-bit content digest identifying a chunk
//! - [`ChunkSet`] - Ordered, read-only result of one bulk chunking pass

mod data;
mod key;
mod set;

pub use data::Chunk;
pub use key::ChunkKey;
pub use set::ChunkSet;
