//! MD5-based chunk key derivation.

use md5::{Digest, Md5};

use crate::chunk::ChunkKey;

/// Computes the 128-bit content key for `data`.
///
/// Identical bytes always yield identical keys; distinct byte sequences
/// collide only with overwhelming improbability. The digest provides
/// content-addressing strength, not cryptographic collision resistance.
pub(crate) fn chunk_key(data: &[u8]) -> ChunkKey {
    let mut hasher = Md5::new();
    hasher.update(data);
    ChunkKey::new(hasher.finalize().into())
}
