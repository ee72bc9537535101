//! Chunk key type.

use std::fmt;
use std::hash::{Hash as StdHash, Hasher};

/// A 128-bit content digest identifying a chunk.
///
/// Two chunks with identical bytes always carry identical keys, which is
/// what downstream deduplication indexes match on. The digest is MD5 - a
/// content-addressing identifier, not a security boundary.
///
/// This is a thin wrapper around a 16-byte array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChunkKey([u8; 16]);

impl ChunkKey {
    /// The size of the key in bytes.
    pub const SIZE: usize = 16;

    /// Creates a new chunk key from a byte array.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a new chunk key from a slice.
    ///
    /// Returns `None` if the slice is not exactly 16 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let mut bytes = [0u8; 16];
        if slice.len() != bytes.len() {
            return None;
        }
        bytes.copy_from_slice(slice);
        Some(Self(bytes))
    }

    /// Returns the key as a byte slice.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the key as a 32-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Creates a key from a hex string.
    ///
    /// Returns `None` if the string is not exactly 32 hex characters.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        let bytes = hex::decode(hex_str).ok()?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for ChunkKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl StdHash for ChunkKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.0);
    }
}

impl fmt::Display for ChunkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
