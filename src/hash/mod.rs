//! Content digest for chunk identity.
//!
//! This module derives the 128-bit key that identifies a chunk's content
//! for downstream deduplication.
//!
//! - [`chunk_key`] - MD5-based key derivation

mod md5;

pub(crate) use md5::chunk_key;
