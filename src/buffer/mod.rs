//! Internal buffer management for streaming reads.
//!
//! This module provides a thread-local buffer pool so repeated
//! `chunk_stream` calls reuse their read scratch instead of reallocating.
//! It is an implementation detail and not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
