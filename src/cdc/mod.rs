//! Content-Defined Chunking (CDC) implementation.
//!
//! This module contains the core algorithm for identifying chunk boundaries
//! based on content patterns rather than fixed sizes.
//!
//! - [`BoundaryScanner`] - Rabin-style polynomial window implementation

mod rabin;

pub(crate) use rabin::BoundaryScanner;
