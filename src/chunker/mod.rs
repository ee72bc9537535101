//! Chunking entry points.
//!
//! - [`Chunker`] - bulk (`chunk_bytes`) and streaming (`chunk_stream`) modes

mod engine;
mod stream;

pub use engine::Chunker;
