// Integration tests for bulk and streaming chunking
// Tests cover: cross-mode equivalence, chunking laws, insertion locality,
// handler abort semantics, ChunkSet access contracts

use std::io::{Cursor, Read};

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use rabinchunk::{ChunkError, ChunkKey, Chunker, ChunkerConfig};

fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill_bytes(&mut data);
    data
}

/// The reference configuration of the original host program.
fn reference_config() -> ChunkerConfig {
    ChunkerConfig::new(3, 512, 2048, 1024, 31).unwrap()
}

/// Collects `(data, checksum, key)` triples from a streaming run.
fn collect_stream<R: Read>(
    chunker: &Chunker,
    reader: R,
) -> Result<Vec<(Vec<u8>, i64, ChunkKey)>, ChunkError> {
    let mut collected = Vec::new();
    chunker.chunk_stream(reader, |data, checksum, key| {
        // The slice is only valid during the call; copy it out.
        collected.push((data.to_vec(), checksum, *key));
        Ok(())
    })?;
    Ok(collected)
}

// ============================================================================
// Determinism and Chunking Laws
// ============================================================================

#[test]
fn test_bulk_determinism() {
    let data = random_bytes(100 * 1024, 1);
    let chunker = Chunker::new(reference_config());

    let a = chunker.chunk_bytes(data.clone());
    let b = chunker.chunk_bytes(data);

    assert_eq!(a.count(), b.count(), "Repeated runs must agree on count");
    for i in 0..a.count() {
        let chunk = a.at(i).unwrap();
        assert!(
            b.equal(i, chunk.checksum(), chunk.key()),
            "Chunk {} must match across runs",
            i
        );
        assert_eq!(chunk.data(), b.at(i).unwrap().data());
    }
}

#[test]
fn test_concatenation_law() {
    let data = random_bytes(100 * 1024, 2);
    let set = Chunker::new(reference_config()).chunk_bytes(data.clone());

    let total: usize = set.iter().map(|c| c.len()).sum();
    assert_eq!(total, data.len(), "Chunk lengths must sum to input length");

    let mut rebuilt = Vec::with_capacity(data.len());
    for chunk in &set {
        rebuilt.extend_from_slice(chunk.data());
    }
    assert_eq!(rebuilt, data, "Concatenated chunks must reconstruct input");
}

#[test]
fn test_size_bounds() {
    let data = random_bytes(200 * 1024, 3);
    let config = reference_config();
    let set = Chunker::new(config.clone()).chunk_bytes(data);

    for (i, chunk) in set.iter().enumerate() {
        assert!(
            chunk.len() <= config.max_size(),
            "Chunk {} exceeds max_size",
            i
        );
        if i + 1 < set.count() {
            assert!(
                chunk.len() >= config.min_size(),
                "Non-final chunk {} below min_size",
                i
            );
        }
    }
}

#[test]
fn test_small_input_single_chunk() {
    let data = random_bytes(511, 4); // one byte below min_size
    let set = Chunker::new(reference_config()).chunk_bytes(data.clone());

    assert_eq!(set.count(), 1);
    let chunk = set.at(0).unwrap();
    assert_eq!(chunk.data().as_ref(), data.as_slice());
    assert_eq!(chunk.checksum(), 0, "Terminal chunk carries checksum 0");
}

#[test]
fn test_natural_boundaries_carry_matching_residue() {
    let data = random_bytes(200 * 1024, 5);
    let config = reference_config();
    let set = Chunker::new(config.clone()).chunk_bytes(data);

    let mut natural = 0usize;
    for chunk in &set {
        if chunk.checksum() != 0 {
            natural += 1;
            assert_eq!(
                chunk.checksum() % config.avg_size() as i64,
                config.prime(),
                "Natural boundary checksum must satisfy the residue test"
            );
        }
    }
    assert!(
        natural > 0,
        "Random data at avg 1024 must hit natural boundaries"
    );
}

#[test]
fn test_digest_stability() {
    let chunker = Chunker::new(reference_config());
    let a = chunker.chunk_bytes(&b"identical bytes"[..]);
    let b = chunker.chunk_bytes(&b"identical bytes"[..]);
    let c = chunker.chunk_bytes(&b"different bytes"[..]);

    assert_eq!(a.at(0).unwrap().key(), b.at(0).unwrap().key());
    assert_ne!(a.at(0).unwrap().key(), c.at(0).unwrap().key());
}

// ============================================================================
// Cross-Mode Equivalence
// ============================================================================

#[test]
fn test_stream_matches_bulk() {
    let data = random_bytes(128 * 1024, 6);
    let chunker = Chunker::new(reference_config());

    let bulk = chunker.chunk_bytes(data.clone());
    let streamed = collect_stream(&chunker, Cursor::new(&data)).unwrap();

    assert_eq!(
        bulk.count(),
        streamed.len(),
        "Both modes must produce the same number of chunks"
    );
    for (i, (data, checksum, key)) in streamed.iter().enumerate() {
        assert!(
            bulk.equal(i, *checksum, key),
            "Chunk {} checksum/key must match across modes",
            i
        );
        assert_eq!(
            bulk.at(i).unwrap().data().as_ref(),
            data.as_slice(),
            "Chunk {} bytes must match across modes",
            i
        );
    }
}

/// A reader that hands out at most `step` bytes per read call.
struct TrickleReader<'a> {
    data: &'a [u8],
    pos: usize,
    step: usize,
}

impl Read for TrickleReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

#[test]
fn test_stream_is_read_size_independent() {
    let data = random_bytes(64 * 1024, 7);
    let chunker = Chunker::new(reference_config());

    let bulk = chunker.chunk_bytes(data.clone());
    let trickled = collect_stream(
        &chunker,
        TrickleReader {
            data: &data,
            pos: 0,
            step: 7,
        },
    )
    .unwrap();

    assert_eq!(bulk.count(), trickled.len());
    for (i, (_, checksum, key)) in trickled.iter().enumerate() {
        assert!(
            bulk.equal(i, *checksum, key),
            "Chunk {} must not depend on read granularity",
            i
        );
    }
}

#[test]
fn test_stream_below_min_size_matches_bulk() {
    let data = random_bytes(100, 8);
    let chunker = Chunker::new(reference_config());

    let bulk = chunker.chunk_bytes(data.clone());
    let streamed = collect_stream(&chunker, Cursor::new(&data)).unwrap();

    assert_eq!(bulk.count(), 1);
    assert_eq!(streamed.len(), 1);
    assert!(bulk.equal(0, streamed[0].1, &streamed[0].2));
}

#[test]
fn test_empty_stream_invokes_no_handler() {
    let chunker = Chunker::new(reference_config());
    let mut calls = 0usize;
    chunker
        .chunk_stream(Cursor::new(Vec::new()), |_, _, _| {
            calls += 1;
            Ok(())
        })
        .unwrap();
    assert_eq!(calls, 0, "Zero-byte source must not invoke the handler");
}

// ============================================================================
// Insertion Locality
// ============================================================================

#[test]
fn test_insertion_only_disturbs_nearby_chunks() {
    const EDIT_OFFSET: usize = 700_000;
    const EDIT_LEN: usize = 16;

    let base = random_bytes(1024 * 1024, 9);
    let mut edited = Vec::with_capacity(base.len() + EDIT_LEN);
    edited.extend_from_slice(&base[..EDIT_OFFSET]);
    edited.extend_from_slice(&random_bytes(EDIT_LEN, 10));
    edited.extend_from_slice(&base[EDIT_OFFSET..]);

    let config = reference_config();
    let chunker = Chunker::new(config.clone());
    let before = chunker.chunk_bytes(base.clone());
    let after = chunker.chunk_bytes(edited);

    // Chunks strictly before the one containing the edit are untouched.
    let mut prefix_bytes = 0usize;
    let mut prefix_chunks = 0usize;
    while prefix_chunks < before.count() && prefix_chunks < after.count() {
        let a = before.at(prefix_chunks).unwrap();
        if !after.equal(prefix_chunks, a.checksum(), a.key()) {
            break;
        }
        prefix_bytes += a.len();
        prefix_chunks += 1;
    }
    assert!(
        prefix_bytes >= EDIT_OFFSET - config.max_size(),
        "Shared prefix must reach the chunk containing the edit \
         (got {} bytes)",
        prefix_bytes
    );

    // Trailing chunks realign once boundaries resynchronize after the edit.
    let mut suffix_bytes = 0usize;
    let mut suffix_chunks = 0usize;
    while suffix_chunks < before.count() - prefix_chunks
        && suffix_chunks < after.count() - prefix_chunks
    {
        let a = before.at(before.count() - 1 - suffix_chunks).unwrap();
        let b = after.at(after.count() - 1 - suffix_chunks).unwrap();
        if a.checksum() != b.checksum() || a.key() != b.key() {
            break;
        }
        suffix_bytes += a.len();
        suffix_chunks += 1;
    }
    let tail = base.len() - EDIT_OFFSET;
    assert!(
        suffix_bytes >= tail.saturating_sub(8 * config.max_size()),
        "Boundaries must resynchronize shortly after the edit \
         (got {} of {} tail bytes)",
        suffix_bytes,
        tail
    );
}

// ============================================================================
// Streaming Error Semantics
// ============================================================================

#[test]
fn test_handler_abort_on_second_chunk() {
    let data = random_bytes(64 * 1024, 11);
    let chunker = Chunker::new(reference_config());

    let mut calls = 0usize;
    let result = chunker.chunk_stream(Cursor::new(&data), |_, _, _| {
        calls += 1;
        if calls == 2 {
            Err(ChunkError::InvalidConfig {
                message: "second chunk rejected",
            })
        } else {
            Ok(())
        }
    });

    assert!(matches!(
        result,
        Err(ChunkError::InvalidConfig {
            message: "second chunk rejected"
        })
    ));
    assert_eq!(calls, 2, "Handler must be invoked exactly twice");
}

/// A reader that fails mid-stream after yielding a prefix.
struct FlakyReader {
    data: Vec<u8>,
    pos: usize,
}

impl Read for FlakyReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.pos >= self.data.len() {
            return Err(std::io::Error::other("source went away"));
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

#[test]
fn test_source_error_propagates() {
    let chunker = Chunker::new(reference_config());
    let reader = FlakyReader {
        data: random_bytes(10 * 1024, 12),
        pos: 0,
    };

    let result = chunker.chunk_stream(reader, |_, _, _| Ok(()));
    match result {
        Err(ChunkError::Io(e)) => assert_eq!(e.to_string(), "source went away"),
        other => panic!("expected Io error, got {:?}", other),
    }
}

// ============================================================================
// ChunkSet Access Contracts
// ============================================================================

#[test]
fn test_at_past_end_fails() {
    let set = Chunker::new(reference_config()).chunk_bytes(random_bytes(4096, 13));
    let count = set.count();

    assert!(set.at(count.saturating_sub(1)).is_ok());
    assert!(matches!(
        set.at(count),
        Err(ChunkError::OutOfRange { index, len }) if index == count && len == count
    ));
}

#[test]
fn test_equal_requires_both_fields() {
    let set = Chunker::new(reference_config()).chunk_bytes(random_bytes(64 * 1024, 14));
    let chunk = set.at(0).unwrap();

    assert!(set.equal(0, chunk.checksum(), chunk.key()));
    assert!(
        !set.equal(0, chunk.checksum().wrapping_add(1), chunk.key()),
        "Wrong checksum with correct key must not compare equal"
    );
    assert!(!set.equal(set.count(), chunk.checksum(), chunk.key()));
}

#[test]
fn test_range_aborts_on_first_error() {
    let set = Chunker::new(reference_config()).chunk_bytes(random_bytes(64 * 1024, 15));
    assert!(set.count() >= 2, "Need multiple chunks for this test");

    let mut visited = 0usize;
    let result = set.range(|_, _, _| {
        visited += 1;
        if visited == 2 {
            Err(ChunkError::InvalidConfig { message: "stop" })
        } else {
            Ok(())
        }
    });

    assert!(result.is_err());
    assert_eq!(visited, 2);
}
