//! Rabin-style polynomial window boundary detection.
//!
//! A candidate position is a boundary when the weighted sum of the
//! `window_size` bytes ending there, taken modulo `avg_size`, equals the
//! configured prime. The weighting is asymmetric: the *first* byte of the
//! window carries the highest weight (`prime^window_size`) and the last
//! carries `prime^1`. This is part of the observable contract - checksums
//! and boundaries are only reproducible across implementations that weight
//! windows exactly this way.
//!
//! Both chunking modes (bulk and streaming) drive the same [`BoundaryScanner`]
//! so their boundary decisions cannot drift apart. The scanner operates on
//! "bytes available from the current chunk's start, plus an end-of-input
//! flag" and leaves input management to its caller.

use crate::config::ChunkerConfig;

/// A chunk boundary decision: the pending chunk ends `len` bytes into the
/// caller's buffer.
///
/// `checksum` is the window's weighted sum for a natural (content-matched)
/// boundary, and `0` for a cut forced by `max_size` or end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cut {
    pub len: usize,
    pub checksum: i64,
}

/// Scans for chunk boundaries over an incrementally available buffer.
///
/// The scanner keeps one piece of state between calls: the window offset
/// within the pending chunk. It starts at `min_size - window_size` so the
/// earliest testable boundary lies exactly `min_size` bytes into the chunk,
/// and it is retained across [`BoundaryScanner::scan`] calls that run out of
/// input, so no byte is ever examined twice.
#[derive(Debug)]
pub(crate) struct BoundaryScanner<'a> {
    config: &'a ChunkerConfig,
    /// Window start, relative to the pending chunk's first byte.
    win_start: usize,
}

impl<'a> BoundaryScanner<'a> {
    pub(crate) fn new(config: &'a ChunkerConfig) -> Self {
        Self {
            config,
            win_start: config.min_size() - config.window_size(),
        }
    }

    /// Finds the next cut in `buf`, which must hold the pending chunk's
    /// bytes starting at its first byte.
    ///
    /// Returns `None` when more input is required (`at_end == false` and the
    /// window would run past `buf`), or when `buf` is empty at end of input.
    /// With `at_end == true` and a non-empty buffer a cut is always found:
    /// the remainder is emitted with checksum 0 if no boundary matches.
    pub(crate) fn scan(&mut self, buf: &[u8], at_end: bool) -> Option<Cut> {
        let win = self.config.window_size();
        loop {
            if self.win_start + win >= buf.len() {
                if at_end && !buf.is_empty() {
                    self.reset();
                    return Some(Cut {
                        len: buf.len(),
                        checksum: 0,
                    });
                }
                return None;
            }

            if self.win_start + win >= self.config.max_size() {
                self.reset();
                return Some(Cut {
                    len: self.config.max_size(),
                    checksum: 0,
                });
            }

            let sum = self.weighted_sum(&buf[self.win_start..self.win_start + win]);
            if self.is_boundary(sum) {
                let len = self.win_start + win;
                self.reset();
                return Some(Cut { len, checksum: sum });
            }

            self.win_start += 1;
        }
    }

    /// Computes the weighted sum of a full window.
    ///
    /// `window[i]` is weighted by `prime^(window_size - i)`, so the first
    /// byte carries the highest weight. Arithmetic wraps on i64.
    pub(crate) fn weighted_sum(&self, window: &[u8]) -> i64 {
        let weights = self.config.weights();
        let win = self.config.window_size();

        let mut sum = 0i64;
        for (i, &byte) in window.iter().enumerate() {
            sum = sum.wrapping_add((byte as i64).wrapping_mul(weights[win - i]));
        }
        sum
    }

    /// Whether `sum` marks a boundary: `sum % avg_size == prime`.
    ///
    /// Signed truncated modulo; a negative (wrapped) sum never matches a
    /// positive prime.
    pub(crate) fn is_boundary(&self, sum: i64) -> bool {
        sum % self.config.avg_size() as i64 == self.config.prime()
    }

    fn reset(&mut self) {
        self.win_start = self.config.min_size() - self.config.window_size();
    }
}
