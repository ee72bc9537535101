//! Configuration for chunking behavior.
//!
//! This module provides [`ChunkerConfig`], which carries the boundary
//! parameters (prime, window size) together with the chunk size bounds
//! (min/max/avg) and the precomputed polynomial weight table used by the
//! boundary test.
//!
//! # Example
//!
//! ```
//! use rabinchunk::ChunkerConfig;
//!
//! // Custom parameters: prime, min, max, avg, window
//! let config = ChunkerConfig::new(3, 256, 1024, 512, 31)?;
//!
//! // The reference configuration
//! let config = ChunkerConfig::default();
//! assert_eq!(config.min_size(), 512);
//!
//! # Ok::<(), rabinchunk::ChunkError>(())
//! ```

use crate::error::ChunkError;

/// Default prime for the weight table and boundary residue (recommended: 3).
pub const DEFAULT_PRIME: i64 = 3;

/// Default minimum chunk size (512 bytes).
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 512;

/// Default average/target chunk size (1 KiB).
pub const DEFAULT_AVG_CHUNK_SIZE: usize = 1024;

/// Default maximum chunk size (2 KiB).
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 2 * 1024;

/// Default window size in bytes (recommended: 31).
pub const DEFAULT_WINDOW_SIZE: usize = 31;

/// Configuration for content-defined chunking behavior.
///
/// `ChunkerConfig` controls where chunk boundaries may fall:
///
/// - `prime` - base of the polynomial weight table; the same value doubles
///   as the residue a window's weighted sum must match at a boundary
/// - `min_size` / `max_size` - hard bounds on chunk length
/// - `avg_size` - modulus of the boundary test, controls the expected
///   chunk length between the hard bounds
/// - `window_size` - number of trailing bytes examined per boundary test
///
/// The weight table `weights[i] = prime^i` (wrapping `i64` arithmetic) is
/// computed once at construction and never changes afterwards. A config is
/// immutable and safe to share read-only across concurrent chunking runs.
///
/// # Validation
///
/// The only enforced invariant is `min_size > window_size`; violating it is
/// rejected at construction. Other degenerate combinations (for example
/// `max_size < min_size` or `avg_size == 0`) are caller error: chunking
/// stays memory-safe but its output is unspecified.
///
/// # Example
///
/// ```
/// use rabinchunk::ChunkerConfig;
///
/// let config = ChunkerConfig::new(3, 512, 2048, 1024, 31)?;
/// assert_eq!(config.prime(), 3);
/// assert_eq!(config.window_size(), 31);
///
/// // min_size must exceed window_size
/// assert!(ChunkerConfig::new(3, 31, 2048, 1024, 31).is_err());
/// # Ok::<(), rabinchunk::ChunkError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkerConfig {
    /// Weight-table base and boundary residue target.
    prime: i64,

    /// Minimum chunk size in bytes.
    min_size: usize,

    /// Maximum chunk size in bytes.
    max_size: usize,

    /// Average/target chunk size in bytes (boundary-test modulus).
    avg_size: usize,

    /// Number of trailing bytes examined per boundary test.
    window_size: usize,

    /// `weights[i] = prime^i` for `i` in `0..=window_size`.
    weights: Vec<i64>,
}

impl ChunkerConfig {
    /// Creates a new configuration.
    ///
    /// # Arguments
    ///
    /// * `prime` - weight-table base and boundary residue (recommended: 3)
    /// * `min_size` - minimum chunk size in bytes
    /// * `max_size` - maximum chunk size in bytes
    /// * `avg_size` - average/target chunk size in bytes
    /// * `window_size` - boundary-test window in bytes (recommended: 31)
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if `min_size <= window_size`.
    /// No other combination is rejected; see the type-level docs.
    ///
    /// # Example
    ///
    /// ```
    /// use rabinchunk::ChunkerConfig;
    ///
    /// let config = ChunkerConfig::new(3, 512, 2048, 1024, 31)?;
    /// assert_eq!(config.avg_size(), 1024);
    /// # Ok::<(), rabinchunk::ChunkError>(())
    /// ```
    pub fn new(
        prime: i64,
        min_size: usize,
        max_size: usize,
        avg_size: usize,
        window_size: usize,
    ) -> Result<Self, ChunkError> {
        if min_size <= window_size {
            return Err(ChunkError::InvalidConfig {
                message: "min_size must be greater than window_size",
            });
        }

        Ok(Self {
            prime,
            min_size,
            max_size,
            avg_size,
            window_size,
            weights: weight_table(prime, window_size),
        })
    }

    /// Returns the prime used as weight-table base and boundary residue.
    pub fn prime(&self) -> i64 {
        self.prime
    }

    /// Returns the minimum chunk size.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Returns the maximum chunk size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the average/target chunk size.
    pub fn avg_size(&self) -> usize {
        self.avg_size
    }

    /// Returns the window size.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the precomputed weight table, `weights[i] = prime^i`.
    pub(crate) fn weights(&self) -> &[i64] {
        &self.weights
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            prime: DEFAULT_PRIME,
            min_size: DEFAULT_MIN_CHUNK_SIZE,
            max_size: DEFAULT_MAX_CHUNK_SIZE,
            avg_size: DEFAULT_AVG_CHUNK_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
            weights: weight_table(DEFAULT_PRIME, DEFAULT_WINDOW_SIZE),
        }
    }
}

/// Builds `[prime^0, prime^1, .., prime^window_size]` with wrapping i64
/// arithmetic.
fn weight_table(prime: i64, window_size: usize) -> Vec<i64> {
    let mut weights = Vec::with_capacity(window_size + 1);
    let mut factor = 1i64;
    for _ in 0..=window_size {
        weights.push(factor);
        factor = factor.wrapping_mul(prime);
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChunkerConfig::default();
        assert_eq!(config.prime(), DEFAULT_PRIME);
        assert_eq!(config.min_size(), DEFAULT_MIN_CHUNK_SIZE);
        assert_eq!(config.avg_size(), DEFAULT_AVG_CHUNK_SIZE);
        assert_eq!(config.max_size(), DEFAULT_MAX_CHUNK_SIZE);
        assert_eq!(config.window_size(), DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn test_weight_table() {
        let config = ChunkerConfig::new(3, 64, 256, 128, 4).unwrap();
        assert_eq!(config.weights(), &[1, 3, 9, 27, 81]);
    }

    #[test]
    fn test_weight_table_length() {
        let config = ChunkerConfig::default();
        assert_eq!(config.weights().len(), config.window_size() + 1);
        assert_eq!(config.weights()[0], 1);
        assert_eq!(config.weights()[1], config.prime());
    }

    #[test]
    fn test_weight_table_wraps() {
        // A large prime overflows i64 within a few steps; the table must
        // wrap rather than panic.
        let config = ChunkerConfig::new(i64::MAX, 64, 256, 128, 8).unwrap();
        assert_eq!(config.weights().len(), 9);
    }

    #[test]
    fn test_invalid_config_min_equals_window() {
        let result = ChunkerConfig::new(3, 31, 2048, 1024, 31);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_config_min_below_window() {
        let result = ChunkerConfig::new(3, 16, 2048, 1024, 31);
        assert!(result.is_err());
    }

    #[test]
    fn test_min_one_above_window_is_valid() {
        let result = ChunkerConfig::new(3, 32, 2048, 1024, 31);
        assert!(result.is_ok());
    }
}
