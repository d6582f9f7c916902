use std::f64::consts::LN_2;

use tracing::{debug, warn};

use crate::error::{BloomError, Result};

/// Largest bit array we can address: derived hashes are signed 32-bit values,
/// so a position can never exceed `i32::MAX`.
pub const MAX_BIT_SIZE: usize = i32::MAX as usize;
pub const MIN_BIT_SIZE: usize = 1;
pub const MIN_NUM_HASHES: u32 = 1;

/// Parameters of a `BloomFilter`, derived once from the expected number of
/// items and the target false positive probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomParams {
    expected_items: u64,
    fpp: f64,
    bit_size: usize,
    n_hashes: u32,
}

impl BloomParams {
    /// Computes the optimal bit array size and hash function count for
    /// `expected_items` elements at a false positive rate of `fpp`.
    ///
    /// - `expected_items` must be strictly positive.
    /// - `fpp` must lie in the open interval `(0.0, 1.0)`.
    ///
    /// Targets so loose that the formulas round down to zero bits or zero
    /// hashes are raised to one of each.
    pub fn from_accuracy(expected_items: i64, fpp: f64) -> Result<Self> {
        check_arguments(expected_items, fpp)?;
        let n = expected_items as u64;

        let raw_bits = optimal_num_bits(n, fpp);
        if raw_bits > MAX_BIT_SIZE as f64 {
            return Err(BloomError::InvalidArgument(format!(
                "{} expected items at fpp {} need {} bits, more than the maximum of {}",
                expected_items, fpp, raw_bits, MAX_BIT_SIZE
            )));
        }
        let raw_bits = raw_bits as usize;
        let bit_size = raw_bits.max(MIN_BIT_SIZE);

        let raw_hashes = optimal_num_hashes(n, bit_size);
        let n_hashes = raw_hashes.max(MIN_NUM_HASHES);

        if raw_bits < MIN_BIT_SIZE || raw_hashes < MIN_NUM_HASHES {
            warn!(
                expected_items,
                fpp,
                raw_bits,
                raw_hashes,
                "target rounds down to an empty filter, raising to the minimum size"
            );
        }
        debug!(expected_items, fpp, bit_size, n_hashes, "computed bloom filter parameters");

        Ok(BloomParams {
            expected_items: n,
            fpp,
            bit_size,
            n_hashes,
        })
    }

    pub fn expected_items(&self) -> u64 {
        self.expected_items
    }

    pub fn fpp(&self) -> f64 {
        self.fpp
    }

    /// Number of addressable bit positions.
    pub fn bit_size(&self) -> usize {
        self.bit_size
    }

    /// Number of seeded hashes applied per item.
    pub fn n_hashes(&self) -> u32 {
        self.n_hashes
    }
}

fn check_arguments(expected_items: i64, fpp: f64) -> Result<()> {
    if expected_items < 0 {
        return Err(BloomError::InvalidArgument(format!(
            "expected items ({}) must be >= 0",
            expected_items
        )));
    }
    // the hash count formula divides by the item count
    if expected_items == 0 {
        return Err(BloomError::InvalidArgument(
            "expected items must be > 0".to_string(),
        ));
    }
    // written so that NaN fails both comparisons
    if !(fpp > 0.0) {
        return Err(BloomError::InvalidArgument(format!(
            "false positive probability ({}) must be > 0.0",
            fpp
        )));
    }
    if !(fpp < 1.0) {
        return Err(BloomError::InvalidArgument(format!(
            "false positive probability ({}) must be < 1.0",
            fpp
        )));
    }
    Ok(())
}

/// `-n * ln(p) / ln(2)^2`, floored. Returned as a float so callers can detect
/// sizes that overflow before truncating.
#[inline]
pub fn optimal_num_bits(expected_items: u64, fpp: f64) -> f64 {
    (-(expected_items as f64) * fpp.ln() / (LN_2 * LN_2)).floor()
}

/// `(m / n) * ln(2)`, floored. The bits-per-item ratio is an integer division.
#[inline]
pub fn optimal_num_hashes(expected_items: u64, bit_size: usize) -> u32 {
    let bits_per_item = bit_size as u64 / expected_items;
    (bits_per_item as f64 * LN_2) as u32
}
