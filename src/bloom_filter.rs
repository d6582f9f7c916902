use std::fmt;
use std::marker::PhantomData;

use mmap_bitvec::{BitVector, MmapBitVec};

use crate::error::Result;
use crate::hash_code::HashCode;
use crate::hashing::bit_position;
use crate::params::BloomParams;

/// A Bloom filter over items of type `T`.
///
/// The bit array size and the number of hash functions are fixed at
/// construction from the expected number of items and the target false
/// positive probability. Lookups never return false negatives; the false
/// positive rate grows once more than `expected_items` distinct items have
/// been inserted, see [`BloomFilter::estimated_fpp`].
pub struct BloomFilter<T: ?Sized> {
    bitvec: MmapBitVec,
    params: BloomParams,
    _item: PhantomData<fn(&T)>,
}

impl<T: HashCode + ?Sized> BloomFilter<T> {
    /// Creates an empty filter sized for `expected_items` items at a false
    /// positive rate of `fpp`.
    ///
    /// Fails with `BloomError::InvalidArgument` if `expected_items <= 0` or if
    /// `fpp` is not in `(0.0, 1.0)`.
    pub fn new(expected_items: i64, fpp: f64) -> Result<Self> {
        let params = BloomParams::from_accuracy(expected_items, fpp)?;
        Self::with_params(params)
    }

    /// Creates an empty filter from already computed parameters.
    pub fn with_params(params: BloomParams) -> Result<Self> {
        let bitvec = MmapBitVec::from_memory(params.bit_size())?;
        Ok(BloomFilter {
            bitvec,
            params,
            _item: PhantomData,
        })
    }

    /// Adds `item` to the filter. Inserting the same item twice is a no-op.
    pub fn put(&mut self, item: &T) {
        let hash_code = item.hash_code();
        let size = self.params.bit_size();
        for seed in 1..=self.params.n_hashes() {
            self.bitvec.set(bit_position(seed, hash_code, size), true);
        }
    }

    /// Returns `false` if `item` was definitely never inserted, `true` if it
    /// might have been.
    #[inline]
    pub fn might_contain(&self, item: &T) -> bool {
        let hash_code = item.hash_code();
        let size = self.params.bit_size();
        (1..=self.params.n_hashes())
            .all(|seed| self.bitvec.get(bit_position(seed, hash_code, size)))
    }

    /// The bit positions `item` maps to, one per hash function.
    pub fn positions(&self, item: &T) -> impl Iterator<Item = usize> {
        let hash_code = item.hash_code();
        let size = self.params.bit_size();
        (1..=self.params.n_hashes()).map(move |seed| bit_position(seed, hash_code, size))
    }
}

impl<T: ?Sized> BloomFilter<T> {
    pub fn params(&self) -> &BloomParams {
        &self.params
    }

    pub fn bit_size(&self) -> usize {
        self.params.bit_size()
    }

    pub fn n_hashes(&self) -> u32 {
        self.params.n_hashes()
    }

    pub fn fpp(&self) -> f64 {
        self.params.fpp()
    }

    pub fn expected_items(&self) -> u64 {
        self.params.expected_items()
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> usize {
        self.bitvec.rank(0..self.bitvec.size())
    }

    /// Probability that a lookup of an item never inserted returns `true`,
    /// given the bits set so far. Starts at 0 and only grows; compare it to
    /// [`fpp`](Self::fpp) to detect an over-saturated filter.
    pub fn estimated_fpp(&self) -> f64 {
        let fill = self.count_ones() as f64 / self.bit_size() as f64;
        fill.powi(self.n_hashes() as i32)
    }
}

impl<T: ?Sized> fmt::Debug for BloomFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("bit_size", &self.bit_size())
            .field("n_hashes", &self.n_hashes())
            .field("fpp", &self.fpp())
            .field("expected_items", &self.expected_items())
            .field("count_ones", &self.count_ones())
            .finish()
    }
}
