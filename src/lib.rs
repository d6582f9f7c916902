extern crate mmap_bitvec;
extern crate murmurhash3;

mod bloom_filter;
mod error;
mod hash_code;
mod hashing;
mod params;

pub use bloom_filter::BloomFilter;
pub use error::{BloomError, Result};
pub use hash_code::HashCode;
pub use hashing::{derive_hash, fold_to_range};
pub use params::BloomParams;

// Causes cargo test to run doc tests on all `rust` code blocks
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
struct ReadmeDoctests;
