use murmurhash3::murmurhash3_x64_128;

/// Hashes an item's hash code with MurmurHash3 (x64, 128 bits) seeded by
/// `seed`, keeping the low 32 bits of the first word as a signed value.
///
/// Each of a filter's hash functions is this one with a different seed, so the
/// positions derived for an item are near-independent.
#[inline]
pub fn derive_hash(seed: u32, hash_code: i32) -> i32 {
    let (h1, _) = murmurhash3_x64_128(&hash_code.to_le_bytes(), u64::from(seed));
    h1 as u32 as i32
}

/// Reduces a signed hash to a bit position in `0..size`.
///
/// The remainder keeps the sign of `hash`; a negative remainder `r` is mapped
/// to `!r` (that is `-r - 1`), not to `|r|`. Positions must be derived exactly
/// this way for a given hash to land on the same bit as in other filters built
/// with this scheme.
#[inline]
pub fn fold_to_range(hash: i32, size: usize) -> usize {
    debug_assert!(size > 0 && size <= i32::MAX as usize);
    let idx = i64::from(hash) % size as i64;
    if idx < 0 {
        !idx as usize
    } else {
        idx as usize
    }
}

/// Bit position for the `seed`-th hash function (1-based) of an item.
#[inline]
pub fn bit_position(seed: u32, hash_code: i32, size: usize) -> usize {
    fold_to_range(derive_hash(seed, hash_code), size)
}
