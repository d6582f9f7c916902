/// Items stored in a `BloomFilter` must produce a deterministic 32-bit hash
/// code. Every seeded hash function of the filter is applied to this code, so
/// two items with the same code are indistinguishable to the filter.
///
/// Integers hash to their value (64-bit values fold their high half into the
/// low half), strings and sequences use the `31 * h + x` polynomial.
pub trait HashCode {
    fn hash_code(&self) -> i32;
}

macro_rules! narrow_int_hash_code {
    ($($t:ty),*) => {
        $(
            impl HashCode for $t {
                #[inline]
                fn hash_code(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

narrow_int_hash_code!(i8, i16, i32, u8, u16, u32);

#[inline]
fn fold_u64(value: u64) -> i32 {
    (value ^ (value >> 32)) as i32
}

impl HashCode for i64 {
    #[inline]
    fn hash_code(&self) -> i32 {
        fold_u64(*self as u64)
    }
}

impl HashCode for u64 {
    #[inline]
    fn hash_code(&self) -> i32 {
        fold_u64(*self)
    }
}

impl HashCode for isize {
    #[inline]
    fn hash_code(&self) -> i32 {
        (*self as i64).hash_code()
    }
}

impl HashCode for usize {
    #[inline]
    fn hash_code(&self) -> i32 {
        (*self as u64).hash_code()
    }
}

impl HashCode for bool {
    #[inline]
    fn hash_code(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl HashCode for char {
    #[inline]
    fn hash_code(&self) -> i32 {
        *self as i32
    }
}

// -0.0 and 0.0 hash differently; all NaNs hash the same
impl HashCode for f32 {
    #[inline]
    fn hash_code(&self) -> i32 {
        let bits = if self.is_nan() {
            f32::NAN.to_bits()
        } else {
            self.to_bits()
        };
        bits as i32
    }
}

impl HashCode for f64 {
    #[inline]
    fn hash_code(&self) -> i32 {
        let bits = if self.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.to_bits()
        };
        fold_u64(bits)
    }
}

/// Polynomial hash over the UTF-16 code units of the string.
impl HashCode for str {
    fn hash_code(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
    }
}

impl HashCode for String {
    #[inline]
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

impl<T: HashCode> HashCode for [T] {
    fn hash_code(&self) -> i32 {
        self.iter()
            .fold(1i32, |h, item| h.wrapping_mul(31).wrapping_add(item.hash_code()))
    }
}

impl<T: HashCode> HashCode for Vec<T> {
    #[inline]
    fn hash_code(&self) -> i32 {
        self.as_slice().hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for Box<T> {
    #[inline]
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}
