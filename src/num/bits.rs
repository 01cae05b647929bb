/// Integers that can report the exponent of the next power of two.
pub trait NextPow2: Copy {
    /// Returns the smallest `p` such that `2^p >= |self|`, zero for zero. Values larger than the
    /// greatest power of two of the type map to its bit width.
    fn nextpow2(self) -> Self;
}

macro_rules! impl_nextpow2 {
    (unsigned: $($u:ty),*; signed: $($s:ty),*) => {
        $(
            impl NextPow2 for $u {
                fn nextpow2(self) -> $u {
                    self.checked_next_power_of_two()
                        .map_or(<$u>::BITS, |p| p.trailing_zeros()) as $u
                }
            }
        )*
        $(
            impl NextPow2 for $s {
                // The magnitude of MIN is exactly the top power of two, so the result always fits.
                fn nextpow2(self) -> $s {
                    self.unsigned_abs().nextpow2() as $s
                }
            }
        )*
    };
}

impl_nextpow2! {
    unsigned: u8, u16, u32, u64, u128, usize;
    signed: i8, i16, i32, i64, i128, isize
}

/// Returns the exponent of the next power of two, see [`NextPow2::nextpow2`].
///
/// # Examples
/// ```
/// # use meadow::num::nextpow2;
/// assert_eq!(nextpow2(0_u32), 0);
/// assert_eq!(nextpow2(1_u32), 0);
/// assert_eq!(nextpow2(12345), 14);
/// assert_eq!(nextpow2(65536), 16);
/// assert_eq!(nextpow2(-128_i8), 7);
/// ```
pub fn nextpow2<T: NextPow2>(x: T) -> T {
    x.nextpow2()
}
