//! Helpers for combining hashes of several values into one, in the manner of `boost::hash_combine`.
//!
//! [`hash_value`] uses [`DefaultHasher::new`], which is keyed identically every time, so the
//! results are stable within a build of the program. They aren't guaranteed to be stable across
//! Rust versions and should never be persisted.

use std::hash::{DefaultHasher, Hash, Hasher};

mod tests;

/// Hashes a single value.
pub fn hash_value<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Mixes the hash of `value` into `seed`. The result depends on the order values are combined in.
///
/// # Examples
/// ```
/// # use meadow::hash::{hash_combine, hash_value};
/// let mut seed = hash_value("first");
/// hash_combine(&mut seed, &2_u32);
/// assert_ne!(seed, hash_value("first"));
/// ```
pub fn hash_combine<T: Hash + ?Sized>(seed: &mut u64, value: &T) {
    let mixed = hash_value(value)
        .wrapping_add(0x9e37_79b9)
        .wrapping_add(*seed << 6)
        .wrapping_add(*seed >> 2);
    *seed ^= mixed;
}

/// Combines the hashes of every item, starting from a zero seed.
pub fn hash_range<I>(iter: I) -> u64
where
    I: IntoIterator,
    I::Item: Hash,
{
    let mut seed = 0;
    hash_range_into(&mut seed, iter);
    seed
}

/// Combines the hashes of every item into an existing `seed`.
pub fn hash_range_into<I>(seed: &mut u64, iter: I)
where
    I: IntoIterator,
    I::Item: Hash,
{
    for item in iter {
        hash_combine(seed, &item);
    }
}
