use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::collections::bounded::BoundedVector;

use super::Iter;

/// A preallocated ring that fills up and then wraps, replacing its oldest value on every push so
/// that only the last `N` values are kept.
///
/// The values live in a [`BoundedVector`], so the ring never allocates. Until the ring is full,
/// pushing appends; after that, the write position walks around the storage, overwriting the
/// oldest value each time.
///
/// A ring with `N == 0` can't hold anything and discards every value pushed into it.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)` |
/// | `latest` / `oldest` / `get` | `O(1)` |
/// | `iter` | `O(1)`, `O(n)` to exhaust |
/// | `clear` | `O(n)` |
///
/// # Examples
/// ```
/// # use meadow::collections::ring::SaturatingRing;
/// let mut ring = SaturatingRing::<u32, 3>::new();
/// for i in 1..=5 {
///     ring.push(i);
/// }
/// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [3, 4, 5]);
/// assert_eq!(ring.oldest(), Some(&3));
/// assert_eq!(ring.latest(), Some(&5));
/// ```
pub struct SaturatingRing<T, const N: usize> {
    pub(crate) buf: BoundedVector<T, N>,
    /// The next slot to be overwritten once the ring is full, which is also where the oldest
    /// value lives. Always zero until then.
    pub(crate) head: usize,
}

impl<T, const N: usize> SaturatingRing<T, N> {
    /// Creates a new, empty SaturatingRing.
    pub const fn new() -> SaturatingRing<T, N> {
        SaturatingRing {
            buf: BoundedVector::new(),
            head: 0,
        }
    }

    /// Returns the number of values currently kept, at most `N`.
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns true once `N` values have been pushed. From then on every push replaces the oldest
    /// value.
    pub const fn is_full(&self) -> bool {
        self.buf.is_full()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Pushes `value` as the latest value of the SaturatingRing. If the ring is already full, the
    /// oldest value is removed and returned. With `N == 0`, `value` itself is returned.
    ///
    /// # Examples
    /// ```
    /// # use meadow::collections::ring::SaturatingRing;
    /// let mut ring = SaturatingRing::<char, 2>::new();
    /// assert_eq!(ring.push('a'), None);
    /// assert_eq!(ring.push('b'), None);
    /// assert_eq!(ring.push('c'), Some('a'));
    /// ```
    pub fn push(&mut self, value: T) -> Option<T> {
        if N == 0 {
            return Some(value);
        }

        if !self.is_full() {
            self.buf.push(value);
            return None;
        }

        let old = mem::replace(&mut self.buf[self.head], value);
        self.head = (self.head + 1) % N;
        Some(old)
    }

    /// Returns a reference to the value pushed most recently, if any.
    pub fn latest(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.buf.get(self.physical(self.len() - 1))
        }
    }

    /// Returns a reference to the oldest value still kept, if any.
    pub fn oldest(&self) -> Option<&T> {
        self.buf.get(self.head)
    }

    /// Returns a reference to the value at `index`, counting from the oldest value.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            self.buf.get(self.physical(index))
        } else {
            None
        }
    }

    /// Returns the kept values as two slices that, concatenated, run from the oldest value to the
    /// latest one.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (back, front) = self.buf.split_at(self.head);
        (front, back)
    }

    /// Returns an iterator over the kept values, from the oldest to the latest.
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        Iter::new(front, back)
    }

    /// Drops every kept value, returning the SaturatingRing to its initial state.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.head = 0;
    }

    /// Maps a logical index (0 being the oldest value) onto the position in the storage.
    const fn physical(&self, index: usize) -> usize {
        let pos = self.head + index;
        if pos >= N { pos - N } else { pos }
    }
}

impl<T, const N: usize> Default for SaturatingRing<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for SaturatingRing<T, N> {
    fn clone(&self) -> Self {
        SaturatingRing {
            buf: self.buf.clone(),
            head: self.head,
        }
    }
}

impl<T, const N: usize> Extend<T> for SaturatingRing<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, const N: usize> FromIterator<T> for SaturatingRing<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = SaturatingRing::new();
        ring.extend(iter);
        ring
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a SaturatingRing<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two rings are equal when they keep the same values in the same order, regardless of where the
/// write position is.
impl<T: PartialEq, const N: usize> PartialEq for SaturatingRing<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for SaturatingRing<T, N> {}

impl<T: Debug, const N: usize> Debug for SaturatingRing<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
