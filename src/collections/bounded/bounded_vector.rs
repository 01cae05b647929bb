use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem::{self, MaybeUninit};
use std::ops::{Bound, Deref, DerefMut, RangeBounds};
use std::ptr;
use std::slice;

use super::Rejected;
use crate::util::error::{CapacityExceeded, IndexOrCapacity, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A contiguous collection holding up to `N` elements inline, without ever allocating.
///
/// The storage is an array of `N` possibly uninitialized slots next to a length. Slots below the
/// length hold live values, everything after it is uninitialized. The footprint is therefore
/// `size_of::<T>() * N` plus the length field, whatever the number of live elements.
///
/// Operations that need more room than `N` don't reallocate, they fail. Each of them comes in two
/// flavours: the plain method panics with a [`CapacityExceeded`] message and the `try_` method
/// returns the error (handing back the rejected value where there is one).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the BoundedVector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being inserted or erased.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` / `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `insert_iter` | `O(n-i+m)` |
/// | `remove` | `O(n-i)` |
/// | `erase` | `O(n-i)` |
/// | `swap_with` | `O(N)` |
pub struct BoundedVector<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> BoundedVector<T, N> {
    /// The fixed capacity of this vector type.
    pub const CAPACITY: usize = N;

    /// Creates an empty BoundedVector. Nothing is initialized and nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use meadow::collections::bounded::BoundedVector;
    /// let vec: BoundedVector<u8, 4> = BoundedVector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 4);
    /// ```
    pub const fn new() -> BoundedVector<T, N> {
        BoundedVector {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Returns the number of live elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the BoundedVector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if no more elements can be added.
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns the capacity, which is always `N`.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of elements that can still be added.
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns the live elements as a slice.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: The first len slots are initialized, MaybeUninit<T> has the same layout as T and
        // the range lies entirely inside buf.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: Same as as_slice, and the exclusive borrow of self prevents aliasing.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Returns a raw pointer to the start of the inline storage.
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast()
    }

    /// Returns a mutable raw pointer to the start of the inline storage.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast()
    }

    /// Pushes `value` onto the end, returning a reference to it.
    ///
    /// # Panics
    /// Panics if the BoundedVector is full.
    ///
    /// # Examples
    /// ```
    /// # use meadow::collections::bounded::BoundedVector;
    /// let mut vec = BoundedVector::<u8, 8>::new();
    /// for i in 0..5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4]);
    /// ```
    #[track_caller]
    pub fn push(&mut self, value: T) -> &mut T {
        self.try_push(value).map_err(|rejected| rejected.error).throw()
    }

    /// Pushes `value` onto the end if there is room for it. When the BoundedVector is full the
    /// value is handed back inside the error.
    ///
    /// # Examples
    /// ```
    /// # use meadow::collections::bounded::BoundedVector;
    /// let mut vec = BoundedVector::<char, 1>::new();
    /// assert!(vec.try_push('a').is_ok());
    /// let rejected = vec.try_push('b').unwrap_err();
    /// assert_eq!(rejected.into_element(), 'b');
    /// assert_eq!(&*vec, &['a']);
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<&mut T, Rejected<T>> {
        if self.is_full() {
            return Err(Rejected::new(value, self.overflow(1)));
        }
        // SAFETY: The BoundedVector has just been checked to have room for one more element.
        Ok(unsafe { self.push_unchecked(value) })
    }

    /// Constructs a value in place at the end with `f`, returning a reference to it.
    ///
    /// # Panics
    /// Panics if the BoundedVector is full, in which case `f` isn't called.
    #[track_caller]
    pub fn push_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        self.try_push_with(f).throw()
    }

    /// Constructs a value in place at the end with `f` if there is room for it. `f` is only
    /// called on success.
    pub fn try_push_with<F: FnOnce() -> T>(&mut self, f: F) -> Result<&mut T, CapacityExceeded> {
        if self.is_full() {
            return Err(self.overflow(1));
        }
        // SAFETY: The BoundedVector has just been checked to have room for one more element.
        Ok(unsafe { self.push_unchecked(f()) })
    }

    /// Pushes `value` onto the end without checking the capacity.
    ///
    /// # Safety
    /// The BoundedVector must not be full. This is only checked when debug assertions are
    /// enabled, pushing onto a full BoundedVector in a release build is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use meadow::collections::bounded::BoundedVector;
    /// let mut vec = BoundedVector::<u8, 3>::new();
    /// for i in 1..=3 {
    ///     // SAFETY: Three values fit in a capacity of three.
    ///     unsafe { vec.push_unchecked(i); }
    /// }
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(self.len < N, "push_unchecked on a full BoundedVector");
        // SAFETY: It is up to the caller to guarantee len < N, so the slot is in bounds. It is
        // also uninitialized, so nothing is overwritten without being dropped.
        let slot = unsafe { self.buf.get_unchecked_mut(self.len) };
        self.len += 1;
        slot.write(value)
    }

    /// Pops the last value off the end, returning it if there was one.
    ///
    /// # Examples
    /// ```
    /// # use meadow::collections::bounded::BoundedVector;
    /// let mut vec: BoundedVector<_, 5> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // Decrement len before reading so the slot is no longer considered live.
        self.len -= 1;
        // SAFETY: The slot at the old last index was initialized and is now past len, so this
        // is the only read of it.
        Some(unsafe { self.buf.get_unchecked(self.len).assume_init_read() })
    }

    /// Returns a reference to the element at `index`. Unlike indexing through the slice, this is
    /// checked in every build profile and reports the length on failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        self.check_index(index).throw();
        &self.as_slice()[index]
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.check_index(index).throw();
        &mut self.as_mut_slice()[index]
    }

    /// Inserts `value` at `index`, shifting every following element one place to the right.
    ///
    /// # Panics
    /// Panics if `index > len` or if the BoundedVector is full.
    ///
    /// # Examples
    /// ```
    /// # use meadow::collections::bounded::BoundedVector;
    /// let mut vec: BoundedVector<_, 8> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.try_insert(index, value).map_err(|rejected| rejected.error).throw()
    }

    /// Inserts `value` at `index` if the index is valid and there is room. On failure the value is
    /// handed back inside the error.
    pub fn try_insert(
        &mut self,
        index: usize,
        value: T,
    ) -> Result<&mut T, Rejected<T, IndexOrCapacity>> {
        if let Err(e) = self.check_insert_index(index) {
            return Err(Rejected::new(value, e.into()));
        }
        if self.is_full() {
            return Err(Rejected::new(value, self.overflow(1).into()));
        }

        let tail = self.len - index;
        // SAFETY: index <= len < N, so both the source range [index, len) and the destination
        // range [index + 1, len + 1) lie inside buf. ptr::copy handles the overlap. The slot at
        // index is then overwritten without a drop because its value now lives at index + 1.
        unsafe {
            let hole = self.as_mut_ptr().add(index);
            ptr::copy(hole, hole.add(1), tail);
            hole.write(value);
            self.len += 1;
            Ok(&mut *hole)
        }
    }

    /// Inserts `count` clones of `value` at `index`.
    ///
    /// # Panics
    /// Panics if `index > len` or if the elements don't fit.
    #[track_caller]
    pub fn insert_n(&mut self, index: usize, count: usize, value: T)
    where
        T: Clone,
    {
        self.try_insert_iter(index, iter::repeat_n(value, count)).throw()
    }

    /// Inserts clones of every element in `values` at `index`, keeping their order.
    ///
    /// # Panics
    /// Panics if `index > len` or if the elements don't fit.
    ///
    /// # Examples
    /// ```
    /// # use meadow::collections::bounded::BoundedVector;
    /// let mut vec: BoundedVector<_, 6> = [1, 5].into_iter().collect();
    /// vec.insert_from_slice(1, &[2, 3, 4]);
    /// assert_eq!(&*vec, &[1, 2, 3, 4, 5]);
    /// ```
    #[track_caller]
    pub fn insert_from_slice(&mut self, index: usize, values: &[T])
    where
        T: Clone,
    {
        self.try_insert_iter(index, values.iter().cloned()).throw()
    }

    /// Inserts every item produced by `iter` at `index`, keeping their order.
    ///
    /// # Panics
    /// Panics if `index > len` or if the items don't fit.
    #[track_caller]
    pub fn insert_iter<I: IntoIterator<Item = T>>(&mut self, index: usize, iter: I) {
        self.try_insert_iter(index, iter).throw()
    }

    /// Inserts every item produced by `iter` at `index`, keeping their order. If the items don't
    /// fit, the BoundedVector is left exactly as it was and the items consumed so far are dropped.
    ///
    /// # Examples
    /// ```
    /// # use meadow::collections::bounded::BoundedVector;
    /// let mut vec: BoundedVector<_, 4> = [1, 4].into_iter().collect();
    /// assert!(vec.try_insert_iter(1, 2..4).is_ok());
    /// assert_eq!(&*vec, &[1, 2, 3, 4]);
    /// assert!(vec.try_insert_iter(0, [0]).unwrap_err().is_capacity_exceeded());
    /// assert_eq!(&*vec, &[1, 2, 3, 4]);
    /// ```
    pub fn try_insert_iter<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        iter: I,
    ) -> Result<(), IndexOrCapacity> {
        self.check_insert_index(index)?;
        let old_len = self.len;
        self.try_append_iter(iter)?;
        // The new items were appended behind the old tail, rotate them into place.
        self.as_mut_slice()[index..].rotate_left(old_len - index);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting every following element one place to
    /// the left.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use meadow::collections::bounded::BoundedVector;
    /// let mut vec: BoundedVector<_, 16> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec.iter().collect::<String>(), "Hlloworld!");
    /// ```
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index` if it exists.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        let tail = self.len - index - 1;
        // SAFETY: index < len, so the slot is initialized and read exactly once. The following
        // tail elements are moved down over it and len is reduced to match.
        unsafe {
            let hole = self.as_mut_ptr().add(index);
            let value = hole.read();
            ptr::copy(hole.add(1), hole, tail);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Removes and returns the element at `index`, replacing it with the last element. This
    /// doesn't preserve ordering but runs in `O(1)`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.check_index(index).throw();
        let last = self.len - 1;
        self.as_mut_slice().swap(index, last);
        // The swapped element is now last and pop can't fail on a non-empty BoundedVector.
        match self.pop() {
            Some(value) => value,
            None => unreachable!(),
        }
    }

    /// Drops every element in `range`, moving the elements after it down to close the gap.
    /// Returns the number of erased elements.
    ///
    /// # Panics
    /// Panics if the range is decreasing or extends past the end.
    ///
    /// # Examples
    /// ```
    /// # use meadow::collections::bounded::BoundedVector;
    /// let mut vec: BoundedVector<_, 8> = (0..8).collect();
    /// assert_eq!(vec.erase(2..5), 3);
    /// assert_eq!(&*vec, &[0, 1, 5, 6, 7]);
    /// assert_eq!(vec.erase(3..), 2);
    /// assert_eq!(&*vec, &[0, 1, 5]);
    /// ```
    #[track_caller]
    pub fn erase<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        self.try_erase(range).throw()
    }

    /// Drops every element in `range` if the range is valid, see [`BoundedVector::erase`].
    pub fn try_erase<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize, IndexOutOfBounds> {
        let (start, end) = self.resolve_range(range)?;
        let count = end - start;
        if count == 0 {
            return Ok(0);
        }

        let old_len = self.len;
        // Shorten first, if a destructor panics the tail leaks instead of being dropped twice.
        self.len = start;
        // SAFETY: [start, end) is within [0, old_len), initialized and dropped exactly once. The
        // tail [end, old_len) is then moved down to start, and len is restored to cover it.
        unsafe {
            let base = self.as_mut_ptr();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(start), count));
            ptr::copy(base.add(end), base.add(start), old_len - end);
        }
        self.len = old_len - count;
        Ok(count)
    }

    /// Shortens the BoundedVector to `len` elements, dropping the rest. Has no effect if `len` is
    /// not smaller than the current length.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let old_len = self.len;
        self.len = len;
        // SAFETY: [len, old_len) was initialized and is now past the length, so it is dropped
        // exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.as_mut_ptr().add(len),
                old_len - len,
            ));
        }
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Keeps only the elements for which `f` returns true, preserving their order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let mut kept = 0;
        for i in 0..self.len {
            if f(&self.as_slice()[i]) {
                self.as_mut_slice().swap(kept, i);
                kept += 1;
            }
        }
        self.truncate(kept);
    }

    /// Resizes to `new_len`, filling new slots with clones of `value` or dropping surplus elements.
    ///
    /// # Panics
    /// Panics if `new_len > N`.
    #[track_caller]
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.try_resize(new_len, value).throw()
    }

    /// Resizes to `new_len` if it fits, see [`BoundedVector::resize`]. The BoundedVector is
    /// unchanged on failure.
    pub fn try_resize(&mut self, new_len: usize, value: T) -> Result<(), CapacityExceeded>
    where
        T: Clone,
    {
        self.check_fits(new_len)?;
        if new_len <= self.len {
            self.truncate(new_len);
        } else {
            for item in iter::repeat_n(value, new_len - self.len) {
                // SAFETY: new_len <= N has been checked, so every push has room.
                unsafe { self.push_unchecked(item); }
            }
        }
        Ok(())
    }

    /// Resizes to `new_len`, filling new slots with values produced by `f`.
    ///
    /// # Panics
    /// Panics if `new_len > N`.
    #[track_caller]
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        self.check_fits(new_len).throw();
        self.truncate(new_len);
        while self.len < new_len {
            // SAFETY: len < new_len <= N.
            unsafe { self.push_unchecked(f()); }
        }
    }

    /// Replaces the contents with the items produced by `iter`.
    ///
    /// # Panics
    /// Panics if the items don't fit.
    #[track_caller]
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.try_assign(iter).throw()
    }

    /// Replaces the contents with the items produced by `iter`. On failure the BoundedVector is
    /// left empty.
    pub fn try_assign<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), CapacityExceeded> {
        self.clear();
        self.try_append_iter(iter)
    }

    /// Replaces the contents with `count` clones of `value`.
    ///
    /// # Panics
    /// Panics if `count > N`.
    #[track_caller]
    pub fn assign_n(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.check_fits(count).throw();
        self.clear();
        self.resize(count, value);
    }

    /// Appends clones of every element in `values`.
    ///
    /// # Panics
    /// Panics if the elements don't fit.
    #[track_caller]
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.try_extend_from_slice(values).throw()
    }

    /// Appends clones of every element in `values` if they all fit. The BoundedVector is unchanged
    /// on failure.
    pub fn try_extend_from_slice(&mut self, values: &[T]) -> Result<(), CapacityExceeded>
    where
        T: Clone,
    {
        self.try_append_iter(values.iter().cloned())
    }

    /// Exchanges the contents of `self` and `other`. With the elements stored inline there is no
    /// pointer to swap, so every slot of both BoundedVectors is moved.
    pub fn swap_with(&mut self, other: &mut BoundedVector<T, N>) {
        mem::swap(self, other);
    }

    /// Moves every element out into a new BoundedVector, leaving `self` empty.
    ///
    /// # Examples
    /// ```
    /// # use meadow::collections::bounded::BoundedVector;
    /// let mut vec: BoundedVector<_, 4> = (1..=3).collect();
    /// let moved = vec.take();
    /// assert!(vec.is_empty());
    /// assert_eq!(&*moved, &[1, 2, 3]);
    /// ```
    pub fn take(&mut self) -> BoundedVector<T, N> {
        mem::replace(self, BoundedVector::new())
    }

    /// Appends the items of `iter`, rolling back to the original length if they don't fit.
    pub(crate) fn try_append_iter<I: IntoIterator<Item = T>>(
        &mut self,
        iter: I,
    ) -> Result<(), CapacityExceeded> {
        let iter = iter.into_iter();
        let old_len = self.len;

        let (lower, _) = iter.size_hint();
        self.check_fits(old_len.saturating_add(lower))?;

        // Truncates back to old_len unless disarmed, including when the iterator panics.
        let rollback = Rollback {
            vec: self,
            len: old_len,
        };
        for item in iter {
            if let Err(rejected) = rollback.vec.try_push(item) {
                return Err(rejected.error);
            }
        }
        mem::forget(rollback);
        Ok(())
    }

    pub(crate) const fn overflow(&self, extra: usize) -> CapacityExceeded {
        CapacityExceeded {
            capacity: N,
            required: self.len.saturating_add(extra),
        }
    }

    pub(crate) const fn check_fits(&self, len: usize) -> Result<(), CapacityExceeded> {
        if len > N {
            Err(CapacityExceeded {
                capacity: N,
                required: len,
            })
        } else {
            Ok(())
        }
    }

    /// Checks that the provided index refers to a live element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Checks that the provided index is a valid insertion point, which includes len.
    pub(crate) const fn check_insert_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    pub(crate) fn resolve_range<R: RangeBounds<usize>>(
        &self,
        range: R,
    ) -> Result<(usize, usize), IndexOutOfBounds> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len,
        };

        if end > self.len {
            return Err(IndexOutOfBounds {
                index: end,
                len: self.len,
            });
        }
        if start > end {
            return Err(IndexOutOfBounds {
                index: start,
                len: self.len,
            });
        }
        Ok((start, end))
    }
}

struct Rollback<'a, T, const N: usize> {
    vec: &'a mut BoundedVector<T, N>,
    len: usize,
}

impl<T, const N: usize> Drop for Rollback<'_, T, N> {
    fn drop(&mut self) {
        self.vec.truncate(self.len);
    }
}

impl<T, const N: usize> Extend<T> for BoundedVector<T, N> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for BoundedVector<T, N> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push(*item);
        }
    }
}

impl<T, const N: usize> FromIterator<T> for BoundedVector<T, N> {
    /// # Panics
    /// Panics if the iterator yields more than `N` items.
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = BoundedVector::new();
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for BoundedVector<T, N> {
    fn from(value: [T; N]) -> Self {
        let mut vec = BoundedVector::new();
        for item in value {
            // SAFETY: An array of N items fits exactly.
            unsafe { vec.push_unchecked(item); }
        }
        vec
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for BoundedVector<T, N> {
    type Error = CapacityExceeded;

    fn try_from(value: &[T]) -> Result<Self, Self::Error> {
        let mut vec = BoundedVector::new();
        vec.try_extend_from_slice(value)?;
        Ok(vec)
    }
}

impl<T, const N: usize> Default for BoundedVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Drop for BoundedVector<T, N> {
    fn drop(&mut self) {
        // SAFETY: All values below len are initialized and dropped here exactly once. The
        // uninitialized slots are MaybeUninit and need no drop.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T, const N: usize> Deref for BoundedVector<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for BoundedVector<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for BoundedVector<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for BoundedVector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> Borrow<[T]> for BoundedVector<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> BorrowMut<[T]> for BoundedVector<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone, const N: usize> Clone for BoundedVector<T, N> {
    fn clone(&self) -> Self {
        let mut vec = BoundedVector::new();
        for value in self.iter() {
            // SAFETY: self holds at most N values.
            unsafe { vec.push_unchecked(value.clone()); }
        }
        vec
    }
}

impl<T: PartialEq, const N: usize> PartialEq for BoundedVector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for BoundedVector<T, N> {}

impl<T: PartialEq, const N: usize> PartialEq<[T]> for BoundedVector<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize, const M: usize> PartialEq<[T; M]> for BoundedVector<T, N> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Shorter BoundedVectors order first. Equal lengths compare elementwise.
impl<T: PartialOrd, const N: usize> PartialOrd for BoundedVector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.len.cmp(&other.len) {
            Ordering::Equal => self.as_slice().partial_cmp(other.as_slice()),
            ordering => Some(ordering),
        }
    }
}

impl<T: Ord, const N: usize> Ord for BoundedVector<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len
            .cmp(&other.len)
            .then_with(|| self.as_slice().cmp(other.as_slice()))
    }
}

impl<T: Hash, const N: usize> Hash for BoundedVector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug, const N: usize> Debug for BoundedVector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedVector")
            .field("contents", &self.as_slice())
            .field("len", &self.len)
            .field("cap", &N)
            .finish()
    }
}
