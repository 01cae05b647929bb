use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ptr;
use std::slice;

use super::BoundedVector;

impl<T, const N: usize> IntoIterator for BoundedVector<T, N> {
    type Item = T;

    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        let vec = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: vec is never dropped, so ownership of the live slots moves into the iterator
            // and each of them is still dropped or yielded exactly once.
            buf: unsafe { ptr::read(&vec.buf) },
            start: 0,
            end: vec.len,
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedVector<T, N> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut BoundedVector<T, N> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned iterator over the elements of a [`BoundedVector`]. See
/// [`BoundedVector::into_iter`].
///
/// The slots move into the iterator along with the elements, so it carries the same inline
/// footprint as the BoundedVector it came from.
pub struct IntoIter<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the elements that haven't been yielded yet.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: Slots in [start, end) are initialized and haven't been moved out.
        unsafe {
            slice::from_raw_parts(self.buf.as_ptr().add(self.start).cast::<T>(), self.end - self.start)
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: The slot at start is initialized. Incrementing start afterwards means it is
            // never read or dropped again.
            let value = unsafe { self.buf.get_unchecked(self.start).assume_init_read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The slot at the decremented end is initialized and now outside the live
            // range, so it is read exactly once.
            Some(unsafe { self.buf.get_unchecked(self.end).assume_init_read() })
        } else {
            None
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        // SAFETY: Slots in [start, end) are the only initialized values left.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().add(self.start).cast::<T>(),
                self.end - self.start,
            ));
        }
    }
}

impl<T: Debug, const N: usize> Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
