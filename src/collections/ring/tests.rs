#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_fill_then_wrap() {
    let mut ring = SaturatingRing::<usize, 4>::new();
    assert!(ring.is_empty());
    assert_eq!(ring.latest(), None);
    assert_eq!(ring.oldest(), None);

    for i in 0..4 {
        assert_eq!(ring.push(i), None, "Nothing should be evicted before the ring is full.");
    }
    assert!(ring.is_full());
    assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);

    assert_eq!(ring.push(4), Some(0));
    assert_eq!(ring.push(5), Some(1));
    assert_eq!(ring.len(), 4);
    assert_eq!(ring.capacity(), 4);
    assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [2, 3, 4, 5]);
    assert_eq!(ring.oldest(), Some(&2));
    assert_eq!(ring.latest(), Some(&5));
    assert_eq!(ring.get(1), Some(&3));
    assert_eq!(ring.get(4), None);
    assert_eq!(ring.as_slices(), (&[2, 3][..], &[4, 5][..]));
}

#[test]
fn test_keeps_last_n_over_many_laps() {
    let ring: SaturatingRing<u32, 5> = (0..103).collect();
    assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [98, 99, 100, 101, 102]);
    assert_eq!(
        ring.iter().rev().copied().collect::<Vec<_>>(),
        [102, 101, 100, 99, 98]
    );
    assert_eq!(ring.iter().len(), 5);
}

#[test]
fn test_zero_capacity_discards() {
    let mut ring = SaturatingRing::<&str, 0>::new();
    assert_eq!(ring.push("gone"), Some("gone"));
    assert!(ring.is_empty());
    assert!(ring.is_full());
    assert_eq!(ring.latest(), None);
    assert_eq!(ring.iter().next(), None);
}

#[test]
fn test_clear() {
    let mut ring: SaturatingRing<_, 3> = (0..7).collect();
    ring.clear();
    assert!(ring.is_empty());
    ring.push(10);
    assert_eq!(ring.oldest(), Some(&10));
    assert_eq!(ring.latest(), Some(&10));
}

#[test]
fn test_equality_ignores_write_position() {
    let wrapped: SaturatingRing<_, 3> = (0..5).collect();
    let fresh: SaturatingRing<_, 3> = (2..5).collect();
    assert_eq!(wrapped, fresh);
    assert_eq!(wrapped.clone(), wrapped);
    assert_eq!(format!("{:?}", wrapped), "[2, 3, 4]");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut ring = SaturatingRing::<CountedDrop, 3>::new();
    for _ in 0..5 {
        drop(ring.push(counter.clone()));
    }
    assert_eq!(counter.get(), 2, "Evicted values should be handed back and dropped.");
    drop(ring);
    assert_eq!(counter.take(), 5);
}
