#![cfg(test)]

use super::*;

#[test]
fn test_hash_value_is_deterministic() {
    assert_eq!(hash_value(&42_u64), hash_value(&42_u64));
    assert_eq!(hash_value("meadow"), hash_value(&String::from("meadow")));
    assert_ne!(hash_value(&1_u8), hash_value(&2_u8));
}

#[test]
fn test_hash_combine_formula() {
    let h = hash_value(&7_i32);
    let mut seed = 0;
    hash_combine(&mut seed, &7_i32);
    assert_eq!(seed, h.wrapping_add(0x9e37_79b9), "A zero seed only adds the constant.");

    let before = seed;
    hash_combine(&mut seed, &7_i32);
    assert_eq!(
        seed,
        before ^ h.wrapping_add(0x9e37_79b9).wrapping_add(before << 6).wrapping_add(before >> 2)
    );
}

#[test]
fn test_hash_range() {
    assert_eq!(hash_range(Vec::<u8>::new()), 0);

    let forwards = hash_range([1, 2, 3]);
    let backwards = hash_range([3, 2, 1]);
    assert_ne!(forwards, backwards, "Order should matter.");

    let mut seed = 0;
    hash_range_into(&mut seed, [1, 2]);
    hash_range_into(&mut seed, [3]);
    assert_eq!(seed, forwards, "Folding in pieces should match folding at once.");

    let pairs = [("a", 1), ("b", 2)];
    assert_eq!(hash_range(pairs.iter()), hash_range(pairs));
}
