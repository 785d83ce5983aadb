//! Hash consistency across representations and the ordered 32-bit hash.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use fixtup::prelude::*;

fn hash_of<H: Hash + ?Sized>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_equal_tuples_hash_equal_across_variants() {
    let m = Tup3::new(1, 2, 3);
    let i = ImmutableTup3::new(1, 2, 3);
    let p = PooledTup3::of(1, 2, 3);
    let d = DynTup::new(vec![1, 2, 3]);
    assert_eq!(hash_of(&m), hash_of(&i));
    assert_eq!(hash_of(&i), hash_of(&p));
    assert_eq!(hash_of(&p), hash_of(&d));
}

#[test]
fn test_hash_is_order_sensitive() {
    assert_ne!(hash_of(&Tup2::new(1, 2)), hash_of(&Tup2::new(2, 1)));
    assert_ne!(Tup2::new(1, 2).ordered_hash(), Tup2::new(2, 1).ordered_hash());
}

#[test]
fn test_float_hash_agrees_with_equality() {
    assert_eq!(hash_of(&Tup2::new(f64::NAN, 0.5)), hash_of(&Tup2::new(f64::NAN, 0.5)));
    let mut set = HashSet::new();
    set.insert(ImmutableTup2::new(f32::NAN, 1.0));
    assert!(set.contains(&ImmutableTup2::new(f32::NAN, 1.0)));
}

#[test]
fn test_tuples_as_set_keys() {
    let mut set = HashSet::new();
    assert!(set.insert(PooledTup2::of('a', 'b')));
    assert!(!set.insert(PooledTup2::of('a', 'b')));
    assert!(set.insert(PooledTup2::of('b', 'a')));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_ordered_hash_values() {
    // 31 * (31 * 1 + 1) + 2
    assert_eq!(Tup2::new(1, 2).ordered_hash(), 994);
    // 31 * (31 * (31 * 1 + 1) + 2) + 3
    assert_eq!(ImmutableTup3::new(1, 2, 3).ordered_hash(), 30817);
    assert_eq!(
        Tup2::new(true, false).ordered_hash(),
        31 * (31 + 1231) + 1237
    );
    assert_eq!(
        Tup2::new("a".to_string(), "b".to_string()).ordered_hash(),
        31 * (31 + 97) + 98
    );
}

#[test]
fn test_ordered_hash_consistent_across_representations() {
    let t = Tup4::new(10i64, -20, 30, -40);
    assert_eq!(t.ordered_hash(), DynTup::from(t).ordered_hash());
    assert_eq!(t.ordered_hash(), [10i64, -20, 30, -40].ordered_hash());
}
