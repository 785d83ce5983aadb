//! Construction surface and the `new_instance` factory contract.

use fixtup::prelude::*;

// =============================================================================
// Construction equivalence
// =============================================================================

#[test]
fn test_concrete_scenario() {
    let t = Tup4::new(1, 2, 3, 4);
    assert_eq!(*t.x(), 1);
    assert_eq!(*t.y(), 2);
    assert_eq!(*t.z(), 3);
    assert_eq!(*t.w(), 4);
    assert_eq!(t.to_string(), "tup4i(x=1, y=2, z=3, w=4)");
    assert_ne!(t, Tup4::new(1, 2, 3, 5));
    assert_eq!(t, DynTup::new(vec![1, 2, 3, 4]));
}

#[test]
fn test_splat_matches_repeated_components() {
    assert_eq!(Tup2::splat(7), Tup2::new(7, 7));
    assert_eq!(ImmutableTup3::splat('q'), ImmutableTup3::new('q', 'q', 'q'));
    assert_eq!(PooledTup4::of_splat(1.5f64), PooledTup4::of(1.5, 1.5, 1.5, 1.5));
}

#[test]
fn test_array_construction() {
    assert_eq!(Tup3::from_array([1, 2, 3]), Tup3::new(1, 2, 3));
    assert_eq!(PooledTup2::of_array([true, false]), PooledTup2::of(true, false));
    assert_eq!(ImmutableTup4::from([4i64, 3, 2, 1]), ImmutableTup4::new(4, 3, 2, 1));
}

#[test]
fn test_rust_tuple_construction() {
    let t: Tup3<i32> = (1, 2, 3).into();
    assert_eq!(t, Tup3::new(1, 2, 3));
    let p = PooledTup2::from(("a".to_string(), "b".to_string()));
    assert_eq!(p.x(), "a");
}

#[test]
fn test_copy_construction_reads_components_in_order() {
    let source = PooledTup4::of(9, 8, 7, 6);
    let copy = Tup4::from_tuple(&source);
    assert_eq!(copy, Tup4::new(*source.x(), *source.y(), *source.z(), *source.w()));

    let immutable = ImmutableTup4::from_tuple(&copy);
    assert_eq!(immutable.to_array(), [9, 8, 7, 6]);
}

#[test]
fn test_view_construction() {
    let d = DynTup::new(vec![1, 2, 3]);
    assert_eq!(Tup3::from_view(&d), Ok(Tup3::new(1, 2, 3)));
    assert_eq!(PooledTup3::of_view(&[4, 5, 6]), Ok(PooledTup3::of(4, 5, 6)));
    assert_eq!(ImmutableTup2::from_view(&[1, 2][..]), Ok(ImmutableTup2::new(1, 2)));
}

#[test]
fn test_view_construction_rejects_wrong_dimensions() {
    let d = DynTup::new(vec![1, 2, 3]);
    assert_eq!(
        Tup4::from_view(&d),
        Err(TupleError::DimensionMismatch { expected: 4, actual: 3 })
    );
    assert_eq!(
        Tup2::try_from(&d),
        Err(TupleError::DimensionMismatch { expected: 2, actual: 3 })
    );
}

#[test]
fn test_default_is_zero_or_empty() {
    assert_eq!(Tup4::<i32>::default(), Tup4::splat(0));
    assert_eq!(ImmutableTup2::<bool>::default(), ImmutableTup2::new(false, false));
    assert_eq!(Tup3::<String>::default(), Tup3::splat(String::new()));
}

// =============================================================================
// Factory contract
// =============================================================================

#[test]
fn test_new_instance_does_not_mutate_receiver() {
    let t = ImmutableTup3::new(1, 2, 3);
    let n = t.new_instance(4, 5, 6);
    assert_eq!(n, ImmutableTup3::new(4, 5, 6));
    assert_eq!(t, ImmutableTup3::new(1, 2, 3));
    assert!(!std::ptr::eq(&t, &n));
}

#[test]
fn test_new_instance_overloads_reduce_to_components() {
    let t = PooledTup2::of(0, 0);
    assert_eq!(t.new_instance_splat(3), PooledTup2::of(3, 3));
    assert_eq!(t.new_instance_from(&Tup2::new(1, 2)), PooledTup2::of(1, 2));
    assert_eq!(t.new_instance_from_array([5, 6]), PooledTup2::of(5, 6));
    assert_eq!(t.new_instance_from_view(&DynTup::new(vec![7, 8])), Ok(PooledTup2::of(7, 8)));
    assert!(t.new_instance_from_view(&[1, 2, 3]).is_err());
    assert_eq!(t, PooledTup2::of(0, 0));
}

/// Generic code builds "another one like this" without knowing the concrete type.
fn scaled<S: ReadTup3<i64>>(t: &S, k: i64) -> S {
    t.new_instance(t.x() * k, t.y() * k, t.z() * k)
}

#[test]
fn test_generic_algorithm_keeps_concrete_type() {
    let m: Tup3<i64> = scaled(&Tup3::new(1, 2, 3), 2);
    let i: ImmutableTup3<i64> = scaled(&ImmutableTup3::new(1, 2, 3), 3);
    let p: PooledTup3<i64> = scaled(&PooledTup3::of(1, 2, 3), 4);
    assert_eq!(m.to_string(), "tup3l(x=2, y=4, z=6)");
    assert_eq!(i.to_string(), "immutableTup3l(x=3, y=6, z=9)");
    assert_eq!(p.to_string(), "pooledTup3l(x=4, y=8, z=12)");
}

// =============================================================================
// Fluent mutation
// =============================================================================

#[test]
fn test_setters_chain_and_mutate_in_place() {
    let mut t = Tup4::splat(0);
    t.set_x(1).set_y(2).set_z(3).set_w(4);
    assert_eq!(t, [1, 2, 3, 4]);

    t.set(4, 3, 2, 1);
    assert_eq!(t, [4, 3, 2, 1]);

    t.set_splat(9);
    assert_eq!(t, [9; 4]);
}

#[test]
fn test_set_from_sources() {
    let mut t = Tup2::new(0, 0);
    t.set_from(&ImmutableTup2::new(1, 2));
    assert_eq!(t, [1, 2]);
    t.set_from_array([3, 4]);
    assert_eq!(t, [3, 4]);
    assert!(t.set_from_view(&DynTup::new(vec![5, 6])).is_ok());
    assert_eq!(t, [5, 6]);
}

#[test]
fn test_set_from_view_leaves_tuple_on_error() {
    let mut t = Tup3::new(1, 2, 3);
    let err = t.set_from_view(&[9, 9]).map(|_| ());
    assert_eq!(err, Err(TupleError::DimensionMismatch { expected: 3, actual: 2 }));
    assert_eq!(t, [1, 2, 3]);
}

#[test]
fn test_setter_returns_receiver() {
    let mut t = Tup2::new(1, 2);
    let addr = &t as *const Tup2<i32>;
    let returned = t.set_x(5) as *const Tup2<i32>;
    assert_eq!(addr, returned);
}

// =============================================================================
// DynTup
// =============================================================================

#[test]
fn test_dyn_tup_round_trip_through_fixed() {
    let fixed = ImmutableTup4::new(1, 2, 3, 4);
    let d = DynTup::from(fixed);
    assert_eq!(d.dimensions(), 4);
    assert_eq!(ImmutableTup4::try_from(&d), Ok(fixed));
    assert_eq!(DynTup::from_view(&fixed), Ok(d));
}

#[test]
fn test_dyn_tup_splat_and_index() {
    let mut d = DynTup::splat('z', 3);
    assert_eq!(d.component_at(2), Some(&'z'));
    assert_eq!(d.try_component_at(3), Err(TupleError::IndexOutOfRange { index: 3, dimensions: 3 }));
    d.set(0, 'a').unwrap().push('b');
    assert_eq!(d.into_vec(), vec!['a', 'z', 'z', 'b']);
}
