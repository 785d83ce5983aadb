//! Construction shorthands.

// =============================================================================
// tup! - Fixed-arity construction by component count
// =============================================================================

/// Build a mutable fixed-arity tuple, picking the arity from the argument count.
///
/// # Example
///
/// ```
/// use fixtup::prelude::*;
///
/// let t = fixtup::tup!(1, 2, 3, 4);
/// assert_eq!(t.to_string(), "tup4i(x=1, y=2, z=3, w=4)");
///
/// // Broadcast one value to N components
/// let s = fixtup::tup!(0.5f32; 3);
/// assert_eq!(s, Tup3::new(0.5, 0.5, 0.5));
/// ```
#[macro_export]
macro_rules! tup {
    ($x:expr, $y:expr $(,)?) => {
        $crate::Tup2::new($x, $y)
    };
    ($x:expr, $y:expr, $z:expr $(,)?) => {
        $crate::Tup3::new($x, $y, $z)
    };
    ($x:expr, $y:expr, $z:expr, $w:expr $(,)?) => {
        $crate::Tup4::new($x, $y, $z, $w)
    };
    ($value:expr; 2) => {
        $crate::Tup2::splat($value)
    };
    ($value:expr; 3) => {
        $crate::Tup3::splat($value)
    };
    ($value:expr; 4) => {
        $crate::Tup4::splat($value)
    };
}

// =============================================================================
// dyn_tup! - Variable-arity construction
// =============================================================================

/// Build a `DynTup` from a component list.
///
/// ```
/// let t = fixtup::dyn_tup![1i64, 2, 3];
/// assert_eq!(t.to_string(), "dynTupl(1, 2, 3)");
/// ```
#[cfg(feature = "alloc")]
#[macro_export]
macro_rules! dyn_tup {
    ($($value:expr),* $(,)?) => {
        <$crate::DynTup<_> as ::core::iter::FromIterator<_>>::from_iter([$($value),*])
    };
}
