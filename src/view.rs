//! Variable-arity view and the shared equality/hash algorithm.
//!
//! `TupleView` is the one capability every tuple representation exposes: a
//! reported dimension count plus indexed component access. Equality and
//! hashing are written once against it, so fixed tuples of every variant,
//! `DynTup`, and plain arrays all compare and hash the same way.
//!
//! ```text
//! Tup4<T> ----------+
//! ImmutableTup4<T> -+
//! PooledTup4<T> ----+--> TupleView<T> --> view_eq / hash_view / ordered_hash
//! DynTup<T> --------+
//! [T; N], [T] ------+
//! ```

use core::hash::Hasher;
use core::marker::PhantomData;

use crate::component::Component;
use crate::error::{TupleError, TupleResult};

/// Indexed, fixed-count view over the components of a tuple.
pub trait TupleView<T: Component> {
    /// Number of components this view reports.
    fn dimensions(&self) -> usize;

    /// Component at `index`, or `None` past the end.
    fn component_at(&self, index: usize) -> Option<&T>;

    fn try_component_at(&self, index: usize) -> TupleResult<&T> {
        self.component_at(index).ok_or(TupleError::IndexOutOfRange {
            index,
            dimensions: self.dimensions(),
        })
    }

    /// Components in index order.
    fn components(&self) -> ViewIter<'_, T, Self> {
        ViewIter { view: self, index: 0, _component: PhantomData }
    }

    /// Structural equality against any other view of the same component type.
    fn view_eq<V: TupleView<T> + ?Sized>(&self, other: &V) -> bool {
        view_eq::<T, _, _>(self, other)
    }

    /// Order-sensitive 32-bit hash: `1`, then `31 * acc + code` per component.
    fn ordered_hash(&self) -> i32 {
        ordered_hash::<T, _>(self)
    }
}

/// Iterator over the components of a `TupleView`.
pub struct ViewIter<'a, T, V: ?Sized> {
    view: &'a V,
    index: usize,
    _component: PhantomData<&'a T>,
}

impl<'a, T: Component, V: TupleView<T> + ?Sized> Iterator for ViewIter<'a, T, V> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let view = self.view;
        if self.index >= view.dimensions() {
            return None;
        }
        let item = view.component_at(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.view.dimensions().saturating_sub(self.index)))
    }
}

// =============================================================================
// Shared algorithm
// =============================================================================

/// Dimension counts must match, then components are compared pairwise in
/// index order, stopping at the first mismatch. An index the view reports
/// but cannot supply counts as a mismatch.
pub fn view_eq<T, A, B>(a: &A, b: &B) -> bool
where
    T: Component,
    A: TupleView<T> + ?Sized,
    B: TupleView<T> + ?Sized,
{
    let dimensions = a.dimensions();
    if dimensions != b.dimensions() {
        return false;
    }
    (0..dimensions).all(|i| match (a.component_at(i), b.component_at(i)) {
        (Some(left), Some(right)) => left.component_eq(right),
        _ => false,
    })
}

/// Feed the dimension count, then every component, into `state`.
pub fn hash_view<T, V, H>(view: &V, state: &mut H)
where
    T: Component,
    V: TupleView<T> + ?Sized,
    H: Hasher,
{
    state.write_usize(view.dimensions());
    for component in view.components() {
        component.component_hash(state);
    }
}

pub fn ordered_hash<T, V>(view: &V) -> i32
where
    T: Component,
    V: TupleView<T> + ?Sized,
{
    view.components()
        .fold(1i32, |acc, c| acc.wrapping_mul(31).wrapping_add(c.component_code()))
}

/// `Ok` when `view` reports exactly `expected` dimensions.
pub fn expect_dimensions<T, V>(view: &V, expected: usize) -> TupleResult<()>
where
    T: Component,
    V: TupleView<T> + ?Sized,
{
    let actual = view.dimensions();
    if actual == expected {
        Ok(())
    } else {
        Err(TupleError::DimensionMismatch { expected, actual })
    }
}

// =============================================================================
// Arrays and slices
// =============================================================================

impl<T: Component, const N: usize> TupleView<T> for [T; N] {
    #[inline]
    fn dimensions(&self) -> usize {
        N
    }

    #[inline]
    fn component_at(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T: Component> TupleView<T> for [T] {
    #[inline]
    fn dimensions(&self) -> usize {
        self.len()
    }

    #[inline]
    fn component_at(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_view() {
        let a = [1, 2, 3];
        assert_eq!(TupleView::<i32>::dimensions(&a), 3);
        assert_eq!(a.component_at(2), Some(&3));
        assert_eq!(a.component_at(3), None);
        assert_eq!(
            a.try_component_at(5),
            Err(TupleError::IndexOutOfRange { index: 5, dimensions: 3 })
        );
    }

    #[test]
    fn test_view_eq_checks_dimensions_first() {
        let a = [1, 2, 3];
        let b: &[i32] = &[1, 2];
        assert!(!view_eq::<i32, _, _>(&a, b));
        assert!(view_eq::<i32, _, _>(&a, &[1, 2, 3][..]));
        assert!(!view_eq::<i32, _, _>(&a, &[1, 2, 4]));
    }

    #[test]
    fn test_components_in_order() {
        let a = [4i64, 5, 6];
        let collected: Vec<i64> = a.components().copied().collect();
        assert_eq!(collected, vec![4, 5, 6]);
    }

    #[test]
    fn test_ordered_hash() {
        assert_eq!(ordered_hash::<i32, _>(&[] as &[i32]), 1);
        // 31 * (31 * 1 + 1) + 2
        assert_eq!([1, 2].ordered_hash(), 994);
    }

    #[test]
    fn test_expect_dimensions() {
        assert!(expect_dimensions::<i32, _>(&[1, 2], 2).is_ok());
        assert_eq!(
            expect_dimensions::<i32, _>(&[1, 2], 3),
            Err(TupleError::DimensionMismatch { expected: 3, actual: 2 })
        );
    }
}
