//! Variable-arity tuple.
//!
//! `DynTup<T>` holds any number of components and is the common comparison
//! surface between fixed-arity tuples: a `Tup4<T>` equals a `DynTup<T>` that
//! reports 4 dimensions and the same components.

use alloc::vec::Vec;
use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::arity::{ImmutableTup2, ImmutableTup3, ImmutableTup4, PooledTup2, PooledTup3, PooledTup4, Tup2, Tup3, Tup4};
use crate::component::Component;
use crate::dynamic::{equals_any, AnyTuple, EqualsAny};
use crate::error::{TupleError, TupleResult};
use crate::view::{hash_view, view_eq, TupleView};

/// Tuple with a runtime dimension count.
#[derive(Debug, Clone, Default)]
pub struct DynTup<T> {
    values: Vec<T>,
}

impl<T: Component> DynTup<T> {
    #[inline]
    pub fn new(values: Vec<T>) -> Self {
        DynTup { values }
    }

    pub fn from_slice(values: &[T]) -> Self {
        Self::new(values.to_vec())
    }

    /// Copies every component of `view`.
    ///
    /// Fails with `IndexOutOfRange` if the view cannot supply an index below
    /// its reported dimension count.
    pub fn from_view<V: TupleView<T> + ?Sized>(view: &V) -> TupleResult<Self> {
        (0..view.dimensions())
            .map(|index| view.try_component_at(index).cloned())
            .collect()
    }

    /// `dimensions` copies of `value`.
    pub fn splat(value: T, dimensions: usize) -> Self {
        Self::new(alloc::vec![value; dimensions])
    }

    /// Replaces the component at `index`.
    pub fn set(&mut self, index: usize, value: T) -> TupleResult<&mut Self> {
        let dimensions = self.values.len();
        if index >= dimensions {
            return Err(TupleError::IndexOutOfRange { index, dimensions });
        }
        self.values[index] = value;
        Ok(self)
    }

    /// Appends a component, growing the dimension count by one.
    pub fn push(&mut self, value: T) -> &mut Self {
        self.values.push(value);
        self
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: Component> TupleView<T> for DynTup<T> {
    #[inline]
    fn dimensions(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn component_at(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }
}

impl<T: Component> PartialEq for DynTup<T> {
    fn eq(&self, other: &Self) -> bool {
        view_eq::<T, _, _>(self, other)
    }
}

impl<T: Component> Eq for DynTup<T> {}

impl<T: Component> Hash for DynTup<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_view::<T, _, _>(self, state)
    }
}

impl<T: Component + 'static> EqualsAny for DynTup<T> {
    fn equals(&self, other: Option<&dyn AnyTuple>) -> bool {
        equals_any::<T, Self>(self, other)
    }
}

impl<T: Component + 'static> AnyTuple for DynTup<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn tuple_dimensions(&self) -> usize {
        self.values.len()
    }

    fn component_any(&self, index: usize) -> Option<&dyn Any> {
        self.values.get(index).map(|c| c as &dyn Any)
    }
}

/// `dynTup<tag>(1, 2, 3)`
impl<T: Component> fmt::Display for DynTup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dynTup")?;
        f.write_str(T::TAG)?;
        f.write_str("(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            value.fmt_component(f)?;
        }
        f.write_str(")")
    }
}

impl<T: Component> From<Vec<T>> for DynTup<T> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T: Component> FromIterator<T> for DynTup<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Component> IntoIterator for DynTup<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

// =============================================================================
// Fixed-arity interop
// =============================================================================

macro_rules! fixed_interop {
    ($($n:literal: $($ty:ident),+);+ $(;)?) => {
        $($(
            impl<T: Component> PartialEq<$ty<T>> for DynTup<T> {
                #[inline]
                fn eq(&self, other: &$ty<T>) -> bool {
                    view_eq::<T, _, _>(self, other)
                }
            }

            impl<T: Component> PartialEq<DynTup<T>> for $ty<T> {
                #[inline]
                fn eq(&self, other: &DynTup<T>) -> bool {
                    view_eq::<T, _, _>(self, other)
                }
            }

            impl<T: Component> From<$ty<T>> for DynTup<T> {
                fn from(source: $ty<T>) -> Self {
                    Self::new(Vec::from(source.into_array()))
                }
            }

            /// Fails with `DimensionMismatch` unless the source has exactly N components.
            impl<'a, T: Component> TryFrom<&'a DynTup<T>> for $ty<T> {
                type Error = TupleError;

                fn try_from(source: &'a DynTup<T>) -> TupleResult<Self> {
                    let values: &[T; $n] = source.as_slice().try_into().map_err(|_| {
                        TupleError::DimensionMismatch { expected: $n, actual: source.dimensions() }
                    })?;
                    Ok(Self::from(values.clone()))
                }
            }
        )+)+
    };
}

fixed_interop! {
    2: Tup2, ImmutableTup2, PooledTup2;
    3: Tup3, ImmutableTup3, PooledTup3;
    4: Tup4, ImmutableTup4, PooledTup4;
}
