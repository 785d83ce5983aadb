//! Dynamic equality against tuples of unknown type.
//!
//! `EqualsAny::equals` answers "is this value the same sequence of components
//! as me?" for a tuple whose concrete type is only known at runtime:
//!
//! 1. `None` is never equal.
//! 2. The very same object is always equal.
//! 3. Otherwise the other tuple is read through its type-erased `AnyTuple`
//!    view and compared with `view_eq`: dimension count first, then every
//!    component, which must downcast to the same component type `T`.
//!
//! Every `#[derive(Tuple)]` type, `DynTup<T>` and `[T; N]` implement
//! `AnyTuple`, so the relation is symmetric across all of them, including
//! tuple types defined outside this crate.

use core::any::Any;
use core::marker::PhantomData;
use core::ptr;

use crate::component::Component;
use crate::view::{view_eq, TupleView};

/// Type-erased tuple view: a dimension count plus components as `&dyn Any`.
pub trait AnyTuple: Any {
    fn as_any(&self) -> &dyn Any;

    /// Number of components, as `TupleView::dimensions` reports it.
    fn tuple_dimensions(&self) -> usize;

    /// Component at `index`, or `None` past the end.
    fn component_any(&self, index: usize) -> Option<&dyn Any>;
}

/// Equality against a tuple whose type is only known at runtime.
pub trait EqualsAny {
    fn equals(&self, other: Option<&dyn AnyTuple>) -> bool;
}

/// Reads an `AnyTuple` as a `TupleView<T>`. Components of another type read
/// as missing, which `view_eq` treats as a mismatch.
struct ErasedView<'a, T> {
    tuple: &'a dyn AnyTuple,
    _component: PhantomData<T>,
}

impl<T: Component + 'static> TupleView<T> for ErasedView<'_, T> {
    fn dimensions(&self) -> usize {
        self.tuple.tuple_dimensions()
    }

    fn component_at(&self, index: usize) -> Option<&T> {
        self.tuple.component_any(index)?.downcast_ref::<T>()
    }
}

pub fn equals_any<T, V>(this: &V, other: Option<&dyn AnyTuple>) -> bool
where
    T: Component + 'static,
    V: TupleView<T> + 'static,
{
    let Some(other) = other else {
        return false;
    };

    if other.as_any().downcast_ref::<V>().is_some_and(|same| ptr::eq(this, same)) {
        return true;
    }

    let erased = ErasedView::<T> { tuple: other, _component: PhantomData };
    view_eq::<T, _, _>(this, &erased)
}

impl<T: Component + 'static, const N: usize> AnyTuple for [T; N] {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn tuple_dimensions(&self) -> usize {
        N
    }

    fn component_any(&self, index: usize) -> Option<&dyn Any> {
        self.as_slice().get(index).map(|c| c as &dyn Any)
    }
}
