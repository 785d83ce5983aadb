//! Fixed-arity tuples.
//!
//! Each arity N in 2..=4 gets a read-only view trait `ReadTupN` and three
//! concrete variants sharing one layout (`x`, `y`, `z`, `w`, first N):
//!
//! | Variant | Construction | Mutation |
//! |---------|--------------|----------|
//! | `TupN` | `new`, `splat`, `from_*` | fluent `set_*` returning `&mut Self` |
//! | `ImmutableTupN` | `new`, `splat`, `from_*` | none |
//! | `PooledTupN` | `of`, `of_splat`, `of_*` | none |
//!
//! All three compare equal to each other, to `[T; N]` and to a `DynTup`
//! with the same components, and hash identically.

use crate::component::Component;
use crate::error::TupleResult;
use crate::view::{expect_dimensions, view_eq, TupleView};
use macros::Tuple;

macro_rules! define_arity {
    ($n:literal; $($field:ident $index:literal),+) => {
        paste::paste! {
            #[doc = "Read-only view of a tuple with exactly " $n " components."]
            ///
            /// The `new_instance*` family is the factory contract: given new
            /// component values it returns a fresh tuple of the implementing
            /// type, leaving the receiver untouched. Every overload reduces to
            /// `new_instance`.
            pub trait [<ReadTup $n>]<T: Component>: TupleView<T> {
                $(
                    #[doc = "Component `" $field "`."]
                    fn $field(&self) -> &T;
                )+

                /// New tuple of the implementing type with the given components.
                fn new_instance(&self, $($field: T),+) -> Self
                where
                    Self: Sized;

                fn new_instance_splat(&self, value: T) -> Self
                where
                    Self: Sized,
                {
                    $( let $field = value.clone(); )+
                    self.new_instance($($field),+)
                }

                fn new_instance_from<S: [<ReadTup $n>]<T> + ?Sized>(&self, source: &S) -> Self
                where
                    Self: Sized,
                {
                    self.new_instance($(source.$field().clone()),+)
                }

                fn new_instance_from_array(&self, values: [T; $n]) -> Self
                where
                    Self: Sized,
                {
                    let [$($field),+] = values;
                    self.new_instance($($field),+)
                }

                fn new_instance_from_view<V: TupleView<T> + ?Sized>(&self, view: &V) -> TupleResult<Self>
                where
                    Self: Sized,
                {
                    expect_dimensions::<T, V>(view, $n)?;
                    $( let $field = view.try_component_at($index)?.clone(); )+
                    Ok(self.new_instance($($field),+))
                }

                fn to_array(&self) -> [T; $n] {
                    [$(self.$field().clone()),+]
                }
            }

            #[doc = "Mutable " $n "-component tuple with fluent setters."]
            #[derive(Debug, Clone, Copy, Default, Tuple)]
            #[tuple(mutable)]
            pub struct [<Tup $n>]<T> {
                $($field: T),+
            }

            #[doc = "Immutable " $n "-component tuple."]
            #[derive(Debug, Clone, Copy, Default, Tuple)]
            pub struct [<ImmutableTup $n>]<T> {
                $($field: T),+
            }

            #[doc = "Immutable " $n "-component tuple built through `of*` static factories."]
            #[derive(Debug, Clone, Copy, Default, Tuple)]
            #[tuple(factory)]
            pub struct [<PooledTup $n>]<T> {
                $($field: T),+
            }

            cross_variants!([<Tup $n>], [<ImmutableTup $n>]);
            cross_variants!([<Tup $n>], [<PooledTup $n>]);
            cross_variants!([<ImmutableTup $n>], [<PooledTup $n>]);
        }
    };
}

/// Equality and conversions between two variants of one arity.
macro_rules! cross_variants {
    ($left:ident, $right:ident) => {
        impl<T: Component> PartialEq<$right<T>> for $left<T> {
            #[inline]
            fn eq(&self, other: &$right<T>) -> bool {
                view_eq::<T, _, _>(self, other)
            }
        }

        impl<T: Component> PartialEq<$left<T>> for $right<T> {
            #[inline]
            fn eq(&self, other: &$left<T>) -> bool {
                view_eq::<T, _, _>(self, other)
            }
        }

        impl<T: Component> From<$right<T>> for $left<T> {
            #[inline]
            fn from(source: $right<T>) -> Self {
                Self::from(source.into_array())
            }
        }

        impl<T: Component> From<$left<T>> for $right<T> {
            #[inline]
            fn from(source: $left<T>) -> Self {
                Self::from(source.into_array())
            }
        }
    };
}

define_arity!(2; x 0, y 1);
define_arity!(3; x 0, y 1, z 2);
define_arity!(4; x 0, y 1, z 2, w 3);
