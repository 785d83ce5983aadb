#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: DynTup and String components in no_std
// - bigint / bigdecimal: arbitrary-precision components

//! # fixtup
//!
//! Generic fixed-arity tuple value types (2, 3 and 4 components of one type)
//! with one shared equality, hashing and factory protocol.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Components                                              |
//! |  - Component trait: eq, hash, 32-bit code, display, type tag     |
//! |  - i8 i16 i32 i64 f32 f64 bool char String BigInt BigDecimal Obj |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: View                                                    |
//! |  - TupleView (dimensions + component_at)                          |
//! |  - view_eq, hash_view, ordered_hash (written once)                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Tuples                                                  |
//! |  - ReadTup2..4 (getters + new_instance factory contract)          |
//! |  - TupN / ImmutableTupN / PooledTupN, DynTup                      |
//! |  - AnyTuple + EqualsAny (runtime-typed equality)                  |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Every concrete tuple is generated by `#[derive(Tuple)]`, which can also be
//! used on your own structs.
//!
//! ## Quick Start
//!
//! ```
//! use fixtup::prelude::*;
//!
//! let a = Tup4::new(1, 2, 3, 4);
//! assert_eq!((*a.x(), *a.w()), (1, 4));
//! assert_eq!(a.to_string(), "tup4i(x=1, y=2, z=3, w=4)");
//!
//! // Equality is structural across representations
//! assert_eq!(a, ImmutableTup4::new(1, 2, 3, 4));
//! assert_eq!(a, DynTup::new(vec![1, 2, 3, 4]));
//! assert_ne!(a, Tup4::new(1, 2, 3, 5));
//!
//! // Factory contract: a new tuple of the same type, receiver untouched
//! let b = a.new_instance(5, 6, 7, 8);
//! assert_eq!(b, [5, 6, 7, 8]);
//! assert_eq!(a, [1, 2, 3, 4]);
//! ```

// Allow `::fixtup` paths emitted by the derive to resolve inside the crate itself
extern crate self as fixtup;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;

// =============================================================================
// Layer 0: Components
// =============================================================================
pub mod component;

// =============================================================================
// Layer 1: View
// =============================================================================
pub mod view;

// =============================================================================
// Layer 2: Tuples
// =============================================================================
pub mod arity;
pub mod dynamic;
#[cfg(feature = "alloc")]
pub mod dyn_tup;

// Construction shorthands (tup!, dyn_tup!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use error::{TupleError, TupleResult};
pub use component::{Component, Obj};
pub use view::{hash_view, ordered_hash, view_eq, TupleView, ViewIter};
pub use arity::{
    ReadTup2, ReadTup3, ReadTup4,
    Tup2, Tup3, Tup4,
    ImmutableTup2, ImmutableTup3, ImmutableTup4,
    PooledTup2, PooledTup3, PooledTup4,
};
pub use dynamic::{AnyTuple, EqualsAny};
#[cfg(feature = "alloc")]
pub use dyn_tup::DynTup;

// Re-export proc-macros
pub use macros::Tuple;

/// Common items for working with tuples.
pub mod prelude {
    pub use crate::component::{Component, Obj};
    pub use crate::view::TupleView;
    pub use crate::arity::{
        ReadTup2, ReadTup3, ReadTup4,
        Tup2, Tup3, Tup4,
        ImmutableTup2, ImmutableTup3, ImmutableTup4,
        PooledTup2, PooledTup3, PooledTup4,
    };
    pub use crate::dynamic::{AnyTuple, EqualsAny};
    #[cfg(feature = "alloc")]
    pub use crate::dyn_tup::DynTup;
    pub use crate::error::{TupleError, TupleResult};
    pub use macros::Tuple;
}
