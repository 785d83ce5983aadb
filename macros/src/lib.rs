//! Procedural macros for the fixtup tuple library
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Tuple)]` | struct | Implement the fixed-arity tuple protocol |
//! | `#[tuple(mutable)]` | struct | Also emit fluent setters |
//! | `#[tuple(factory)]` | struct | Name construction paths `of*` instead of `new`/`from_*` |
//! | `#[tuple(name = "..")]` | struct | Override the display name |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Debug, Clone, Tuple)]
//! #[tuple(mutable)]
//! pub struct Point<T> {
//!     x: T,
//!     y: T,
//! }
//!
//! let mut p = Point::new(1, 2);
//! p.set_x(5).set_y(6);
//! assert_eq!(p.to_string(), "pointi(x=5, y=6)");
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive the tuple protocol for a struct with 2 to 4 components.
///
/// The struct must have exactly one type parameter and named fields `x`, `y`,
/// `z`, `w` (the first N of them, in that order), all of that type.
///
/// Generates:
/// - `TupleView<T>` and `ReadTupN<T>` (getters and `new_instance`)
/// - construction surface: `new`, `splat`, `from_array`, `from_tuple`, `from_view`
///   (or `of`, `of_splat`, `of_array`, `of_tuple`, `of_view` with `factory`)
/// - `into_array`
/// - setters `set_x`, ..., `set`, `set_splat`, `set_from`, `set_from_array`,
///   `set_from_view` (with `mutable`)
/// - `PartialEq`, `Eq`, `Hash`, `Display`, `EqualsAny`
/// - `From<(T, ..)>`, `From<[T; N]>`, `PartialEq<[T; N]>`
#[proc_macro_derive(Tuple, attributes(tuple))]
pub fn derive_tuple(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_tuple(input).into()
}
