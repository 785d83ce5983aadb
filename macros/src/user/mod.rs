//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Tuple)]` | on struct | Fixed-arity tuple protocol |

mod tuple;

pub use tuple::expand_derive_tuple;
