// Common parsing shared by the user-facing macros
//
// This module contains:
// - attrs: `#[tuple(...)]` attribute parsing
// - shape: struct layout validation

mod attrs;
mod shape;

pub use attrs::*;
pub use shape::*;
