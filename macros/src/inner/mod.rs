//! Internal tables and helpers

pub mod arity;
