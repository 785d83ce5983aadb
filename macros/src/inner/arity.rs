//! Component naming per arity.

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use syn::Ident;

/// Component names in declaration order.
pub const COMPONENTS: [&str; 4] = ["x", "y", "z", "w"];

pub const MIN_ARITY: usize = 2;
pub const MAX_ARITY: usize = COMPONENTS.len();

/// Canonical component idents for an arity: x, y, ...
pub fn component_idents(arity: usize) -> Vec<Ident> {
    COMPONENTS[..arity].iter().map(|s| format_ident!("{}", s)).collect()
}

/// Setter idents: set_x, set_y, ...
pub fn setter_idents(arity: usize) -> Vec<Ident> {
    COMPONENTS[..arity].iter().map(|s| format_ident!("set_{}", s)).collect()
}

/// Unsuffixed index literals 0..arity
pub fn index_literals(arity: usize) -> Vec<Literal> {
    (0..arity).map(Literal::usize_unsuffixed).collect()
}

/// Read-only view trait for an arity: ReadTup2, ReadTup3, ReadTup4
pub fn read_trait(arity: usize) -> Ident {
    format_ident!("ReadTup{}", arity)
}

/// Expand to `T, T, ..` (arity times)
pub fn repeated_param(param: &Ident, arity: usize) -> TokenStream {
    let params = core::iter::repeat_n(param, arity);
    quote! { #(#params),* }
}

/// Default display name: the type name with its first letter lowercased.
///
/// `Tup4` -> `tup4`, `ImmutableTup3` -> `immutableTup3`
pub fn display_name(ident: &Ident) -> String {
    let name = ident.to_string();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => name,
    }
}
