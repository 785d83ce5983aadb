//! `#[derive(Tuple)]` expansion.
//!
//! Every emitted path is absolute (`::fixtup::..`, `::core::..`) and every
//! trait method is called in UFCS form, so the expansion does not depend on
//! what the deriving module has imported.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_quote, DeriveInput, Generics};

use crate::common::{parse_shape, TupleAttrs, TupleShape};
use crate::inner::arity::{display_name, index_literals, read_trait, repeated_param, setter_idents};

pub fn expand_derive_tuple(input: DeriveInput) -> TokenStream2 {
    match try_expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let attrs = TupleAttrs::from_attrs(&input.attrs)?;
    let shape = parse_shape(input)?;

    let mut out = TokenStream2::new();
    out.extend(expand_view(&shape));
    out.extend(expand_read(&shape));
    out.extend(expand_constructors(&shape, &attrs));
    if attrs.mutable {
        out.extend(expand_setters(&shape));
    }
    out.extend(expand_eq_hash(&shape));
    out.extend(expand_display(&shape, &attrs));
    out.extend(expand_conversions(&shape, &attrs));
    Ok(out)
}

/// The struct's own generics plus `T: <bound>`, so user bounds and where
/// clauses carry over to every impl.
fn bounded_generics(shape: &TupleShape, bound: TokenStream2) -> Generics {
    let mut generics = shape.generics.clone();
    let param = &shape.param;
    generics.make_where_clause().predicates.push(parse_quote!(#param: #bound));
    generics
}

fn component_generics(shape: &TupleShape) -> Generics {
    bounded_generics(shape, quote!(::fixtup::Component))
}

fn static_generics(shape: &TupleShape) -> Generics {
    bounded_generics(shape, quote!(::fixtup::Component + 'static))
}

/// Construction path names: (new, splat, from_array, from_tuple, from_view)
fn constructor_names(attrs: &TupleAttrs) -> [syn::Ident; 5] {
    let names = if attrs.factory {
        ["of", "of_splat", "of_array", "of_tuple", "of_view"]
    } else {
        ["new", "splat", "from_array", "from_tuple", "from_view"]
    };
    names.map(|n| format_ident!("{}", n))
}

// =============================================================================
// TupleView / ReadTupN
// =============================================================================

fn expand_view(shape: &TupleShape) -> TokenStream2 {
    let TupleShape { ident, param, arity, fields, .. } = shape;
    let indices = index_literals(*arity);
    let generics = component_generics(shape);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::fixtup::TupleView<#param> for #ident #ty_generics #where_clause {
            #[inline]
            fn dimensions(&self) -> usize {
                #arity
            }

            #[inline]
            fn component_at(&self, index: usize) -> ::core::option::Option<&#param> {
                match index {
                    #( #indices => ::core::option::Option::Some(&self.#fields), )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

fn expand_read(shape: &TupleShape) -> TokenStream2 {
    let TupleShape { ident, param, arity, fields, .. } = shape;
    let read = read_trait(*arity);
    let generics = component_generics(shape);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::fixtup::#read<#param> for #ident #ty_generics #where_clause {
            #(
                #[inline]
                fn #fields(&self) -> &#param {
                    &self.#fields
                }
            )*

            #[inline]
            fn new_instance(&self, #(#fields: #param),*) -> Self {
                Self { #(#fields),* }
            }
        }
    }
}

// =============================================================================
// Construction surface
// =============================================================================

fn expand_constructors(shape: &TupleShape, attrs: &TupleAttrs) -> TokenStream2 {
    let TupleShape { ident, param, arity, fields, .. } = shape;
    let read = read_trait(*arity);
    let indices = index_literals(*arity);
    let [new, splat, from_array, from_tuple, from_view] = constructor_names(attrs);
    let generics = component_generics(shape);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            /// Creates a tuple from its components in declaration order.
            #[inline]
            pub fn #new(#(#fields: #param),*) -> Self {
                Self { #(#fields),* }
            }

            /// Creates a tuple with every component set to `value`.
            pub fn #splat(value: #param) -> Self {
                #( let #fields = ::core::clone::Clone::clone(&value); )*
                Self::#new(#(#fields),*)
            }

            /// Creates a tuple from an array, in index order.
            pub fn #from_array(values: [#param; #arity]) -> Self {
                let [#(#fields),*] = values;
                Self::#new(#(#fields),*)
            }

            /// Copies the components of any tuple of the same arity.
            pub fn #from_tuple<S: ::fixtup::#read<#param> + ?Sized>(source: &S) -> Self {
                Self::#new(#(
                    ::core::clone::Clone::clone(<S as ::fixtup::#read<#param>>::#fields(source))
                ),*)
            }

            /// Copies the components of a variable-arity view.
            ///
            /// Fails with `DimensionMismatch` unless the view reports exactly
            /// as many dimensions as this tuple has components.
            pub fn #from_view<V: ::fixtup::TupleView<#param> + ?Sized>(
                view: &V,
            ) -> ::fixtup::TupleResult<Self> {
                ::fixtup::view::expect_dimensions::<#param, V>(view, #arity)?;
                #(
                    let #fields = ::core::clone::Clone::clone(
                        <V as ::fixtup::TupleView<#param>>::try_component_at(view, #indices)?,
                    );
                )*
                ::core::result::Result::Ok(Self::#new(#(#fields),*))
            }

            /// Moves the components out into an array.
            #[inline]
            pub fn into_array(self) -> [#param; #arity] {
                [#(self.#fields),*]
            }
        }
    }
}

fn expand_setters(shape: &TupleShape) -> TokenStream2 {
    let TupleShape { ident, param, arity, fields, .. } = shape;
    let read = read_trait(*arity);
    let setters = setter_idents(*arity);
    let indices = index_literals(*arity);
    let generics = component_generics(shape);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(
                #[inline]
                pub fn #setters(&mut self, value: #param) -> &mut Self {
                    self.#fields = value;
                    self
                }
            )*

            /// Overwrites every component in place.
            pub fn set(&mut self, #(#fields: #param),*) -> &mut Self {
                #( self.#fields = #fields; )*
                self
            }

            pub fn set_splat(&mut self, value: #param) -> &mut Self {
                #( let #fields = ::core::clone::Clone::clone(&value); )*
                self.set(#(#fields),*)
            }

            pub fn set_from<S: ::fixtup::#read<#param> + ?Sized>(&mut self, source: &S) -> &mut Self {
                #(
                    let #fields = ::core::clone::Clone::clone(
                        <S as ::fixtup::#read<#param>>::#fields(source),
                    );
                )*
                self.set(#(#fields),*)
            }

            pub fn set_from_array(&mut self, values: [#param; #arity]) -> &mut Self {
                let [#(#fields),*] = values;
                self.set(#(#fields),*)
            }

            /// Leaves the tuple untouched when the view has the wrong dimension count.
            pub fn set_from_view<V: ::fixtup::TupleView<#param> + ?Sized>(
                &mut self,
                view: &V,
            ) -> ::fixtup::TupleResult<&mut Self> {
                ::fixtup::view::expect_dimensions::<#param, V>(view, #arity)?;
                #(
                    let #fields = ::core::clone::Clone::clone(
                        <V as ::fixtup::TupleView<#param>>::try_component_at(view, #indices)?,
                    );
                )*
                ::core::result::Result::Ok(self.set(#(#fields),*))
            }
        }
    }
}

// =============================================================================
// Equality / hashing / display
// =============================================================================

fn expand_eq_hash(shape: &TupleShape) -> TokenStream2 {
    let TupleShape { ident, param, arity, fields, .. } = shape;
    let indices = index_literals(*arity);
    let generics = component_generics(shape);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let dyn_generics = static_generics(shape);
    let (dyn_impl_generics, _, dyn_where_clause) = dyn_generics.split_for_impl();

    quote! {
        impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                ::fixtup::view::view_eq::<#param, _, _>(self, other)
            }
        }

        impl #impl_generics ::core::cmp::Eq for #ident #ty_generics #where_clause {}

        impl #impl_generics ::core::cmp::PartialEq<[#param; #arity]> for #ident #ty_generics #where_clause {
            #[inline]
            fn eq(&self, other: &[#param; #arity]) -> bool {
                ::fixtup::view::view_eq::<#param, _, _>(self, other)
            }
        }

        impl #impl_generics ::core::hash::Hash for #ident #ty_generics #where_clause {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::fixtup::view::hash_view::<#param, _, _>(self, state)
            }
        }

        impl #dyn_impl_generics ::fixtup::EqualsAny for #ident #ty_generics #dyn_where_clause {
            fn equals(&self, other: ::core::option::Option<&dyn ::fixtup::AnyTuple>) -> bool {
                ::fixtup::dynamic::equals_any::<#param, Self>(self, other)
            }
        }

        impl #dyn_impl_generics ::fixtup::AnyTuple for #ident #ty_generics #dyn_where_clause {
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            #[inline]
            fn tuple_dimensions(&self) -> usize {
                #arity
            }

            fn component_any(&self, index: usize) -> ::core::option::Option<&dyn ::core::any::Any> {
                match index {
                    #( #indices => ::core::option::Option::Some(&self.#fields as &dyn ::core::any::Any), )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

fn expand_display(shape: &TupleShape, attrs: &TupleAttrs) -> TokenStream2 {
    let TupleShape { ident, param, fields, .. } = shape;
    let name = attrs.name.clone().unwrap_or_else(|| display_name(ident));
    let generics = component_generics(shape);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let labels: Vec<String> = fields
        .iter()
        .enumerate()
        .map(|(i, f)| if i == 0 { format!("{}=", f) } else { format!(", {}=", f) })
        .collect();

    quote! {
        impl #impl_generics ::core::fmt::Display for #ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(#name)?;
                f.write_str(<#param as ::fixtup::Component>::TAG)?;
                f.write_str("(")?;
                #(
                    f.write_str(#labels)?;
                    <#param as ::fixtup::Component>::fmt_component(&self.#fields, f)?;
                )*
                f.write_str(")")
            }
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

fn expand_conversions(shape: &TupleShape, attrs: &TupleAttrs) -> TokenStream2 {
    let TupleShape { ident, param, arity, fields, .. } = shape;
    let tuple_ty = repeated_param(param, *arity);
    let [new, _, from_array, ..] = constructor_names(attrs);
    let generics = component_generics(shape);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::core::convert::From<(#tuple_ty)> for #ident #ty_generics #where_clause {
            #[inline]
            fn from((#(#fields),*): (#tuple_ty)) -> Self {
                Self::#new(#(#fields),*)
            }
        }

        impl #impl_generics ::core::convert::From<[#param; #arity]> for #ident #ty_generics #where_clause {
            #[inline]
            fn from(values: [#param; #arity]) -> Self {
                Self::#from_array(values)
            }
        }
    }
}
