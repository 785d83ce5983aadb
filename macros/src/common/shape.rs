//! Struct layout validation for `#[derive(Tuple)]`

use syn::{Data, DeriveInput, Fields, Generics, Ident, Type};

use crate::inner::arity::{component_idents, MAX_ARITY, MIN_ARITY};

/// Validated layout of a tuple struct.
pub struct TupleShape {
    pub ident: Ident,
    /// Generics as declared, including user bounds and where clauses.
    pub generics: Generics,
    /// The single component type parameter.
    pub param: Ident,
    pub arity: usize,
    /// Field idents as written on the struct, in declaration order.
    pub fields: Vec<Ident>,
}

pub fn parse_shape(input: &DeriveInput) -> syn::Result<TupleShape> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "Tuple can only be derived for structs"));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(&input.ident, "Tuple requires named fields"));
    };

    let params: Vec<_> = input.generics.type_params().collect();
    if params.len() != 1 || input.generics.params.len() != 1 {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Tuple requires exactly one type parameter",
        ));
    }
    let param = params[0].ident.clone();

    let arity = named.named.len();
    if !(MIN_ARITY..=MAX_ARITY).contains(&arity) {
        return Err(syn::Error::new_spanned(
            named,
            format!("Tuple supports {} to {} components, found {}", MIN_ARITY, MAX_ARITY, arity),
        ));
    }

    let mut fields = Vec::with_capacity(arity);
    for (field, expected) in named.named.iter().zip(component_idents(arity)) {
        let Some(name) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "Tuple requires named fields"));
        };
        if *name != expected {
            return Err(syn::Error::new_spanned(
                name,
                format!("component {} must be named `{}`", fields.len(), expected),
            ));
        }
        if !is_param(&field.ty, &param) {
            return Err(syn::Error::new_spanned(
                &field.ty,
                format!("component `{}` must have type `{}`", name, param),
            ));
        }
        fields.push(name.clone());
    }

    Ok(TupleShape {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        param,
        arity,
        fields,
    })
}

fn is_param(ty: &Type, param: &Ident) -> bool {
    matches!(ty, Type::Path(p) if p.qself.is_none() && p.path.is_ident(param))
}
