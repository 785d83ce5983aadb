//! `#[tuple(...)]` attribute parsing

use syn::{Attribute, LitStr};

/// Options collected from every `#[tuple(...)]` attribute on the item.
#[derive(Debug, Default)]
pub struct TupleAttrs {
    /// Emit fluent setters.
    pub mutable: bool,
    /// Use `of*` static factory names for construction.
    pub factory: bool,
    /// Display name override.
    pub name: Option<String>,
}

impl TupleAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = TupleAttrs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("tuple")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("mutable") {
                    out.mutable = true;
                    Ok(())
                } else if meta.path.is_ident("factory") {
                    out.factory = true;
                    Ok(())
                } else if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.name = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("unknown tuple option, expected `mutable`, `factory`, or `name = \"..\"`"))
                }
            })?;
        }
        Ok(out)
    }
}
