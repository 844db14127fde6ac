//! Input parsing for the `AutoOptions` derive macro.
//!
//! This module gathers the struct identifier, fields, and attribute metadata
//! in one pass so macro expansion can fail fast with useful errors.

use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Visibility};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// A parsed options struct.
pub(crate) struct OptionsInput {
    pub ident: Ident,
    pub generics: Generics,
    pub attrs: StructAttrs,
    pub fields: Vec<OptionsField>,
}

/// A parsed named field.
pub(crate) struct OptionsField {
    pub ident: Ident,
    pub ty: Type,
    /// Whether the field is plainly `pub`; restricted forms such as
    /// `pub(crate)` do not count.
    pub is_pub: bool,
    pub attrs: FieldAttrs,
}

/// Gathers information from the user-provided struct.
///
/// Enums, unions, tuple structs and unit structs are rejected.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<OptionsInput> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "AutoOptions requires a struct with named fields",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            data.struct_token,
            "AutoOptions requires a struct with named fields",
        ));
    };

    let attrs = parse_struct_attrs(&input.attrs)?;
    let mut fields = Vec::with_capacity(named.named.len());
    for field in &named.named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        fields.push(OptionsField {
            ident,
            ty: field.ty.clone(),
            is_pub: matches!(field.vis, Visibility::Public(_)),
            attrs: parse_field_attrs(field)?,
        });
    }
    Ok(OptionsInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        fields,
    })
}
