//! Token generation for the `AutoOptions` implementation.

use heck::ToUpperCamelCase;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Expr, ExprLit, Lit, LitStr};

use super::crate_path;
use super::parse::{OptionsField, OptionsInput, option_inner, vec_inner};

/// Property name fed to the naming convention: the `rename` value, or the
/// field identifier in `UpperCamelCase` so word boundaries survive.
pub(crate) fn property_name(field: &OptionsField) -> LitStr {
    field.attrs.rename.clone().unwrap_or_else(|| {
        let name = field.ident.unraw().to_string().to_upper_camel_case();
        LitStr::new(&name, field.ident.span())
    })
}

/// Start of the builder chain: a `FieldBuilder` typed by the field.
fn field_builder(krate: &TokenStream, field: &OptionsField, name: &LitStr) -> TokenStream {
    let ty = &field.ty;
    if !field.attrs.value_enum {
        return quote! { #krate::FieldBuilder::<#ty>::new(#name) };
    }
    let (kind, convert) = if let Some(inner) = vec_inner(ty) {
        (
            quote! { #krate::value_enum_list_kind::<#inner>() },
            quote! { #krate::value_enum_list_value::<#inner> },
        )
    } else if let Some(inner) = option_inner(ty) {
        (
            quote! { #krate::value_enum_kind::<#inner>() },
            quote! { #krate::optional_value_enum_value::<#inner> },
        )
    } else {
        (
            quote! { #krate::value_enum_kind::<#ty>() },
            quote! { #krate::value_enum_value::<#ty> },
        )
    };
    quote! { #krate::FieldBuilder::<#ty>::with_kind(#name, #kind, #convert) }
}

/// Default-value call, if any. String literals convert through `Into`.
fn default_tokens(field: &OptionsField) -> Option<TokenStream> {
    if let Some(path) = &field.attrs.default_path {
        return Some(quote! {
            .default_value(::core::convert::Into::into(::std::path::PathBuf::from(#path)))
        });
    }
    field.attrs.default.as_ref().map(|expr| match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(_), ..
        }) => quote! { .default_value(::core::convert::Into::into(#expr)) },
        _ => quote! { .default_value(#expr) },
    })
}

/// Builder expression declaring one field.
pub(crate) fn field_tokens(krate: &TokenStream, field: &OptionsField) -> TokenStream {
    let name = property_name(field);
    let builder = field_builder(krate, field, &name);
    let ident = LitStr::new(&field.ident.unraw().to_string(), field.ident.span());
    let aliases = &field.attrs.aliases;
    let description = field
        .attrs
        .description
        .as_ref()
        .map(|text| quote! { .description(#text) });
    let default = default_tokens(field);
    quote! {
        #builder
            .ident(#ident)
            #( .alias(#aliases) )*
            #description
            #default
    }
}

/// Generate `impl AutoOptions` for the parsed struct.
///
/// Only plainly public, unsuppressed fields are declared; other fields may
/// hold types that have no option kind.
pub(crate) fn auto_options_impl(input: &OptionsInput) -> TokenStream {
    let krate = crate_path::resolve(input.attrs.crate_path.as_ref());
    let ident = &input.ident;
    let type_name = LitStr::new(&ident.unraw().to_string(), ident.span());
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let fields = input
        .fields
        .iter()
        .filter(|field| field.is_pub && !field.attrs.skip)
        .map(|field| field_tokens(&krate, field));
    quote! {
        impl #impl_generics #krate::AutoOptions for #ident #ty_generics #where_clause {
            fn declaration() -> #krate::OptionsDeclaration {
                #krate::OptionsDeclaration::builder(#type_name)
                    #( .field(#fields) )*
                    .build()
            }
        }
    }
}
