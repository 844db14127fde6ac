//! Parsing of `#[auto_options(...)]` attributes and the annotated struct.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, LitStr};

mod doc_attrs;
mod input;
mod literals;
#[cfg(test)]
mod tests;
mod type_utils;

use doc_attrs::doc_description;
pub(crate) use input::{OptionsField, OptionsInput, parse_input};
use literals::lit_str;
pub(crate) use type_utils::{option_inner, vec_inner};

/// Struct-level attributes.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[auto_options(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `auto_options::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(AutoOptions)]`.
///
/// - `skip` suppresses the field.
/// - `alias` adds a literal alias; repeatable.
/// - `description` sets the help text, falling back to the doc comment.
/// - `default` supplies a default expression of the field's type.
/// - `default_path` supplies a path default from a string.
/// - `rename` replaces the property name fed to the naming convention.
/// - `value_enum` marks a field whose type implements `clap::ValueEnum`.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub skip: bool,
    pub aliases: Vec<LitStr>,
    pub description: Option<LitStr>,
    pub default: Option<Expr>,
    pub default_path: Option<LitStr>,
    pub rename: Option<LitStr>,
    pub value_enum: bool,
}

/// Iterate all `#[auto_options(...)]` attributes once and apply a callback.
fn parse_auto_options<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("auto_options")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown_key(meta: &ParseNestedMeta) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| "<path>".to_owned(), ToString::to_string);
    meta.error(format!("unknown auto_options attribute `{key}`"))
}

fn set_once<T>(
    target: &mut Option<T>,
    value: T,
    meta: &ParseNestedMeta,
    key: &str,
) -> syn::Result<()> {
    if target.is_some() {
        return Err(meta.error(format!("duplicate `{key}` attribute")));
    }
    *target = Some(value);
    Ok(())
}

/// Extracts `#[auto_options(...)]` metadata applied to a struct.
///
/// Only `crate` is recognised; any other key is a compile error.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_auto_options(attrs, |meta| {
        if !meta.path.is_ident("crate") {
            return Err(unknown_key(meta));
        }
        let s = lit_str(meta, "crate")?;
        let path: syn::Path =
            syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
        set_once(&mut out.crate_path, path, meta, "crate")
    })?;
    Ok(out)
}

fn apply_field_attr(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<()> {
    let Some(ident) = meta.path.get_ident() else {
        return Err(unknown_key(meta));
    };
    match ident.to_string().as_str() {
        "skip" => out.skip = true,
        "value_enum" => out.value_enum = true,
        "alias" => out.aliases.push(lit_str(meta, "alias")?),
        "description" => {
            let value = lit_str(meta, "description")?;
            set_once(&mut out.description, value, meta, "description")?;
        }
        "default" => {
            let value = meta.value()?.parse()?;
            set_once(&mut out.default, value, meta, "default")?;
        }
        "default_path" => {
            let value = lit_str(meta, "default_path")?;
            set_once(&mut out.default_path, value, meta, "default_path")?;
        }
        "rename" => {
            let value = lit_str(meta, "rename")?;
            set_once(&mut out.rename, value, meta, "rename")?;
        }
        _ => return Err(unknown_key(meta)),
    }
    Ok(())
}

/// Parses field-level `#[auto_options(...)]` attributes.
///
/// Unknown keys are rejected. When no `description` is given, the field's
/// doc comment supplies it.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_auto_options(&field.attrs, |meta| apply_field_attr(meta, &mut out))?;
    if out.default.is_some() && out.default_path.is_some() {
        return Err(syn::Error::new_spanned(
            field,
            "`default` and `default_path` cannot both be set",
        ));
    }
    if out.description.is_none() {
        out.description = doc_description(&field.attrs);
    }
    Ok(out)
}
