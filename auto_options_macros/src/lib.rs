//! Procedural macros for `auto_options`.
//!
//! `#[derive(AutoOptions)]` turns the named fields of a struct into an
//! `auto_options::OptionsDeclaration`. Every plainly public field that is not
//! marked `#[auto_options(skip)]` is declared through a `FieldBuilder` typed
//! by the field, so unsupported field types and mistyped defaults are compile
//! errors.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `auto_options::AutoOptions`.
///
/// Field attributes, all inside `#[auto_options(...)]`: `skip`,
/// `alias = "-x"` (repeatable), `description = "..."` (defaults to the doc
/// comment), `default = expr`, `default_path = "..."`, `rename = "..."` and
/// `value_enum`. The struct attribute `crate = "path"` names a renamed
/// runtime crate.
#[proc_macro_derive(AutoOptions, attributes(auto_options))]
pub fn derive_auto_options(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
