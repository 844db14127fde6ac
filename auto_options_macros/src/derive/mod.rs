//! Expansion of `#[derive(AutoOptions)]`.

mod crate_path;
mod generate;
pub(crate) mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parse `input` and generate the `AutoOptions` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::auto_options_impl(&parsed))
}
