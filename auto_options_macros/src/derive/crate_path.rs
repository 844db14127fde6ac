//! Crate path resolution for dependency aliasing support.
//!
//! Generated code names the runtime crate through the tokens returned here,
//! so a dependency renamed in `Cargo.toml` can be reached with
//! `#[auto_options(crate = "...")]`.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the runtime crate path from the parsed struct attribute.
///
/// Defaults to `::auto_options` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::auto_options }, |path| quote! { #path })
}
