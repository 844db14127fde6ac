//! Type introspection helpers.
//!
//! `value_enum` fields need the element type of `Option<E>` and `Vec<E>`
//! wrappers so the generated code can name `E` directly.

use syn::{GenericArgument, PathArguments, Type};

/// Returns the single type argument of `ty` when its last path segment is
/// `wrapper`.
///
/// Only the outermost layer is inspected, so `Option<Vec<T>>` yields
/// `Vec<T>`. Qualified forms such as `std::option::Option<T>` match.
fn wrapped<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let last = path.path.segments.last()?;
    if last.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Returns the inner type if `ty` is `Option<T>`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    wrapped(ty, "Option")
}

/// Returns the element type if `ty` is `Vec<T>`.
pub(crate) fn vec_inner(ty: &Type) -> Option<&Type> {
    wrapped(ty, "Vec")
}
