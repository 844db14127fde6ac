//! Derivation of option descriptors from an options declaration.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use tracing::{debug, trace};

use super::OptionDescriptor;
use crate::declaration::{
    FieldAnnotations, FieldDeclaration, OptionsDeclaration, read_annotations,
};
use crate::error::{AutoOptionsError, AutoOptionsResult};
use crate::naming::OptionNamer;

/// Derive one descriptor per eligible field, in declaration order.
///
/// Derivation is all-or-nothing: the first failing field aborts it and no
/// partial list is returned. A declaration without eligible fields yields an
/// empty list.
///
/// # Errors
///
/// - [`AutoOptionsError::InvalidOptionsType`] when the declaration is not a
///   struct.
/// - [`AutoOptionsError::NoAliasesConfigured`] when a field ends up with no
///   usable alias.
/// - [`AutoOptionsError::DefaultTypeMismatch`] when a default does not fit
///   the field's value kind.
pub fn derive_options<N>(
    declaration: &OptionsDeclaration,
    namer: &N,
) -> AutoOptionsResult<Vec<OptionDescriptor>>
where
    N: OptionNamer + ?Sized,
{
    debug!(options_type = declaration.type_name(), "deriving options");
    let descriptors = declaration
        .descriptors(namer)?
        .collect::<AutoOptionsResult<Vec<_>>>()?;
    debug!(
        options_type = declaration.type_name(),
        count = descriptors.len(),
        "derived options"
    );
    Ok(descriptors)
}

/// Lazy iterator over the descriptors of a declaration.
///
/// Created by [`OptionsDeclaration::descriptors`]. The iterator stops after
/// yielding the first error. A clone taken before consumption walks the
/// fields independently, and calling `descriptors` again starts over.
pub struct Descriptors<'a, N: ?Sized> {
    declaration: &'a OptionsDeclaration,
    namer: &'a N,
    fields: slice::Iter<'a, FieldDeclaration>,
    failed: bool,
}

impl<'a, N: ?Sized> Descriptors<'a, N> {
    pub(crate) fn new(declaration: &'a OptionsDeclaration, namer: &'a N) -> Self {
        Self {
            declaration,
            namer,
            fields: declaration.fields().iter(),
            failed: false,
        }
    }
}

impl<N: ?Sized> Clone for Descriptors<'_, N> {
    fn clone(&self) -> Self {
        Self {
            declaration: self.declaration,
            namer: self.namer,
            fields: self.fields.clone(),
            failed: self.failed,
        }
    }
}

impl<N: ?Sized> fmt::Debug for Descriptors<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptors")
            .field("options_type", &self.declaration.type_name())
            .field("remaining", &self.fields.len())
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}

impl<N> Iterator for Descriptors<'_, N>
where
    N: OptionNamer + ?Sized,
{
    type Item = AutoOptionsResult<OptionDescriptor>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let field = self.fields.by_ref().find(|field| {
            let eligible = field.is_eligible();
            if !eligible {
                debug!(field = field.name(), "skipping ineligible field");
            }
            eligible
        })?;
        let result = describe_field(self.declaration, field, self.namer);
        self.failed = result.is_err();
        Some(result)
    }
}

impl<N> FusedIterator for Descriptors<'_, N> where N: OptionNamer + ?Sized {}

fn describe_field<N>(
    declaration: &OptionsDeclaration,
    field: &FieldDeclaration,
    namer: &N,
) -> AutoOptionsResult<OptionDescriptor>
where
    N: OptionNamer + ?Sized,
{
    let canonical_name = namer.option_name(field);
    let FieldAnnotations {
        aliases,
        description,
        default,
    } = read_annotations(field, canonical_name);
    if aliases.is_empty() {
        return Err(AutoOptionsError::no_aliases(
            field.name(),
            declaration.type_name(),
        ));
    }

    if let Some(value) = default.as_ref().filter(|value| !value.matches(field.value_kind())) {
        return Err(AutoOptionsError::DefaultTypeMismatch {
            field: field.name().to_owned(),
            expected: field.value_kind().clone(),
            found: value.kind_name(),
        });
    }

    trace!(field = field.name(), ?aliases, "derived option");
    Ok(OptionDescriptor::new(
        field.ident().to_owned(),
        aliases,
        description,
        default,
        field.value_kind().clone(),
    ))
}
