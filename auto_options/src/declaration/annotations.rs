//! Reads the annotations of a field into the parts of a descriptor.

use tracing::debug;

use super::FieldDeclaration;
use crate::value::OptionValue;

/// Aliases, description and default gathered for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldAnnotations {
    /// Canonical name first, then declared aliases; unique and non-empty.
    pub aliases: Vec<String>,
    /// Description, if declared.
    pub description: Option<String>,
    /// Default value, if declared.
    pub default: Option<OptionValue>,
}

/// Gather the annotations of `field`, placing `canonical_name` first.
///
/// Empty strings are dropped and later duplicates are ignored, so the result
/// may be empty when the canonical name is empty and no aliases were declared.
///
/// ```
/// use auto_options::{FieldBuilder, read_annotations};
///
/// let field = FieldBuilder::<bool>::new("Force").aliases(["-f", "", "--force"]).build();
/// let annotations = read_annotations(&field, "--force".to_owned());
/// assert_eq!(annotations.aliases, ["--force", "-f"]);
/// ```
#[must_use]
pub fn read_annotations(field: &FieldDeclaration, canonical_name: String) -> FieldAnnotations {
    let declared = field.aliases().iter().cloned();
    let mut aliases: Vec<String> = Vec::with_capacity(field.aliases().len() + 1);
    for alias in std::iter::once(canonical_name).chain(declared) {
        if alias.is_empty() {
            debug!(field = field.name(), "discarding empty alias");
            continue;
        }
        if aliases.contains(&alias) {
            debug!(field = field.name(), %alias, "discarding duplicate alias");
            continue;
        }
        aliases.push(alias);
    }

    FieldAnnotations {
        aliases,
        description: field.description().map(ToOwned::to_owned),
        default: field.default_value().cloned(),
    }
}
