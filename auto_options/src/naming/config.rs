//! Naming configuration and the injectable naming function.

use serde::{Deserialize, Serialize};

use super::{NamingConvention, OptionPrefix, format_option_name};
use crate::declaration::FieldDeclaration;

/// Produces the canonical name of a field's option.
///
/// [`NamingConfig`] is the standard implementation. Any closure taking a
/// [`FieldDeclaration`] and returning a `String` can replace it, bypassing the
/// prefix and convention entirely.
///
/// ```
/// use auto_options::{FieldBuilder, FieldDeclaration, OptionNamer};
///
/// let namer = |field: &FieldDeclaration| format!("+{}", field.ident());
/// let field: FieldDeclaration = FieldBuilder::<bool>::new("Verbose").ident("verbose").into();
/// assert_eq!(namer.option_name(&field), "+verbose");
/// ```
pub trait OptionNamer {
    /// Canonical name for `field`. An empty string means "no canonical name".
    fn option_name(&self, field: &FieldDeclaration) -> String;
}

impl<F> OptionNamer for F
where
    F: Fn(&FieldDeclaration) -> String,
{
    fn option_name(&self, field: &FieldDeclaration) -> String {
        self(field)
    }
}

/// Prefix and convention used to derive canonical option names.
///
/// Defaults to `--` with [`NamingConvention::KEBAB_CASE`]. The struct
/// deserialises from host configuration, for example
/// `{ "prefix": "/", "convention": "lower-case" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Prefix placed before every derived name.
    pub prefix: OptionPrefix,
    /// Convention applied to the property name.
    pub convention: NamingConvention,
}

impl NamingConfig {
    /// Create a configuration from a prefix and a convention.
    #[must_use]
    pub fn new(prefix: impl Into<OptionPrefix>, convention: NamingConvention) -> Self {
        Self {
            prefix: prefix.into(),
            convention,
        }
    }

    /// Replace the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<OptionPrefix>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replace the naming convention.
    #[must_use]
    pub fn with_convention(mut self, convention: NamingConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Format a property name with this configuration.
    #[must_use]
    pub fn format(&self, property_name: &str) -> String {
        format_option_name(property_name, self.prefix.as_str(), self.convention)
    }
}

impl OptionNamer for NamingConfig {
    fn option_name(&self, field: &FieldDeclaration) -> String {
        self.format(field.name())
    }
}
