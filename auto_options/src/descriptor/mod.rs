//! Option descriptors and the derivation that produces them.

mod derive;

use serde::Serialize;

pub use derive::{Descriptors, derive_options};

use crate::value::{OptionValue, ValueKind};

/// Typed description of one option, ready for an argument parser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionDescriptor {
    field: String,
    aliases: Vec<String>,
    description: Option<String>,
    default: Option<OptionValue>,
    value_kind: ValueKind,
}

impl OptionDescriptor {
    pub(crate) const fn new(
        field: String,
        aliases: Vec<String>,
        description: Option<String>,
        default: Option<OptionValue>,
        value_kind: ValueKind,
    ) -> Self {
        Self {
            field,
            aliases,
            description,
            default,
            value_kind,
        }
    }

    /// Identifier of the field the option binds to.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Canonical name: the first alias.
    #[must_use]
    pub fn name(&self) -> &str {
        self.aliases.first().map_or("", String::as_str)
    }

    /// Every alias in order, canonical name first.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Description shown to end users.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Default used when the option is not supplied. Every call returns the
    /// value captured at derivation time.
    #[must_use]
    pub const fn default_value(&self) -> Option<&OptionValue> {
        self.default.as_ref()
    }

    /// Whether a default value is present.
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Kind of value the option accepts.
    #[must_use]
    pub const fn value_kind(&self) -> &ValueKind {
        &self.value_kind
    }
}

#[cfg(test)]
mod tests;
