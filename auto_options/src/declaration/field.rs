//! Field declarations and their typed builder.

use serde::Serialize;

use crate::error::{AutoOptionsError, AutoOptionsResult};
use crate::value::{OptionType, OptionValue, ValueKind};

/// Whether a field can be read from outside its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Publicly readable. Only public fields become options.
    #[default]
    Public,
    /// Crate-private, module-private, or otherwise restricted.
    Restricted,
}

/// Where a field was declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrigin {
    /// Declared directly on the options type.
    #[default]
    Declared,
    /// Reached through another type; never turned into an option.
    Inherited {
        /// Type that actually declares the field.
        from: String,
    },
}

/// One field of an options type together with its annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDeclaration {
    name: String,
    ident: String,
    value_kind: ValueKind,
    visibility: Visibility,
    origin: FieldOrigin,
    suppressed: bool,
    aliases: Vec<String>,
    description: Option<String>,
    default: Option<OptionValue>,
}

impl FieldDeclaration {
    /// Declare a field of the given kind without annotations.
    ///
    /// `name` is the property name fed to the naming convention, such as
    /// `MaxRetryCount`; it doubles as the identifier until
    /// [`FieldBuilder::ident`] says otherwise.
    #[must_use]
    pub fn new(name: impl Into<String>, value_kind: ValueKind) -> Self {
        let name = name.into();
        Self {
            ident: name.clone(),
            name,
            value_kind,
            visibility: Visibility::Public,
            origin: FieldOrigin::Declared,
            suppressed: false,
            aliases: Vec::new(),
            description: None,
            default: None,
        }
    }

    /// Property name used to derive the canonical option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier the parsed value is stored under.
    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Kind of value the field holds.
    #[must_use]
    pub const fn value_kind(&self) -> &ValueKind {
        &self.value_kind
    }

    /// Field visibility.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Where the field was declared.
    #[must_use]
    pub const fn origin(&self) -> &FieldOrigin {
        &self.origin
    }

    /// Whether the field carries the suppression marker.
    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Declared aliases, exactly as written.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Declared default value.
    #[must_use]
    pub const fn default_value(&self) -> Option<&OptionValue> {
        self.default.as_ref()
    }

    /// Whether derivation turns this field into an option: declared directly,
    /// publicly readable and not suppressed.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.origin == FieldOrigin::Declared
            && self.visibility == Visibility::Public
            && !self.suppressed
    }

    /// Attach an untyped default value.
    ///
    /// # Errors
    ///
    /// Returns [`AutoOptionsError::DefaultTypeMismatch`] when `value` is not
    /// exactly assignable to the field's kind.
    pub fn with_default_value(mut self, value: OptionValue) -> AutoOptionsResult<Self> {
        if !value.matches(&self.value_kind) {
            return Err(AutoOptionsError::DefaultTypeMismatch {
                field: self.name,
                expected: self.value_kind,
                found: value.kind_name(),
            });
        }
        self.default = Some(value);
        Ok(self)
    }
}

/// Statically-typed builder for a [`FieldDeclaration`].
///
/// `T` is the field's Rust type; [`FieldBuilder::default_value`] only accepts
/// a `T`, so defaults are exactly assignable by construction.
///
/// ```
/// use auto_options::{FieldBuilder, FieldDeclaration, OptionValue};
///
/// let field: FieldDeclaration = FieldBuilder::<u32>::new("MaxRetryCount")
///     .ident("max_retry_count")
///     .alias("-r")
///     .description("How often to retry.")
///     .default_value(3)
///     .into();
/// assert_eq!(field.default_value(), Some(&OptionValue::Unsigned(3)));
/// ```
#[derive(Debug)]
pub struct FieldBuilder<T> {
    field: FieldDeclaration,
    convert: fn(T) -> Option<OptionValue>,
}

impl<T: OptionType> FieldBuilder<T> {
    /// Declare a field whose kind follows from `T`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, T::value_kind(), T::into_option_value)
    }
}

impl<T> FieldBuilder<T> {
    /// Declare a field with an explicit kind and value conversion, for types
    /// that do not implement [`OptionType`] such as [`clap::ValueEnum`] enums.
    #[must_use]
    pub fn with_kind(
        name: impl Into<String>,
        value_kind: ValueKind,
        convert: fn(T) -> Option<OptionValue>,
    ) -> Self {
        Self {
            field: FieldDeclaration::new(name, value_kind),
            convert,
        }
    }

    /// Set the identifier the parsed value is stored under.
    #[must_use]
    pub fn ident(mut self, ident: impl Into<String>) -> Self {
        self.field.ident = ident.into();
        self
    }

    /// Add a literal alias. No prefix or casing is applied.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.field.aliases.push(alias.into());
        self
    }

    /// Add several literal aliases in order.
    #[must_use]
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Set the description shown to end users.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.field.description = Some(description.into());
        self
    }

    /// Set the default value. A value converting to "nothing", such as
    /// `None` for an `Option<T>` field, clears the default.
    #[must_use]
    pub fn default_value(mut self, value: T) -> Self {
        self.field.default = (self.convert)(value);
        self
    }

    /// Mark the field as not an option.
    #[must_use]
    pub fn skip(mut self) -> Self {
        self.field.suppressed = true;
        self
    }

    /// Set the field's visibility.
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.field.visibility = visibility;
        self
    }

    /// Record that the field is declared on `type_name` rather than on the
    /// options type itself.
    #[must_use]
    pub fn inherited_from(mut self, type_name: impl Into<String>) -> Self {
        self.field.origin = FieldOrigin::Inherited {
            from: type_name.into(),
        };
        self
    }

    /// Finish the declaration.
    #[must_use]
    pub fn build(self) -> FieldDeclaration {
        self.field
    }
}

impl<T> From<FieldBuilder<T>> for FieldDeclaration {
    fn from(builder: FieldBuilder<T>) -> Self {
        builder.build()
    }
}
