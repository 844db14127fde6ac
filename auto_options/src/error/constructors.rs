//! Shorthand constructors for `AutoOptionsError`.

use super::AutoOptionsError;

impl AutoOptionsError {
    /// Construct an [`AutoOptionsError::InvalidArgument`] for `argument`.
    ///
    /// # Examples
    ///
    /// ```
    /// use auto_options::AutoOptionsError;
    /// let err = AutoOptionsError::missing("naming function");
    /// assert_eq!(err.to_string(), "missing required argument: naming function");
    /// ```
    #[must_use]
    pub const fn missing(argument: &'static str) -> Self {
        Self::InvalidArgument { argument }
    }

    /// Construct an [`AutoOptionsError::NoAliasesConfigured`] naming the field
    /// and its options type.
    #[must_use]
    pub fn no_aliases(field: &str, options_type: &str) -> Self {
        Self::NoAliasesConfigured {
            field: field.to_owned(),
            options_type: options_type.to_owned(),
        }
    }

    /// Construct an [`AutoOptionsError::UnsupportedAlias`].
    #[must_use]
    pub fn unsupported_alias(field: &str, alias: &str) -> Self {
        Self::UnsupportedAlias {
            field: field.to_owned(),
            alias: alias.to_owned(),
        }
    }
}
