//! Error types produced while deriving and registering option descriptors.

mod constructors;

use thiserror::Error;

use crate::declaration::TypeShape;
use crate::value::ValueKind;

/// Errors raised by option derivation and registration.
///
/// Every failure surfaces when options are derived, which happens once while
/// the command tree is assembled and before any argument is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AutoOptionsError {
    /// A required collaborator was never supplied.
    #[error("missing required argument: {argument}")]
    InvalidArgument {
        /// Name of the missing collaborator.
        argument: &'static str,
    },

    /// The declaration does not describe a concrete struct.
    #[error("options type '{type_name}' is not a struct (found {shape})")]
    InvalidOptionsType {
        /// Name of the rejected type.
        type_name: String,
        /// Shape the declaration reported.
        shape: TypeShape,
    },

    /// A field resolved to zero usable alias strings.
    #[error("no aliases configured for field '{field}' of options type '{options_type}'")]
    NoAliasesConfigured {
        /// Field without aliases.
        field: String,
        /// Options type declaring the field.
        options_type: String,
    },

    /// An untyped default does not match the field's value kind.
    #[error("default value for field '{field}' must be {expected}, found {found}")]
    DefaultTypeMismatch {
        /// Field carrying the default.
        field: String,
        /// Kind declared for the field.
        expected: ValueKind,
        /// Kind of the supplied value.
        found: &'static str,
    },

    /// An alias cannot be expressed as a `clap` flag.
    #[error("alias '{alias}' of option '{field}' cannot be expressed as a clap flag")]
    UnsupportedAlias {
        /// Field owning the alias.
        field: String,
        /// Offending alias.
        alias: String,
    },
}

/// Result alias used throughout the crate.
pub type AutoOptionsResult<T> = Result<T, AutoOptionsError>;
