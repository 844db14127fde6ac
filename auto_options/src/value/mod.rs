//! Value kinds and default values carried by option descriptors.
//!
//! [`OptionType`] maps a Rust type onto its [`ValueKind`] and converts values
//! of that type into an [`OptionValue`]. The external parser uses the kind to
//! decide how raw strings are coerced.

mod kinds;

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use clap::builder::PossibleValue;
use serde::Serialize;

pub use kinds::OptionType;

/// Kind of value an option accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueKind {
    /// Free-form text.
    String,
    /// Integer of the given width and signedness.
    Integer {
        /// Width in bits.
        bits: u8,
        /// Whether negative values are allowed.
        signed: bool,
    },
    /// Floating point number.
    Float {
        /// Width in bits.
        bits: u8,
    },
    /// Boolean switch.
    Bool,
    /// File-system path.
    Path,
    /// One of a closed set of names.
    Enum {
        /// Accepted names offered in help.
        variants: Vec<String>,
        /// Accepted names left out of help.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        hidden: Vec<String>,
    },
    /// Repeated values of the inner kind.
    List {
        /// Kind of each item.
        of: Box<ValueKind>,
    },
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Integer { bits, signed } => {
                write!(f, "{}{bits}", if *signed { 'i' } else { 'u' })
            }
            Self::Float { bits } => write!(f, "f{bits}"),
            Self::Bool => f.write_str("bool"),
            Self::Path => f.write_str("path"),
            Self::Enum { variants, .. } => write!(f, "one of [{}]", variants.join(", ")),
            Self::List { of } => write!(f, "list of {of}"),
        }
    }
}

/// A default value, tagged with the kind it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Text.
    String(String),
    /// Signed integer.
    Signed(i128),
    /// Unsigned integer.
    Unsigned(u128),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// File-system path.
    Path(PathBuf),
    /// Name of an enum variant.
    Enum(String),
    /// Several values.
    List(Vec<OptionValue>),
}

impl OptionValue {
    /// Short description of the value's own kind, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Signed(_) => "signed integer",
            Self::Unsigned(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Path(_) => "path",
            Self::Enum(_) => "enum variant",
            Self::List(_) => "list",
        }
    }

    /// Whether the value is exactly assignable to `kind`.
    ///
    /// No coercion is attempted: a signed value never matches an unsigned
    /// kind and integers must fit the declared width.
    ///
    /// ```
    /// use auto_options::{OptionValue, ValueKind};
    ///
    /// let byte = ValueKind::Integer { bits: 8, signed: false };
    /// assert!(OptionValue::Unsigned(255).matches(&byte));
    /// assert!(!OptionValue::Unsigned(256).matches(&byte));
    /// assert!(!OptionValue::Signed(1).matches(&byte));
    /// ```
    #[must_use]
    pub fn matches(&self, kind: &ValueKind) -> bool {
        match (self, kind) {
            (Self::String(_), ValueKind::String)
            | (Self::Float(_), ValueKind::Float { .. })
            | (Self::Bool(_), ValueKind::Bool)
            | (Self::Path(_), ValueKind::Path) => true,
            (Self::Signed(value), ValueKind::Integer { bits, signed: true }) => {
                fits_signed(*value, *bits)
            }
            (Self::Unsigned(value), ValueKind::Integer { bits, signed: false }) => {
                fits_unsigned(*value, *bits)
            }
            (Self::Enum(name), ValueKind::Enum { variants, hidden }) => {
                variants.contains(name) || hidden.contains(name)
            }
            (Self::List(items), ValueKind::List { of }) => {
                items.iter().all(|item| item.matches(of))
            }
            _ => false,
        }
    }
}

fn fits_signed(value: i128, bits: u8) -> bool {
    if bits >= 128 {
        return true;
    }
    let Some(shift) = u32::from(bits).checked_sub(1) else {
        return false;
    };
    let bound = 1_i128 << shift;
    (-bound..bound).contains(&value)
}

fn fits_unsigned(value: u128, bits: u8) -> bool {
    if bits >= 128 {
        return true;
    }
    value < 1_u128 << u32::from(bits)
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) | Self::Enum(value) => f.write_str(value),
            Self::Signed(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Path(value) => write!(f, "{}", value.display()),
            Self::List(items) => {
                let mut first = true;
                for item in items {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

/// Kind of a field whose type implements [`clap::ValueEnum`].
///
/// Variants marked `hide` stay assignable but are kept out of help.
#[must_use]
pub fn value_enum_kind<E: ValueEnum>() -> ValueKind {
    let (hidden, visible): (Vec<_>, Vec<_>) = E::value_variants()
        .iter()
        .filter_map(ValueEnum::to_possible_value)
        .partition(PossibleValue::is_hide_set);
    let names = |values: Vec<PossibleValue>| -> Vec<String> {
        values
            .iter()
            .map(|value| value.get_name().to_owned())
            .collect()
    };
    ValueKind::Enum {
        variants: names(visible),
        hidden: names(hidden),
    }
}

/// Kind of a `Vec<E>` field where `E` implements [`clap::ValueEnum`].
#[must_use]
pub fn value_enum_list_kind<E: ValueEnum>() -> ValueKind {
    ValueKind::List {
        of: Box::new(value_enum_kind::<E>()),
    }
}

/// Convert a [`clap::ValueEnum`] value into its variant name.
#[must_use]
pub fn value_enum_value<E: ValueEnum>(value: E) -> Option<OptionValue> {
    value
        .to_possible_value()
        .map(|possible| OptionValue::Enum(possible.get_name().to_owned()))
}

/// Convert an optional [`clap::ValueEnum`] value; `None` means no default.
#[must_use]
pub fn optional_value_enum_value<E: ValueEnum>(value: Option<E>) -> Option<OptionValue> {
    value.and_then(value_enum_value)
}

/// Convert a list of [`clap::ValueEnum`] values.
#[must_use]
pub fn value_enum_list_value<E: ValueEnum>(values: Vec<E>) -> Option<OptionValue> {
    Some(OptionValue::List(
        values.into_iter().filter_map(value_enum_value).collect(),
    ))
}
