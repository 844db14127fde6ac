//! Naming conventions and the option name formatter.
//!
//! A [`NamingConvention`] is a set of independent facets: a casing facet
//! (`LOWER_CASE` or `UPPER_CASE`, identity when neither is set) and a word
//! delimiter facet (`KEBAB_DELIMITER`). [`format_option_name`] applies a
//! convention and a prefix to a property name such as `MaxRetryCount`.

mod config;
mod prefix;

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use config::{NamingConfig, OptionNamer};
pub use prefix::OptionPrefix;

bitflags! {
    /// Naming convention facets used to derive an option's canonical name.
    ///
    /// Facets compose via bitwise union, so `KEBAB_CASE | UPPER_CASE` is the
    /// same set as `SCREAMING_KEBAB_CASE`.
    ///
    /// ```
    /// use auto_options::NamingConvention;
    ///
    /// let screaming = NamingConvention::KEBAB_CASE | NamingConvention::UPPER_CASE;
    /// assert_eq!(screaming, NamingConvention::SCREAMING_KEBAB_CASE);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NamingConvention: u8 {
        /// Lower-case every character.
        const LOWER_CASE = 1 << 0;
        /// Upper-case every character.
        const UPPER_CASE = 1 << 1;
        /// Insert `-` before each upper-case character after the first.
        const KEBAB_DELIMITER = 1 << 2;
        /// `--option-name`.
        const KEBAB_CASE = Self::KEBAB_DELIMITER.bits() | Self::LOWER_CASE.bits();
        /// `--OPTION-NAME`.
        const SCREAMING_KEBAB_CASE = Self::KEBAB_CASE.bits() | Self::UPPER_CASE.bits();
    }
}

/// Casing transform selected by a [`NamingConvention`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Casing {
    /// Leave characters untouched.
    Identity,
    /// Lower-case characters.
    Lower,
    /// Upper-case characters.
    Upper,
}

impl Casing {
    /// Apply the casing to a whole string.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Identity => text.to_owned(),
            Self::Lower => text.to_lowercase(),
            Self::Upper => text.to_uppercase(),
        }
    }

    fn push(self, ch: char, out: &mut String) {
        match self {
            Self::Identity => out.push(ch),
            Self::Lower => out.extend(ch.to_lowercase()),
            Self::Upper => out.extend(ch.to_uppercase()),
        }
    }
}

impl NamingConvention {
    /// Use the property name as written: `OptionName` stays `OptionName`.
    pub const MATCH_PROPERTY_NAME: Self = Self::empty();

    /// Word delimiter implied by the convention.
    #[must_use]
    pub fn delimiter(self) -> &'static str {
        if self.contains(Self::KEBAB_DELIMITER) {
            "-"
        } else {
            ""
        }
    }

    /// Casing implied by the convention. Upper-case wins over lower-case.
    #[must_use]
    pub fn casing(self) -> Casing {
        if self.contains(Self::UPPER_CASE) {
            Casing::Upper
        } else if self.contains(Self::LOWER_CASE) {
            Casing::Lower
        } else {
            Casing::Identity
        }
    }

    /// Resolve the convention into its `(delimiter, casing)` pair.
    ///
    /// ```
    /// use auto_options::{Casing, NamingConvention};
    ///
    /// assert_eq!(NamingConvention::KEBAB_CASE.resolve(), ("-", Casing::Lower));
    /// assert_eq!(NamingConvention::UPPER_CASE.resolve(), ("", Casing::Upper));
    /// ```
    #[must_use]
    pub fn resolve(self) -> (&'static str, Casing) {
        (self.delimiter(), self.casing())
    }

    fn known_name(self) -> Option<&'static str> {
        [
            (Self::MATCH_PROPERTY_NAME, "match-property-name"),
            (Self::LOWER_CASE, "lower-case"),
            (Self::UPPER_CASE, "upper-case"),
            (Self::KEBAB_CASE, "kebab-case"),
            (Self::SCREAMING_KEBAB_CASE, "screaming-kebab-case"),
        ]
        .into_iter()
        .find_map(|(convention, name)| (convention == self).then_some(name))
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::KEBAB_CASE
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known_name() {
            Some(name) => f.write_str(name),
            None => bitflags::parser::to_writer(self, f),
        }
    }
}

impl FromStr for NamingConvention {
    type Err = bitflags::parser::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "match-property-name" => Ok(Self::MATCH_PROPERTY_NAME),
            "lower-case" => Ok(Self::LOWER_CASE),
            "upper-case" => Ok(Self::UPPER_CASE),
            "kebab-case" => Ok(Self::KEBAB_CASE),
            "screaming-kebab-case" => Ok(Self::SCREAMING_KEBAB_CASE),
            other => bitflags::parser::from_str(other),
        }
    }
}

impl Serialize for NamingConvention {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NamingConvention {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Format a property name into an option flag.
///
/// Without a delimiter the casing is applied to the whole name. With a
/// delimiter the name is scanned one character at a time: every upper-case
/// character that is not the first one emitted is preceded by the delimiter,
/// and each character is cased on its own. Runs of capitals are not treated
/// as acronyms, so `ID` becomes `i-d`.
///
/// ```
/// use auto_options::{NamingConvention, format_option_name};
///
/// assert_eq!(
///     format_option_name("MaxRetryCount", "--", NamingConvention::KEBAB_CASE),
///     "--max-retry-count"
/// );
/// assert_eq!(
///     format_option_name("OptionName", "/", NamingConvention::LOWER_CASE),
///     "/optionname"
/// );
/// ```
#[must_use]
pub fn format_option_name(field_name: &str, prefix: &str, convention: NamingConvention) -> String {
    let (delimiter, casing) = convention.resolve();
    let mut name = String::with_capacity(prefix.len() + field_name.len() * 2);
    name.push_str(prefix);
    if delimiter.is_empty() {
        name.push_str(&casing.apply(field_name));
        return name;
    }

    let mut emitted = false;
    for ch in field_name.chars() {
        if emitted && ch.is_uppercase() {
            name.push_str(delimiter);
        }
        casing.push(ch, &mut name);
        emitted = true;
    }
    name
}
