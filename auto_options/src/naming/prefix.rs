//! Prefixes prepended to derived option names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix placed before an option's derived name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OptionPrefix {
    /// `--`
    #[default]
    TwoHyphens,
    /// `-`
    SingleHyphen,
    /// `/`
    ForwardSlash,
    /// Any other literal prefix, including the empty string.
    Custom(String),
}

impl OptionPrefix {
    /// The literal prefix string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::TwoHyphens => "--",
            Self::SingleHyphen => "-",
            Self::ForwardSlash => "/",
            Self::Custom(prefix) => prefix,
        }
    }
}

impl From<&str> for OptionPrefix {
    fn from(value: &str) -> Self {
        match value {
            "--" => Self::TwoHyphens,
            "-" => Self::SingleHyphen,
            "/" => Self::ForwardSlash,
            other => Self::Custom(other.to_owned()),
        }
    }
}

impl From<String> for OptionPrefix {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<OptionPrefix> for String {
    fn from(value: OptionPrefix) -> Self {
        match value {
            OptionPrefix::Custom(prefix) => prefix,
            known => known.as_str().to_owned(),
        }
    }
}

impl AsRef<str> for OptionPrefix {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OptionPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
