//! `OptionType` implementations for the supported Rust types.

use std::path::PathBuf;

use super::{OptionValue, ValueKind};

const TARGET_POINTER_BITS: u8 = if cfg!(target_pointer_width = "64") {
    64
} else if cfg!(target_pointer_width = "32") {
    32
} else {
    16
};

/// Maps a Rust type onto a [`ValueKind`] and converts its values.
///
/// This is the type-indexed factory behind typed field declarations: the kind
/// of an option comes from its field type, never from a runtime inspection.
pub trait OptionType {
    /// Kind of value the type represents.
    fn value_kind() -> ValueKind;

    /// Convert a value into an [`OptionValue`]. `None` means "no value", as
    /// produced by `Option::None`.
    fn into_option_value(self) -> Option<OptionValue>;
}

macro_rules! integer_option_type {
    ($variant:ident, $signed:literal, $wide:ty: $($ty:ty => $bits:expr),+ $(,)?) => {
        $(
            impl OptionType for $ty {
                fn value_kind() -> ValueKind {
                    ValueKind::Integer { bits: $bits, signed: $signed }
                }

                fn into_option_value(self) -> Option<OptionValue> {
                    Some(OptionValue::$variant(<$wide>::from(self)))
                }
            }
        )+
    };
}

integer_option_type!(Signed, true, i128: i8 => 8, i16 => 16, i32 => 32, i64 => 64, i128 => 128);
integer_option_type!(Unsigned, false, u128: u8 => 8, u16 => 16, u32 => 32, u64 => 64, u128 => 128);

impl OptionType for isize {
    fn value_kind() -> ValueKind {
        ValueKind::Integer {
            bits: TARGET_POINTER_BITS,
            signed: true,
        }
    }

    fn into_option_value(self) -> Option<OptionValue> {
        i128::try_from(self).ok().map(OptionValue::Signed)
    }
}

impl OptionType for usize {
    fn value_kind() -> ValueKind {
        ValueKind::Integer {
            bits: TARGET_POINTER_BITS,
            signed: false,
        }
    }

    fn into_option_value(self) -> Option<OptionValue> {
        u128::try_from(self).ok().map(OptionValue::Unsigned)
    }
}

impl OptionType for f32 {
    fn value_kind() -> ValueKind {
        ValueKind::Float { bits: 32 }
    }

    // Widen through the shortest `f32` text so `0.1` stays `0.1`.
    fn into_option_value(self) -> Option<OptionValue> {
        let value = self.to_string().parse().unwrap_or_else(|_| f64::from(self));
        Some(OptionValue::Float(value))
    }
}

impl OptionType for f64 {
    fn value_kind() -> ValueKind {
        ValueKind::Float { bits: 64 }
    }

    fn into_option_value(self) -> Option<OptionValue> {
        Some(OptionValue::Float(self))
    }
}

impl OptionType for bool {
    fn value_kind() -> ValueKind {
        ValueKind::Bool
    }

    fn into_option_value(self) -> Option<OptionValue> {
        Some(OptionValue::Bool(self))
    }
}

impl OptionType for String {
    fn value_kind() -> ValueKind {
        ValueKind::String
    }

    fn into_option_value(self) -> Option<OptionValue> {
        Some(OptionValue::String(self))
    }
}

impl OptionType for char {
    fn value_kind() -> ValueKind {
        ValueKind::String
    }

    fn into_option_value(self) -> Option<OptionValue> {
        Some(OptionValue::String(self.to_string()))
    }
}

impl OptionType for PathBuf {
    fn value_kind() -> ValueKind {
        ValueKind::Path
    }

    fn into_option_value(self) -> Option<OptionValue> {
        Some(OptionValue::Path(self))
    }
}

impl<T: OptionType> OptionType for Option<T> {
    fn value_kind() -> ValueKind {
        T::value_kind()
    }

    fn into_option_value(self) -> Option<OptionValue> {
        self.and_then(T::into_option_value)
    }
}

impl<T: OptionType> OptionType for Vec<T> {
    fn value_kind() -> ValueKind {
        ValueKind::List {
            of: Box::new(T::value_kind()),
        }
    }

    fn into_option_value(self) -> Option<OptionValue> {
        Some(OptionValue::List(
            self.into_iter().filter_map(T::into_option_value).collect(),
        ))
    }
}
