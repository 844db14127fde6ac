//! Conversion of option descriptors into `clap` arguments.

use clap::builder::{PossibleValue, PossibleValuesParser, ValueParser};
use clap::{Arg, ArgAction};

use crate::descriptor::OptionDescriptor;
use crate::error::{AutoOptionsError, AutoOptionsResult};
use crate::value::{OptionValue, ValueKind};

/// Spelling of an alias as `clap` understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag<'a> {
    Long(&'a str),
    Short(char),
}

impl<'a> Flag<'a> {
    fn parse(alias: &'a str) -> Option<Self> {
        if let Some(long) = alias.strip_prefix("--") {
            return (!long.is_empty() && !long.starts_with('-')).then_some(Self::Long(long));
        }
        let mut chars = alias.strip_prefix('-')?.chars();
        match (chars.next(), chars.next()) {
            (Some(short), None) if short != '-' => Some(Self::Short(short)),
            _ => None,
        }
    }
}

/// Build the `clap` argument for `option`.
///
/// The argument id is the field identifier. The first `--name` alias becomes
/// the long flag and the first `-x` alias the short flag; later aliases of
/// either form become visible aliases.
///
/// Integers of up to 64 bits are read as `i64` or `u64` and rejected outside
/// the declared width; 128-bit integers are read as `i128` or `u128`.
///
/// # Errors
///
/// Returns [`AutoOptionsError::UnsupportedAlias`] for an alias in any other
/// form, such as `/name` or `-xy`.
///
/// ```
/// use auto_options::{NamingConfig, OptionsDeclaration, FieldBuilder, derive_options, option_arg};
///
/// let declaration = OptionsDeclaration::builder("Options")
///     .field(FieldBuilder::<u16>::new("Port").ident("port").alias("-p"))
///     .build();
/// let options = derive_options(&declaration, &NamingConfig::default())?;
/// let arg = option_arg(&options[0])?;
/// assert_eq!(arg.get_long(), Some("port"));
/// assert_eq!(arg.get_short(), Some('p'));
/// # Ok::<(), auto_options::AutoOptionsError>(())
/// ```
pub fn option_arg(option: &OptionDescriptor) -> AutoOptionsResult<Arg> {
    let mut arg = Arg::new(option.field().to_owned());
    let mut has_long = false;
    let mut has_short = false;
    for alias in option.aliases() {
        arg = match Flag::parse(alias) {
            Some(Flag::Long(name)) if has_long => arg.visible_alias(name.to_owned()),
            Some(Flag::Long(name)) => {
                has_long = true;
                arg.long(name.to_owned())
            }
            Some(Flag::Short(short)) if has_short => arg.visible_short_alias(short),
            Some(Flag::Short(short)) => {
                has_short = true;
                arg.short(short)
            }
            None => return Err(AutoOptionsError::unsupported_alias(option.field(), alias)),
        };
    }

    arg = configure_values(arg, option.value_kind());
    if let Some(description) = option.description() {
        arg = arg.help(description.to_owned());
    }
    if let Some(default) = option.default_value() {
        arg = apply_default(arg, default);
    }
    Ok(arg)
}

fn configure_values(arg: Arg, kind: &ValueKind) -> Arg {
    match kind {
        ValueKind::Bool => arg
            .value_parser(ValueParser::bool())
            .action(ArgAction::Set)
            .num_args(0..=1)
            .default_missing_value("true"),
        ValueKind::List { of } => arg.value_parser(value_parser(of)).action(ArgAction::Append),
        other => arg.value_parser(value_parser(other)).action(ArgAction::Set),
    }
}

fn value_parser(kind: &ValueKind) -> ValueParser {
    match kind {
        ValueKind::String => ValueParser::string(),
        ValueKind::Integer { bits, signed } => integer_parser(*bits, *signed),
        ValueKind::Float { .. } => clap::value_parser!(f64).into(),
        ValueKind::Bool => ValueParser::bool(),
        ValueKind::Path => ValueParser::path_buf(),
        ValueKind::Enum { variants, hidden } if variants.is_empty() && hidden.is_empty() => {
            ValueParser::string()
        }
        ValueKind::Enum { variants, hidden } => {
            let offered = variants.iter().map(|name| PossibleValue::new(name.clone()));
            let concealed = hidden
                .iter()
                .map(|name| PossibleValue::new(name.clone()).hide(true));
            PossibleValuesParser::new(offered.chain(concealed)).into()
        }
        ValueKind::List { of } => value_parser(of),
    }
}

/// Widths up to 64 bits parse as `i64`/`u64` bounded to the declared range;
/// wider kinds parse as `i128`/`u128`.
fn integer_parser(bits: u8, signed: bool) -> ValueParser {
    let Some(unused) = 64_u32.checked_sub(u32::from(bits)) else {
        return if signed {
            ValueParser::new(|raw: &str| raw.parse::<i128>())
        } else {
            ValueParser::new(|raw: &str| raw.parse::<u128>())
        };
    };
    if signed {
        let min = i64::MIN.checked_shr(unused).unwrap_or(0);
        let max = i64::MAX.checked_shr(unused).unwrap_or(0);
        clap::value_parser!(i64).range(min..=max).into()
    } else {
        let max = u64::MAX.checked_shr(unused).unwrap_or(0);
        clap::value_parser!(u64).range(..=max).into()
    }
}

fn apply_default(arg: Arg, default: &OptionValue) -> Arg {
    match default {
        OptionValue::List(items) if items.is_empty() => arg,
        OptionValue::List(items) => arg.default_values(items.iter().map(ToString::to_string)),
        value => arg.default_value(value.to_string()),
    }
}
