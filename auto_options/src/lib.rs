//! Derive command-line option descriptors from annotated structs.
//!
//! A program declares a struct whose public fields are its options. The
//! [`AutoOptions`] derive turns the fields and their `#[auto_options(...)]`
//! attributes into an [`OptionsDeclaration`]; [`derive_options`] then applies
//! a [`NamingConfig`] (or any other [`OptionNamer`]) to produce one
//! [`OptionDescriptor`] per eligible field, in declaration order. The
//! [`CommandExt`] extension registers those descriptors on a
//! [`clap::Command`].
//!
//! ```
//! use auto_options::{AutoOptions, NamingConfig, NamingConvention};
//!
//! #[derive(AutoOptions)]
//! struct BuildOptions {
//!     /// Number of parallel jobs.
//!     #[auto_options(alias = "-j", default = 4)]
//!     pub jobs: u8,
//!     #[auto_options(skip)]
//!     pub internal: bool,
//! }
//!
//! let options = BuildOptions::options()?;
//! assert_eq!(options.len(), 1);
//! assert_eq!(options[0].aliases(), ["--jobs", "-j"]);
//!
//! let naming = NamingConfig::new("/", NamingConvention::LOWER_CASE);
//! assert_eq!(BuildOptions::options_with(&naming)?[0].name(), "/jobs");
//! # Ok::<(), auto_options::AutoOptionsError>(())
//! ```

pub use auto_options_macros::AutoOptions;

mod declaration;
mod descriptor;
mod error;
mod naming;
mod register;
mod value;

pub use declaration::{
    FieldAnnotations, FieldBuilder, FieldDeclaration, FieldOrigin, OptionsDeclaration,
    OptionsDeclarationBuilder, TypeShape, Visibility, read_annotations,
};
pub use descriptor::{Descriptors, OptionDescriptor, derive_options};
pub use error::{AutoOptionsError, AutoOptionsResult};
pub use naming::{
    Casing, NamingConfig, NamingConvention, OptionNamer, OptionPrefix, format_option_name,
};
pub use register::{CommandExt, OptionTarget, Registration, Scope, option_arg};
pub use value::{
    OptionType, OptionValue, ValueKind, optional_value_enum_value, value_enum_kind,
    value_enum_list_kind, value_enum_list_value, value_enum_value,
};

/// Implemented for structs whose fields declare command-line options.
///
/// Usually derived with `#[derive(AutoOptions)]`; a manual implementation
/// only needs [`AutoOptions::declaration`].
pub trait AutoOptions {
    /// The declaration describing every field of the options type.
    fn declaration() -> OptionsDeclaration;

    /// Derive descriptors with `--` and kebab-case names.
    ///
    /// # Errors
    ///
    /// Returns an [`AutoOptionsError`] when the declaration is not a struct or
    /// a field resolves to no aliases.
    fn options() -> AutoOptionsResult<Vec<OptionDescriptor>> {
        Self::options_with(&NamingConfig::default())
    }

    /// Derive descriptors, naming each option with `namer`.
    ///
    /// # Errors
    ///
    /// See [`AutoOptions::options`].
    fn options_with(namer: &(impl OptionNamer + ?Sized)) -> AutoOptionsResult<Vec<OptionDescriptor>> {
        derive_options(&Self::declaration(), namer)
    }
}
