//! Registration of derived options on an argument-parser target.
//!
//! Ordinary and global options differ only in the callback used for each
//! descriptor, so both flow through [`CommandExt::add_declared_options`].

mod clap_adapter;

pub use clap_adapter::option_arg;

use crate::AutoOptions;
use crate::declaration::OptionsDeclaration;
use crate::descriptor::{OptionDescriptor, derive_options};
use crate::error::{AutoOptionsError, AutoOptionsResult};
use crate::naming::{NamingConfig, OptionNamer};

/// Which registration callback receives each descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// Options of this command only.
    #[default]
    Local,
    /// Options inherited by every subcommand.
    Global,
}

/// A command that accepts option descriptors.
pub trait OptionTarget: Sized {
    /// Register an ordinary option.
    ///
    /// # Errors
    ///
    /// Returns an error when the target cannot express the descriptor.
    fn add_option(self, option: &OptionDescriptor) -> AutoOptionsResult<Self>;

    /// Register a global option.
    ///
    /// # Errors
    ///
    /// Returns an error when the target cannot express the descriptor.
    fn add_global_option(self, option: &OptionDescriptor) -> AutoOptionsResult<Self>;

    /// Register an option using the callback selected by `scope`.
    ///
    /// # Errors
    ///
    /// Propagates the error of the selected callback.
    fn register_option(self, option: &OptionDescriptor, scope: Scope) -> AutoOptionsResult<Self> {
        match scope {
            Scope::Local => self.add_option(option),
            Scope::Global => self.add_global_option(option),
        }
    }
}

impl OptionTarget for clap::Command {
    fn add_option(self, option: &OptionDescriptor) -> AutoOptionsResult<Self> {
        Ok(self.arg(option_arg(option)?))
    }

    fn add_global_option(self, option: &OptionDescriptor) -> AutoOptionsResult<Self> {
        Ok(self.arg(option_arg(option)?.global(true)))
    }
}

/// Adds derived options to any [`OptionTarget`].
///
/// ```
/// use auto_options::{AutoOptions, CommandExt};
///
/// #[derive(AutoOptions)]
/// struct Options {
///     /// Retry budget.
///     #[auto_options(alias = "-r", default = 3)]
///     pub max_retry_count: u32,
/// }
///
/// let command = clap::Command::new("fetch").add_options::<Options>()?;
/// let matches = command.try_get_matches_from(["fetch", "-r", "5"])?;
/// assert_eq!(matches.get_one::<u64>("max_retry_count"), Some(&5));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait CommandExt: OptionTarget {
    /// Add the options of `T` using `--` and kebab-case names.
    ///
    /// # Errors
    ///
    /// Fails when derivation or registration fails; nothing is registered
    /// unless every option derives.
    fn add_options<T: AutoOptions>(self) -> AutoOptionsResult<Self> {
        self.add_options_with::<T>(&NamingConfig::default())
    }

    /// Add the options of `T`, naming them with `namer`.
    ///
    /// # Errors
    ///
    /// See [`CommandExt::add_options`].
    fn add_options_with<T: AutoOptions>(
        self,
        namer: &(impl OptionNamer + ?Sized),
    ) -> AutoOptionsResult<Self> {
        self.add_declared_options(&T::declaration(), namer, Scope::Local)
    }

    /// Add the options of `T` as global options.
    ///
    /// # Errors
    ///
    /// See [`CommandExt::add_options`].
    fn add_global_options<T: AutoOptions>(self) -> AutoOptionsResult<Self> {
        self.add_global_options_with::<T>(&NamingConfig::default())
    }

    /// Add the options of `T` as global options, naming them with `namer`.
    ///
    /// # Errors
    ///
    /// See [`CommandExt::add_options`].
    fn add_global_options_with<T: AutoOptions>(
        self,
        namer: &(impl OptionNamer + ?Sized),
    ) -> AutoOptionsResult<Self> {
        self.add_declared_options(&T::declaration(), namer, Scope::Global)
    }

    /// Derive every option of `declaration`, then register each one.
    ///
    /// # Errors
    ///
    /// See [`CommandExt::add_options`].
    fn add_declared_options(
        self,
        declaration: &OptionsDeclaration,
        namer: &(impl OptionNamer + ?Sized),
        scope: Scope,
    ) -> AutoOptionsResult<Self> {
        derive_options(declaration, namer)?
            .iter()
            .try_fold(self, |target, option| target.register_option(option, scope))
    }
}

impl<T: OptionTarget> CommandExt for T {}

/// Collects the collaborators of a registration before applying it.
///
/// Unlike [`CommandExt`], nothing is required up front; a missing options
/// declaration or naming function is reported by [`Registration::register`]
/// before any field is scanned.
#[derive(Default)]
pub struct Registration<'a> {
    declaration: Option<OptionsDeclaration>,
    namer: Option<Box<dyn OptionNamer + 'a>>,
    scope: Scope,
}

impl<'a> Registration<'a> {
    /// Start an empty registration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the options of `T` with the default naming configuration.
    #[must_use]
    pub fn for_options<T: AutoOptions>() -> Self {
        Self::new()
            .declaration(T::declaration())
            .namer(NamingConfig::default())
    }

    /// Set the options declaration.
    #[must_use]
    pub fn declaration(mut self, declaration: OptionsDeclaration) -> Self {
        self.declaration = Some(declaration);
        self
    }

    /// Set the naming function.
    #[must_use]
    pub fn namer(mut self, namer: impl OptionNamer + 'a) -> Self {
        self.namer = Some(Box::new(namer));
        self
    }

    /// Select the registration scope.
    #[must_use]
    pub const fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Register the options as global options.
    #[must_use]
    pub const fn global(self) -> Self {
        self.scope(Scope::Global)
    }

    /// Derive the options and register them on `target`.
    ///
    /// # Errors
    ///
    /// Returns [`AutoOptionsError::InvalidArgument`] when the declaration or
    /// naming function is missing, and otherwise any derivation or
    /// registration failure.
    pub fn register<T: OptionTarget>(self, target: T) -> AutoOptionsResult<T> {
        let declaration = self
            .declaration
            .ok_or_else(|| AutoOptionsError::missing("options type"))?;
        let namer = self
            .namer
            .ok_or_else(|| AutoOptionsError::missing("naming function"))?;
        target.add_declared_options(&declaration, &*namer, self.scope)
    }
}

impl std::fmt::Debug for Registration<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field(
                "options_type",
                &self.declaration.as_ref().map(OptionsDeclaration::type_name),
            )
            .field("has_namer", &self.namer.is_some())
            .field("scope", &self.scope)
            .finish()
    }
}
