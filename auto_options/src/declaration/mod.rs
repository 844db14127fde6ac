//! Options declarations: the fields an options type exposes.
//!
//! A declaration is normally emitted by `#[derive(AutoOptions)]`, but it can
//! be assembled by hand with [`OptionsDeclaration::builder`] when options are
//! only known at runtime.

mod annotations;
mod field;

use std::fmt;

use serde::Serialize;

pub use annotations::{FieldAnnotations, read_annotations};
pub use field::{FieldBuilder, FieldDeclaration, FieldOrigin, Visibility};

use crate::descriptor::Descriptors;
use crate::error::{AutoOptionsError, AutoOptionsResult};
use crate::naming::OptionNamer;

/// Shape of the type an options declaration describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    /// A struct with named fields. The only valid options type.
    Struct,
    /// An enum.
    Enum,
    /// A primitive such as `u32` or `str`.
    Primitive,
    /// A trait object.
    Trait,
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Primitive => "primitive",
            Self::Trait => "trait",
        })
    }
}

/// Immutable, ordered description of an options type.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsDeclaration {
    type_name: String,
    shape: TypeShape,
    fields: Vec<FieldDeclaration>,
}

impl OptionsDeclaration {
    /// Start declaring a struct named `type_name`.
    ///
    /// ```
    /// use auto_options::{FieldBuilder, NamingConfig, OptionsDeclaration};
    ///
    /// let declaration = OptionsDeclaration::builder("ServeOptions")
    ///     .field(FieldBuilder::<u16>::new("Port").alias("-p").default_value(8080))
    ///     .build();
    /// let options = auto_options::derive_options(&declaration, &NamingConfig::default())?;
    /// assert_eq!(options[0].aliases(), ["--port", "-p"]);
    /// # Ok::<(), auto_options::AutoOptionsError>(())
    /// ```
    #[must_use]
    pub fn builder(type_name: impl Into<String>) -> OptionsDeclarationBuilder {
        OptionsDeclarationBuilder {
            type_name: type_name.into(),
            shape: TypeShape::Struct,
            fields: Vec::new(),
        }
    }

    /// Build a declaration from its parts.
    #[must_use]
    pub fn new(
        type_name: impl Into<String>,
        shape: TypeShape,
        fields: Vec<FieldDeclaration>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            shape,
            fields,
        }
    }

    /// Name of the declared type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Shape of the declared type.
    #[must_use]
    pub const fn shape(&self) -> TypeShape {
        self.shape
    }

    /// Every declared field, eligible or not, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDeclaration] {
        &self.fields
    }

    /// Fields that produce options, in declaration order.
    pub fn eligible_fields(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.fields.iter().filter(|field| field.is_eligible())
    }

    /// Fail unless the declaration describes a struct.
    ///
    /// # Errors
    ///
    /// Returns [`AutoOptionsError::InvalidOptionsType`] for any other shape.
    pub fn ensure_struct(&self) -> AutoOptionsResult<()> {
        if self.shape == TypeShape::Struct {
            Ok(())
        } else {
            Err(AutoOptionsError::InvalidOptionsType {
                type_name: self.type_name.clone(),
                shape: self.shape,
            })
        }
    }

    /// Lazily derive descriptors, one eligible field at a time.
    ///
    /// The returned iterator can be cloned to restart derivation.
    ///
    /// # Errors
    ///
    /// Returns [`AutoOptionsError::InvalidOptionsType`] before any field is
    /// scanned when the declaration is not a struct.
    pub fn descriptors<'a, N>(&'a self, namer: &'a N) -> AutoOptionsResult<Descriptors<'a, N>>
    where
        N: OptionNamer + ?Sized,
    {
        self.ensure_struct()?;
        Ok(Descriptors::new(self, namer))
    }
}

/// Builder returned by [`OptionsDeclaration::builder`].
#[derive(Debug, Clone)]
pub struct OptionsDeclarationBuilder {
    type_name: String,
    shape: TypeShape,
    fields: Vec<FieldDeclaration>,
}

impl OptionsDeclarationBuilder {
    /// Override the shape. Anything but [`TypeShape::Struct`] is rejected at
    /// derivation time.
    #[must_use]
    pub fn shape(mut self, shape: TypeShape) -> Self {
        self.shape = shape;
        self
    }

    /// Append a field.
    #[must_use]
    pub fn field(mut self, field: impl Into<FieldDeclaration>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Finish the declaration.
    #[must_use]
    pub fn build(self) -> OptionsDeclaration {
        OptionsDeclaration {
            type_name: self.type_name,
            shape: self.shape,
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests;
