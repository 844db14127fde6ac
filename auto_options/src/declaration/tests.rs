//! Unit tests for declarations and the annotation reader.

use std::path::PathBuf;

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};

use super::*;
use crate::error::AutoOptionsError;
use crate::value::{OptionValue, ValueKind};

#[fixture]
fn declaration() -> OptionsDeclaration {
    OptionsDeclaration::builder("BuildOptions")
        .field(FieldBuilder::<String>::new("Target").alias("-t"))
        .field(FieldBuilder::<bool>::new("Internal").skip())
        .field(FieldBuilder::<u8>::new("Jobs").visibility(Visibility::Restricted))
        .field(FieldBuilder::<bool>::new("Verbose").inherited_from("CommonOptions"))
        .field(FieldBuilder::<PathBuf>::new("OutDir"))
        .build()
}

#[rstest]
fn eligible_fields_keep_declaration_order(declaration: OptionsDeclaration) {
    let names: Vec<_> = declaration.eligible_fields().map(FieldDeclaration::name).collect();
    assert_eq!(names, ["Target", "OutDir"]);
    assert_eq!(declaration.fields().len(), 5);
}

#[rstest]
#[case::enum_shape(TypeShape::Enum)]
#[case::primitive(TypeShape::Primitive)]
#[case::trait_object(TypeShape::Trait)]
fn non_struct_shapes_are_rejected(#[case] shape: TypeShape) -> Result<()> {
    let declaration = OptionsDeclaration::builder("Mode").shape(shape).build();
    let err = declaration
        .ensure_struct()
        .err()
        .ok_or_else(|| anyhow!("expected {shape} to be rejected"))?;
    ensure!(
        err == AutoOptionsError::InvalidOptionsType {
            type_name: "Mode".to_owned(),
            shape,
        },
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
fn builder_records_annotations() {
    let field = FieldBuilder::<u32>::new("MaxRetryCount")
        .ident("max_retry_count")
        .aliases(["-r", "--retries"])
        .description("Retry budget.")
        .default_value(42)
        .build();
    assert_eq!(field.name(), "MaxRetryCount");
    assert_eq!(field.ident(), "max_retry_count");
    assert_eq!(field.aliases(), ["-r", "--retries"]);
    assert_eq!(field.description(), Some("Retry budget."));
    assert_eq!(field.default_value(), Some(&OptionValue::Unsigned(42)));
    assert!(field.is_eligible());
}

#[rstest]
fn ident_defaults_to_name() {
    let field = FieldBuilder::<bool>::new("Quiet").build();
    assert_eq!(field.ident(), "Quiet");
}

#[rstest]
fn none_default_leaves_field_without_default() {
    let field = FieldBuilder::<Option<String>>::new("Token").default_value(None).build();
    assert_eq!(field.default_value(), None);
}

#[rstest]
fn untyped_defaults_must_match_exactly() -> Result<()> {
    let field = FieldDeclaration::new("Port", ValueKind::Integer { bits: 16, signed: false });
    let accepted = field.clone().with_default_value(OptionValue::Unsigned(8080))?;
    ensure!(
        accepted.default_value() == Some(&OptionValue::Unsigned(8080)),
        "default not stored"
    );

    let Err(err) = field.with_default_value(OptionValue::Signed(8080)) else {
        return Err(anyhow!("signed default should not coerce to u16"));
    };
    ensure!(
        matches!(err, AutoOptionsError::DefaultTypeMismatch { found: "signed integer", .. }),
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
fn canonical_name_comes_first() {
    let field = FieldBuilder::<bool>::new("Field").aliases(["-x", "-y"]).build();
    let annotations = read_annotations(&field, "--field".to_owned());
    assert_eq!(annotations.aliases, ["--field", "-x", "-y"]);
}

#[rstest]
fn duplicate_and_empty_aliases_are_discarded() {
    let field = FieldBuilder::<bool>::new("Field")
        .aliases(["-x", "--field", "", "-x", "-y"])
        .build();
    let annotations = read_annotations(&field, "--field".to_owned());
    assert_eq!(annotations.aliases, ["--field", "-x", "-y"]);
}

#[rstest]
fn empty_canonical_name_leaves_declared_aliases() {
    let field = FieldBuilder::<bool>::new("Field").alias("-f").build();
    let annotations = read_annotations(&field, String::new());
    assert_eq!(annotations.aliases, ["-f"]);

    let bare = FieldBuilder::<bool>::new("Field").build();
    assert!(read_annotations(&bare, String::new()).aliases.is_empty());
}

#[rstest]
fn description_and_default_are_copied() {
    let field = FieldBuilder::<PathBuf>::new("Config")
        .description("Configuration file.")
        .default_value(PathBuf::from("app.toml"))
        .build();
    let annotations = read_annotations(&field, "--config".to_owned());
    assert_eq!(annotations.description.as_deref(), Some("Configuration file."));
    assert_eq!(
        annotations.default,
        Some(OptionValue::Path(PathBuf::from("app.toml")))
    );
}
