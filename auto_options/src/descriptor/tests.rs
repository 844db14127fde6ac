//! Unit tests for descriptor derivation.

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};

use super::*;
use crate::declaration::{FieldBuilder, FieldDeclaration, OptionsDeclaration, TypeShape};
use crate::error::AutoOptionsError;
use crate::naming::{NamingConfig, NamingConvention};
use crate::value::{OptionValue, ValueKind};

#[fixture]
fn declaration() -> OptionsDeclaration {
    OptionsDeclaration::builder("FetchOptions")
        .field(
            FieldBuilder::<u32>::new("MaxRetryCount")
                .ident("max_retry_count")
                .alias("-r")
                .description("How often to retry.")
                .default_value(42),
        )
        .field(FieldBuilder::<bool>::new("DryRun").ident("dry_run").skip())
        .field(FieldBuilder::<String>::new("Field").ident("field").aliases(["-x", "-y"]))
        .build()
}

#[rstest]
fn derives_descriptors_in_declaration_order(declaration: OptionsDeclaration) -> Result<()> {
    let options = derive_options(&declaration, &NamingConfig::default())?;
    let names: Vec<_> = options.iter().map(OptionDescriptor::name).collect();
    ensure!(
        names == ["--max-retry-count", "--field"],
        "unexpected names: {names:?}"
    );
    Ok(())
}

#[rstest]
fn suppressed_fields_never_appear(declaration: OptionsDeclaration) -> Result<()> {
    let options = derive_options(&declaration, &NamingConfig::default())?;
    ensure!(
        options.iter().all(|option| option.field() != "dry_run"),
        "suppressed field leaked into {options:?}"
    );
    Ok(())
}

#[rstest]
fn declared_aliases_follow_the_canonical_name(declaration: OptionsDeclaration) -> Result<()> {
    let options = derive_options(&declaration, &NamingConfig::default())?;
    let field = options
        .iter()
        .find(|option| option.field() == "field")
        .ok_or_else(|| anyhow!("missing field option"))?;
    ensure!(
        field.aliases() == ["--field", "-x", "-y"],
        "unexpected aliases: {:?}",
        field.aliases()
    );
    Ok(())
}

#[rstest]
fn default_value_is_stable_across_calls(declaration: OptionsDeclaration) -> Result<()> {
    let options = derive_options(&declaration, &NamingConfig::default())?;
    let retries = options
        .first()
        .ok_or_else(|| anyhow!("missing retries option"))?;
    for _ in 0..3 {
        ensure!(
            retries.default_value() == Some(&OptionValue::Unsigned(42)),
            "default changed: {:?}",
            retries.default_value()
        );
    }
    ensure!(retries.has_default(), "expected a default");
    ensure!(
        retries.value_kind() == &ValueKind::Integer { bits: 32, signed: false },
        "unexpected kind {}",
        retries.value_kind()
    );
    ensure!(
        retries.description() == Some("How often to retry."),
        "unexpected description"
    );
    Ok(())
}

#[rstest]
fn empty_alias_set_names_the_field() -> Result<()> {
    let declaration = OptionsDeclaration::builder("GlobalOptions")
        .field(FieldBuilder::<bool>::new("Verbose").alias("-v"))
        .field(FieldBuilder::<bool>::new("Quiet"))
        .build();
    let namer = |_: &FieldDeclaration| String::new();
    let Err(err) = derive_options(&declaration, &namer) else {
        return Err(anyhow!("expected derivation to fail"));
    };
    ensure!(
        err == AutoOptionsError::no_aliases("Quiet", "GlobalOptions"),
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
fn zero_eligible_fields_is_not_an_error() -> Result<()> {
    let declaration = OptionsDeclaration::builder("Nothing")
        .field(FieldBuilder::<bool>::new("Hidden").skip())
        .build();
    let options = derive_options(&declaration, &NamingConfig::default())?;
    ensure!(options.is_empty(), "expected no options, got {options:?}");
    Ok(())
}

#[rstest]
fn non_struct_declarations_fail_before_scanning() {
    let declaration = OptionsDeclaration::builder("u32")
        .shape(TypeShape::Primitive)
        .field(FieldBuilder::<bool>::new("Ignored"))
        .build();
    let calls = std::cell::Cell::new(0);
    let namer = |_: &FieldDeclaration| {
        calls.set(calls.get() + 1);
        String::from("--ignored")
    };
    let result = derive_options(&declaration, &namer);
    assert!(matches!(
        result,
        Err(AutoOptionsError::InvalidOptionsType {
            shape: TypeShape::Primitive,
            ..
        })
    ));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn lazy_iteration_stops_after_the_first_error() {
    let declaration = OptionsDeclaration::builder("Partial")
        .field(FieldBuilder::<bool>::new("Good").alias("-g"))
        .field(FieldBuilder::<bool>::new("Bad"))
        .field(FieldBuilder::<bool>::new("Later").alias("-l"))
        .build();
    let namer = |_: &FieldDeclaration| String::new();
    let Ok(descriptors) = declaration.descriptors(&namer) else {
        panic!("struct declarations are accepted");
    };
    let results: Vec<_> = descriptors.collect();
    assert_eq!(results.len(), 2);
    assert!(results.first().is_some_and(Result::is_ok));
    assert!(results.get(1).is_some_and(Result::is_err));
}

#[rstest]
fn derivation_is_repeatable(declaration: OptionsDeclaration) -> Result<()> {
    let config = NamingConfig::new("/", NamingConvention::LOWER_CASE);
    let descriptors = declaration.descriptors(&config)?;
    let first: Vec<_> = descriptors.clone().collect::<Result<_, _>>()?;
    let second: Vec<_> = descriptors.collect::<Result<_, _>>()?;
    ensure!(first == second, "passes differ: {first:?} vs {second:?}");
    let again = derive_options(&declaration, &config)?;
    ensure!(first == again, "re-derivation differs");
    ensure!(
        first.first().map(OptionDescriptor::name) == Some("/maxretrycount"),
        "unexpected canonical name"
    );
    Ok(())
}

#[rstest]
fn descriptors_serialise_for_hosts(declaration: OptionsDeclaration) -> Result<()> {
    let options = derive_options(&declaration, &NamingConfig::default())?;
    let value = serde_json::to_value(&options)?;
    let first = value
        .get(0)
        .ok_or_else(|| anyhow!("expected a serialised descriptor"))?;
    ensure!(
        first.get("aliases") == Some(&serde_json::json!(["--max-retry-count", "-r"])),
        "unexpected aliases in {first}"
    );
    ensure!(
        first.get("default") == Some(&serde_json::json!(42)),
        "unexpected default in {first}"
    );
    Ok(())
}

#[rstest]
fn defaults_outside_an_explicit_kind_are_rejected() -> Result<()> {
    let declaration = OptionsDeclaration::builder("Options")
        .field(
            FieldBuilder::<String>::with_kind(
                "Mode",
                ValueKind::Enum {
                    variants: vec!["open".to_owned()],
                    hidden: vec![],
                },
                |value: String| Some(OptionValue::Enum(value)),
            )
            .ident("mode")
            .default_value("secret".to_owned()),
        )
        .build();
    let err = derive_options(&declaration, &NamingConfig::default())
        .err()
        .ok_or_else(|| anyhow!("foreign default accepted"))?;
    ensure!(
        matches!(
            err,
            AutoOptionsError::DefaultTypeMismatch { ref field, found: "enum variant", .. }
                if field == "Mode"
        ),
        "unexpected error: {err}"
    );
    Ok(())
}
