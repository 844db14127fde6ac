//! Tests for type introspection helpers.

use super::super::*;
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{Type, parse_quote};

#[rstest]
#[case(parse_quote!(Option<u32>))]
#[case(parse_quote!(std::option::Option<u32>))]
#[case(parse_quote!(core::option::Option<u32>))]
fn option_inner_matches_qualified_paths(#[case] ty: Type) -> Result<()> {
    let expected: Type = parse_quote!(u32);
    let inner = option_inner(&ty).ok_or_else(|| anyhow!("expected Option"))?;
    ensure!(inner == &expected, "expected {expected:?}, got {inner:?}");
    Ok(())
}

#[rstest]
#[case(parse_quote!(Vec<Mode>))]
#[case(parse_quote!(std::vec::Vec<Mode>))]
#[case(parse_quote!(alloc::vec::Vec<Mode>))]
fn vec_inner_matches_qualified_paths(#[case] ty: Type) -> Result<()> {
    let expected: Type = parse_quote!(Mode);
    let inner = vec_inner(&ty).ok_or_else(|| anyhow!("expected Vec"))?;
    ensure!(inner == &expected, "expected {expected:?}, got {inner:?}");
    Ok(())
}

#[rstest]
#[case::plain(parse_quote!(u32))]
#[case::reference(parse_quote!(&'static str))]
#[case::other_wrapper(parse_quote!(Box<u32>))]
#[case::bare(parse_quote!(Option))]
fn wrappers_only_match_by_name(#[case] ty: Type) {
    assert!(option_inner(&ty).is_none());
    assert!(vec_inner(&ty).is_none());
}

#[test]
fn inspection_is_shallow() -> Result<()> {
    let ty: Type = parse_quote!(Option<Vec<u8>>);
    let expected: Type = parse_quote!(Vec<u8>);
    let inner = option_inner(&ty).ok_or_else(|| anyhow!("expected Option"))?;
    ensure!(inner == &expected, "expected {expected:?}, got {inner:?}");
    Ok(())
}
