//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Each subcommand parses its own flags
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Color choice parsing

use super::*;
use crate::cli::commands::{arrays_command, list_command, lookup_command};

#[test]
fn build_cli_is_consistent() {
    build_cli().debug_assert();
}

#[test]
fn list_defaults() {
    let m = list_command().try_get_matches_from(["list"]).unwrap();
    let params = ListParams::from_matches(&m);
    assert!(!params.json);
    assert!(!params.compact);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn list_json_compact() {
    let m = list_command()
        .try_get_matches_from(["list", "--json", "--compact", "--color", "never"])
        .unwrap();
    let params = ListParams::from_matches(&m);
    assert!(params.json);
    assert!(params.compact);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn list_compact_requires_json() {
    let result = list_command().try_get_matches_from(["list", "--compact"]);
    assert!(result.is_err(), "--compact without --json should be rejected");
}

#[test]
fn lookup_extracts_name_and_reflect() {
    let m = lookup_command()
        .try_get_matches_from(["lookup", "KProperty", "--reflect"])
        .unwrap();
    let params = LookupParams::from_matches(&m);
    assert_eq!(params.name, "KProperty");
    assert!(params.reflect);
    assert!(!params.json);
}

#[test]
fn lookup_requires_name() {
    let result = lookup_command().try_get_matches_from(["lookup"]);
    assert!(result.is_err(), "lookup without NAME should be rejected");
}

#[test]
fn lookup_rejects_unknown_color() {
    let result = lookup_command().try_get_matches_from(["lookup", "Int", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn arrays_color_always() {
    let m = arrays_command()
        .try_get_matches_from(["arrays", "--color", "always"])
        .unwrap();
    let params = ArraysParams::from_matches(&m);
    assert_eq!(params.color, ColorChoice::Always);
    assert!(params.color.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}

#[test]
fn top_level_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["classid"]);
    assert!(result.is_err());
}

#[test]
fn top_level_dispatches_lookup() {
    let m = build_cli()
        .try_get_matches_from(["classid", "lookup", "Int", "--json"])
        .unwrap();
    let (name, sub) = m.subcommand().unwrap();
    assert_eq!(name, "lookup");
    let params = LookupParams::from_matches(sub);
    assert_eq!(params.name, "Int");
    assert!(params.json);
}
