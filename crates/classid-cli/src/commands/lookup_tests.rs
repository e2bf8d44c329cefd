use classid_core::Colors;
use classid_std::StandardClassIds;
use indoc::indoc;

use super::lookup::{LookupError, LookupReport, resolve};

fn render(name: &str, reflect: bool) -> String {
    let id = resolve(name, reflect).unwrap();
    LookupReport::new(id, StandardClassIds::get()).render(Colors::OFF)
}

#[test]
fn lookup_primitive_element() {
    assert_eq!(
        render("Int", false),
        indoc! {"
            kotlin/Int
              constant: Int
              array:    kotlin/IntArray
        "}
    );
}

#[test]
fn lookup_primitive_array() {
    assert_eq!(
        render("UShortArray", false),
        indoc! {"
            kotlin/UShortArray
              constant: -
              element:  kotlin/UShort
        "}
    );
}

#[test]
fn lookup_reflect_constant() {
    assert_eq!(
        render("KProperty", true),
        indoc! {"
            kotlin/reflect/KProperty
              constant: KProperty
        "}
    );
}

#[test]
fn lookup_full_class_id() {
    assert_eq!(
        render("kotlin/collections/List", false),
        indoc! {"
            kotlin/collections/List
              constant: -
        "}
    );
}

#[test]
fn lookup_rejects_invalid_names() {
    let err = resolve("", false).unwrap_err();
    assert!(matches!(err, LookupError::Name(_)));
    insta::assert_snapshot!(err, @"invalid class name: identifier cannot be empty");

    let err = resolve("kotlin/", false).unwrap_err();
    assert!(matches!(err, LookupError::ClassId(_)));
    insta::assert_snapshot!(err, @"class id `kotlin/` has no class name");

    assert!(matches!(resolve("a.b", true), Err(LookupError::Name(_))));
}

#[test]
fn lookup_report_json() {
    let id = resolve("Char", false).unwrap();
    let report = LookupReport::new(id, StandardClassIds::get());
    insta::assert_snapshot!(
        serde_json::to_string(&report).unwrap(),
        @r#"{"id":"kotlin/Char","constant":"Char","array":"kotlin/CharArray","element":null}"#
    );
}
