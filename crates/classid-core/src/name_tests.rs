use std::collections::HashSet;

use crate::{Name, NameError};

#[test]
fn identifier_accepts_plain_text() {
    let name = Name::identifier("Int");
    assert_eq!(name.as_str(), "Int");
    assert_eq!(name.to_string(), "Int");
}

#[test]
fn try_identifier_rejects_empty() {
    assert_eq!(Name::try_identifier(""), Err(NameError::Empty));
}

#[test]
fn try_identifier_rejects_separators() {
    assert_eq!(
        Name::try_identifier("kotlin.Int"),
        Err(NameError::Separator {
            text: "kotlin.Int".to_owned(),
            separator: '.',
        })
    );
    assert!(Name::try_identifier("kotlin/Int").is_err());
}

#[test]
#[should_panic(expected = "invalid identifier")]
fn identifier_panics_on_empty_literal() {
    let _ = Name::identifier("");
}

#[test]
fn equality_is_by_text() {
    let a = Name::identifier("Long");
    let b = Name::try_identifier(&String::from("Long")).unwrap();
    assert_eq!(a, b);

    let set: HashSet<_> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn error_messages() {
    insta::assert_snapshot!(NameError::Empty, @"identifier cannot be empty");
    insta::assert_snapshot!(
        Name::try_identifier("a/b").unwrap_err(),
        @"identifier `a/b` contains separator `/`"
    );
}

#[test]
fn serde_uses_plain_string() {
    let name = Name::identifier("Char");
    assert_eq!(serde_json::to_string(&name).unwrap(), r#""Char""#);
    let back: Name = serde_json::from_str(r#""Char""#).unwrap();
    assert_eq!(back, name);
    assert!(serde_json::from_str::<Name>(r#""""#).is_err());
}
