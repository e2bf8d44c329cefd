use crate::naming::*;
use crate::{ClassId, FqName, Name};

fn kotlin(short: &str) -> ClassId {
    ClassId::new(FqName::new("kotlin"), Name::identifier(short))
}

#[test]
fn placement() {
    assert_eq!(base_package(), FqName::new("kotlin"));
    assert_eq!(reflect_package(), FqName::new("kotlin.reflect"));
    assert_eq!(base_id("Unit"), kotlin("Unit"));
    assert_eq!(
        reflect_id("KClass"),
        ClassId::new(FqName::new("kotlin.reflect"), Name::identifier("KClass"))
    );
}

#[test]
fn unsigned_variants() {
    assert_eq!(unsigned_id(SignedIntKind::Byte), kotlin("UByte"));
    assert_eq!(unsigned_id(SignedIntKind::Short), kotlin("UShort"));
    assert_eq!(unsigned_id(SignedIntKind::Int), kotlin("UInt"));
    assert_eq!(unsigned_id(SignedIntKind::Long), kotlin("ULong"));
}

#[test]
fn unsigned_variant_stays_in_package() {
    for kind in SignedIntKind::ALL {
        assert_eq!(unsigned_id(kind).package(), kind.class_id().package());
        assert_eq!(unsigned_id(kind), kind.unsigned().class_id());
    }
}

#[test]
fn try_unsigned_rejects_out_of_domain() {
    assert_eq!(try_unsigned_id(&kotlin("Int")), Some(kotlin("UInt")));
    assert_eq!(try_unsigned_id(&kotlin("Float")), None);
    assert_eq!(try_unsigned_id(&kotlin("UInt")), None);
    assert_eq!(
        try_unsigned_id(&ClassId::new(FqName::new("java.lang"), Name::identifier("Int"))),
        None
    );
}

#[test]
fn array_specializations() {
    assert_eq!(array_base(), kotlin("Array"));
    assert_eq!(primitive_array_id(PrimitiveKind::Int), kotlin("IntArray"));
    assert_eq!(primitive_array_id(PrimitiveKind::Boolean), kotlin("BooleanArray"));
    assert_eq!(primitive_array_id(PrimitiveKind::UShort), kotlin("UShortArray"));
    for kind in PrimitiveKind::ALL {
        assert_eq!(primitive_array_id(kind).package(), array_base().package());
    }
}

#[test]
fn try_primitive_array_rejects_out_of_domain() {
    assert_eq!(try_primitive_array_id(&kotlin("Char")), Some(kotlin("CharArray")));
    assert_eq!(try_primitive_array_id(&kotlin("ULong")), Some(kotlin("ULongArray")));
    assert_eq!(try_primitive_array_id(&kotlin("String")), None);
    assert_eq!(try_primitive_array_id(&kotlin("IntArray")), None);
    assert_eq!(try_primitive_array_id(&kotlin("UFloat")), None);
}

#[test]
fn primitive_kinds_resolve_from_class_ids() {
    for kind in PrimitiveKind::ALL {
        assert_eq!(PrimitiveKind::from_class_id(&kind.class_id()), Some(kind));
    }
    let nested = kotlin("Int").create_nested(Name::identifier("Companion"));
    assert_eq!(PrimitiveKind::from_class_id(&nested), None);
}

#[test]
fn signed_kinds() {
    let unsigned: Vec<_> = SignedIntKind::ALL.iter().map(|k| k.unsigned()).collect();
    assert_eq!(
        unsigned,
        vec![
            PrimitiveKind::UByte,
            PrimitiveKind::UShort,
            PrimitiveKind::UInt,
            PrimitiveKind::ULong,
        ]
    );
    assert_eq!(SignedIntKind::from_short_name("Long"), Some(SignedIntKind::Long));
    assert_eq!(SignedIntKind::from_short_name("Char"), None);
    assert_eq!(PrimitiveKind::from(SignedIntKind::Short), PrimitiveKind::Short);
}

#[test]
fn unsigned_flags() {
    let unsigned: Vec<_> = PrimitiveKind::ALL
        .into_iter()
        .filter(|k| k.is_unsigned())
        .collect();
    assert_eq!(unsigned.len(), 4);
    assert_eq!(PrimitiveKind::UInt.signed(), Some(SignedIntKind::Int));
    assert_eq!(PrimitiveKind::Float.signed(), None);
}
