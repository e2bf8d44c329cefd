//! Naming conventions for standard class identities.
//!
//! Every derived identity goes through one of four transforms:
//! - base placement: `kotlin.<name>`
//! - reflect placement: `kotlin.reflect.<name>`
//! - unsigned variant: same package, `U` + short name
//! - primitive array: array base package, element short name + `Array`
//!
//! The unsigned and array transforms only accept the closed kind sets
//! below, so an out-of-domain derivation (an "unsigned Float") cannot be
//! expressed. The `try_*` variants validate an arbitrary `ClassId` first.

use classid_core::{ClassId, FqName, Name};

const BASE_PACKAGE: &str = "kotlin";
const REFLECT_PACKAGE: &str = "reflect";
const UNSIGNED_PREFIX: &str = "U";
const ARRAY: &str = "Array";

/// Root standard-library package (`kotlin`).
pub fn base_package() -> FqName {
    FqName::new(BASE_PACKAGE)
}

/// Reflection subpackage (`kotlin.reflect`).
pub fn reflect_package() -> FqName {
    base_package().child(Name::identifier(REFLECT_PACKAGE))
}

/// Place `short` directly under the base package.
///
/// # Panics
/// Panics if `short` is not a valid identifier.
pub fn base_id(short: &str) -> ClassId {
    ClassId::new(base_package(), Name::identifier(short))
}

/// Place `short` under the reflection subpackage.
///
/// # Panics
/// Panics if `short` is not a valid identifier.
pub fn reflect_id(short: &str) -> ClassId {
    ClassId::new(reflect_package(), Name::identifier(short))
}

/// Signed integer kinds that have an unsigned counterpart.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SignedIntKind {
    Byte,
    Short,
    Int,
    Long,
}

impl SignedIntKind {
    pub const ALL: [Self; 4] = [Self::Byte, Self::Short, Self::Int, Self::Long];

    pub fn short_name(self) -> &'static str {
        match self {
            Self::Byte => "Byte",
            Self::Short => "Short",
            Self::Int => "Int",
            Self::Long => "Long",
        }
    }

    pub fn class_id(self) -> ClassId {
        base_id(self.short_name())
    }

    /// The primitive kind of the unsigned counterpart.
    pub fn unsigned(self) -> PrimitiveKind {
        match self {
            Self::Byte => PrimitiveKind::UByte,
            Self::Short => PrimitiveKind::UShort,
            Self::Int => PrimitiveKind::UInt,
            Self::Long => PrimitiveKind::ULong,
        }
    }

    pub fn from_short_name(short: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.short_name() == short)
    }

    pub fn from_class_id(id: &ClassId) -> Option<Self> {
        top_level_in_base(id).and_then(Self::from_short_name)
    }
}

/// Primitive element types that have a specialized array class.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PrimitiveKind {
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    UByte,
    UShort,
    UInt,
    ULong,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Every kind, in registry order.
    pub const ALL: [Self; 12] = [
        Self::Boolean,
        Self::Char,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::UByte,
        Self::UShort,
        Self::UInt,
        Self::ULong,
        Self::Float,
        Self::Double,
    ];

    /// Signed kind this unsigned kind is derived from.
    pub fn signed(self) -> Option<SignedIntKind> {
        match self {
            Self::UByte => Some(SignedIntKind::Byte),
            Self::UShort => Some(SignedIntKind::Short),
            Self::UInt => Some(SignedIntKind::Int),
            Self::ULong => Some(SignedIntKind::Long),
            _ => None,
        }
    }

    pub fn is_unsigned(self) -> bool {
        self.signed().is_some()
    }

    pub fn class_id(self) -> ClassId {
        match self {
            Self::Boolean => base_id("Boolean"),
            Self::Char => base_id("Char"),
            Self::Byte => SignedIntKind::Byte.class_id(),
            Self::Short => SignedIntKind::Short.class_id(),
            Self::Int => SignedIntKind::Int.class_id(),
            Self::Long => SignedIntKind::Long.class_id(),
            Self::UByte => unsigned_id(SignedIntKind::Byte),
            Self::UShort => unsigned_id(SignedIntKind::Short),
            Self::UInt => unsigned_id(SignedIntKind::Int),
            Self::ULong => unsigned_id(SignedIntKind::Long),
            Self::Float => base_id("Float"),
            Self::Double => base_id("Double"),
        }
    }

    pub fn from_class_id(id: &ClassId) -> Option<Self> {
        let short = top_level_in_base(id)?;
        if let Some(signed) = short
            .strip_prefix(UNSIGNED_PREFIX)
            .and_then(SignedIntKind::from_short_name)
        {
            return Some(signed.unsigned());
        }
        match short {
            "Boolean" => Some(Self::Boolean),
            "Char" => Some(Self::Char),
            "Float" => Some(Self::Float),
            "Double" => Some(Self::Double),
            _ => SignedIntKind::from_short_name(short).map(Self::from),
        }
    }
}

impl From<SignedIntKind> for PrimitiveKind {
    fn from(kind: SignedIntKind) -> Self {
        match kind {
            SignedIntKind::Byte => Self::Byte,
            SignedIntKind::Short => Self::Short,
            SignedIntKind::Int => Self::Int,
            SignedIntKind::Long => Self::Long,
        }
    }
}

/// Identity of the generic array class every primitive array derives from.
pub fn array_base() -> ClassId {
    base_id(ARRAY)
}

/// Unsigned counterpart of a signed integer kind (`Int` -> `UInt`).
pub fn unsigned_id(signed: SignedIntKind) -> ClassId {
    unsigned_variant(&signed.class_id())
}

/// Specialized array class of a primitive kind (`Int` -> `IntArray`).
pub fn primitive_array_id(kind: PrimitiveKind) -> ClassId {
    array_specialization(kind.class_id().short_class_name(), &array_base())
}

/// Unsigned counterpart of `id`, or `None` unless `id` is one of the four
/// signed integer classes.
pub fn try_unsigned_id(id: &ClassId) -> Option<ClassId> {
    SignedIntKind::from_class_id(id).map(unsigned_id)
}

/// Primitive array class of `id`, or `None` unless `id` is one of the
/// twelve primitive element classes.
pub fn try_primitive_array_id(id: &ClassId) -> Option<ClassId> {
    PrimitiveKind::from_class_id(id).map(primitive_array_id)
}

fn unsigned_variant(signed: &ClassId) -> ClassId {
    let short = format!("{UNSIGNED_PREFIX}{}", signed.short_class_name());
    ClassId::new(signed.package().clone(), Name::identifier(&short))
}

fn array_specialization(element: &Name, array: &ClassId) -> ClassId {
    let short = format!("{element}{}", array.short_class_name());
    ClassId::new(array.package().clone(), Name::identifier(&short))
}

/// Short name of a top-level class in the base package.
fn top_level_in_base(id: &ClassId) -> Option<&str> {
    if id.is_nested() || *id.package() != base_package() {
        return None;
    }
    Some(id.short_class_name().as_str())
}
