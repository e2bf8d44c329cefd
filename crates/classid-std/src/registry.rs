//! The process-wide standard class id registry.
//!
//! Built once on first access, immutable afterwards, shared by every
//! compilation thread without locking.

use std::sync::LazyLock;

use classid_core::{ClassId, Name, NameError};
use indexmap::IndexMap;

use crate::naming::{
    PrimitiveKind, SignedIntKind, base_id, base_package, primitive_array_id, reflect_id,
    reflect_package, unsigned_id,
};

static STANDARD: LazyLock<StandardClassIds> = LazyLock::new(StandardClassIds::build);

/// Well-known standard-library class identities.
#[derive(Debug)]
pub struct StandardClassIds {
    pub nothing: ClassId,
    pub unit: ClassId,
    pub any: ClassId,
    pub enum_class: ClassId,
    pub annotation: ClassId,
    pub array: ClassId,

    pub boolean: ClassId,
    pub char: ClassId,
    pub byte: ClassId,
    pub short: ClassId,
    pub int: ClassId,
    pub long: ClassId,
    pub float: ClassId,
    pub double: ClassId,

    pub ubyte: ClassId,
    pub ushort: ClassId,
    pub uint: ClassId,
    pub ulong: ClassId,

    pub string: ClassId,
    pub kproperty: ClassId,
    pub comparable: ClassId,
    pub number: ClassId,
    pub function: ClassId,

    /// Primitive element class to its specialized array class.
    element_to_array: IndexMap<ClassId, ClassId>,
    /// Exact inverse of `element_to_array`.
    array_to_element: IndexMap<ClassId, ClassId>,
}

impl StandardClassIds {
    /// The shared registry, built on first call.
    pub fn get() -> &'static Self {
        &STANDARD
    }

    fn build() -> Self {
        let mut ids = Self {
            nothing: base_id("Nothing"),
            unit: base_id("Unit"),
            any: base_id("Any"),
            enum_class: base_id("Enum"),
            annotation: base_id("Annotation"),
            array: base_id("Array"),

            boolean: base_id("Boolean"),
            char: base_id("Char"),
            byte: SignedIntKind::Byte.class_id(),
            short: SignedIntKind::Short.class_id(),
            int: SignedIntKind::Int.class_id(),
            long: SignedIntKind::Long.class_id(),
            float: base_id("Float"),
            double: base_id("Double"),

            ubyte: unsigned_id(SignedIntKind::Byte),
            ushort: unsigned_id(SignedIntKind::Short),
            uint: unsigned_id(SignedIntKind::Int),
            ulong: unsigned_id(SignedIntKind::Long),

            string: base_id("String"),
            kproperty: reflect_id("KProperty"),
            comparable: base_id("Comparable"),
            number: base_id("Number"),
            function: base_id("Function"),

            element_to_array: IndexMap::new(),
            array_to_element: IndexMap::new(),
        };

        let mut element_to_array = IndexMap::with_capacity(PrimitiveKind::ALL.len());
        for kind in PrimitiveKind::ALL {
            let element = ids.primitive(kind).clone();
            let array = primitive_array_id(kind);
            if let Some(previous) = element_to_array.insert(element.clone(), array) {
                Self::duplicate_element(&element, &previous);
            }
        }

        let array_to_element: IndexMap<_, _> = element_to_array
            .iter()
            .map(|(element, array)| (array.clone(), element.clone()))
            .collect();
        Self::ensure_inverse(&element_to_array, &array_to_element);

        ids.element_to_array = element_to_array;
        ids.array_to_element = array_to_element;
        ids
    }

    /// The constant for a primitive kind.
    pub fn primitive(&self, kind: PrimitiveKind) -> &ClassId {
        match kind {
            PrimitiveKind::Boolean => &self.boolean,
            PrimitiveKind::Char => &self.char,
            PrimitiveKind::Byte => &self.byte,
            PrimitiveKind::Short => &self.short,
            PrimitiveKind::Int => &self.int,
            PrimitiveKind::Long => &self.long,
            PrimitiveKind::UByte => &self.ubyte,
            PrimitiveKind::UShort => &self.ushort,
            PrimitiveKind::UInt => &self.uint,
            PrimitiveKind::ULong => &self.ulong,
            PrimitiveKind::Float => &self.float,
            PrimitiveKind::Double => &self.double,
        }
    }

    /// Primitive element class -> specialized array class, in `PrimitiveKind::ALL` order.
    pub fn element_to_array(&self) -> &IndexMap<ClassId, ClassId> {
        &self.element_to_array
    }

    /// Specialized array class -> primitive element class.
    pub fn array_to_element(&self) -> &IndexMap<ClassId, ClassId> {
        &self.array_to_element
    }

    pub fn array_of(&self, element: &ClassId) -> Option<&ClassId> {
        self.element_to_array.get(element)
    }

    pub fn element_of(&self, array: &ClassId) -> Option<&ClassId> {
        self.array_to_element.get(array)
    }

    pub fn is_primitive(&self, id: &ClassId) -> bool {
        self.element_to_array.contains_key(id)
    }

    pub fn is_primitive_array(&self, id: &ClassId) -> bool {
        self.array_to_element.contains_key(id)
    }

    /// Every named constant with its display label, in declaration order.
    pub fn constants(&self) -> impl Iterator<Item = (&'static str, &ClassId)> {
        [
            ("Nothing", &self.nothing),
            ("Unit", &self.unit),
            ("Any", &self.any),
            ("Enum", &self.enum_class),
            ("Annotation", &self.annotation),
            ("Array", &self.array),
            ("Boolean", &self.boolean),
            ("Char", &self.char),
            ("Byte", &self.byte),
            ("Short", &self.short),
            ("Int", &self.int),
            ("Long", &self.long),
            ("Float", &self.float),
            ("Double", &self.double),
            ("UByte", &self.ubyte),
            ("UShort", &self.ushort),
            ("UInt", &self.uint),
            ("ULong", &self.ulong),
            ("String", &self.string),
            ("KProperty", &self.kproperty),
            ("Comparable", &self.comparable),
            ("Number", &self.number),
            ("Function", &self.function),
        ]
        .into_iter()
    }

    /// Label of the named constant equal to `id`, if any.
    pub fn label_of(&self, id: &ClassId) -> Option<&'static str> {
        self.constants()
            .find(|(_, constant)| *constant == id)
            .map(|(label, _)| label)
    }
}

/// A class id for `name` under the base package.
///
/// Permissive: `name` need not be one of the registry constants.
///
/// # Panics
/// Panics if `name` is not a valid identifier; see [`try_by_name`].
pub fn by_name(name: &str) -> ClassId {
    base_id(name)
}

/// A class id for `name` under the reflection subpackage.
///
/// # Panics
/// Panics if `name` is not a valid identifier; see [`try_reflect_by_name`].
pub fn reflect_by_name(name: &str) -> ClassId {
    reflect_id(name)
}

pub fn try_by_name(name: &str) -> Result<ClassId, NameError> {
    Ok(ClassId::new(base_package(), Name::try_identifier(name)?))
}

pub fn try_reflect_by_name(name: &str) -> Result<ClassId, NameError> {
    Ok(ClassId::new(reflect_package(), Name::try_identifier(name)?))
}
