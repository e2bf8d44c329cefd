//! Human- and machine-readable views of the registry.

use std::fmt::Write as _;

use classid_core::{ClassId, Colors};
use indexmap::IndexMap;
use serde::Serialize;

use crate::StandardClassIds;

/// Render the registry as a text listing: named constants, then the
/// element -> array table in registry order.
pub fn dump(ids: &StandardClassIds, colors: Colors) -> String {
    let c = colors;
    let mut out = String::new();

    let width = ids
        .constants()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);

    writeln!(out, "{}[constants]{}", c.blue, c.reset).unwrap();
    for (label, id) in ids.constants() {
        writeln!(out, "{label:<width$} {}", c.class_id(id)).unwrap();
    }

    out.push('\n');
    out.push_str(&dump_arrays(ids, colors));
    out
}

/// Render only the element -> array table.
pub fn dump_arrays(ids: &StandardClassIds, colors: Colors) -> String {
    let c = colors;
    let mut out = String::new();

    let width = ids
        .element_to_array()
        .keys()
        .map(|element| element.as_string().len())
        .max()
        .unwrap_or(0);

    writeln!(out, "{}[arrays]{}", c.blue, c.reset).unwrap();
    for (element, array) in ids.element_to_array() {
        let pad = width - element.as_string().len();
        writeln!(
            out,
            "{}{:pad$} {}->{} {}",
            c.class_id(element),
            "",
            c.dim,
            c.reset,
            c.class_id(array)
        )
        .unwrap();
    }
    out
}

/// Serializable snapshot of the registry.
#[derive(Debug, Serialize)]
pub struct RegistryView<'a> {
    pub constants: IndexMap<&'static str, &'a ClassId>,
    pub element_to_array: &'a IndexMap<ClassId, ClassId>,
}

impl<'a> RegistryView<'a> {
    pub fn new(ids: &'a StandardClassIds) -> Self {
        Self {
            constants: ids.constants().collect(),
            element_to_array: ids.element_to_array(),
        }
    }
}
