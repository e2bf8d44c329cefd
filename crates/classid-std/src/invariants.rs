//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use classid_core::ClassId;
use indexmap::IndexMap;

use crate::StandardClassIds;

impl StandardClassIds {
    pub(crate) fn duplicate_element(element: &ClassId, previous: &ClassId) -> ! {
        panic!(
            "StandardClassIds: element {element} registered twice \
             (previous array {previous})"
        )
    }

    pub(crate) fn ensure_inverse(
        element_to_array: &IndexMap<ClassId, ClassId>,
        array_to_element: &IndexMap<ClassId, ClassId>,
    ) {
        if element_to_array.len() != array_to_element.len() {
            panic!(
                "StandardClassIds: {} elements map to only {} distinct arrays \
                 (array names must not collide)",
                element_to_array.len(),
                array_to_element.len()
            );
        }
    }
}
