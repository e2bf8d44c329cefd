#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Standard-library class identities.
//!
//! This crate contains:
//! - Naming conventions for derived identities (`naming`)
//! - The process-wide `StandardClassIds` registry with its element/array maps
//! - Rendering helpers for listings (`dump`, `RegistryView`)

pub mod dump;
mod invariants;
pub mod naming;
pub mod registry;

#[cfg(test)]
mod naming_tests;

pub use classid_core::{ClassId, Colors, FqName, Name, NameError};
pub use dump::{RegistryView, dump, dump_arrays};
pub use naming::{
    PrimitiveKind, SignedIntKind, array_base, base_id, base_package, primitive_array_id,
    reflect_id, reflect_package, try_primitive_array_id, try_unsigned_id, unsigned_id,
};
pub use registry::{StandardClassIds, by_name, reflect_by_name, try_by_name, try_reflect_by_name};
