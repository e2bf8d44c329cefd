#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core identity model for classid.
//!
//! Three layers, leaves first:
//! - **`Name`**: one validated identifier segment
//! - **`FqName`**: an ordered path of segments (package or nesting path)
//! - **`ClassId`**: package path plus relative class name
//!
//! All values are immutable and compare structurally, so independently
//! built identities are interchangeable as map keys.

mod class_id;
pub mod colors;
mod fq_name;
mod invariants;
mod name;

#[cfg(test)]
mod name_tests;

pub use class_id::{ClassId, ClassIdParseError};
pub use colors::Colors;
pub use fq_name::FqName;
pub use name::{Name, NameError};
