//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{FqName, Name};

impl Name {
    pub(crate) fn ensure_identifier(text: &str) -> Self {
        Self::try_identifier(text).unwrap_or_else(|err| {
            panic!(
                "Name: invalid identifier {text:?}: {err} \
                 (non-literal input must go through Name::try_identifier)"
            )
        })
    }
}

impl FqName {
    pub(crate) fn ensure_parsed(dotted: &str) -> Self {
        Self::parse(dotted).unwrap_or_else(|err| {
            panic!(
                "FqName: invalid path {dotted:?}: {err} \
                 (non-literal input must go through FqName::parse)"
            )
        })
    }
}
