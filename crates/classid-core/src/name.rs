//! Identifier segments.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Characters that separate segments in the textual forms of paths and class ids.
pub(crate) const SEPARATORS: [char; 2] = ['.', '/'];

/// A single non-empty identifier segment.
///
/// Cloning is cheap (shared buffer). Equality, ordering and hashing are
/// by text, never by allocation.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Arc<str>);

/// Rejected identifier text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("identifier cannot be empty")]
    Empty,
    #[error("identifier `{text}` contains separator `{separator}`")]
    Separator { text: String, separator: char },
}

impl Name {
    /// Build a name from literal text.
    ///
    /// # Panics
    /// Panics if `text` is empty or contains `.` or `/`. Use
    /// [`Name::try_identifier`] for text that is not a compile-time literal.
    pub fn identifier(text: &str) -> Self {
        Self::ensure_identifier(text)
    }

    pub fn try_identifier(text: &str) -> Result<Self, NameError> {
        if text.is_empty() {
            return Err(NameError::Empty);
        }
        if let Some(separator) = text.chars().find(|c| SEPARATORS.contains(c)) {
            return Err(NameError::Separator {
                text: text.to_owned(),
                separator,
            });
        }
        Ok(Self(Arc::from(text)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", self.as_str())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::try_identifier(&text).map_err(serde::de::Error::custom)
    }
}
