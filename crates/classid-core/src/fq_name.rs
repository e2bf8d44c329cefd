//! Qualified paths: packages and class nesting chains.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Name, NameError};

/// An ordered sequence of name segments, e.g. `kotlin.reflect`.
///
/// The empty path is the root package. Deriving a child never touches the
/// receiver; paths are plain values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FqName {
    segments: Vec<Name>,
}

impl FqName {
    /// The root (empty) path.
    pub const ROOT: Self = Self {
        segments: Vec::new(),
    };

    pub fn root() -> Self {
        Self::ROOT
    }

    /// Build a path from literal dotted text (`""` is the root).
    ///
    /// # Panics
    /// Panics on an empty or malformed segment; see [`FqName::parse`].
    pub fn new(dotted: &str) -> Self {
        Self::ensure_parsed(dotted)
    }

    /// Parse dotted text, validating every segment.
    pub fn parse(dotted: &str) -> Result<Self, NameError> {
        if dotted.is_empty() {
            return Ok(Self::ROOT);
        }
        dotted
            .split('.')
            .map(Name::try_identifier)
            .collect::<Result<Vec<_>, _>>()
            .map(|segments| Self { segments })
    }

    pub fn from_segments(segments: impl IntoIterator<Item = Name>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// A new path with `name` appended.
    pub fn child(&self, name: Name) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(name);
        Self { segments }
    }

    /// The enclosing path, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.segments.split_last()?;
        Some(Self {
            segments: init.to_vec(),
        })
    }

    /// Rightmost segment, or `None` for the root.
    pub fn short_name(&self) -> Option<&Name> {
        self.segments.last()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[Name] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Whether `prefix` is a leading run of whole segments of this path.
    pub fn starts_with(&self, prefix: &FqName) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Segments joined with an arbitrary separator.
    pub(crate) fn join(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(segment.as_str());
        }
        out
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("."))
    }
}

impl Serialize for FqName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FqName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
