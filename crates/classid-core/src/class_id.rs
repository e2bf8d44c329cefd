//! Class identities: `(package, relative class name)` pairs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{FqName, Name, NameError};

/// Globally unique identity of a class.
///
/// A top-level class has an empty outer chain; a nested class such as
/// `kotlin.collections.Map.Entry` keeps `Map` as its outer chain and
/// `Entry` as its short name. Equality and hashing are structural over
/// all components.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId {
    package: FqName,
    outer: FqName,
    short: Name,
}

/// Rejected textual class id (`package/path/Outer.Inner`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassIdParseError {
    #[error("class id `{0}` has no class name")]
    MissingClassName(String),
    #[error("invalid segment in class id `{text}`: {source}")]
    InvalidSegment {
        text: String,
        #[source]
        source: NameError,
    },
}

impl ClassId {
    /// A top-level class `short` in `package`.
    pub fn new(package: FqName, short: Name) -> Self {
        Self {
            package,
            outer: FqName::ROOT,
            short,
        }
    }

    /// The class `name` nested directly inside this one.
    pub fn create_nested(&self, name: Name) -> Self {
        Self {
            package: self.package.clone(),
            outer: self.outer.child(self.short.clone()),
            short: name,
        }
    }

    /// The directly enclosing class, or `None` for a top-level class.
    pub fn outer_class_id(&self) -> Option<Self> {
        let short = self.outer.short_name()?.clone();
        let outer = self.outer.parent()?;
        Some(Self {
            package: self.package.clone(),
            outer,
            short,
        })
    }

    #[inline]
    pub fn package(&self) -> &FqName {
        &self.package
    }

    #[inline]
    pub fn short_class_name(&self) -> &Name {
        &self.short
    }

    /// Class path inside the package, e.g. `Map.Entry`.
    pub fn relative_class_name(&self) -> FqName {
        self.outer.child(self.short.clone())
    }

    #[inline]
    pub fn is_nested(&self) -> bool {
        !self.outer.is_root()
    }

    /// Package and relative name flattened into one dotted path.
    pub fn as_fq_name(&self) -> FqName {
        FqName::from_segments(
            self.package
                .segments()
                .iter()
                .chain(self.outer.segments())
                .chain(std::iter::once(&self.short))
                .cloned(),
        )
    }

    /// Textual form: package segments joined by `/`, then the relative
    /// name joined by `.` (`kotlin/reflect/KProperty`, `Foo` in the root).
    pub fn as_string(&self) -> String {
        let relative = self.relative_class_name().join(".");
        if self.package.is_root() {
            return relative;
        }
        format!("{}/{}", self.package.join("/"), relative)
    }

    /// Parse the textual form produced by [`ClassId::as_string`].
    pub fn from_string(text: &str) -> Result<Self, ClassIdParseError> {
        let (package, relative) = match text.rsplit_once('/') {
            Some((package, relative)) => (package, relative),
            None => ("", text),
        };
        if relative.is_empty() {
            return Err(ClassIdParseError::MissingClassName(text.to_owned()));
        }

        let invalid = |source| ClassIdParseError::InvalidSegment {
            text: text.to_owned(),
            source,
        };

        let package = if package.is_empty() {
            FqName::ROOT
        } else {
            FqName::from_segments(
                package
                    .split('/')
                    .map(Name::try_identifier)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(invalid)?,
            )
        };

        let relative = FqName::parse(relative).map_err(invalid)?;
        let Some(short) = relative.short_name().cloned() else {
            return Err(ClassIdParseError::MissingClassName(text.to_owned()));
        };
        let outer = relative.parent().unwrap_or_default();

        Ok(Self {
            package,
            outer,
            short,
        })
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl FromStr for ClassId {
    type Err = ClassIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl Serialize for ClassId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClassId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_string(&text).map_err(serde::de::Error::custom)
    }
}
