//! ANSI color codes for registry listings.
//!
//! - Blue: short class names
//! - Green: packages
//! - Dim: separators, arrows, labels
//! - Reset: back to default

/// ANSI color palette.
///
/// Standard 16-color codes only, so listings read the same on light and
/// dark terminals.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }

    /// Render a class id as `package/Short`, package green and name blue.
    pub fn class_id(&self, id: &crate::ClassId) -> String {
        let package = id.package();
        let relative = id.relative_class_name();
        if package.is_root() {
            return format!("{}{relative}{}", self.blue, self.reset);
        }
        format!(
            "{}{}{}{}/{}{}{relative}{}",
            self.green,
            package.join("/"),
            self.reset,
            self.dim,
            self.reset,
            self.blue,
            self.reset,
        )
    }
}
