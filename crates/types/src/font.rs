//! Font descriptions shared by the metrics providers and render targets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A font family. The three standard PDF families are always available;
/// `Custom` names a family a metrics provider has been taught about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    TimesRoman,
    Helvetica,
    Courier,
    Custom(Arc<str>),
}

impl FontFamily {
    pub fn custom(name: impl Into<Arc<str>>) -> Self {
        FontFamily::Custom(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            FontFamily::TimesRoman => "Times-Roman",
            FontFamily::Helvetica => "Helvetica",
            FontFamily::Courier => "Courier",
            FontFamily::Custom(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, FontStyle::Italic | FontStyle::BoldItalic)
    }

    pub fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => FontStyle::Plain,
            (true, false) => FontStyle::Bold,
            (false, true) => FontStyle::Italic,
            (true, true) => FontStyle::BoldItalic,
        }
    }
}

/// Family, style and size: everything text metrics depend on.
///
/// Equality is by value and is what measurement caches key on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: FontFamily,
    pub style: FontStyle,
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: FontFamily::TimesRoman,
            style: FontStyle::Plain,
            size: 10.0,
        }
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {}pt", self.family.name(), self.style, self.size)
    }
}
