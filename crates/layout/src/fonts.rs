//! Text metrics providers.
//!
//! - [`FixedMetrics`]: every character has the same advance. Deterministic,
//!   used by tests and benchmarks.
//! - [`ApproximateMetrics`]: per-family estimates for the three standard PDF
//!   fonts, good enough to lay out text that will be set in those fonts.
//! - [`TrueTypeMetrics`]: real advances read from TrueType/OpenType data with
//!   `ttf-parser`, falling back to [`ApproximateMetrics`] for families it has
//!   not been given.

use blockframe_traits::{MetricsError, TextMetrics};
use blockframe_types::{FontFamily, FontSpec, FontStyle};
use std::collections::HashMap;

/// Monospaced metrics expressed as fractions of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    pub advance: f32,
    pub line_height: f32,
}

impl FixedMetrics {
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new(0.5, 1.2)
    }
}

impl TextMetrics for FixedMetrics {
    fn text_width(&self, font: &FontSpec, text: &str) -> Result<f32, MetricsError> {
        Ok(text.chars().count() as f32 * self.advance * font.size)
    }

    fn line_height(&self, font: &FontSpec) -> Result<f32, MetricsError> {
        Ok(self.line_height * font.size)
    }
}

/// Width estimates for Times, Helvetica and Courier.
///
/// Line height is the height of each font's bounding box.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateMetrics;

impl ApproximateMetrics {
    fn char_width(family: &FontFamily, style: FontStyle, c: char) -> Option<f32> {
        let bold = if style.is_bold() { 1.07 } else { 1.0 };
        let width = match family {
            FontFamily::Courier => return Some(0.6),
            FontFamily::TimesRoman | FontFamily::Helvetica => match c {
                ' ' => 0.25,
                'i' | 'j' | 'l' | '.' | ',' | ';' | ':' | '!' | '\'' | '|' => 0.26,
                'f' | 't' | 'r' | 'I' | '(' | ')' | '-' => 0.34,
                'm' | 'M' | 'w' | 'W' => 0.83,
                c if c.is_uppercase() => 0.68,
                c if c.is_ascii_digit() => 0.5,
                _ if matches!(family, FontFamily::Helvetica) => 0.54,
                _ => 0.47,
            },
            FontFamily::Custom(_) => return None,
        };
        Some(width * bold)
    }

    fn bbox_height(family: &FontFamily) -> Option<f32> {
        match family {
            FontFamily::TimesRoman => Some(1.116),
            FontFamily::Helvetica => Some(1.156),
            FontFamily::Courier => Some(1.055),
            FontFamily::Custom(_) => None,
        }
    }
}

impl TextMetrics for ApproximateMetrics {
    fn text_width(&self, font: &FontSpec, text: &str) -> Result<f32, MetricsError> {
        let mut ems = 0.0;
        for c in text.chars() {
            ems += Self::char_width(&font.family, font.style, c)
                .ok_or_else(|| MetricsError::UnknownFamily(font.family.name().to_string()))?;
        }
        Ok(ems * font.size)
    }

    fn line_height(&self, font: &FontSpec) -> Result<f32, MetricsError> {
        Self::bbox_height(&font.family)
            .map(|height| height * font.size)
            .ok_or_else(|| MetricsError::UnknownFamily(font.family.name().to_string()))
    }
}

/// Advances and vertical metrics extracted from one face.
#[derive(Debug, Clone)]
struct FaceMetrics {
    units_per_em: f32,
    line_units: i32,
    advances: HashMap<char, u16>,
    notdef_advance: u16,
}

impl FaceMetrics {
    fn parse(family: &FontFamily, data: &[u8]) -> Result<Self, MetricsError> {
        let face = ttf_parser::Face::parse(data, 0)
            .map_err(|e| MetricsError::InvalidFont(format!("{}: {}", family.name(), e)))?;

        let mut advances = HashMap::new();
        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables.into_iter().filter(|s| s.is_unicode()) {
                subtable.codepoints(|codepoint| {
                    let Some(c) = char::from_u32(codepoint) else { return };
                    if let Some(advance) = subtable
                        .glyph_index(codepoint)
                        .and_then(|glyph| face.glyph_hor_advance(glyph))
                    {
                        advances.entry(c).or_insert(advance);
                    }
                });
            }
        }

        Ok(Self {
            units_per_em: face.units_per_em() as f32,
            line_units: face.ascender() as i32 - face.descender() as i32
                + face.line_gap() as i32,
            advances,
            notdef_advance: face.glyph_hor_advance(ttf_parser::GlyphId(0)).unwrap_or(0),
        })
    }
}

/// Metrics read from font files.
///
/// Registered families are measured with their real advances. The PDF
/// backend has no font embedding and sets such families in Helvetica, so
/// this provider suits render targets that can draw the registered face.
#[derive(Debug, Default)]
pub struct TrueTypeMetrics {
    faces: HashMap<(FontFamily, FontStyle), FaceMetrics>,
    fallback: ApproximateMetrics,
}

impl TrueTypeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers face data for a family and style. The face is parsed once
    /// here, so bad fonts are reported up front.
    pub fn register(
        &mut self,
        family: FontFamily,
        style: FontStyle,
        data: Vec<u8>,
    ) -> Result<(), MetricsError> {
        let metrics = FaceMetrics::parse(&family, &data)?;
        log::debug!(
            "Registered {} {:?} with {} mapped characters",
            family.name(),
            style,
            metrics.advances.len()
        );
        self.faces.insert((family, style), metrics);
        Ok(())
    }

    /// Metrics for the font, falling back to the plain style of the family.
    fn face(&self, font: &FontSpec) -> Option<&FaceMetrics> {
        self.faces
            .get(&(font.family.clone(), font.style))
            .or_else(|| self.faces.get(&(font.family.clone(), FontStyle::Plain)))
    }
}

impl TextMetrics for TrueTypeMetrics {
    fn text_width(&self, font: &FontSpec, text: &str) -> Result<f32, MetricsError> {
        let Some(face) = self.face(font) else {
            return self.fallback.text_width(font, text);
        };
        let units: u32 = text
            .chars()
            .map(|c| *face.advances.get(&c).unwrap_or(&face.notdef_advance) as u32)
            .sum();
        Ok(units as f32 / face.units_per_em * font.size)
    }

    fn line_height(&self, font: &FontSpec) -> Result<f32, MetricsError> {
        let Some(face) = self.face(font) else {
            return self.fallback.line_height(font);
        };
        if face.line_units <= 0 {
            return Err(MetricsError::MissingMetrics(font.family.name().to_string()));
        }
        Ok(face.line_units as f32 / face.units_per_em * font.size)
    }
}
