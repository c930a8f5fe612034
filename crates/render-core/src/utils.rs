use blockframe_types::{FontFamily, FontSpec, FontStyle};

/// Name of the standard Type1 font closest to `font`. Custom families fall
/// back to Helvetica; backends report the substitution themselves.
pub fn standard_font_name(font: &FontSpec) -> &'static str {
    match (&font.family, font.style) {
        (FontFamily::TimesRoman, FontStyle::Plain) => "Times-Roman",
        (FontFamily::TimesRoman, FontStyle::Bold) => "Times-Bold",
        (FontFamily::TimesRoman, FontStyle::Italic) => "Times-Italic",
        (FontFamily::TimesRoman, FontStyle::BoldItalic) => "Times-BoldItalic",
        (FontFamily::Courier, FontStyle::Plain) => "Courier",
        (FontFamily::Courier, FontStyle::Bold) => "Courier-Bold",
        (FontFamily::Courier, FontStyle::Italic) => "Courier-Oblique",
        (FontFamily::Courier, FontStyle::BoldItalic) => "Courier-BoldOblique",
        (_, FontStyle::Plain) => "Helvetica",
        (_, FontStyle::Bold) => "Helvetica-Bold",
        (_, FontStyle::Italic) => "Helvetica-Oblique",
        (_, FontStyle::BoldItalic) => "Helvetica-BoldOblique",
    }
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_families_and_styles() {
        let mut font = FontSpec::default();
        assert_eq!(standard_font_name(&font), "Times-Roman");
        font.style = FontStyle::BoldItalic;
        assert_eq!(standard_font_name(&font), "Times-BoldItalic");
        font.family = FontFamily::Courier;
        font.style = FontStyle::Italic;
        assert_eq!(standard_font_name(&font), "Courier-Oblique");
        font.family = FontFamily::custom("Garamond");
        font.style = FontStyle::Bold;
        assert_eq!(standard_font_name(&font), "Helvetica-Bold");
    }

    #[test]
    fn flips_against_page_height() {
        assert_eq!(flip_y(0.0, 792.0), 792.0);
        assert_eq!(flip_y(792.0, 792.0), 0.0);
    }
}
