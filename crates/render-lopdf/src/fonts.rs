use blockframe_render_core::utils::standard_font_name;
use blockframe_types::FontSpec;
use lopdf::{Dictionary, Document, Object, dictionary};

/// Every base font the sink can set text in. Resource names follow the order,
/// `F1` for the first entry.
pub(crate) const STANDARD_FONTS: [&str; 12] = [
    "Times-Roman",
    "Times-Bold",
    "Times-Italic",
    "Times-BoldItalic",
    "Helvetica",
    "Helvetica-Bold",
    "Helvetica-Oblique",
    "Helvetica-BoldOblique",
    "Courier",
    "Courier-Bold",
    "Courier-Oblique",
    "Courier-BoldOblique",
];

/// Resource name of the font dictionary text in `font` is set with.
pub(crate) fn resource_name(font: &FontSpec) -> Vec<u8> {
    let base = standard_font_name(font);
    let index = STANDARD_FONTS
        .iter()
        .position(|name| *name == base)
        .unwrap_or(0);
    format!("F{}", index + 1).into_bytes()
}

/// Adds one font dictionary per standard font and returns the `/Font`
/// resource dictionary referring to them.
pub(crate) fn register_fonts(document: &mut Document) -> Dictionary {
    let mut fonts = Dictionary::new();
    for (index, base) in STANDARD_FONTS.iter().enumerate() {
        let font_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => *base,
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(format!("F{}", index + 1).into_bytes(), Object::Reference(font_id));
    }
    fonts
}

/// Latin-1 bytes for a string literal, `?` for anything outside it.
pub(crate) fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) <= 255 { c as u8 } else { b'?' })
        .collect()
}
