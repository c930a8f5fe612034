pub mod color;
pub mod font;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use font::{FontFamily, FontSpec, FontStyle};
pub use geometry::{Margins, Offset, PageGeometry, Rect, Size};
pub use ids::BlockId;
