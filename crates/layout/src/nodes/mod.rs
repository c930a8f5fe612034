pub mod columns;
pub mod rect;
pub mod spacer;
pub mod table;
pub mod text;

pub use columns::ColumnFrame;
pub use rect::RectBlock;
pub use spacer::Spacer;
pub use table::{TableBlock, TableStyle};
pub use text::TextBlock;
