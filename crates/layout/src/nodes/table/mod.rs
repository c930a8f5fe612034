//! Grid layout for a fixed matrix of cells.

mod borders;
mod grid;

#[cfg(test)]
mod table_test;

pub use borders::{BorderKind, BorderSegment, BorderSide};
pub use grid::GridExtents;

use crate::block::Overrides;
use crate::{Alignment, Block, Justification, Layout, LayoutEnv, LayoutError, Placement, Quill};
use blockframe_traits::RenderTarget;
use blockframe_types::{BlockId, Color, Offset};

/// Per-table decisions about alignment, borders and padding. Every method has
/// a default, so a style only overrides what it changes.
pub trait TableStyle {
    fn justification(&self, _row: usize, _column: usize) -> Justification {
        Justification::Centre
    }

    fn alignment(&self, _row: usize, _column: usize) -> Alignment {
        Alignment::Centre
    }

    /// Width of the outer border on `side`.
    fn table_border(&self, quill: &Quill, _side: BorderSide) -> f32 {
        (quill.font.size / 32.0).max(0.5)
    }

    /// Width of the rule before row `index` (`side == Top`) or before column
    /// `index` (`side == Left`).
    fn cell_border(&self, quill: &Quill, _index: usize, side: BorderSide) -> f32 {
        self.table_border(quill, side)
    }

    fn cell_padding(&self, quill: &Quill, _row: usize, _column: usize, _side: BorderSide) -> f32 {
        quill.font.size / 2.0
    }

    /// Constraints for one cell, derived from the previous cell's in raster
    /// order. The first cell receives the table's own constraints.
    ///
    /// A table is laid out whole, so every cell must come back complete. The
    /// default lifts the height limit and disallows splitting; a style that
    /// narrows this and leaves a cell unfinished makes the table fail.
    fn cell_layout(&self, previous: &Layout, _table: &Layout, _row: usize, _column: usize) -> Layout {
        previous
            .with_max_height(f32::INFINITY)
            .with_height_tight(true)
            .with_splitting(false)
    }

    /// Whether a border piece is drawn.
    fn keep_border(&self, _kind: &BorderKind) -> bool {
        true
    }

    /// `None` draws borders in the target's default colour.
    fn border_color(&self) -> Option<Color> {
        None
    }
}

/// Fully ruled table with centred cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTable;

impl TableStyle for PlainTable {}

pub struct TableBlock<S: TableStyle = PlainTable> {
    id: BlockId,
    rows: usize,
    columns: usize,
    cells: Vec<Box<dyn Block>>,
    style: S,
    overrides: Overrides,
}

impl TableBlock<PlainTable> {
    /// A table from rows of cells. Fails on an empty or ragged matrix.
    pub fn new(rows: Vec<Vec<Box<dyn Block>>>) -> Result<Self, LayoutError> {
        let row_count = rows.len();
        let columns = rows.first().map_or(0, Vec::len);
        if row_count == 0 || columns == 0 {
            return Err(LayoutError::contract("a table needs at least one row and one column"));
        }
        if let Some(ragged) = rows.iter().position(|row| row.len() != columns) {
            return Err(LayoutError::contract(format!(
                "table row {} has {} cells, expected {}",
                ragged,
                rows[ragged].len(),
                columns
            )));
        }
        Ok(Self {
            id: BlockId::next(),
            rows: row_count,
            columns,
            cells: rows.into_iter().flatten().collect(),
            style: PlainTable,
            overrides: Overrides::default(),
        })
    }

    /// A `rows` x `columns` table whose cells come from `cell(row, column)`.
    pub fn from_fn(
        rows: usize,
        columns: usize,
        mut cell: impl FnMut(usize, usize) -> Box<dyn Block>,
    ) -> Result<Self, LayoutError> {
        Self::new(
            (0..rows)
                .map(|row| (0..columns).map(|column| cell(row, column)).collect())
                .collect(),
        )
    }
}

impl<S: TableStyle> TableBlock<S> {
    pub fn with_style<T: TableStyle>(self, style: T) -> TableBlock<T> {
        TableBlock {
            id: self.id,
            rows: self.rows,
            columns: self.columns,
            cells: self.cells,
            style,
            overrides: self.overrides,
        }
    }

    pub fn with_quill(mut self, f: impl Fn(&Quill) -> Quill + 'static) -> Self {
        self.overrides.set_quill(f);
        self
    }

    /// Adjusts the constraints the table, and through
    /// [`TableStyle::cell_layout`] its cells, receive.
    pub fn with_layout(mut self, f: impl Fn(&Layout) -> Layout + 'static) -> Self {
        self.overrides.set_layout(f);
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    fn extents(placement: &Placement) -> Option<&GridExtents> {
        match placement.content() {
            crate::PlacedContent::Grid { extents, .. } => Some(extents),
            _ => None,
        }
    }
}

impl<S: TableStyle> Block for TableBlock<S> {
    fn id(&self) -> BlockId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "Table"
    }

    fn measure(
        &mut self,
        env: &LayoutEnv<'_>,
        quill: &Quill,
        layout: &Layout,
    ) -> Result<Placement, LayoutError> {
        let quill = self.overrides.quill(quill);
        let layout = self.overrides.layout(layout);

        let mut placements = Vec::with_capacity(self.cells.len());
        let mut cell_layout = layout;
        for row in 0..self.rows {
            for column in 0..self.columns {
                cell_layout = self.style.cell_layout(&cell_layout, &layout, row, column);
                let index = row * self.columns + column;
                let cell = &mut self.cells[index];
                let placement = cell.measure(env, &quill, &cell_layout)?.with_slot(index);
                if !cell.is_fill_complete() {
                    return Err(LayoutError::contract(format!(
                        "{} cell ({}, {}) left content unplaced, tables cannot split",
                        self.id, row, column
                    )));
                }
                placements.push(placement);
            }
        }

        let extents =
            GridExtents::compute(&self.style, &quill, self.rows, self.columns, &placements);

        for (index, placement) in placements.iter_mut().enumerate() {
            let (row, column) = (index / self.columns, index % self.columns);
            let left = extents.column_lefts[column]
                + self.style.cell_padding(&quill, row, column, BorderSide::Left);
            let right = extents.column_rights[column]
                - self.style.cell_padding(&quill, row, column, BorderSide::Right);
            let top = extents.row_tops[row]
                + self.style.cell_padding(&quill, row, column, BorderSide::Top);
            let bottom = extents.row_bottoms[row]
                - self.style.cell_padding(&quill, row, column, BorderSide::Bottom);

            let x = left
                + self
                    .style
                    .justification(row, column)
                    .centring_offset(right - left - placement.width());
            let y = top
                + self.style.alignment(row, column).drop_factor()
                    * (bottom - top - placement.height());
            placement.set_offset(Offset::new(x, y));
        }

        log::debug!(
            "{} measured {} x {} cells into {:.2} x {:.2}",
            self.log_name(),
            self.rows,
            self.columns,
            extents.width,
            extents.height
        );
        Ok(Placement::grid(self.id, placements, extents))
    }

    fn revert_to_start(&mut self, placement: &Placement) {
        for cell in placement.children().iter().rev() {
            if let Some(block) = cell.slot().and_then(|slot| self.cells.get_mut(slot)) {
                block.revert_to_start(cell);
            }
        }
    }

    fn render(
        &self,
        placement: &Placement,
        origin: Offset,
        target: &mut dyn RenderTarget,
    ) -> Result<(), LayoutError> {
        for cell in placement.children() {
            let block = cell
                .slot()
                .and_then(|slot| self.cells.get(slot))
                .ok_or_else(|| {
                    LayoutError::contract(format!("{} has no cell for placement", self.log_name()))
                })?;
            block.render(cell, origin + cell.position()?, target)?;
        }

        let Some(extents) = Self::extents(placement) else {
            return Err(LayoutError::contract(format!(
                "{} asked to render a placement without grid extents",
                self.log_name()
            )));
        };
        let previous = target.set_color(self.style.border_color());
        let mut drawn = Ok(());
        for segment in extents.border_segments() {
            if !self.style.keep_border(&segment.kind)
                || segment.rect.width <= 0.0
                || segment.rect.height <= 0.0
            {
                continue;
            }
            drawn = target.fill_rect(segment.rect.translate(origin));
            if drawn.is_err() {
                break;
            }
        }
        target.restore_color(previous);
        Ok(drawn?)
    }
}
