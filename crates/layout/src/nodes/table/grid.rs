use super::{BorderSide, TableStyle};
use crate::{Placement, Quill};
use blockframe_types::Rect;

/// Row and column boundaries of a measured table, in table coordinates.
///
/// Each row spans `row_tops[i]..row_bottoms[i]` and each column
/// `column_lefts[j]..column_rights[j]`. The gaps between consecutive spans,
/// and between the outermost spans and the table edge, are the borders.
#[derive(Debug, Clone, PartialEq)]
pub struct GridExtents {
    pub row_tops: Vec<f32>,
    pub row_bottoms: Vec<f32>,
    pub column_lefts: Vec<f32>,
    pub column_rights: Vec<f32>,
    pub width: f32,
    pub height: f32,
}

impl GridExtents {
    /// Sizes every row to its tallest padded cell and every column to its
    /// widest, in a single forward scan along each axis.
    pub(crate) fn compute<S: TableStyle + ?Sized>(
        style: &S,
        quill: &Quill,
        rows: usize,
        columns: usize,
        cells: &[Placement],
    ) -> Self {
        let cell = |row: usize, column: usize| &cells[row * columns + column];

        let mut row_tops = Vec::with_capacity(rows);
        let mut row_bottoms = Vec::with_capacity(rows);
        let mut next = 0.0;
        for row in 0..rows {
            next += if row == 0 {
                style.table_border(quill, BorderSide::Top)
            } else {
                style.cell_border(quill, row, BorderSide::Top)
            };
            let height = (0..columns)
                .map(|column| {
                    cell(row, column).height()
                        + style.cell_padding(quill, row, column, BorderSide::Top)
                        + style.cell_padding(quill, row, column, BorderSide::Bottom)
                })
                .fold(0.0, f32::max);
            row_tops.push(next);
            row_bottoms.push(next + height);
            next += height;
        }
        let height = next + style.table_border(quill, BorderSide::Bottom);

        let mut column_lefts = Vec::with_capacity(columns);
        let mut column_rights = Vec::with_capacity(columns);
        let mut next = 0.0;
        for column in 0..columns {
            next += if column == 0 {
                style.table_border(quill, BorderSide::Left)
            } else {
                style.cell_border(quill, column, BorderSide::Left)
            };
            let width = (0..rows)
                .map(|row| {
                    cell(row, column).width()
                        + style.cell_padding(quill, row, column, BorderSide::Left)
                        + style.cell_padding(quill, row, column, BorderSide::Right)
                })
                .fold(0.0, f32::max);
            column_lefts.push(next);
            column_rights.push(next + width);
            next += width;
        }
        let width = next + style.table_border(quill, BorderSide::Right);

        Self {
            row_tops,
            row_bottoms,
            column_lefts,
            column_rights,
            width,
            height,
        }
    }

    pub fn rows(&self) -> usize {
        self.row_tops.len()
    }

    pub fn columns(&self) -> usize {
        self.column_lefts.len()
    }

    /// The padded box of one cell, borders excluded.
    pub fn cell_rect(&self, row: usize, column: usize) -> Rect {
        Rect::from_edges(
            self.column_lefts[column],
            self.row_tops[row],
            self.column_rights[column],
            self.row_bottoms[row],
        )
    }
}
