//! Decomposition of a table's borders into rectangles.
//!
//! Every border is cut into pieces that each touch at most one cell edge:
//! outer edge pieces, the rules between adjacent cells, and the small
//! interstices where rules and edges cross. Together with the cell boxes the
//! pieces tile the table exactly, so a style can drop any subset of them
//! without leaving stray fragments behind.

use super::GridExtents;
use blockframe_types::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSide {
    Left,
    Top,
    Right,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderKind {
    /// Piece of the outer border beside one row (`Left`/`Right`) or one
    /// column (`Top`/`Bottom`).
    Edge { side: BorderSide, index: usize },
    /// Rule above `row` (at least 1), spanning `column`.
    RowRule { row: usize, column: usize },
    /// Rule left of `column` (at least 1), spanning `row`.
    ColumnRule { row: usize, column: usize },
    /// Crossing above-left of cell (`row`, `column`). Either index may equal
    /// the row/column count, for the far edges; `(0, 0)` is a table corner.
    Interstice { row: usize, column: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderSegment {
    pub kind: BorderKind,
    pub rect: Rect,
}

impl GridExtents {
    /// Every border piece of the table, in table coordinates.
    pub fn border_segments(&self) -> Vec<BorderSegment> {
        let rows = self.rows();
        let columns = self.columns();
        if rows == 0 || columns == 0 {
            return Vec::new();
        }
        let last_row = rows - 1;
        let last_column = columns - 1;
        let mut segments = Vec::new();
        let mut push = |kind, rect| segments.push(BorderSegment { kind, rect });

        for row in 0..rows {
            push(
                BorderKind::Edge {
                    side: BorderSide::Left,
                    index: row,
                },
                Rect::from_edges(
                    0.0,
                    self.row_tops[row],
                    self.column_lefts[0],
                    self.row_bottoms[row],
                ),
            );
            push(
                BorderKind::Edge {
                    side: BorderSide::Right,
                    index: row,
                },
                Rect::from_edges(
                    self.column_rights[last_column],
                    self.row_tops[row],
                    self.width,
                    self.row_bottoms[row],
                ),
            );
        }
        for column in 0..columns {
            push(
                BorderKind::Edge {
                    side: BorderSide::Top,
                    index: column,
                },
                Rect::from_edges(
                    self.column_lefts[column],
                    0.0,
                    self.column_rights[column],
                    self.row_tops[0],
                ),
            );
            push(
                BorderKind::Edge {
                    side: BorderSide::Bottom,
                    index: column,
                },
                Rect::from_edges(
                    self.column_lefts[column],
                    self.row_bottoms[last_row],
                    self.column_rights[column],
                    self.height,
                ),
            );
        }

        for row in 1..rows {
            for column in 0..columns {
                push(
                    BorderKind::RowRule { row, column },
                    Rect::from_edges(
                        self.column_lefts[column],
                        self.row_bottoms[row - 1],
                        self.column_rights[column],
                        self.row_tops[row],
                    ),
                );
            }
        }
        for row in 0..rows {
            for column in 1..columns {
                push(
                    BorderKind::ColumnRule { row, column },
                    Rect::from_edges(
                        self.column_rights[column - 1],
                        self.row_tops[row],
                        self.column_lefts[column],
                        self.row_bottoms[row],
                    ),
                );
            }
        }

        for row in 0..=rows {
            for column in 0..=columns {
                let left = if column > 0 {
                    self.column_rights[column - 1]
                } else {
                    0.0
                };
                let top = if row > 0 { self.row_bottoms[row - 1] } else { 0.0 };
                let right = if column < columns {
                    self.column_lefts[column]
                } else {
                    self.width
                };
                let bottom = if row < rows {
                    self.row_tops[row]
                } else {
                    self.height
                };
                push(
                    BorderKind::Interstice { row, column },
                    Rect::from_edges(left, top, right, bottom),
                );
            }
        }

        segments
    }
}
