use super::*;
use crate::test_utils::{assert_close, boxed, env, fixed, measure_root};
use crate::{Frame, LayoutConfig, PageDriver, Pipe, Rect, StandardPages, TextBlock};
use blockframe_render_core::{DrawOp, RecordingCanvas, RecordingSink};
use blockframe_types::PageGeometry;

fn grid(widths: [[f32; 2]; 2]) -> TableBlock {
    TableBlock::from_fn(2, 2, |row, column| boxed(fixed(widths[row][column], 10.0))).unwrap()
}

fn extents_of(placement: &Placement) -> &GridExtents {
    match placement.content() {
        crate::PlacedContent::Grid { extents, .. } => extents,
        other => panic!("expected grid content, got {other:?}"),
    }
}

fn overlap(a: &Rect, b: &Rect) -> f64 {
    let width = (a.right().min(b.right()) - a.x.max(b.x)).max(0.0) as f64;
    let height = (a.bottom().min(b.bottom()) - a.y.max(b.y)).max(0.0) as f64;
    width * height
}

fn area(rect: &Rect) -> f64 {
    rect.width as f64 * rect.height as f64
}

#[test]
fn widest_cell_sets_its_column() {
    let mut table = grid([[10.0, 10.0], [50.0, 10.0]]);
    let placement = measure_root(&mut table, &Layout::new(500.0, 500.0)).unwrap();
    let extents = extents_of(&placement);

    // Padding is half the font size on each side.
    let first = extents.column_rights[0] - extents.column_lefts[0];
    let second = extents.column_rights[1] - extents.column_lefts[1];
    assert!(first >= 60.0 - 0.01);
    assert_close(second, 20.0);
    assert_close(placement.width(), 0.5 + 60.0 + 0.5 + 20.0 + 0.5);
    assert_close(placement.height(), 0.5 + 20.0 + 0.5 + 20.0 + 0.5);
}

#[test]
fn narrow_cells_are_centred_in_wide_columns() {
    let mut table = grid([[10.0, 10.0], [50.0, 10.0]]);
    let placement = measure_root(&mut table, &Layout::new(500.0, 500.0)).unwrap();

    let first = placement.children()[0].offset().unwrap();
    assert_close(first.x, 0.5 + 5.0 + 20.0);
    assert_close(first.y, 0.5 + 5.0);
    let wide = placement.children()[2].offset().unwrap();
    assert_close(wide.x, 0.5 + 5.0);
}

#[test]
fn extents_increase_along_both_axes() {
    let mut table = TableBlock::from_fn(3, 4, |row, column| {
        boxed(fixed((row * 7 + column * 3) as f32, (column * 5 + row) as f32))
    })
    .unwrap();
    let placement = measure_root(&mut table, &Layout::new(500.0, 500.0)).unwrap();
    let extents = extents_of(&placement);

    for row in 0..extents.rows() {
        assert!(extents.row_tops[row] <= extents.row_bottoms[row]);
        if row > 0 {
            assert!(extents.row_bottoms[row - 1] <= extents.row_tops[row]);
        }
    }
    for column in 0..extents.columns() {
        assert!(extents.column_lefts[column] <= extents.column_rights[column]);
        if column > 0 {
            assert!(extents.column_rights[column - 1] <= extents.column_lefts[column]);
        }
    }
    assert!(extents.column_rights[3] <= extents.width);
    assert!(extents.row_bottoms[2] <= extents.height);
}

#[test]
fn borders_and_cells_tile_the_table() {
    let mut table = TableBlock::from_fn(3, 2, |row, column| {
        boxed(fixed(5.0 + (row * column) as f32 * 11.0, 3.0 + row as f32 * 4.0))
    })
    .unwrap()
    .with_quill(|q| q.with_size(40.0));
    let placement = measure_root(&mut table, &Layout::new(500.0, 500.0)).unwrap();
    let extents = extents_of(&placement);

    let mut pieces: Vec<Rect> = extents
        .border_segments()
        .iter()
        .map(|segment| segment.rect)
        .collect();
    for row in 0..3 {
        for column in 0..2 {
            pieces.push(extents.cell_rect(row, column));
        }
    }

    let covered: f64 = pieces.iter().map(area).sum();
    let total = extents.width as f64 * extents.height as f64;
    assert!((covered - total).abs() < 0.01, "{covered} != {total}");
    for (index, a) in pieces.iter().enumerate() {
        for b in &pieces[index + 1..] {
            assert!(overlap(a, b) < 1e-6, "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn segment_counts_match_the_grid() {
    let mut table = grid([[10.0, 10.0], [10.0, 10.0]]);
    let placement = measure_root(&mut table, &Layout::new(500.0, 500.0)).unwrap();
    let segments = extents_of(&placement).border_segments();

    let count = |f: fn(&BorderKind) -> bool| segments.iter().filter(|s| f(&s.kind)).count();
    assert_eq!(count(|k| matches!(k, BorderKind::Edge { .. })), 8);
    assert_eq!(count(|k| matches!(k, BorderKind::RowRule { .. })), 2);
    assert_eq!(count(|k| matches!(k, BorderKind::ColumnRule { .. })), 2);
    assert_eq!(count(|k| matches!(k, BorderKind::Interstice { .. })), 9);
}

#[test]
fn rendering_fills_every_border_piece() {
    let mut table = grid([[10.0, 10.0], [10.0, 10.0]]);
    let placement = measure_root(&mut table, &Layout::new(500.0, 500.0)).unwrap();

    let mut canvas = RecordingCanvas::new();
    table
        .render(&placement, Offset::new(100.0, 200.0), &mut canvas)
        .unwrap();

    let rects: Vec<Rect> = canvas
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect { rect, .. } => Some(*rect),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 21);
    assert!(rects.iter().all(|r| r.x >= 100.0 && r.y >= 200.0));
}

struct OutlineOnly;

impl TableStyle for OutlineOnly {
    fn justification(&self, _row: usize, _column: usize) -> Justification {
        Justification::Left
    }

    fn cell_padding(&self, _quill: &Quill, _row: usize, _column: usize, _side: BorderSide) -> f32 {
        0.0
    }

    fn keep_border(&self, kind: &BorderKind) -> bool {
        matches!(kind, BorderKind::Edge { .. } | BorderKind::Interstice { .. })
            && !matches!(kind, BorderKind::Interstice { row: 1, column: 1 })
    }

    fn border_color(&self) -> Option<Color> {
        Some(Color::RED)
    }
}

#[test]
fn style_decides_which_borders_are_drawn() {
    let mut table = grid([[10.0, 30.0], [10.0, 10.0]]).with_style(OutlineOnly);
    let placement = measure_root(&mut table, &Layout::new(500.0, 500.0)).unwrap();

    let narrow = placement.children()[3].offset().unwrap();
    assert_close(narrow.x, extents_of(&placement).column_lefts[1]);

    let mut canvas = RecordingCanvas::new();
    table.render(&placement, Offset::zero(), &mut canvas).unwrap();

    let colors: Vec<Color> = canvas
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(colors.len(), 8 + 8);
    assert!(colors.iter().all(|c| *c == Color::RED));
}

#[test]
fn empty_or_ragged_tables_are_rejected() {
    assert!(matches!(
        TableBlock::new(Vec::new()),
        Err(LayoutError::ContractViolation(_))
    ));
    assert!(TableBlock::new(vec![Vec::new()]).is_err());
    let ragged = vec![
        vec![boxed(fixed(1.0, 1.0)), boxed(fixed(1.0, 1.0))],
        vec![boxed(fixed(1.0, 1.0))],
    ];
    assert!(matches!(
        TableBlock::new(ragged),
        Err(LayoutError::ContractViolation(_))
    ));
}

#[test]
fn reverting_a_table_reverts_its_cells() {
    let mut cell = Frame::stack();
    cell.write(fixed(10.0, 10.0));
    cell.write(fixed(10.0, 4.0));
    let mut table = TableBlock::new(vec![vec![boxed(cell)]]).unwrap();
    let layout = Layout::new(500.0, 12.0);

    // The cell ignores the 12 point limit and is measured whole.
    let first = table.measure(&env(), &Quill::default(), &layout).unwrap();
    assert_close(first.height(), 0.5 + 14.0 + 10.0 + 0.5);
    assert!(table.is_fill_complete());

    table.revert_to_start(&first);
    let again = table.measure(&env(), &Quill::default(), &layout).unwrap();
    assert_close(again.height(), first.height());
}

#[test]
fn overflowing_cell_defers_the_whole_table() {
    let mut words = Frame::wrap();
    for _ in 0..400 {
        words.write(TextBlock::new("abc"));
    }
    let mut pipe = Pipe::named("document");
    pipe.write(fixed(100.0, 613.0));
    pipe.write(TableBlock::new(vec![vec![boxed(words)]]).unwrap());

    let mut sink = RecordingSink::new();
    let driver = PageDriver::new(env(), PageGeometry::default(), LayoutConfig::default());
    let pages = driver.run(&mut pipe, &mut StandardPages, &mut sink).unwrap();

    // 107 points are left under the rect, less than the table needs.
    assert_eq!(pages, 2);
    let recorded = sink.into_pages();
    assert!(recorded[0].texts().is_empty());
    assert_eq!(recorded[1].texts().len(), 400);
}

/// Hands every cell the table's own constraints, splitting included.
struct SplittingCells;

impl TableStyle for SplittingCells {
    fn cell_layout(&self, previous: &Layout, _table: &Layout, _row: usize, _column: usize) -> Layout {
        *previous
    }
}

#[test]
fn unfinished_cell_is_a_contract_violation() {
    let mut cell = Frame::stack();
    cell.write(fixed(10.0, 10.0));
    cell.write(fixed(10.0, 4.0));
    let mut table = TableBlock::new(vec![vec![boxed(cell)]])
        .unwrap()
        .with_style(SplittingCells);

    let result = table.measure(&env(), &Quill::default(), &Layout::new(500.0, 12.0));
    assert!(matches!(result, Err(LayoutError::ContractViolation(_))));
}

#[test]
fn table_layout_override_reaches_the_cells() {
    let mut cell = Frame::wrap().with_gap(0.0);
    for _ in 0..4 {
        cell.write(fixed(10.0, 10.0));
    }
    let mut table = TableBlock::new(vec![vec![boxed(cell)]])
        .unwrap()
        .with_layout(|l| l.with_max_width(20.0).with_width_tight(true));

    let placement = measure_root(&mut table, &Layout::new(500.0, 500.0)).unwrap();

    // Two lines of two, plus padding and borders.
    assert_close(placement.width(), 0.5 + 20.0 + 10.0 + 0.5);
    assert_close(placement.height(), 0.5 + 20.0 + 10.0 + 0.5);
}
