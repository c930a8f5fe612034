use crate::test_utils::{Endless, assert_close, env, fixed};
use crate::{
    Block, ColumnFrame, Frame, Layout, LayoutConfig, LayoutError, Offset, Overlay, PageDriver,
    PageFrame, PageSetup, PageTemplate, Pipe, Quill, StandardPages, TextBlock,
};
use blockframe_render_core::{RecordedPage, RecordingSink};
use blockframe_types::{Color, Margins, PageGeometry};

fn filled(width: f32, height: f32) -> crate::RectBlock {
    fixed(width, height).with_fill(Color::BLUE)
}

fn run<T: PageTemplate>(
    pipe: &mut Pipe,
    template: &mut T,
    config: LayoutConfig,
) -> (Result<usize, LayoutError>, Vec<RecordedPage>) {
    let env = env();
    let mut sink = RecordingSink::new();
    let driver = PageDriver::new(env, PageGeometry::default(), config);
    let result = driver.run(pipe, template, &mut sink);
    (result, sink.into_pages())
}

#[test]
fn content_flows_over_as_many_pages_as_it_needs() {
    // Letter with half-inch margins leaves 720 points: seven blocks a page.
    let mut pipe = Pipe::named("document");
    for _ in 0..100 {
        pipe.write(filled(100.0, 100.0));
    }

    let (result, pages) = run(&mut pipe, &mut StandardPages, LayoutConfig::default());

    assert_eq!(result.unwrap(), 15);
    assert_eq!(pages.len(), 15);
    assert!(pages[..14].iter().all(|page| page.rects().len() == 7));
    assert_eq!(pages[14].rects().len(), 2);
    assert_eq!(pages[0].number, 1);
    assert_eq!(pages[14].number, 15);

    let first = pages[1].rects()[0];
    assert_close(first.x, 36.0);
    assert_close(first.y, 36.0);
    assert!(pipe.is_closed());
}

#[test]
fn empty_document_produces_no_pages() {
    let mut pipe = Pipe::new();
    let (result, pages) = run(&mut pipe, &mut StandardPages, LayoutConfig::default());
    assert_eq!(result.unwrap(), 0);
    assert!(pages.is_empty());
}

#[test]
fn content_that_never_completes_hits_the_page_limit() {
    let mut pipe = Pipe::new();
    pipe.write(Endless::new(100.0, 2000.0));

    let (result, pages) = run(&mut pipe, &mut StandardPages, LayoutConfig::with_max_pages(3));

    assert!(matches!(result, Err(LayoutError::PageLimitExceeded(3))));
    assert_eq!(pages.len(), 3);
}

#[test]
fn writes_after_the_run_starts_are_refused() {
    let mut pipe = Pipe::new();
    pipe.write(filled(10.0, 10.0));
    let (result, _) = run(&mut pipe, &mut StandardPages, LayoutConfig::default());
    assert_eq!(result.unwrap(), 1);
    assert!(!pipe.write(filled(10.0, 10.0)));
}

/// Numbers every page in the bottom margin and narrows every page after the
/// first.
struct Numbered {
    seen: Vec<Option<usize>>,
}

impl PageTemplate for Numbered {
    fn page_geometry(&mut self, base: &PageGeometry, previous: Option<&PageSetup>) -> PageGeometry {
        self.seen.push(previous.map(|setup| setup.number));
        match previous {
            Some(_) => base.with_margins(Margins::all(72.0)),
            None => *base,
        }
    }

    fn page_quill(&mut self, _previous: Option<&PageSetup>) -> Quill {
        Quill::default().with_size(12.0)
    }

    fn page_overlay(&mut self, setup: &PageSetup) -> Option<Overlay> {
        let mut frame = Frame::row();
        frame.write(TextBlock::new(format!("Page {}", setup.number)));
        Some(Overlay {
            frame,
            layout: Layout::new(setup.geometry.content_width(), 20.0),
            origin: Offset::new(
                setup.geometry.margins.left,
                setup.geometry.height - setup.geometry.margins.bottom,
            ),
        })
    }
}

#[test]
fn template_sees_the_previous_page_and_adds_overlays() {
    let mut pipe = Pipe::new();
    for _ in 0..10 {
        pipe.write(filled(100.0, 100.0));
    }
    let mut template = Numbered { seen: Vec::new() };

    let (result, pages) = run(&mut pipe, &mut template, LayoutConfig::default());

    // 720 points on the first page, 648 after.
    assert_eq!(result.unwrap(), 2);
    assert_eq!(template.seen, vec![None, Some(1)]);
    assert_eq!(pages[0].texts(), vec!["Page 1"]);
    assert_eq!(pages[1].texts(), vec!["Page 2"]);
    assert_close(pages[1].rects()[0].x, 72.0);

    let footer = pages[0].text_origin("Page 1").unwrap();
    assert_close(footer.x, 36.0);
    assert_close(footer.y, 792.0 - 36.0);
}

struct TwoColumns;

impl PageTemplate for TwoColumns {
    fn page_frame(&mut self, pipe: Pipe, _previous: Option<&PageSetup>) -> Box<dyn PageFrame> {
        Box::new(ColumnFrame::two_columns(pipe).with_gap(20.0))
    }
}

#[test]
fn column_frames_fill_left_column_first() {
    let mut pipe = Pipe::new();
    for _ in 0..10 {
        pipe.write(filled(50.0, 100.0));
    }

    let (result, pages) = run(&mut pipe, &mut TwoColumns, LayoutConfig::default());

    assert_eq!(result.unwrap(), 1);
    let rects = pages[0].rects();
    assert_eq!(rects.len(), 10);
    let column_width = (540.0 - 20.0) / 2.0;
    assert!(rects[..7].iter().all(|r| (r.x - 36.0).abs() < 0.01));
    assert!(
        rects[7..]
            .iter()
            .all(|r| (r.x - (36.0 + column_width + 20.0)).abs() < 0.01)
    );
    assert_close(rects[7].y, 36.0);
}

/// Hands back a frame over a fresh pipe instead of the document pipe.
struct Detached;

impl PageTemplate for Detached {
    fn page_frame(&mut self, _pipe: Pipe, _previous: Option<&PageSetup>) -> Box<dyn PageFrame> {
        let mut frame = Frame::stack();
        frame.write(fixed(1.0, 1.0));
        Box::new(frame)
    }
}

#[test]
fn page_frame_must_read_the_document_pipe() {
    let mut pipe = Pipe::new();
    pipe.write(filled(10.0, 10.0));
    let (result, _) = run(&mut pipe, &mut Detached, LayoutConfig::default());
    assert!(matches!(result, Err(LayoutError::ContractViolation(_))));
}

#[test]
fn page_frames_release_their_pipe() {
    let mut pipe = Pipe::new();
    pipe.write(filled(10.0, 10.0));
    let id = pipe.id();
    let frame: Box<dyn PageFrame> = Box::new(Frame::with_pipe(crate::Flow::Stack, pipe));
    assert_eq!(frame.kind(), "Stack");
    assert_eq!(frame.release().id(), id);
}
