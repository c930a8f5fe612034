//! Page-level pagination.
//!
//! The driver closes the document pipe, then fills pages until it is empty:
//! each page gets a fresh root frame bound to the same pipe, which picks up
//! exactly where the previous page's root frame stopped.

use crate::{Block, Flow, Frame, Layout, LayoutConfig, LayoutEnv, LayoutError, Pipe, Quill};
use blockframe_traits::{PageSink, RenderTarget};
use blockframe_types::{Offset, PageGeometry};

/// A block that can be the root of a page. The driver hands it the document
/// pipe for one page and takes the pipe back afterwards.
pub trait PageFrame: Block {
    fn release(self: Box<Self>) -> Pipe;
}

impl PageFrame for Frame {
    fn release(self: Box<Self>) -> Pipe {
        self.into_pipe()
    }
}

/// What a page was laid out with. Passed to the template when the next page
/// is set up, so pages can be derived from their predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSetup {
    pub number: usize,
    pub geometry: PageGeometry,
    pub layout: Layout,
    pub quill: Quill,
}

/// A frame drawn on top of a page after its main content, from its own pipe.
/// Headers, footers and page numbers go here.
pub struct Overlay {
    pub frame: Frame,
    pub layout: Layout,
    /// Top-left corner of the overlay on the page.
    pub origin: Offset,
}

/// Hooks for customising each page. Every hook has a default producing a
/// single stack over the page's content area in the default quill.
pub trait PageTemplate {
    fn page_geometry(&mut self, base: &PageGeometry, _previous: Option<&PageSetup>) -> PageGeometry {
        *base
    }

    fn page_layout(&mut self, geometry: &PageGeometry, _previous: Option<&PageSetup>) -> Layout {
        Layout::new(geometry.content_width(), geometry.content_height())
    }

    fn page_quill(&mut self, _previous: Option<&PageSetup>) -> Quill {
        Quill::default()
    }

    /// The root frame for a page. It must read from `pipe`.
    fn page_frame(&mut self, pipe: Pipe, _previous: Option<&PageSetup>) -> Box<dyn PageFrame> {
        Box::new(Frame::with_pipe(Flow::Stack, pipe))
    }

    fn page_overlay(&mut self, _setup: &PageSetup) -> Option<Overlay> {
        None
    }
}

/// The default template.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPages;

impl PageTemplate for StandardPages {}

pub struct PageDriver<'a> {
    env: LayoutEnv<'a>,
    geometry: PageGeometry,
    config: LayoutConfig,
}

impl<'a> PageDriver<'a> {
    pub fn new(env: LayoutEnv<'a>, geometry: PageGeometry, config: LayoutConfig) -> Self {
        Self {
            env,
            geometry,
            config,
        }
    }

    /// Lays out and renders the whole pipe. Returns the number of pages.
    pub fn run<T, S>(
        &self,
        pipe: &mut Pipe,
        template: &mut T,
        sink: &mut S,
    ) -> Result<usize, LayoutError>
    where
        T: PageTemplate + ?Sized,
        S: PageSink,
    {
        pipe.close();
        let mut previous: Option<PageSetup> = None;
        let mut pages = 0;

        while pipe.has_more() {
            if pages >= self.config.max_pages {
                log::error!(
                    "Stopping after {} pages with content still pending in {}",
                    pages,
                    pipe.name()
                );
                return Err(LayoutError::PageLimitExceeded(self.config.max_pages));
            }
            pages += 1;

            let geometry = template.page_geometry(&self.geometry, previous.as_ref());
            let layout = template.page_layout(&geometry, previous.as_ref());
            let quill = template.page_quill(previous.as_ref());
            let setup = PageSetup {
                number: pages,
                geometry,
                layout,
                quill,
            };

            let expected = pipe.id();
            let mut frame = template.page_frame(std::mem::take(pipe), previous.as_ref());
            log::debug!("Starting page {} with {}", pages, frame.log_name());
            let outcome = self.fill_page(frame.as_mut(), &setup, template, sink);
            *pipe = frame.release();
            if pipe.id() != expected {
                return Err(LayoutError::contract(format!(
                    "the frame for page {} does not read from the document pipe",
                    pages
                )));
            }
            outcome?;
            previous = Some(setup);
        }

        log::info!("Laid out {} pages", pages);
        Ok(pages)
    }

    fn fill_page<T, S>(
        &self,
        frame: &mut dyn PageFrame,
        setup: &PageSetup,
        template: &mut T,
        sink: &mut S,
    ) -> Result<(), LayoutError>
    where
        T: PageTemplate + ?Sized,
        S: PageSink,
    {
        let mut placement = frame.measure(&self.env, &setup.quill, &setup.layout)?;
        if placement.children().is_empty() {
            log::warn!("Page {} received no content", setup.number);
        }
        placement.set_offset(setup.geometry.content_origin());

        let mut page = sink.begin_page(setup.number, &setup.geometry)?;
        frame.render(&placement, placement.position()?, &mut page)?;
        if let Some(overlay) = template.page_overlay(setup) {
            self.fill_overlay(overlay, setup, &mut page)?;
        }
        sink.finish_page(page)?;
        Ok(())
    }

    /// Fills an overlay once, from its own pipe, and paints it.
    fn fill_overlay(
        &self,
        mut overlay: Overlay,
        setup: &PageSetup,
        target: &mut dyn RenderTarget,
    ) -> Result<(), LayoutError> {
        overlay.frame.pipe_mut().close();
        let mut placement = overlay
            .frame
            .measure(&self.env, &setup.quill, &overlay.layout)?;
        if !overlay.frame.is_fill_complete() {
            log::warn!(
                "Overlay on page {} did not fit, the rest is dropped",
                setup.number
            );
        }
        placement.set_offset(overlay.origin);
        overlay.frame.render(&placement, overlay.origin, target)
    }
}
