use crate::fonts::register_fonts;
use crate::page::PdfPage;
use blockframe_traits::{PageSink, RenderError};
use blockframe_types::PageGeometry;
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use std::collections::BTreeSet;
use std::io::Write;

/// An in-memory PDF document that pages are appended to.
pub struct PdfSink {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    substituted: BTreeSet<String>,
}

impl Default for PdfSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSink {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        let fonts = register_fonts(&mut document);
        document
            .objects
            .insert(resources_id, Object::Dictionary(dictionary! { "Font" => fonts }));

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            substituted: BTreeSet::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Custom font families that were set in Helvetica, in name order.
    pub fn substituted_families(&self) -> impl Iterator<Item = &str> {
        self.substituted.iter().map(String::as_str)
    }

    /// Writes the page tree and serializes the document.
    pub fn write_to<W: Write>(mut self, writer: &mut W) -> Result<(), RenderError> {
        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::Reference(*id)).collect();
        let count = kids.len() as i64;
        self.document.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        self.document
            .save_to(writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        log::debug!("Wrote PDF with {} pages", count);
        Ok(())
    }

    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }
}

impl PageSink for PdfSink {
    type Page = PdfPage;

    fn begin_page(
        &mut self,
        number: usize,
        geometry: &PageGeometry,
    ) -> Result<PdfPage, RenderError> {
        Ok(PdfPage::new(number, *geometry))
    }

    fn finish_page(&mut self, page: PdfPage) -> Result<(), RenderError> {
        for family in &page.substituted {
            if self.substituted.insert(family.clone()) {
                log::warn!("No standard font for family '{}', using Helvetica", family);
            }
        }
        let content_id = self
            .document
            .add_object(Stream::new(dictionary! {}, page.encode()?));
        let geometry = page.geometry;
        let media_box: Vec<Object> = vec![
            Object::Integer(0),
            Object::Integer(0),
            geometry.width.into(),
            geometry.height.into(),
        ];
        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => media_box,
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        log::trace!("Finished PDF page {} as object {:?}", page.number, page_id);
        self.page_ids.push(page_id);
        Ok(())
    }
}
