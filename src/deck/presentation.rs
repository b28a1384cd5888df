//! The in-memory presentation deck.

use std::fmt::Write as FmtWrite;
use std::path::Path;

use crate::error::Result;

use super::layout::{builtin_layouts, SlideLayout};
use super::package;
use super::slide::Slide;

/// A presentation deck under construction.
///
/// Created blank from the built-in template; slides are added from layouts
/// and populated through their placeholders. The deck stays entirely in
/// memory until [`Presentation::to_bytes`] or [`Presentation::save`]
/// serializes it as a .pptx package.
#[derive(Debug)]
pub struct Presentation {
    /// Slides in presentation order
    pub(crate) slides: Vec<Slide>,
    /// Layouts of the loaded template
    pub(crate) layouts: Vec<SlideLayout>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    pub(crate) slide_width: i64,
    /// Slide height in EMUs
    pub(crate) slide_height: i64,
    /// Document title for the package metadata
    pub(crate) doc_title: Option<String>,
}

impl Presentation {
    /// Create a new empty presentation from the built-in template.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            layouts: builtin_layouts(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
            doc_title: None,
        }
    }

    /// The layouts of the loaded template, in template order.
    pub fn layouts(&self) -> &[SlideLayout] {
        &self.layouts
    }

    /// Look up a layout by position.
    pub fn layout(&self, index: usize) -> Option<&SlideLayout> {
        self.layouts.get(index)
    }

    /// Number of layouts in the template.
    pub fn layout_count(&self) -> usize {
        self.layouts.len()
    }

    /// Add a new slide built from the layout at `layout_index`.
    ///
    /// Returns `None` when the index does not name a template layout.
    pub fn add_slide(&mut self, layout_index: usize) -> Option<&mut Slide> {
        let layout = self.layouts.get(layout_index)?;
        let slide_id = (self.slides.len() + 256) as u32;
        let slide = Slide::new(slide_id, layout_index, layout);
        self.slides.push(slide);
        self.slides.last_mut()
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the document title stored in the package metadata.
    pub fn set_doc_title(&mut self, title: &str) {
        self.doc_title = Some(title.to_string());
    }

    /// The document title, if set.
    pub fn doc_title(&self) -> Option<&str> {
        self.doc_title.as_deref()
    }

    /// Generate presentation.xml content.
    ///
    /// Relationship IDs: rId1 is the slide master, slides follow from rId2.
    pub(crate) fn generate_presentation_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, slide) in self.slides.iter().enumerate() {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                    slide.slide_id(),
                    index + 2
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Serialize the deck as a .pptx package and return the bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        package::write_package(self)
    }

    /// Serialize the deck and write it to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_presentation() {
        let pres = Presentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.layout_count(), 11);
        assert_eq!(pres.slide_width(), 9144000);
        assert_eq!(pres.slide_height(), 6858000);
    }

    #[test]
    fn test_add_slide() {
        let mut pres = Presentation::new();
        let slide = pres.add_slide(1).unwrap();
        assert_eq!(slide.layout_index(), 1);
        assert_eq!(pres.slide_count(), 1);
        assert_eq!(pres.slide(0).unwrap().slide_id(), 256);
    }

    #[test]
    fn test_add_slide_out_of_range() {
        let mut pres = Presentation::new();
        assert!(pres.add_slide(99).is_none());
        assert_eq!(pres.slide_count(), 0);
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = Presentation::new();
        pres.add_slide(0);
        pres.add_slide(1);
        let xml = pres.generate_presentation_xml().unwrap();
        assert!(xml.contains("<p:sldIdLst>"));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
    }
}
