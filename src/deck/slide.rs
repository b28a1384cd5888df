//! Slides and placeholder access.

use std::fmt::Write as FmtWrite;

use crate::error::Result;
use crate::xml::escape_xml;

use super::layout::{PlaceholderRole, SlideLayout};
use super::text::TextFrame;

/// A placeholder shape on a slide, carrying a text frame.
#[derive(Debug, Clone)]
pub struct Placeholder {
    pub(crate) role: PlaceholderRole,
    pub(crate) idx: u32,
    pub(crate) frame: TextFrame,
}

impl Placeholder {
    /// The placeholder role.
    pub fn role(&self) -> PlaceholderRole {
        self.role
    }

    /// The placeholder position index within the layout.
    pub fn idx(&self) -> u32 {
        self.idx
    }

    /// The placeholder's text frame.
    pub fn text_frame(&self) -> &TextFrame {
        &self.frame
    }

    /// Mutable access to the placeholder's text frame.
    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        &mut self.frame
    }
}

/// A slide in a presentation.
///
/// Created from a layout; starts with one empty placeholder per layout
/// prototype. Placeholder lookups return `None` when the layout has no
/// matching region, so callers can probe without error handling.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Index of the layout this slide was created from
    pub(crate) layout_index: usize,
    /// Placeholders cloned from the layout prototypes
    pub(crate) placeholders: Vec<Placeholder>,
}

impl Slide {
    pub(crate) fn new(slide_id: u32, layout_index: usize, layout: &SlideLayout) -> Self {
        let placeholders = layout
            .placeholders
            .iter()
            .map(|def| Placeholder {
                role: def.role,
                idx: def.idx,
                frame: TextFrame::new(),
            })
            .collect();
        Self {
            slide_id,
            layout_index,
            placeholders,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Index of the layout this slide was created from.
    pub fn layout_index(&self) -> usize {
        self.layout_index
    }

    /// The title region's text frame, if the layout has one.
    pub fn title_frame(&self) -> Option<&TextFrame> {
        self.placeholders
            .iter()
            .find(|p| p.role.is_title())
            .map(|p| &p.frame)
    }

    /// Mutable access to the title region's text frame, if present.
    pub fn title_frame_mut(&mut self) -> Option<&mut TextFrame> {
        self.placeholders
            .iter_mut()
            .find(|p| p.role.is_title())
            .map(|p| &mut p.frame)
    }

    /// Look up a non-title placeholder by position index.
    pub fn placeholder(&self, idx: u32) -> Option<&Placeholder> {
        self.placeholders
            .iter()
            .find(|p| p.idx == idx && !p.role.is_title())
    }

    /// Mutable lookup of a non-title placeholder by position index.
    pub fn placeholder_mut(&mut self, idx: u32) -> Option<&mut Placeholder> {
        self.placeholders
            .iter_mut()
            .find(|p| p.idx == idx && !p.role.is_title())
    }

    /// All placeholders on the slide.
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Generate slide XML content.
    ///
    /// Placeholders whose frames are still empty are omitted; they inherit
    /// their empty state from the layout.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        // IDs: 1=group, 2+=placeholder shapes
        let mut shape_id = 2u32;
        for placeholder in &self.placeholders {
            if placeholder.frame.is_empty() {
                continue;
            }
            write_placeholder_shape(&mut xml, placeholder, shape_id)?;
            shape_id += 1;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

/// Write a populated placeholder as a `p:sp` element.
fn write_placeholder_shape(xml: &mut String, placeholder: &Placeholder, shape_id: u32) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        shape_id,
        placeholder.role.shape_name(),
        shape_id
    )?;
    xml.push_str("<p:cNvSpPr><a:spLocks noGrp=\"1\"/></p:cNvSpPr>");
    if placeholder.idx == 0 {
        write!(xml, r#"<p:nvPr><p:ph type="{}"/></p:nvPr>"#, placeholder.role.ph_type())?;
    } else {
        write!(
            xml,
            r#"<p:nvPr><p:ph type="{}" idx="{}"/></p:nvPr>"#,
            placeholder.role.ph_type(),
            placeholder.idx
        )?;
    }
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr/>");

    xml.push_str("<p:txBody>");
    xml.push_str("<a:bodyPr/>");
    xml.push_str("<a:lstStyle/>");
    for paragraph in placeholder.frame.paragraphs() {
        xml.push_str("<a:p>");
        if paragraph.level() > 0 {
            write!(xml, r#"<a:pPr lvl="{}"/>"#, paragraph.level())?;
        }
        if !paragraph.text().is_empty() {
            xml.push_str("<a:r>");
            xml.push_str("<a:rPr lang=\"en-US\" dirty=\"0\"/>");
            write!(xml, "<a:t>{}</a:t>", escape_xml(paragraph.text()))?;
            xml.push_str("</a:r>");
        }
        xml.push_str("</a:p>");
    }
    xml.push_str("</p:txBody>");

    xml.push_str("</p:sp>");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::layout::builtin_layouts;

    fn title_content_slide() -> Slide {
        let layouts = builtin_layouts();
        Slide::new(256, 1, &layouts[1])
    }

    #[test]
    fn test_title_lookup() {
        let mut slide = title_content_slide();
        assert!(slide.title_frame_mut().is_some());
        if let Some(frame) = slide.title_frame_mut() {
            frame.set_text("Hello");
        }
        assert_eq!(slide.title_frame().map(|f| f.text()), Some("Hello".to_string()));
    }

    #[test]
    fn test_blank_slide_has_no_title() {
        let layouts = builtin_layouts();
        let mut slide = Slide::new(256, 6, &layouts[6]);
        assert!(slide.title_frame_mut().is_none());
        assert!(slide.placeholder_mut(1).is_none());
    }

    #[test]
    fn test_placeholder_lookup_skips_title() {
        let layouts = builtin_layouts();
        let slide = Slide::new(256, 0, &layouts[0]);
        // Title Slide: ctrTitle at idx 0, subtitle at idx 1
        assert!(slide.placeholder(0).is_none());
        let subtitle = slide.placeholder(1).unwrap();
        assert_eq!(subtitle.role(), PlaceholderRole::Subtitle);
    }

    #[test]
    fn test_slide_xml_skips_empty_placeholders() {
        let slide = title_content_slide();
        let xml = slide.to_xml().unwrap();
        assert!(!xml.contains("<p:sp>"));
        assert!(xml.contains("<p:spTree>"));
    }

    #[test]
    fn test_slide_xml_escapes_text() {
        let mut slide = title_content_slide();
        if let Some(frame) = slide.title_frame_mut() {
            frame.set_text("A & B");
        }
        let xml = slide.to_xml().unwrap();
        assert!(xml.contains("<a:t>A &amp; B</a:t>"));
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
    }

    #[test]
    fn test_slide_xml_paragraph_levels() {
        let mut slide = title_content_slide();
        let frame = slide.placeholder_mut(1).unwrap().text_frame_mut();
        frame.clear();
        frame.first_mut().set_text("a");
        let p = frame.add_paragraph();
        p.set_text("b");
        p.set_level(2);
        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<a:pPr lvl="2"/>"#));
        // level 0 paragraphs carry no pPr
        assert!(!xml.contains(r#"<a:pPr lvl="0"/>"#));
    }
}
