//! Slide builder: maps a [`PresentationSpec`] onto a deck.
//!
//! The builder is a single synchronous pass over the slide descriptions.
//! Nothing in it aborts the run: unknown layout selectors, missing
//! placeholder regions, and unsupported content shapes each produce a
//! `tracing` warning and the affected field is skipped, while every other
//! slide and field is still rendered.

use tracing::warn;

use crate::deck::Presentation;
use crate::error::{Error, Result};
use crate::model::{LayoutKind, PresentationSpec, SlideContent, SlideSpec};

/// Placeholder position of the subtitle region on title_slide layouts and
/// the content region on title_content layouts.
const BODY_PLACEHOLDER_IDX: u32 = 1;

/// Maps the three layout selectors to positions in the loaded template.
///
/// The mapping is explicit configuration, not a hidden global: pass a
/// custom map to [`SlideBuilder::with_layouts`] when building against a
/// template with a different layout ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMap {
    /// Template position of the title slide layout
    pub title_slide: usize,
    /// Template position of the title-and-content layout
    pub title_content: usize,
    /// Template position of the blank layout
    pub blank: usize,
}

impl Default for LayoutMap {
    /// Indices of the built-in template: 0 Title Slide, 1 Title and
    /// Content, 6 Blank.
    fn default() -> Self {
        Self {
            title_slide: 0,
            title_content: 1,
            blank: 6,
        }
    }
}

impl LayoutMap {
    /// The template position for a resolved layout kind.
    fn index_for(&self, kind: LayoutKind) -> usize {
        match kind {
            LayoutKind::TitleSlide => self.title_slide,
            LayoutKind::TitleContent => self.title_content,
            LayoutKind::Blank => self.blank,
        }
    }

    /// Check every index against the template's layout count.
    fn validate(&self, layout_count: usize) -> Result<()> {
        for index in [self.title_slide, self.title_content, self.blank] {
            if index >= layout_count {
                return Err(Error::LayoutIndexOutOfRange {
                    index,
                    count: layout_count,
                });
            }
        }
        Ok(())
    }
}

/// Builds presentation decks from slide descriptions.
///
/// # Examples
///
/// ```
/// use rambutan::{PresentationSpec, SlideBuilder};
///
/// let spec: PresentationSpec = serde_json::from_str(
///     r#"{"slides":[{"layout_type":"title_slide","title":"Hello"}]}"#,
/// ).unwrap();
/// let deck = SlideBuilder::new().build(&spec);
/// assert_eq!(deck.slide_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SlideBuilder {
    layouts: LayoutMap,
}

impl SlideBuilder {
    /// Create a builder with the default layout mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with an explicit layout mapping, validated
    /// against the template up front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayoutIndexOutOfRange`] when any index does not
    /// name a template layout.
    pub fn with_layouts(layouts: LayoutMap) -> Result<Self> {
        layouts.validate(Presentation::new().layout_count())?;
        Ok(Self { layouts })
    }

    /// Build a deck from the description.
    ///
    /// Always returns a deck with exactly one slide per description, in
    /// input order. Field-level problems are reported as warnings and the
    /// field skipped; nothing here fails the call.
    pub fn build(&self, spec: &PresentationSpec) -> Presentation {
        let mut deck = Presentation::new();
        if let Some(ref title) = spec.title {
            deck.set_doc_title(title);
        }

        for slide_spec in &spec.slides {
            self.render_slide(&mut deck, slide_spec);
        }

        deck
    }

    /// Render one slide description onto the deck.
    fn render_slide(&self, deck: &mut Presentation, spec: &SlideSpec) {
        let kind = self.resolve_layout(spec);
        let layout_index = self.layouts.index_for(kind);

        let slide = match deck.add_slide(layout_index) {
            Some(slide) => slide,
            None => {
                // Layout maps are validated at construction
                warn!(layout_index, "layout index not in template, slide skipped");
                return;
            },
        };

        // Title: absence of the region is fine (blank layouts have none)
        if let Some(title) = non_empty(&spec.title)
            && let Some(frame) = slide.title_frame_mut()
        {
            frame.set_text(title);
        }

        // The subtitle/content region lives at a fixed placeholder
        // position; its absence is diagnosed even when the matching field
        // carries no text.
        match kind {
            LayoutKind::TitleSlide => match slide.placeholder_mut(BODY_PLACEHOLDER_IDX) {
                Some(placeholder) => {
                    if let Some(subtitle) = non_empty(&spec.subtitle) {
                        placeholder.text_frame_mut().set_text(subtitle);
                    }
                },
                None => warn!(
                    layout = kind.as_str(),
                    idx = BODY_PLACEHOLDER_IDX,
                    "subtitle placeholder not found on layout"
                ),
            },
            LayoutKind::TitleContent => match slide.placeholder_mut(BODY_PLACEHOLDER_IDX) {
                Some(placeholder) => {
                    if let Some(content) = spec.content.as_ref().filter(|c| !c.is_empty()) {
                        write_content(placeholder.text_frame_mut(), content);
                    }
                },
                None => warn!(
                    layout = kind.as_str(),
                    idx = BODY_PLACEHOLDER_IDX,
                    "content placeholder not found on layout"
                ),
            },
            LayoutKind::Blank => {},
        }
    }

    /// Resolve the layout selector, defaulting to title_content.
    fn resolve_layout(&self, spec: &SlideSpec) -> LayoutKind {
        match spec.layout_type {
            None => LayoutKind::TitleContent,
            Some(ref raw) => LayoutKind::parse(raw).unwrap_or_else(|| {
                warn!(layout_type = %raw, "unknown layout type, defaulting to title_content");
                LayoutKind::TitleContent
            }),
        }
    }
}

/// Write body content into a (cleared) text frame.
fn write_content(frame: &mut crate::deck::TextFrame, content: &SlideContent) {
    frame.clear();
    match content {
        SlideContent::Bullets(lines) => {
            for (i, line) in lines.iter().enumerate() {
                let (level, text) = classify_indent(line);
                let paragraph = if i == 0 {
                    // First entry reuses the frame's existing paragraph slot
                    frame.first_mut()
                } else {
                    frame.add_paragraph()
                };
                paragraph.set_text(text);
                paragraph.set_level(level);
            }
        },
        SlideContent::Paragraph(text) => {
            frame.first_mut().set_text(text);
        },
        SlideContent::Other(value) => {
            // Region stays empty after the clear
            warn!(content = %value, "unsupported content shape, leaving region empty");
        },
    }
}

/// Classify a bullet line's leading spaces into an outline level and strip
/// the leading whitespace from the stored text.
///
/// Exactly one of three levels applies: 4+ leading spaces is level 2,
/// otherwise 2+ is level 1, otherwise level 0. Only space characters count
/// toward the level; tabs are stripped but never raise it.
fn classify_indent(line: &str) -> (u8, &str) {
    let spaces = line.len() - line.trim_start_matches(' ').len();
    let level = if spaces >= 4 {
        2
    } else if spaces >= 2 {
        1
    } else {
        0
    };
    (level, line.trim_start())
}

/// Shared Option<String> presence check: Some and non-empty.
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Build a deck with the default layout mapping.
///
/// Convenience wrapper over [`SlideBuilder::new`] + build.
pub fn build_presentation(spec: &PresentationSpec) -> Presentation {
    SlideBuilder::new().build(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_from_json(json: &str) -> PresentationSpec {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_classify_indent() {
        assert_eq!(classify_indent("top"), (0, "top"));
        assert_eq!(classify_indent(" one space"), (0, "one space"));
        assert_eq!(classify_indent("  two"), (1, "two"));
        assert_eq!(classify_indent("   three"), (1, "three"));
        assert_eq!(classify_indent("    four"), (2, "four"));
        assert_eq!(classify_indent("        eight"), (2, "eight"));
        // Tabs never raise the level but are stripped
        assert_eq!(classify_indent("\ttabbed"), (0, "tabbed"));
    }

    #[test]
    fn test_slide_count_and_order() {
        let spec = spec_from_json(
            r#"{"slides":[
                {"layout_type":"title_slide","title":"One"},
                {"layout_type":"title_content","title":"Two"},
                {"layout_type":"blank"}
            ]}"#,
        );
        let deck = build_presentation(&spec);
        assert_eq!(deck.slide_count(), 3);
        assert_eq!(deck.slide(0).unwrap().layout_index(), 0);
        assert_eq!(deck.slide(1).unwrap().layout_index(), 1);
        assert_eq!(deck.slide(2).unwrap().layout_index(), 6);
    }

    #[test]
    fn test_title_slide_title_and_subtitle() {
        let spec = spec_from_json(
            r#"{"slides":[{"layout_type":"title_slide","title":"T","subtitle":"S"}]}"#,
        );
        let deck = build_presentation(&spec);
        let slide = deck.slide(0).unwrap();
        assert_eq!(slide.title_frame().unwrap().text(), "T");
        assert_eq!(slide.placeholder(1).unwrap().text_frame().text(), "S");
    }

    #[test]
    fn test_bullet_content_levels() {
        let spec = spec_from_json(
            r#"{"slides":[{"layout_type":"title_content","title":"X","content":["a","  b","    c"]}]}"#,
        );
        let deck = build_presentation(&spec);
        let slide = deck.slide(0).unwrap();
        let frame = slide.placeholder(1).unwrap().text_frame();
        let paragraphs = frame.paragraphs();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(
            paragraphs.iter().map(|p| p.text()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert_eq!(
            paragraphs.iter().map(|p| p.level()).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_paragraph_content() {
        let spec = spec_from_json(
            r#"{"slides":[{"layout_type":"title_content","content":"Automation, Consistency, Speed."}]}"#,
        );
        let deck = build_presentation(&spec);
        let frame = deck.slide(0).unwrap().placeholder(1).unwrap().text_frame();
        assert_eq!(frame.paragraphs().len(), 1);
        assert_eq!(frame.paragraphs()[0].text(), "Automation, Consistency, Speed.");
        assert_eq!(frame.paragraphs()[0].level(), 0);
    }

    #[test]
    fn test_unknown_layout_defaults_to_title_content() {
        let spec = spec_from_json(
            r#"{"slides":[
                {"layout_type":"unknown_type","title":"A","content":["x"]},
                {"layout_type":"blank"}
            ]}"#,
        );
        let deck = build_presentation(&spec);
        assert_eq!(deck.slide_count(), 2);
        let slide = deck.slide(0).unwrap();
        assert_eq!(slide.layout_index(), 1);
        // The resolved variant is title_content, so content renders
        assert_eq!(slide.placeholder(1).unwrap().text_frame().text(), "x");
        // Processing of subsequent slides is unaffected
        assert_eq!(deck.slide(1).unwrap().layout_index(), 6);
    }

    #[test]
    fn test_unsupported_content_leaves_region_empty() {
        let spec = spec_from_json(
            r#"{"slides":[{"layout_type":"title_content","title":"T","content":42}]}"#,
        );
        let deck = build_presentation(&spec);
        let slide = deck.slide(0).unwrap();
        assert_eq!(slide.title_frame().unwrap().text(), "T");
        assert!(slide.placeholder(1).unwrap().text_frame().is_empty());
    }

    #[test]
    fn test_empty_content_is_skipped() {
        let spec = spec_from_json(
            r#"{"slides":[
                {"layout_type":"title_content","content":[]},
                {"layout_type":"title_content","content":""}
            ]}"#,
        );
        let deck = build_presentation(&spec);
        assert!(deck.slide(0).unwrap().placeholder(1).unwrap().text_frame().is_empty());
        assert!(deck.slide(1).unwrap().placeholder(1).unwrap().text_frame().is_empty());
    }

    #[test]
    fn test_subtitle_ignored_on_title_content() {
        let spec = spec_from_json(
            r#"{"slides":[{"layout_type":"title_content","subtitle":"ignored"}]}"#,
        );
        let deck = build_presentation(&spec);
        assert!(deck.slide(0).unwrap().placeholder(1).unwrap().text_frame().is_empty());
    }

    #[test]
    fn test_blank_slide_skips_everything() {
        let spec = spec_from_json(
            r#"{"slides":[{"layout_type":"blank","title":"no region","content":["x"]}]}"#,
        );
        let deck = build_presentation(&spec);
        let slide = deck.slide(0).unwrap();
        assert!(slide.title_frame().is_none());
        assert!(slide.placeholders().is_empty());
    }

    #[test]
    fn test_missing_layout_type_defaults_silently() {
        let spec = spec_from_json(r#"{"slides":[{"title":"T"}]}"#);
        let deck = build_presentation(&spec);
        assert_eq!(deck.slide(0).unwrap().layout_index(), 1);
    }

    #[test]
    fn test_missing_placeholder_skips_field() {
        // "Title Only" (index 5) has a title region but no body
        // placeholder, so the content field has nowhere to go.
        let builder = SlideBuilder::with_layouts(LayoutMap {
            title_content: 5,
            ..LayoutMap::default()
        })
        .unwrap();
        let spec = spec_from_json(
            r#"{"slides":[
                {"layout_type":"title_content","title":"T","content":["x"]},
                {"layout_type":"blank"}
            ]}"#,
        );
        let deck = builder.build(&spec);
        assert_eq!(deck.slide_count(), 2);
        let slide = deck.slide(0).unwrap();
        assert_eq!(slide.title_frame().unwrap().text(), "T");
        assert!(slide.placeholder(1).is_none());
        assert_eq!(deck.slide(1).unwrap().layout_index(), 6);
    }

    #[test]
    fn test_layout_map_validation() {
        let map = LayoutMap {
            title_slide: 0,
            title_content: 1,
            blank: 99,
        };
        let err = SlideBuilder::with_layouts(map).unwrap_err();
        assert!(matches!(
            err,
            Error::LayoutIndexOutOfRange { index: 99, count: 11 }
        ));

        assert!(SlideBuilder::with_layouts(LayoutMap::default()).is_ok());
    }

    #[test]
    fn test_doc_title_from_spec() {
        let spec = spec_from_json(r#"{"title":"My Deck","slides":[]}"#);
        let deck = build_presentation(&spec);
        assert_eq!(deck.doc_title(), Some("My Deck"));
        assert_eq!(deck.slide_count(), 0);
    }
}
