//! Input data model for slide descriptions.
//!
//! A [`PresentationSpec`] is the structured description an upstream content
//! pipeline hands to the builder: an ordered list of [`SlideSpec`] values,
//! each naming a layout and carrying optional title, subtitle, and content
//! fields. All types round-trip through serde, so decoding a JSON document
//! produced by another service is a single `serde_json::from_str` call.

use serde::{Deserialize, Serialize};

/// Top-level description of a presentation.
///
/// Slide order is rendering order. The optional `title` is not rendered on
/// any slide; it becomes the document title in the package metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresentationSpec {
    /// Document title, stored in docProps/core.xml
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Slide descriptions in rendering order
    #[serde(default)]
    pub slides: Vec<SlideSpec>,
}

/// Description of a single slide. All fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Layout selector ("title_slide", "title_content", "blank"),
    /// matched case-insensitively. Absent or unrecognized values fall
    /// back to "title_content".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<String>,
    /// Text for the slide's title region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Text for the subtitle region (title_slide layouts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Body content (title_content layouts only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<SlideContent>,
}

/// Body content of a slide.
///
/// The two supported shapes are a list of bullet lines (leading spaces on a
/// line select its outline level) and a single paragraph string. Anything
/// else a JSON document may carry lands in [`SlideContent::Other`], which
/// the builder reports as unsupported and renders as an empty region
/// instead of failing the decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlideContent {
    /// Bullet lines, one paragraph each
    Bullets(Vec<String>),
    /// A single paragraph of text
    Paragraph(String),
    /// Unsupported content shape, preserved for diagnostics
    Other(serde_json::Value),
}

impl SlideContent {
    /// Whether the content is empty (empty list or empty string).
    ///
    /// Empty content is treated the same as an absent `content` field:
    /// the region's placeholder text is left untouched.
    pub fn is_empty(&self) -> bool {
        match self {
            SlideContent::Bullets(lines) => lines.is_empty(),
            SlideContent::Paragraph(text) => text.is_empty(),
            SlideContent::Other(_) => false,
        }
    }
}

/// Resolved layout variant of a slide description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Opening slide with centered title and subtitle
    TitleSlide,
    /// Title with a bulleted body region
    TitleContent,
    /// No placeholders
    Blank,
}

impl LayoutKind {
    /// Parse a layout selector, case-insensitively.
    ///
    /// Returns `None` for unrecognized values; the caller decides the
    /// fallback and the diagnostic.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("title_slide") {
            Some(LayoutKind::TitleSlide)
        } else if s.eq_ignore_ascii_case("title_content") {
            Some(LayoutKind::TitleContent)
        } else if s.eq_ignore_ascii_case("blank") {
            Some(LayoutKind::Blank)
        } else {
            None
        }
    }

    /// Canonical selector string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::TitleSlide => "title_slide",
            LayoutKind::TitleContent => "title_content",
            LayoutKind::Blank => "blank",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_layout_kind() {
        assert_eq!(LayoutKind::parse("title_slide"), Some(LayoutKind::TitleSlide));
        assert_eq!(LayoutKind::parse("TITLE_CONTENT"), Some(LayoutKind::TitleContent));
        assert_eq!(LayoutKind::parse("Blank"), Some(LayoutKind::Blank));
        assert_eq!(LayoutKind::parse("two_content"), None);
        assert_eq!(LayoutKind::parse(""), None);
    }

    #[test]
    fn test_decode_bullet_content() {
        let json = r#"{"layout_type":"title_content","title":"T","content":["a","  b"]}"#;
        let spec: SlideSpec = serde_json::from_str(json).unwrap();
        match spec.content {
            Some(SlideContent::Bullets(ref lines)) => {
                assert_eq!(lines, &["a".to_string(), "  b".to_string()]);
            },
            other => panic!("expected bullets, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_paragraph_content() {
        let json = r#"{"content":"one paragraph"}"#;
        let spec: SlideSpec = serde_json::from_str(json).unwrap();
        assert!(matches!(spec.content, Some(SlideContent::Paragraph(ref s)) if s == "one paragraph"));
    }

    #[test]
    fn test_decode_unsupported_content() {
        // A number is neither a list nor a string; it must decode (into
        // Other) rather than fail, so the builder can report it.
        let json = r#"{"content":42}"#;
        let spec: SlideSpec = serde_json::from_str(json).unwrap();
        assert!(matches!(spec.content, Some(SlideContent::Other(_))));
    }

    #[test]
    fn test_content_is_empty() {
        assert!(SlideContent::Bullets(vec![]).is_empty());
        assert!(SlideContent::Paragraph(String::new()).is_empty());
        assert!(!SlideContent::Bullets(vec!["x".into()]).is_empty());
        assert!(!SlideContent::Other(serde_json::json!(0)).is_empty());
    }

    #[test]
    fn test_decode_full_spec() {
        let json = r#"{
            "title": "Deck",
            "slides": [
                {"layout_type": "title_slide", "title": "T", "subtitle": "S"},
                {"layout_type": "title_content", "title": "X", "content": ["a"]}
            ]
        }"#;
        let spec: PresentationSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.title.as_deref(), Some("Deck"));
        assert_eq!(spec.slides.len(), 2);
        assert_eq!(spec.slides[1].title.as_deref(), Some("X"));
    }
}
