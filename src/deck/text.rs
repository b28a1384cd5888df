//! Text frame and paragraph types for placeholder content.

/// Maximum outline level supported by DrawingML (`a:pPr lvl`).
const MAX_OUTLINE_LEVEL: u8 = 8;

/// A paragraph inside a text frame.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub(crate) text: String,
    pub(crate) level: u8,
}

impl Paragraph {
    /// Get the paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the paragraph text (single run, no rich formatting).
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Get the outline level (0 = top level).
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Set the outline level, clamped to the DrawingML maximum.
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(MAX_OUTLINE_LEVEL);
    }
}

/// The text content of a placeholder.
///
/// A frame always holds at least one paragraph, mirroring how PowerPoint
/// stores placeholder text: clearing a frame leaves a single empty
/// paragraph behind rather than none.
#[derive(Debug, Clone)]
pub struct TextFrame {
    pub(crate) paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Create an empty frame with one empty paragraph.
    pub(crate) fn new() -> Self {
        Self {
            paragraphs: vec![Paragraph::default()],
        }
    }

    /// Remove all content, leaving a single empty paragraph.
    pub fn clear(&mut self) {
        self.paragraphs.clear();
        self.paragraphs.push(Paragraph::default());
    }

    /// Replace the frame content with a single level-0 paragraph.
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.paragraphs[0].set_text(text);
    }

    /// The first paragraph. Always present.
    pub fn first_mut(&mut self) -> &mut Paragraph {
        &mut self.paragraphs[0]
    }

    /// Append a new paragraph and return a handle to it.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::default());
        self.paragraphs.last_mut().expect("just pushed")
    }

    /// All paragraphs in order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Whether every paragraph in the frame is empty.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.text.is_empty())
    }

    /// Concatenated text of all paragraphs, newline separated.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TextFrame {
    fn default() -> Self {
        Self::new()
    }
}
