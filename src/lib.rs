//! Rambutan - generate PowerPoint presentations from structured slide data
//!
//! This library turns a structured description of slide content (titles,
//! subtitles, bullet lists or paragraphs) into an in-memory presentation
//! deck, ready to be serialized as a .pptx file. It is aimed at automation
//! pipelines that produce slide content programmatically and need a
//! rendered presentation as output.
//!
//! # Example - Building a deck from JSON
//!
//! ```no_run
//! use rambutan::{build_presentation, PresentationSpec};
//!
//! # fn main() -> rambutan::Result<()> {
//! let spec: PresentationSpec = serde_json::from_str(r#"{
//!     "slides": [
//!         {"layout_type": "title_slide", "title": "Demo", "subtitle": "Generated"},
//!         {"layout_type": "title_content", "title": "Points",
//!          "content": ["First.", "  Indented sub-point."]}
//!     ]
//! }"#)?;
//!
//! let deck = build_presentation(&spec);
//! deck.save("demo.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Custom layout mapping
//!
//! ```
//! use rambutan::{LayoutMap, SlideBuilder};
//!
//! # fn main() -> rambutan::Result<()> {
//! // Bind the three layout selectors to different template positions
//! let builder = SlideBuilder::with_layouts(LayoutMap {
//!     title_slide: 0,
//!     title_content: 1,
//!     blank: 6,
//! })?;
//! let deck = builder.build(&Default::default());
//! assert_eq!(deck.slide_count(), 0);
//! # Ok(())
//! # }
//! ```
//!
//! Missing placeholders, unknown layout selectors, and unsupported content
//! shapes never fail a build; each produces a `tracing` warning and the
//! affected field is skipped.

/// Slide builder mapping descriptions onto decks
pub mod builder;

/// Presentation authoring layer: decks, layouts, slides, text frames
pub mod deck;

/// Error types
pub mod error;

/// Input data model for slide descriptions
pub mod model;

/// XML escaping helpers
pub mod xml;

// Re-export commonly used types for convenience
pub use builder::{build_presentation, LayoutMap, SlideBuilder};
pub use deck::{Paragraph, Placeholder, PlaceholderRole, Presentation, Slide, SlideLayout, TextFrame};
pub use error::{Error, Result};
pub use model::{LayoutKind, PresentationSpec, SlideContent, SlideSpec};
