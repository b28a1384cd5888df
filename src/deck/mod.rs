//! Presentation authoring layer.
//!
//! A [`Presentation`] is a blank deck built from the built-in template.
//! Slides are created from layouts, populated through placeholder text
//! frames, and serialized as a .pptx package.

pub mod layout;
pub(crate) mod package;
pub mod presentation;
pub mod slide;
pub mod text;

// Re-export main types
pub use layout::{PlaceholderRole, SlideLayout};
pub use presentation::Presentation;
pub use slide::{Placeholder, Slide};
pub use text::{Paragraph, TextFrame};
