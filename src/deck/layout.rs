//! Slide layouts and the built-in presentation template.
//!
//! The built-in template mirrors the eleven layouts of the default
//! PowerPoint template, in the same order, so layout indices carry over
//! from tooling built against that template. Each layout is a name plus the
//! placeholder prototypes a slide created from it starts with.

/// Role of a placeholder shape, mapped to the OOXML `p:ph` type attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderRole {
    /// Title placeholder
    Title,
    /// Centered title placeholder (title slides)
    CenteredTitle,
    /// Subtitle placeholder
    Subtitle,
    /// Body/content placeholder
    Body,
    /// Picture placeholder
    Picture,
}

impl PlaceholderRole {
    /// Whether this role is a slide title.
    pub fn is_title(&self) -> bool {
        matches!(self, PlaceholderRole::Title | PlaceholderRole::CenteredTitle)
    }

    /// The `type` attribute value on the `p:ph` element.
    pub(crate) fn ph_type(&self) -> &'static str {
        match self {
            PlaceholderRole::Title => "title",
            PlaceholderRole::CenteredTitle => "ctrTitle",
            PlaceholderRole::Subtitle => "subTitle",
            PlaceholderRole::Body => "body",
            PlaceholderRole::Picture => "pic",
        }
    }

    /// Display name used for the shape (`p:cNvPr name`).
    pub(crate) fn shape_name(&self) -> &'static str {
        match self {
            PlaceholderRole::Title | PlaceholderRole::CenteredTitle => "Title",
            PlaceholderRole::Subtitle => "Subtitle",
            PlaceholderRole::Body => "Content Placeholder",
            PlaceholderRole::Picture => "Picture Placeholder",
        }
    }
}

/// Prototype of a placeholder on a layout.
#[derive(Debug, Clone)]
pub struct PlaceholderDef {
    pub(crate) role: PlaceholderRole,
    pub(crate) idx: u32,
}

impl PlaceholderDef {
    const fn new(role: PlaceholderRole, idx: u32) -> Self {
        Self { role, idx }
    }
}

/// A slide layout: a named set of placeholder prototypes.
#[derive(Debug, Clone)]
pub struct SlideLayout {
    pub(crate) name: &'static str,
    pub(crate) placeholders: Vec<PlaceholderDef>,
}

impl SlideLayout {
    /// The layout name as shown in the template.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Number of placeholder prototypes on the layout.
    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }
}

/// Build the layout table of the built-in template.
///
/// Indices: 0 Title Slide, 1 Title and Content, 2 Section Header,
/// 3 Two Content, 4 Comparison, 5 Title Only, 6 Blank, 7 Content with
/// Caption, 8 Picture with Caption, 9 Title and Vertical Text,
/// 10 Vertical Title and Text.
pub(crate) fn builtin_layouts() -> Vec<SlideLayout> {
    use PlaceholderRole::*;

    vec![
        SlideLayout {
            name: "Title Slide",
            placeholders: vec![
                PlaceholderDef::new(CenteredTitle, 0),
                PlaceholderDef::new(Subtitle, 1),
            ],
        },
        SlideLayout {
            name: "Title and Content",
            placeholders: vec![
                PlaceholderDef::new(Title, 0),
                PlaceholderDef::new(Body, 1),
            ],
        },
        SlideLayout {
            name: "Section Header",
            placeholders: vec![
                PlaceholderDef::new(Title, 0),
                PlaceholderDef::new(Body, 1),
            ],
        },
        SlideLayout {
            name: "Two Content",
            placeholders: vec![
                PlaceholderDef::new(Title, 0),
                PlaceholderDef::new(Body, 1),
                PlaceholderDef::new(Body, 2),
            ],
        },
        SlideLayout {
            name: "Comparison",
            placeholders: vec![
                PlaceholderDef::new(Title, 0),
                PlaceholderDef::new(Body, 1),
                PlaceholderDef::new(Body, 2),
                PlaceholderDef::new(Body, 3),
                PlaceholderDef::new(Body, 4),
            ],
        },
        SlideLayout {
            name: "Title Only",
            placeholders: vec![PlaceholderDef::new(Title, 0)],
        },
        SlideLayout {
            name: "Blank",
            placeholders: vec![],
        },
        SlideLayout {
            name: "Content with Caption",
            placeholders: vec![
                PlaceholderDef::new(Title, 0),
                PlaceholderDef::new(Body, 1),
                PlaceholderDef::new(Body, 2),
            ],
        },
        SlideLayout {
            name: "Picture with Caption",
            placeholders: vec![
                PlaceholderDef::new(Title, 0),
                PlaceholderDef::new(Picture, 1),
                PlaceholderDef::new(Body, 2),
            ],
        },
        SlideLayout {
            name: "Title and Vertical Text",
            placeholders: vec![
                PlaceholderDef::new(Title, 0),
                PlaceholderDef::new(Body, 1),
            ],
        },
        SlideLayout {
            name: "Vertical Title and Text",
            placeholders: vec![
                PlaceholderDef::new(Title, 0),
                PlaceholderDef::new(Body, 1),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_layout_table() {
        let layouts = builtin_layouts();
        assert_eq!(layouts.len(), 11);
        assert_eq!(layouts[0].name(), "Title Slide");
        assert_eq!(layouts[1].name(), "Title and Content");
        assert_eq!(layouts[6].name(), "Blank");
        assert_eq!(layouts[6].placeholder_count(), 0);
    }

    #[test]
    fn test_title_slide_placeholders() {
        let layouts = builtin_layouts();
        let title_slide = &layouts[0];
        assert!(title_slide.placeholders[0].role.is_title());
        assert_eq!(title_slide.placeholders[1].role, PlaceholderRole::Subtitle);
        assert_eq!(title_slide.placeholders[1].idx, 1);
    }

    #[test]
    fn test_ph_type_attributes() {
        assert_eq!(PlaceholderRole::CenteredTitle.ph_type(), "ctrTitle");
        assert_eq!(PlaceholderRole::Subtitle.ph_type(), "subTitle");
        assert_eq!(PlaceholderRole::Body.ph_type(), "body");
    }
}
