//! Intermediate block tree
//!
//! The assembler and the HTML walkers produce an ordered sequence of
//! typed blocks; renderers (the hand-written OOXML writer today, the
//! library-backed path tomorrow) serialize that sequence without
//! re-walking any HTML. Blocks are plain data with no ids and no parent
//! links: export is a single forward pass.

use crate::Table;

/// Paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// WordprocessingML `w:jc` value
    pub fn as_docx(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }

    /// Parse a CSS `text-align` keyword. Only the values the editor
    /// emits are recognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            _ => None,
        }
    }
}

/// Heading depth. The section tree is unbounded but headings cap at
/// level 3; deeper titles reuse the level-3 style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Map a 1-based section depth onto a heading level
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        }
    }

    /// Paragraph style id in styles.xml
    pub fn style_id(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "Heading1",
            HeadingLevel::H2 => "Heading2",
            HeadingLevel::H3 => "Heading3",
        }
    }

    /// Zero-based outline level
    pub fn outline_level(&self) -> u32 {
        match self {
            HeadingLevel::H1 => 0,
            HeadingLevel::H2 => 1,
            HeadingLevel::H3 => 2,
        }
    }

    /// Title run size in half-points
    pub fn size_half_points(&self) -> u32 {
        match self {
            HeadingLevel::H1 => 32,
            HeadingLevel::H2 => 28,
            HeadingLevel::H3 => 24,
        }
    }
}

/// The smallest unit of formatted text: a contiguous span sharing one
/// set of character properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Font size in points
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
    /// Hex color without the leading '#'
    pub color: Option<String>,
}

impl Run {
    /// Plain run with no formatting
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Paragraph content item: a run, or a group of runs behind one
/// hyperlink target. The relationship id is minted at serialization
/// time, so the tree carries only the href.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Run(Run),
    Hyperlink { href: String, runs: Vec<Run> },
}

/// Direct paragraph formatting. Spacing values are twips.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParagraphProps {
    pub alignment: Option<Alignment>,
    pub spacing_before: Option<u32>,
    pub spacing_after: Option<u32>,
}

/// A paragraph: properties plus ordered inline content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphBlock {
    pub props: ParagraphProps,
    pub inlines: Vec<Inline>,
}

impl ParagraphBlock {
    /// Empty paragraph, used for explicit line breaks and layout spacers
    pub fn empty() -> Self {
        Self::default()
    }

    /// Paragraph holding a single plain run
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            props: ParagraphProps::default(),
            inlines: vec![Inline::Run(Run::text(text))],
        }
    }
}

/// One node of the intermediate document tree, in body order
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Numbered section title using one of the heading styles
    Heading { level: HeadingLevel, text: String },
    Paragraph(ParagraphBlock),
    Table(Table),
    /// Hard page break
    PageBreak,
    /// TOC heading plus the field Word regenerates on open
    TableOfContents,
}
