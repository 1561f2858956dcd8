//! Inline-style extraction
//!
//! An explicitly enumerated pattern set, not a CSS engine: `text-align`,
//! `font-size` in points, and `font-family`. The first occurrence of
//! each property wins; every other declaration is ignored by design.

use regex_lite::Regex;
use report_model::Alignment;
use std::sync::OnceLock;

/// Style properties recognized on block and span tags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub alignment: Option<Alignment>,
    /// Font size in points
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
}

fn align_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)text-align\s*:\s*(center|right|left)").expect("pattern compiles")
    })
}

fn size_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)font-size\s*:\s*([0-9.]+)pt").expect("pattern compiles"))
}

fn family_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)font-family\s*:\s*([^;"']+)"#).expect("pattern compiles")
    })
}

/// Extract the recognized style properties from an HTML fragment,
/// typically a single opening tag or a whole block.
pub fn extract_style(fragment: &str) -> InlineStyle {
    let alignment = align_pattern()
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Alignment::parse(m.as_str()));

    let font_size = size_pattern()
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f32>().ok());

    let font_family = family_pattern()
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|family| !family.is_empty());

    InlineStyle {
        alignment,
        font_size,
        font_family,
    }
}
