//! Block-level splitter
//!
//! Rewrites a content fragment so that every `p`/`li` open and every
//! `p`/`li`/`br` close sits on an explicit block boundary, strips the
//! `ul`/`ol` wrappers (list semantics are expressed purely by bullet
//! prefixes), then splits and dispatches each block. A fixed-grammar
//! extractor for the known editor vocabulary, not an HTML parser;
//! anything outside the vocabulary falls through to a default
//! paragraph.

use super::inline::{parse_inline, InheritedStyle};
use super::style::extract_style;
use regex_lite::Regex;
use report_model::{Block, Inline, ParagraphBlock, ParagraphProps, Run};
use std::sync::OnceLock;

/// Literal marker inserted at block boundaries before splitting
const BLOCK_BOUNDARY: &str = "|||";

/// Bullet glyph prefixed to list-item blocks
const BULLET: &str = "\u{2022} ";

fn br_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("pattern compiles"))
}

fn p_open_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<p").expect("pattern compiles"))
}

fn p_close_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</p>").expect("pattern compiles"))
}

fn li_open_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<li").expect("pattern compiles"))
}

fn li_close_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</li>").expect("pattern compiles"))
}

fn list_wrapper_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)</?[uo]l>").expect("pattern compiles"))
}

fn li_tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<li[^>]*>|</li>").expect("pattern compiles"))
}

fn p_tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<p[^>]*>|</p>").expect("pattern compiles"))
}

fn starts_with_ci(text: &str, prefix: &str) -> bool {
    text.as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

/// Split a content HTML string into paragraph blocks.
pub fn split_blocks(html: &str) -> Vec<Block> {
    if html.is_empty() {
        return Vec::new();
    }

    let marked = br_pattern().replace_all(html, "</br>|||");
    let marked = p_open_pattern().replace_all(&marked, "|||<p");
    let marked = li_open_pattern().replace_all(&marked, "|||<li");
    let marked = p_close_pattern().replace_all(&marked, "</p>|||");
    let marked = li_close_pattern().replace_all(&marked, "</li>|||");
    let marked = list_wrapper_pattern().replace_all(&marked, "");

    let mut blocks = Vec::new();
    for raw in marked.split(BLOCK_BOUNDARY) {
        let fragment = raw.trim();
        if fragment.is_empty() {
            continue;
        }

        if starts_with_ci(fragment, "<li") {
            let text = li_tag_pattern().replace_all(fragment, "");
            let mut inlines = vec![Inline::Run(Run::text(BULLET))];
            inlines.extend(parse_inline(&text, &InheritedStyle::default()));
            blocks.push(Block::Paragraph(ParagraphBlock {
                props: ParagraphProps::default(),
                inlines,
            }));
        } else if starts_with_ci(fragment, "<p") {
            let style = extract_style(fragment);
            let text = p_tag_pattern().replace_all(fragment, "");
            let inherited = InheritedStyle {
                font_size: style.font_size,
                font_family: style.font_family,
            };
            blocks.push(Block::Paragraph(ParagraphBlock {
                props: ParagraphProps {
                    alignment: style.alignment,
                    ..ParagraphProps::default()
                },
                inlines: parse_inline(&text, &inherited),
            }));
        } else if fragment.starts_with("</br>") {
            blocks.push(Block::Paragraph(ParagraphBlock::empty()));
        } else {
            blocks.push(Block::Paragraph(ParagraphBlock {
                props: ParagraphProps::default(),
                inlines: parse_inline(fragment, &InheritedStyle::default()),
            }));
        }
    }

    blocks
}
