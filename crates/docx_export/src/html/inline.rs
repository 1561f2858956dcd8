//! Inline-markup parser
//!
//! Single left-to-right scan over an inline HTML fragment, maintaining a
//! stack of style frames. Text accumulated between tag boundaries is
//! flushed as a run tagged with a snapshot of the current stack.
//!
//! Tolerance policy: unrecognized tags act as run delimiters and their
//! text content flows on; closing a recognized tag pops the stack even
//! when the nesting is wrong; a `<` without a matching `>` ends the
//! scan. Formatting fidelity may drop, but the output is always a valid
//! run sequence.

use super::style::extract_style;
use regex_lite::Regex;
use report_model::{Inline, Run};
use std::sync::OnceLock;

/// Paragraph-level font settings inherited by runs that have no span
/// override of their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InheritedStyle {
    /// Font size in points
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
}

/// Run text color applied outside hyperlinks
const RUN_COLOR: &str = "000000";

#[derive(Debug)]
enum Frame {
    Bold,
    Italic,
    Underline,
    Span {
        font_size: Option<f32>,
        font_family: Option<String>,
    },
    Anchor {
        /// Index of this anchor's hyperlink group in the output
        inline_index: usize,
    },
}

fn href_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)href\s*=\s*["']([^"']+)["']"#).expect("pattern compiles")
    })
}

/// Parse an inline HTML fragment into runs and hyperlink groups.
///
/// Each `<a>` open starts a new hyperlink group carrying its href; the
/// relationship id is minted later, when the document writer serializes
/// the group, so encounter order and document order stay identical.
pub fn parse_inline(html: &str, inherited: &InheritedStyle) -> Vec<Inline> {
    let mut inlines: Vec<Inline> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut buffer = String::new();

    let mut rest = html;
    while let Some(open) = rest.find('<') {
        buffer.push_str(&rest[..open]);
        flush(&mut buffer, &stack, inherited, &mut inlines);

        let after_open = &rest[open..];
        let Some(close) = after_open.find('>') else {
            // Truncated tag: drop the remainder
            return inlines;
        };
        let tag = &after_open[..=close];
        handle_tag(tag, &mut stack, &mut inlines);
        rest = &after_open[close + 1..];
    }
    buffer.push_str(rest);
    flush(&mut buffer, &stack, inherited, &mut inlines);

    inlines
}

/// Apply one tag to the frame stack
fn handle_tag(tag: &str, stack: &mut Vec<Frame>, inlines: &mut Vec<Inline>) {
    let body = tag.trim_start_matches('<');
    let is_close = body.starts_with('/');
    let name: String = body
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();

    match name.as_str() {
        "b" | "strong" | "i" | "em" | "u" | "span" | "a" => {
            if is_close {
                // Tolerant of unmatched closes: pop whatever is on top
                stack.pop();
                return;
            }
            let frame = match name.as_str() {
                "b" | "strong" => Frame::Bold,
                "i" | "em" => Frame::Italic,
                "u" => Frame::Underline,
                "span" => {
                    let style = extract_style(tag);
                    Frame::Span {
                        font_size: style.font_size,
                        font_family: style.font_family,
                    }
                }
                _ => {
                    let href = href_pattern()
                        .captures(tag)
                        .and_then(|caps| caps.get(1))
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default();
                    inlines.push(Inline::Hyperlink {
                        href,
                        runs: Vec::new(),
                    });
                    Frame::Anchor {
                        inline_index: inlines.len() - 1,
                    }
                }
            };
            stack.push(frame);
        }
        // Unrecognized tags are delimiters only
        _ => {}
    }
}

/// Flush the text buffer as a run snapshotting the current stack
fn flush(
    buffer: &mut String,
    stack: &[Frame],
    inherited: &InheritedStyle,
    inlines: &mut Vec<Inline>,
) {
    if buffer.is_empty() {
        return;
    }
    let text = std::mem::take(buffer);

    let mut run = Run {
        text,
        font_size: inherited.font_size,
        font_family: inherited.font_family.clone(),
        ..Run::default()
    };

    let mut anchor_index = None;
    let mut span_seen = false;
    for frame in stack {
        match frame {
            Frame::Bold => run.bold = true,
            Frame::Italic => run.italic = true,
            Frame::Underline => run.underline = true,
            Frame::Span {
                font_size,
                font_family,
            } if !span_seen => {
                // Outermost span wins; inner spans are ignored
                span_seen = true;
                if font_size.is_some() {
                    run.font_size = *font_size;
                }
                if font_family.is_some() {
                    run.font_family = font_family.clone();
                }
            }
            Frame::Span { .. } => {}
            Frame::Anchor { inline_index } => {
                if anchor_index.is_none() {
                    anchor_index = Some(*inline_index);
                }
            }
        }
    }

    match anchor_index {
        Some(index) => {
            if let Some(Inline::Hyperlink { runs, .. }) = inlines.get_mut(index) {
                runs.push(run);
            }
        }
        None => {
            run.color = Some(RUN_COLOR.to_string());
            inlines.push(Inline::Run(run));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> InheritedStyle {
        InheritedStyle::default()
    }

    fn as_run(inline: &Inline) -> &Run {
        match inline {
            Inline::Run(run) => run,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_and_bold_runs() {
        let inlines = parse_inline("Hello <b>World</b>", &plain());
        assert_eq!(inlines.len(), 2);

        let hello = as_run(&inlines[0]);
        assert_eq!(hello.text, "Hello ");
        assert!(!hello.bold);

        let world = as_run(&inlines[1]);
        assert_eq!(world.text, "World");
        assert!(world.bold);
    }

    #[test]
    fn test_no_empty_runs() {
        let inlines = parse_inline("<b><i>x</i></b>", &plain());
        assert_eq!(inlines.len(), 1);
        let x = as_run(&inlines[0]);
        assert!(x.bold && x.italic);
    }

    #[test]
    fn test_strong_and_em_aliases() {
        let inlines = parse_inline("<strong>a</strong><em>b</em><u>c</u>", &plain());
        assert!(as_run(&inlines[0]).bold);
        assert!(as_run(&inlines[1]).italic);
        assert!(as_run(&inlines[2]).underline);
    }

    #[test]
    fn test_span_overrides_inherited_font() {
        let inherited = InheritedStyle {
            font_size: Some(12.0),
            font_family: Some("Calibri".into()),
        };
        let inlines = parse_inline(
            r#"a<span style="font-size: 20pt">b</span>c"#,
            &inherited,
        );
        assert_eq!(as_run(&inlines[0]).font_size, Some(12.0));
        assert_eq!(as_run(&inlines[1]).font_size, Some(20.0));
        // Family untouched by a size-only span
        assert_eq!(as_run(&inlines[1]).font_family.as_deref(), Some("Calibri"));
        assert_eq!(as_run(&inlines[2]).font_size, Some(12.0));
    }

    #[test]
    fn test_outermost_span_wins() {
        let inlines = parse_inline(
            r#"<span style="font-size: 10pt"><span style="font-size: 30pt">x</span></span>"#,
            &plain(),
        );
        assert_eq!(as_run(&inlines[0]).font_size, Some(10.0));
    }

    #[test]
    fn test_hyperlink_grouping() {
        let inlines = parse_inline(
            r#"see <a href="https://example.com">the <b>docs</b></a> now"#,
            &plain(),
        );
        assert_eq!(inlines.len(), 3);
        match &inlines[1] {
            Inline::Hyperlink { href, runs } => {
                assert_eq!(href, "https://example.com");
                assert_eq!(runs.len(), 2);
                assert_eq!(runs[0].text, "the ");
                assert!(runs[1].bold);
                // Hyperlink runs carry no fixed color
                assert!(runs[0].color.is_none());
            }
            other => panic!("expected hyperlink, got {other:?}"),
        }
        assert_eq!(as_run(&inlines[2]).color.as_deref(), Some("000000"));
    }

    #[test]
    fn test_anchor_without_text_still_emitted() {
        let inlines = parse_inline(r#"<a href="https://example.com"></a>"#, &plain());
        assert_eq!(inlines.len(), 1);
        assert!(matches!(&inlines[0], Inline::Hyperlink { runs, .. } if runs.is_empty()));
    }

    #[test]
    fn test_unknown_tags_are_delimiters() {
        let inlines = parse_inline("a<code>b</code>c", &plain());
        let texts: Vec<&str> = inlines.iter().map(|i| as_run(i).text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
        assert!(!as_run(&inlines[1]).bold);
    }

    #[test]
    fn test_unmatched_close_is_tolerated() {
        let inlines = parse_inline("a</b>b", &plain());
        assert_eq!(inlines.len(), 2);
        assert_eq!(as_run(&inlines[1]).text, "b");
    }

    #[test]
    fn test_truncated_tag_stops_scan() {
        let inlines = parse_inline("keep<b dropped", &plain());
        assert_eq!(inlines.len(), 1);
        assert_eq!(as_run(&inlines[0]).text, "keep");
    }

    #[test]
    fn test_unclosed_tag_flushes_trailing_text() {
        let inlines = parse_inline("<b>unterminated", &plain());
        assert_eq!(inlines.len(), 1);
        assert!(as_run(&inlines[0]).bold);
        assert_eq!(as_run(&inlines[0]).text, "unterminated");
    }
}
