//! Document assembler
//!
//! Folds a project tree plus its metadata into the intermediate block
//! sequence: title page, changelog page, table-of-contents page, then
//! the section content. Renderers serialize the sequence; nothing here
//! knows about XML.

use crate::html::split_blocks;
use report_model::{
    parse_changelog, recent_for_project, Alignment, Block, ChangelogRow, DocInfo, HeadingLevel,
    Inline, ParagraphBlock, ParagraphProps, Project, Run, Section, Table, TableCell, TableRow,
    VersionHistoryEntry,
};
use std::collections::HashMap;

/// Spacer paragraphs between the title block and the info table; fixed
/// layout constants mimicking the template page, not derived from
/// content size.
const SPACERS_BEFORE_INFO_TABLE: usize = 29;
const SPACERS_AFTER_INFO_TABLE: usize = 10;

/// How many version-history entries the fallback table shows
const HISTORY_LIMIT: usize = 5;

/// Accent color shared with the heading styles
const ACCENT_FILL: &str = "2563EB";
/// Label-cell fill in the document-info table
const INFO_LABEL_FILL: &str = "002060";

/// Everything the export needs besides the project itself. All lookups
/// are keyed by project id; absent entries render as empty values.
#[derive(Debug, Clone, Default)]
pub struct ExportContext {
    /// JSON-encoded changelog per project id
    pub changelog: HashMap<String, String>,
    /// Flat version history shared across projects
    pub version_history: Vec<VersionHistoryEntry>,
    /// Document-info records per project id
    pub doc_info: HashMap<String, DocInfo>,
    /// Header text; may embed the `{{page}}` token
    pub header_text: String,
    /// Footer text; may embed the `{{page}}` token
    pub footer_text: String,
}

/// Assemble the full block sequence for a project.
pub fn compose_document(project: &Project, ctx: &ExportContext) -> Vec<Block> {
    let mut blocks = Vec::new();

    title_page(&mut blocks, project, ctx);
    changelog_page(&mut blocks, project, ctx);

    blocks.push(Block::PageBreak);
    blocks.push(Block::TableOfContents);
    blocks.push(Block::PageBreak);

    for (index, section) in project.sections.iter().enumerate() {
        fold_section(&mut blocks, section, 1);
        if index + 1 < project.sections.len() {
            blocks.push(Block::Paragraph(ParagraphBlock {
                props: ParagraphProps {
                    spacing_after: Some(240),
                    ..ParagraphProps::default()
                },
                inlines: Vec::new(),
            }));
        }
    }

    blocks
}

fn title_page(blocks: &mut Vec<Block>, project: &Project, ctx: &ExportContext) {
    blocks.push(Block::Paragraph(ParagraphBlock {
        props: ParagraphProps {
            alignment: Some(Alignment::Center),
            spacing_before: Some(480),
            spacing_after: Some(480),
        },
        inlines: vec![Inline::Run(Run {
            text: project.name.clone(),
            bold: true,
            font_size: Some(36.0),
            ..Run::default()
        })],
    }));

    if !project.description.is_empty() {
        blocks.push(Block::Paragraph(ParagraphBlock {
            props: ParagraphProps {
                alignment: Some(Alignment::Center),
                spacing_after: Some(240),
                ..ParagraphProps::default()
            },
            inlines: vec![Inline::Run(Run {
                text: project.description.clone(),
                font_size: Some(18.0),
                ..Run::default()
            })],
        }));
    }

    for _ in 0..SPACERS_BEFORE_INFO_TABLE {
        blocks.push(Block::Paragraph(ParagraphBlock::empty()));
    }

    let info = ctx.doc_info.get(&project.id).cloned().unwrap_or_default();
    blocks.push(Block::Table(doc_info_table(&info)));

    for _ in 0..SPACERS_AFTER_INFO_TABLE {
        blocks.push(Block::Paragraph(ParagraphBlock::empty()));
    }
}

/// The fixed two-column info table: shaded label cells with white bold
/// text, plain value cells. Missing values render as empty cells.
fn doc_info_table(info: &DocInfo) -> Table {
    let rows: [(&str, &str); 9] = [
        ("Document Title:", &info.title),
        ("Author:", &info.author),
        ("Document Owner:", &info.doc_owner),
        ("Process Owner:", &info.proc_owner),
        ("Version No:", &info.version),
        ("Effective Date:", &info.eff_date),
        ("Last Reviewed Date:", &info.last_rev),
        ("Next Reviewed Date:", &info.next_rev),
        ("Document Link:", &info.link),
    ];

    let mut table = Table::new(vec![2000, 4000]);
    table.centered = true;
    for (label, value) in rows {
        table.rows.push(TableRow {
            height: None,
            cells: vec![
                TableCell::shaded(
                    2000,
                    INFO_LABEL_FILL,
                    ParagraphBlock {
                        props: ParagraphProps::default(),
                        inlines: vec![Inline::Run(Run {
                            text: label.to_string(),
                            bold: true,
                            color: Some("FFFFFF".to_string()),
                            ..Run::default()
                        })],
                    },
                ),
                TableCell::new(4000, ParagraphBlock::text(value)),
            ],
        });
    }
    table
}

fn changelog_page(blocks: &mut Vec<Block>, project: &Project, ctx: &ExportContext) {
    blocks.push(Block::Paragraph(ParagraphBlock {
        props: ParagraphProps {
            spacing_before: Some(840),
            spacing_after: Some(840),
            ..ParagraphProps::default()
        },
        inlines: vec![Inline::Run(Run {
            text: "Document Changelog".to_string(),
            bold: true,
            font_size: Some(16.0),
            ..Run::default()
        })],
    }));

    let custom = ctx.changelog.get(&project.id).and_then(|raw| {
        let rows = parse_changelog(raw);
        if rows.is_none() {
            tracing::warn!(
                project_id = %project.id,
                "changelog is not a JSON row array; falling back to version history"
            );
        }
        rows
    });

    if let Some(rows) = custom {
        blocks.push(Block::Table(changelog_table(&rows)));
        return;
    }

    let recent = recent_for_project(&ctx.version_history, &project.id, HISTORY_LIMIT);
    if recent.is_empty() {
        blocks.push(Block::Paragraph(ParagraphBlock::text(
            "No version history available.",
        )));
    } else {
        blocks.push(Block::Table(history_table(&recent)));
    }
}

fn header_cell(width: u32, text: &str) -> TableCell {
    TableCell::shaded(
        width,
        ACCENT_FILL,
        ParagraphBlock {
            props: ParagraphProps {
                alignment: Some(Alignment::Center),
                ..ParagraphProps::default()
            },
            inlines: vec![Inline::Run(Run {
                text: text.to_string(),
                bold: true,
                font_size: Some(10.0),
                color: Some("FFFFFF".to_string()),
                ..Run::default()
            })],
        },
    )
}

fn data_cell(width: u32, text: &str) -> TableCell {
    TableCell::new(
        width,
        ParagraphBlock {
            props: ParagraphProps {
                spacing_after: Some(0),
                ..ParagraphProps::default()
            },
            inlines: vec![Inline::Run(Run {
                text: text.to_string(),
                font_size: Some(10.0),
                ..Run::default()
            })],
        },
    )
}

/// Bordered 6-column table from the project's custom changelog rows
fn changelog_table(rows: &[ChangelogRow]) -> Table {
    const WIDTHS: [u32; 6] = [2000, 2000, 2000, 2000, 2400, 4000];
    const HEADERS: [&str; 6] = [
        "Version Number",
        "Approved Date",
        "Author",
        "Reviewer",
        "Approver for Change",
        "Description",
    ];

    let mut table = Table::new(WIDTHS.to_vec());
    table.bordered = true;

    table.rows.push(TableRow {
        height: Some(400),
        cells: HEADERS
            .iter()
            .zip(WIDTHS)
            .map(|(header, width)| header_cell(width, header))
            .collect(),
    });

    for row in rows {
        let values: [&str; 6] = [
            &row.version,
            &row.date,
            &row.author,
            &row.reviewer,
            &row.approver,
            &row.desc,
        ];
        table.rows.push(TableRow {
            height: Some(400),
            cells: values
                .iter()
                .zip(WIDTHS)
                .map(|(value, width)| data_cell(width, value))
                .collect(),
        });
    }

    table
}

/// Bordered 3-column fallback table from version history, numbered in
/// descending order (most recent entry gets the highest number).
fn history_table(entries: &[&VersionHistoryEntry]) -> Table {
    const WIDTHS: [u32; 3] = [2000, 6000, 2000];

    let mut table = Table::new(WIDTHS.to_vec());
    table.bordered = true;

    table.rows.push(TableRow {
        height: Some(400),
        cells: vec![
            header_cell(2000, "Version"),
            header_cell(6000, "Description"),
            header_cell(2000, "Date"),
        ],
    });

    for (index, entry) in entries.iter().enumerate() {
        let number = (entries.len() - index).to_string();
        table.rows.push(TableRow {
            height: Some(400),
            cells: vec![
                data_cell(2000, &number),
                data_cell(6000, &entry.description),
                data_cell(2000, &entry.date_string()),
            ],
        });
    }

    table
}

/// Generic tree fold over the section tree. Depth maps onto the heading
/// style; depth never increases the level past Heading3.
fn fold_section(blocks: &mut Vec<Block>, section: &Section, depth: usize) {
    blocks.push(Block::Heading {
        level: HeadingLevel::from_depth(depth),
        text: section.title.clone(),
    });
    if !section.content.is_empty() {
        blocks.extend(split_blocks(&section.content));
    }
    for sub in &section.subsections {
        fold_section(blocks, sub, depth + 1);
    }
}
