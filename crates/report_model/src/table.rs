//! Table nodes for the intermediate block tree
//!
//! Covers exactly what the report layout needs: a fixed column grid,
//! optional single-line borders, optional centering, and one paragraph
//! per cell.

use crate::ParagraphBlock;

/// A table block. Column widths are twips (dxa).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column grid widths
    pub grid: Vec<u32>,
    /// Draw single-line borders around and between cells
    pub bordered: bool,
    /// Center the table horizontally
    pub centered: bool,
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Table with the given column grid, no borders, not centered
    pub fn new(grid: Vec<u32>) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }
}

/// One table row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    /// Minimum row height in twips
    pub height: Option<u32>,
    pub cells: Vec<TableCell>,
}

/// One table cell holding a single paragraph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    /// Cell width in twips
    pub width: u32,
    /// Shading fill as a hex color without '#'
    pub fill: Option<String>,
    pub paragraph: ParagraphBlock,
}

impl TableCell {
    /// Plain cell with the given width and paragraph
    pub fn new(width: u32, paragraph: ParagraphBlock) -> Self {
        Self {
            width,
            fill: None,
            paragraph,
        }
    }

    /// Shaded cell
    pub fn shaded(width: u32, fill: impl Into<String>, paragraph: ParagraphBlock) -> Self {
        Self {
            width,
            fill: Some(fill.into()),
            paragraph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_construction() {
        let mut table = Table::new(vec![2000, 4000]);
        table.rows.push(TableRow {
            height: Some(400),
            cells: vec![
                TableCell::shaded(2000, "002060", ParagraphBlock::text("Label")),
                TableCell::new(4000, ParagraphBlock::text("Value")),
            ],
        });

        assert_eq!(table.grid.len(), 2);
        assert!(!table.bordered);
        assert_eq!(table.rows[0].cells[0].fill.as_deref(), Some("002060"));
        assert!(table.rows[0].cells[1].fill.is_none());
    }
}
