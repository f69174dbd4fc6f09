//! Column widths sized to the longest value in each column

use rust_xlsxwriter::Worksheet;

use super::table_writer::col_num;
use crate::error::ReportResult;
use crate::types::CellValue;

/// Characters added to the longest value of a column
pub const WIDTH_PADDING: usize = 2;

/// Excel rejects column widths above 255 characters
pub const MAX_COLUMN_WIDTH: usize = 255;

/// Per-column widths measured over every row written to one sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    widths: Vec<usize>,
}

impl ColumnWidths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure all rows of one or more tables
    pub fn measure<'a, I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a R>,
        R: AsRef<[CellValue]> + 'a,
    {
        let mut widths = Self::new();
        for row in rows {
            widths.add_row(row.as_ref());
        }
        widths
    }

    pub fn add_row(&mut self, row: &[CellValue]) {
        if self.widths.len() < row.len() {
            self.widths.resize(row.len(), 0);
        }
        for (col, cell) in row.iter().enumerate() {
            let width = (cell.display_width() + WIDTH_PADDING).min(MAX_COLUMN_WIDTH);
            self.widths[col] = self.widths[col].max(width);
        }
    }

    /// Width of a column, if any row reached it
    pub fn get(&self, col: usize) -> Option<usize> {
        self.widths.get(col).copied()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Set the measured widths on a worksheet
    pub fn apply(&self, worksheet: &mut Worksheet) -> ReportResult<()> {
        for (col, width) in self.widths.iter().enumerate() {
            worksheet.set_column_width(col_num(col)?, *width as f64)?;
        }
        Ok(())
    }
}
