//! Writes row-oriented tables onto a worksheet

use rust_xlsxwriter::{ColNum, Format, RowNum, Worksheet};

use super::styles::{CellStyle, ReportFormats};
use crate::error::{ReportError, ReportResult};
use crate::types::{CellValue, Row};

/// Last addressable row in an .xlsx worksheet (0-indexed)
pub const MAX_ROW: RowNum = 1_048_575;

/// Last addressable column in an .xlsx worksheet (0-indexed)
pub const MAX_COL: ColNum = 16_383;

/// How a table's header and body are styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Merge the header across the table width and show only its first cell
    pub merge_title: bool,
    /// Left-align column 0 of body rows
    pub label_column: bool,
}

impl TableLayout {
    /// Summary and comparison tables
    pub const GRID: TableLayout = TableLayout {
        merge_title: false,
        label_column: false,
    };

    /// Combined scope tables with a merged section title
    pub const SECTION: TableLayout = TableLayout {
        merge_title: true,
        label_column: true,
    };

    /// Consolidated and scope summary tables
    pub const LABELED: TableLayout = TableLayout {
        merge_title: false,
        label_column: true,
    };

    /// Style of a body (non-header) cell
    pub fn body_style(&self, col: usize, cell: &CellValue) -> CellStyle {
        let left = self.label_column && col == 0;
        match (left, cell.is_number()) {
            (true, true) => CellStyle::LeftDecimal,
            (true, false) => CellStyle::Left,
            (false, true) => CellStyle::CenterDecimal,
            (false, false) => CellStyle::Center,
        }
    }
}

/// Convert a table offset to a worksheet row
pub fn row_num(start_row: RowNum, offset: usize) -> ReportResult<RowNum> {
    RowNum::try_from(offset)
        .ok()
        .and_then(|offset| start_row.checked_add(offset))
        .filter(|row| *row <= MAX_ROW)
        .ok_or_else(|| {
            ReportError::Layout(format!(
                "row {} + {} exceeds the worksheet limit of {} rows",
                start_row,
                offset,
                MAX_ROW as u64 + 1
            ))
        })
}

/// Convert a cell index to a worksheet column
pub fn col_num(col: usize) -> ReportResult<ColNum> {
    ColNum::try_from(col)
        .ok()
        .filter(|col| *col <= MAX_COL)
        .ok_or_else(|| {
            ReportError::Layout(format!(
                "column {} exceeds the worksheet limit of {} columns",
                col,
                MAX_COL as u32 + 1
            ))
        })
}

/// Writes tables with the workbook's shared formats
pub struct TableWriter<'a> {
    formats: &'a ReportFormats,
}

impl<'a> TableWriter<'a> {
    pub fn new(formats: &'a ReportFormats) -> Self {
        Self { formats }
    }

    /// Write `table` starting at `start_row`; returns the number of rows it occupies
    pub fn write(
        &self,
        worksheet: &mut Worksheet,
        start_row: RowNum,
        table: &[Row],
        layout: TableLayout,
    ) -> ReportResult<usize> {
        for (offset, row) in table.iter().enumerate() {
            let sheet_row = row_num(start_row, offset)?;

            if offset == 0 {
                self.write_header(worksheet, sheet_row, row, layout)?;
                continue;
            }

            for (col, cell) in row.iter().enumerate() {
                let format = self.formats.get(layout.body_style(col, cell));
                write_cell(worksheet, sheet_row, col_num(col)?, cell, format)?;
            }
        }

        Ok(table.len())
    }

    fn write_header(
        &self,
        worksheet: &mut Worksheet,
        sheet_row: RowNum,
        header: &[CellValue],
        layout: TableLayout,
    ) -> ReportResult<()> {
        let title = self.formats.get(CellStyle::Title);

        if layout.merge_title {
            match header {
                [] => {}
                [only] => write_cell(worksheet, sheet_row, 0, only, title)?,
                [first, ..] => {
                    let last_col = col_num(header.len() - 1)?;
                    worksheet.merge_range(
                        sheet_row,
                        0,
                        sheet_row,
                        last_col,
                        &first.to_string(),
                        title,
                    )?;
                }
            }
            return Ok(());
        }

        for (col, cell) in header.iter().enumerate() {
            write_cell(worksheet, sheet_row, col_num(col)?, cell, title)?;
        }
        Ok(())
    }
}

/// Write a single cell value based on its type
fn write_cell(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    cell: &CellValue,
    format: &Format,
) -> ReportResult<()> {
    match cell {
        CellValue::Empty => {}
        CellValue::Bool(b) => {
            worksheet.write_boolean_with_format(row, col, *b, format)?;
        }
        CellValue::Number(n) => {
            worksheet.write_number_with_format(row, col, *n, format)?;
        }
        CellValue::Text(s) => {
            worksheet.write_string_with_format(row, col, s, format)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::from(s)
    }

    #[test]
    fn test_grid_layout_centers_every_column() {
        let layout = TableLayout::GRID;
        assert_eq!(layout.body_style(0, &text("Fuel")), CellStyle::Center);
        assert_eq!(layout.body_style(2, &text("n/a")), CellStyle::Center);
        assert_eq!(
            layout.body_style(0, &CellValue::Number(1.0)),
            CellStyle::CenterDecimal
        );
    }

    #[test]
    fn test_labeled_layout_left_aligns_first_column() {
        for layout in [TableLayout::LABELED, TableLayout::SECTION] {
            assert_eq!(layout.body_style(0, &text("1.1 Fuel")), CellStyle::Left);
            assert_eq!(layout.body_style(1, &text("-")), CellStyle::Center);
            assert_eq!(
                layout.body_style(1, &CellValue::Number(12.345)),
                CellStyle::CenterDecimal
            );
            assert_eq!(
                layout.body_style(0, &CellValue::Number(7.0)),
                CellStyle::LeftDecimal
            );
        }
    }

    #[test]
    fn test_bool_cells_are_not_decimal() {
        assert_eq!(
            TableLayout::LABELED.body_style(1, &CellValue::Bool(true)),
            CellStyle::Center
        );
    }

    #[test]
    fn test_row_num_limits() {
        assert_eq!(row_num(10, 5).unwrap(), 15);
        assert_eq!(row_num(0, MAX_ROW as usize).unwrap(), MAX_ROW);
        assert!(row_num(1, MAX_ROW as usize).is_err());
        assert!(row_num(RowNum::MAX, 1).is_err());
    }

    #[test]
    fn test_col_num_limits() {
        assert_eq!(col_num(0).unwrap(), 0);
        assert_eq!(col_num(16_383).unwrap(), 16_383);
        let err = col_num(16_384).unwrap_err();
        assert!(err.to_string().contains("16384 columns"));
    }

    #[test]
    fn test_write_returns_row_count() {
        let formats = ReportFormats::new();
        let writer = TableWriter::new(&formats);
        let mut worksheet = Worksheet::new();
        let table = vec![
            vec![text("Scope"), text("2022"), text("2023")],
            vec![text("1.1 Fuel"), 10.0.into(), 12.5.into()],
            vec![text("short row")],
        ];

        let rows = writer
            .write(&mut worksheet, 4, &table, TableLayout::LABELED)
            .unwrap();
        assert_eq!(rows, 3);
    }

    #[test]
    fn test_write_merged_title_variants() {
        let formats = ReportFormats::new();
        let writer = TableWriter::new(&formats);
        let mut worksheet = Worksheet::new();

        let wide = vec![vec![text("Combined Scopes"), text(""), text("")]];
        let single = vec![vec![text("Combined Scopes")]];
        let empty_header: Vec<Row> = vec![vec![]];

        writer
            .write(&mut worksheet, 0, &wide, TableLayout::SECTION)
            .unwrap();
        writer
            .write(&mut worksheet, 2, &single, TableLayout::SECTION)
            .unwrap();
        writer
            .write(&mut worksheet, 4, &empty_header, TableLayout::SECTION)
            .unwrap();
    }

    #[test]
    fn test_write_empty_table() {
        let formats = ReportFormats::new();
        let writer = TableWriter::new(&formats);
        let mut worksheet = Worksheet::new();
        let rows = writer
            .write(&mut worksheet, 0, &[], TableLayout::GRID)
            .unwrap();
        assert_eq!(rows, 0);
    }
}
