//! Workbook renderer: request document in, .xlsx bytes out

use rust_xlsxwriter::{Workbook, Worksheet};
use tracing::debug;

use super::charts::{
    chart_anchor_row, select_rows, ChartBuilder, SCOPE_CHARTS, SCOPE_TOTAL_PREFIXES,
};
use super::column_widths::ColumnWidths;
use super::styles::ReportFormats;
use super::table_writer::{row_num, TableLayout, TableWriter};
use crate::error::ReportResult;
use crate::types::{CellValue, ReportRequest, Row, YearEntry};

/// Name of the consolidated worksheet
pub const CONSOLIDATED_SHEET: &str = "Consolidated Totals";

/// Name of the derived worksheet comparing scope totals
pub const SCOPE_SUMMARY_SHEET: &str = "Scope Summary";

/// Blank rows between tables on a year sheet
const TABLE_SPACING: usize = 1;

/// Renders a report document into a workbook
pub struct WorkbookRenderer {
    formats: ReportFormats,
}

impl WorkbookRenderer {
    pub fn new() -> Self {
        Self {
            formats: ReportFormats::new(),
        }
    }

    /// Render the document and serialize it to .xlsx bytes
    pub fn render(&self, request: &ReportRequest) -> ReportResult<Vec<u8>> {
        let mut workbook = self.build(request)?;
        let bytes = workbook.save_to_buffer()?;
        debug!("Serialized workbook ({} bytes)", bytes.len());
        Ok(bytes)
    }

    /// Build the in-memory workbook
    pub fn build(&self, request: &ReportRequest) -> ReportResult<Workbook> {
        let mut workbook = Workbook::new();

        for entry in &request.data {
            workbook.push_worksheet(self.year_sheet(entry)?);
        }

        workbook.push_worksheet(self.consolidated_sheet(&request.consolidated)?);

        if let Some(summary) = self.scope_summary_sheet(&request.consolidated)? {
            workbook.push_worksheet(summary);
        }

        Ok(workbook)
    }

    /// Summary, comparison and combined tables stacked on one sheet
    fn year_sheet(&self, entry: &YearEntry) -> ReportResult<Worksheet> {
        let name = entry.sheet_name();
        debug!("Rendering worksheet '{}'", name);

        let mut worksheet = Worksheet::new();
        worksheet.set_name(&name)?;

        let writer = TableWriter::new(&self.formats);
        let mut cursor = 0;

        cursor += writer.write(
            &mut worksheet,
            row_num(0, cursor)?,
            &entry.summary,
            TableLayout::GRID,
        )?;
        cursor += TABLE_SPACING;

        cursor += writer.write(
            &mut worksheet,
            row_num(0, cursor)?,
            &entry.comparison,
            TableLayout::GRID,
        )?;
        cursor += TABLE_SPACING;

        writer.write(
            &mut worksheet,
            row_num(0, cursor)?,
            &entry.combined,
            TableLayout::SECTION,
        )?;

        ColumnWidths::measure(
            entry
                .summary
                .iter()
                .chain(&entry.comparison)
                .chain(&entry.combined),
        )
        .apply(&mut worksheet)?;

        Ok(worksheet)
    }

    /// Consolidated table with one stacked column chart per scope
    fn consolidated_sheet(&self, table: &[Row]) -> ReportResult<Worksheet> {
        debug!("Rendering worksheet '{}'", CONSOLIDATED_SHEET);

        let mut worksheet = Worksheet::new();
        worksheet.set_name(CONSOLIDATED_SHEET)?;

        TableWriter::new(&self.formats).write(
            &mut worksheet,
            0,
            table,
            TableLayout::LABELED,
        )?;
        ColumnWidths::measure(table).apply(&mut worksheet)?;

        let Some(builder) = chart_builder(CONSOLIDATED_SHEET, table)? else {
            debug!("Consolidated table has no data columns, skipping charts");
            return Ok(worksheet);
        };

        for (slot, scope) in SCOPE_CHARTS.iter().enumerate() {
            let rows = select_rows(table, &[scope.prefix]);
            match builder.stacked_column(scope.title, &rows)? {
                Some(chart) => {
                    debug!("Chart '{}' with {} series", scope.title, rows.len());
                    worksheet.insert_chart(
                        chart_anchor_row(slot),
                        builder.anchor_col(),
                        &chart,
                    )?;
                }
                None => debug!(
                    "No rows labeled '{}*', skipping '{}'",
                    scope.prefix, scope.title
                ),
            }
        }

        Ok(worksheet)
    }

    /// Scope total rows pulled out of the consolidated table, with trend
    /// and share charts
    fn scope_summary_sheet(&self, consolidated: &[Row]) -> ReportResult<Option<Worksheet>> {
        let Some(header) = consolidated.first() else {
            return Ok(None);
        };

        let total_rows = select_rows(consolidated, &SCOPE_TOTAL_PREFIXES);
        if total_rows.is_empty() {
            debug!("No scope total rows, skipping '{}'", SCOPE_SUMMARY_SHEET);
            return Ok(None);
        }

        debug!("Rendering worksheet '{}'", SCOPE_SUMMARY_SHEET);

        let table: Vec<Row> = std::iter::once(header.clone())
            .chain(total_rows.iter().map(|idx| consolidated[*idx].clone()))
            .collect();

        let mut worksheet = Worksheet::new();
        worksheet.set_name(SCOPE_SUMMARY_SHEET)?;

        TableWriter::new(&self.formats).write(
            &mut worksheet,
            0,
            &table,
            TableLayout::LABELED,
        )?;
        ColumnWidths::measure(&table).apply(&mut worksheet)?;

        let Some(builder) = chart_builder(SCOPE_SUMMARY_SHEET, &table)? else {
            return Ok(Some(worksheet));
        };

        let body_rows: Vec<usize> = (1..table.len()).collect();
        if let Some(chart) = builder.stacked_column("Emissions by Scope", &body_rows)? {
            worksheet.insert_chart(chart_anchor_row(0), builder.anchor_col(), &chart)?;
        }

        let latest = header.last().map(CellValue::to_string).unwrap_or_default();
        let title = format!("Scope Share {}", latest).trim_end().to_string();
        if let Some(chart) = builder.pie_of_last_column(&title, 1, table.len() - 1)? {
            worksheet.insert_chart(chart_anchor_row(1), builder.anchor_col(), &chart)?;
        }

        Ok(Some(worksheet))
    }
}

impl Default for WorkbookRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn chart_builder<'a>(
    sheet_name: &'a str,
    table: &[Row],
) -> ReportResult<Option<ChartBuilder<'a>>> {
    match table.first() {
        Some(header) => ChartBuilder::for_table(sheet_name, 0, header),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> ReportRequest {
        serde_json::from_value(value).unwrap()
    }

    fn sheet_names(workbook: &mut Workbook) -> Vec<String> {
        workbook
            .worksheets_mut()
            .iter()
            .map(|ws| ws.name())
            .collect()
    }

    #[test]
    fn test_empty_document_still_has_consolidated_sheet() {
        let renderer = WorkbookRenderer::new();
        let mut workbook = renderer.build(&ReportRequest::default()).unwrap();
        assert_eq!(sheet_names(&mut workbook), vec![CONSOLIDATED_SHEET]);
    }

    #[test]
    fn test_one_sheet_per_year_in_input_order() {
        let doc = request(json!({
            "data": [
                {"year": 2023, "summary": [["A"]], "comparison": [], "combined": []},
                {"year": 2021, "summary": [], "comparison": [["B"]], "combined": [["C", "", ""]]}
            ],
            "consolidated": [["Category", "2021", "2023"], ["1.1 Fuel", 1, 2]]
        }));

        let mut workbook = WorkbookRenderer::new().build(&doc).unwrap();
        assert_eq!(
            sheet_names(&mut workbook),
            vec!["Year 2023", "Year 2021", CONSOLIDATED_SHEET]
        );
    }

    #[test]
    fn test_scope_summary_added_when_totals_exist() {
        let doc = request(json!({
            "consolidated": [
                ["Category", "2022", "2023"],
                ["SCOPE 1", 14, 16],
                ["2.1 Electricity", 20, 18],
                ["SCOPE 2", 20, 18]
            ]
        }));

        let mut workbook = WorkbookRenderer::new().build(&doc).unwrap();
        assert_eq!(
            sheet_names(&mut workbook),
            vec![CONSOLIDATED_SHEET, SCOPE_SUMMARY_SHEET]
        );
    }

    #[test]
    fn test_duplicate_years_fail_on_save() {
        let entry = json!({"year": 2023, "summary": [], "comparison": [], "combined": []});
        let doc = request(json!({ "data": [entry.clone(), entry] }));

        assert!(WorkbookRenderer::new().render(&doc).is_err());
    }

    #[test]
    fn test_render_produces_zip_container() {
        let bytes = WorkbookRenderer::new()
            .render(&ReportRequest::default())
            .unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
