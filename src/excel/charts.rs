//! Charts derived from the consolidated table
//!
//! Rows are picked by the prefix of their label (column 0). Matching is
//! exact and case-sensitive; a label that matches no prefix feeds no chart.

use rust_xlsxwriter::{
    Chart, ChartDataLabel, ChartFormat, ChartLegendPosition, ChartSolidFill, ChartType, Color,
    ColNum, RowNum,
};

use super::table_writer::{col_num, row_num};
use crate::error::ReportResult;
use crate::types::{row_label, CellValue, Row};

/// Fill colour of the first series in a column chart
pub const SERIES_BASE_COLOR: u32 = 0x3366CC;

/// Added to the fill colour for each following series
pub const SERIES_COLOR_STEP: u32 = 10_000;

/// Rows between stacked chart anchors
pub const CHART_ROW_SPACING: RowNum = 15;

pub const X_AXIS_TITLE: &str = "Years";
pub const Y_AXIS_TITLE: &str = "t CO2e";

/// A stacked column chart fed by one scope's category rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeChart {
    pub title: &'static str,
    pub prefix: &'static str,
}

/// Charts embedded next to the consolidated table, in slot order
pub const SCOPE_CHARTS: [ScopeChart; 3] = [
    ScopeChart {
        title: "Scope 1 - Direct Emissions",
        prefix: "1.",
    },
    ScopeChart {
        title: "Scope 2 - Indirect Emissions",
        prefix: "2.",
    },
    ScopeChart {
        title: "Scope 3 - Other Indirect Emissions",
        prefix: "3.",
    },
];

/// Labels of the per-scope total rows
pub const SCOPE_TOTAL_PREFIXES: [&str; 3] = ["SCOPE 1", "SCOPE 2", "SCOPE 3"];

/// Check a row label against chart prefixes
pub fn matches_any(label: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| label.starts_with(prefix))
}

/// Indices of the body rows whose label matches one of `prefixes`
pub fn select_rows(table: &[Row], prefixes: &[&str]) -> Vec<usize> {
    table
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, row)| matches_any(&row_label(row), prefixes))
        .map(|(idx, _)| idx)
        .collect()
}

/// Fill colour of the `index`th series
pub fn series_color(index: usize) -> Color {
    let step = SERIES_COLOR_STEP.saturating_mul(index as u32);
    Color::RGB(SERIES_BASE_COLOR.saturating_add(step) & 0xFF_FF_FF)
}

/// Anchor row of the chart in `slot`
pub fn chart_anchor_row(slot: usize) -> RowNum {
    1 + CHART_ROW_SPACING * slot as RowNum
}

/// Builds charts whose series point into one table on one worksheet
#[derive(Debug, Clone)]
pub struct ChartBuilder<'a> {
    sheet_name: &'a str,
    header_row: RowNum,
    last_col: ColNum,
}

impl<'a> ChartBuilder<'a> {
    /// None when the header has no data columns to plot
    pub fn for_table(
        sheet_name: &'a str,
        start_row: RowNum,
        header: &[CellValue],
    ) -> ReportResult<Option<Self>> {
        if header.len() < 2 {
            return Ok(None);
        }
        Ok(Some(Self {
            sheet_name,
            header_row: start_row,
            last_col: col_num(header.len() - 1)?,
        }))
    }

    /// Column charts are anchored one blank column right of the table
    pub fn anchor_col(&self) -> ColNum {
        self.last_col.saturating_add(2)
    }

    /// Worksheet row of a table row
    pub fn sheet_row(&self, table_row: usize) -> ReportResult<RowNum> {
        row_num(self.header_row, table_row)
    }

    /// One series per table row, categories taken from the header
    pub fn stacked_column(
        &self,
        title: &str,
        table_rows: &[usize],
    ) -> ReportResult<Option<Chart>> {
        if table_rows.is_empty() {
            return Ok(None);
        }

        let mut chart = Chart::new(ChartType::ColumnStacked);
        for (idx, table_row) in table_rows.iter().enumerate() {
            let row = self.sheet_row(*table_row)?;
            chart
                .add_series()
                .set_name((self.sheet_name, row, 0))
                .set_categories((
                    self.sheet_name,
                    self.header_row,
                    1,
                    self.header_row,
                    self.last_col,
                ))
                .set_values((self.sheet_name, row, 1, row, self.last_col))
                .set_format(
                    ChartFormat::new()
                        .set_solid_fill(ChartSolidFill::new().set_color(series_color(idx))),
                );
        }

        chart.title().set_name(title);
        chart.x_axis().set_name(X_AXIS_TITLE);
        chart.y_axis().set_name(Y_AXIS_TITLE);
        chart.legend().set_position(ChartLegendPosition::Bottom);

        Ok(Some(chart))
    }

    /// Share of each row in the last column; rows must be contiguous
    pub fn pie_of_last_column(
        &self,
        title: &str,
        first_row: usize,
        last_row: usize,
    ) -> ReportResult<Option<Chart>> {
        if first_row == 0 || last_row < first_row {
            return Ok(None);
        }

        let first = self.sheet_row(first_row)?;
        let last = self.sheet_row(last_row)?;

        let mut chart = Chart::new(ChartType::Pie);
        chart
            .add_series()
            .set_name((self.sheet_name, self.header_row, self.last_col))
            .set_categories((self.sheet_name, first, 0, last, 0))
            .set_values((self.sheet_name, first, self.last_col, last, self.last_col))
            .set_data_label(ChartDataLabel::new().show_percentage());

        chart.title().set_name(title);
        chart.legend().set_position(ChartLegendPosition::Bottom);

        Ok(Some(chart))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consolidated() -> Vec<Row> {
        vec![
            vec!["Category".into(), "2022".into(), "2023".into()],
            vec!["1.1 Stationary combustion".into(), 10.0.into(), 11.0.into()],
            vec!["1.2 Mobile combustion".into(), 4.0.into(), 5.0.into()],
            vec!["SCOPE 1".into(), 14.0.into(), 16.0.into()],
            vec!["2.1 Purchased electricity".into(), 20.0.into(), 18.0.into()],
            vec!["scope 2".into(), 20.0.into(), 18.0.into()],
            vec!["SCOPE 2".into(), 20.0.into(), 18.0.into()],
            vec!["Other".into(), 1.0.into(), 1.0.into()],
            vec![" 3.1 Purchased goods".into(), 2.0.into(), 2.0.into()],
            vec![],
        ]
    }

    #[test]
    fn test_select_rows_by_prefix() {
        let table = consolidated();
        assert_eq!(select_rows(&table, &[SCOPE_CHARTS[0].prefix]), vec![1, 2]);
        assert_eq!(select_rows(&table, &[SCOPE_CHARTS[1].prefix]), vec![4]);
        assert_eq!(select_rows(&table, &SCOPE_TOTAL_PREFIXES), vec![3, 6]);
    }

    #[test]
    fn test_matching_is_case_sensitive_and_exact_prefix() {
        assert!(matches_any("SCOPE 2", &SCOPE_TOTAL_PREFIXES));
        assert!(!matches_any("scope 2", &SCOPE_TOTAL_PREFIXES));
        assert!(!matches_any(" 3.1 Purchased goods", &["3."]));
        assert!(!matches_any("Total SCOPE 1", &SCOPE_TOTAL_PREFIXES));
    }

    #[test]
    fn test_unmatched_labels_feed_no_chart() {
        let table = consolidated();
        let mut prefixes: Vec<&str> = SCOPE_CHARTS.iter().map(|c| c.prefix).collect();
        prefixes.extend(SCOPE_TOTAL_PREFIXES);

        let selected = select_rows(&table, &prefixes);
        for idx in [5, 7, 8, 9] {
            assert!(!selected.contains(&idx), "row {} should be excluded", idx);
        }
    }

    #[test]
    fn test_header_row_is_never_selected() {
        let table: Vec<Row> = vec![vec!["SCOPE 1 header".into(), "2023".into()]];
        assert!(select_rows(&table, &SCOPE_TOTAL_PREFIXES).is_empty());
    }

    #[test]
    fn test_series_colors() {
        assert_eq!(series_color(0), Color::RGB(0x3366CC));
        assert_eq!(series_color(1), Color::RGB(0x3366CC + 10_000));
        assert_ne!(series_color(2), series_color(3));
    }

    #[test]
    fn test_chart_anchor_rows() {
        assert_eq!(chart_anchor_row(0), 1);
        assert_eq!(chart_anchor_row(1), 16);
        assert_eq!(chart_anchor_row(2), 31);
    }

    #[test]
    fn test_builder_needs_data_columns() {
        let header: Row = vec!["Category".into()];
        assert!(ChartBuilder::for_table("Sheet1", 0, &header)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_anchor_col_leaves_one_blank_column() {
        let header: Row = (0..8).map(|i| CellValue::Number(i as f64)).collect();
        let builder = ChartBuilder::for_table("Consolidated Totals", 0, &header)
            .unwrap()
            .unwrap();
        // Eight columns A..H, chart at J
        assert_eq!(builder.anchor_col(), 9);
    }

    #[test]
    fn test_stacked_column_skips_empty_selection() {
        let table = consolidated();
        let builder = ChartBuilder::for_table("Consolidated Totals", 0, &table[0])
            .unwrap()
            .unwrap();

        assert!(builder.stacked_column("Empty", &[]).unwrap().is_none());
        assert!(builder
            .stacked_column(SCOPE_CHARTS[0].title, &[1, 2])
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_pie_requires_body_rows() {
        let table = consolidated();
        let builder = ChartBuilder::for_table("Scope Summary", 0, &table[0])
            .unwrap()
            .unwrap();

        assert!(builder.pie_of_last_column("Share", 0, 2).unwrap().is_none());
        assert!(builder.pie_of_last_column("Share", 3, 2).unwrap().is_none());
        assert!(builder.pie_of_last_column("Share", 1, 3).unwrap().is_some());
    }
}
