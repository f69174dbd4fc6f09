//! Excel rendering for emissions reports
//!
//! This module turns a decoded request document into an .xlsx workbook:
//! - Table writing with title, label and decimal styles
//! - Column widths sized to content
//! - Stacked column and pie charts keyed on row label prefixes

pub mod charts;
mod column_widths;
mod renderer;
mod styles;
mod table_writer;

pub use column_widths::{ColumnWidths, MAX_COLUMN_WIDTH, WIDTH_PADDING};
pub use renderer::{WorkbookRenderer, CONSOLIDATED_SHEET, SCOPE_SUMMARY_SHEET};
pub use styles::{CellStyle, ReportFormats, DECIMAL_FORMAT};
pub use table_writer::{TableLayout, TableWriter};
