//! Emissions Report - JSON emissions tables to a styled Excel workbook
//!
//! This library decodes a document of yearly emissions tables plus a
//! consolidated table, and renders it as an .xlsx workbook with one sheet
//! per year, a consolidated sheet with per-scope charts, and a derived
//! scope summary sheet.
//!
//! # Features
//!
//! - Title rows merged or shaded per table kind
//! - Row labels left-aligned, values centered with two decimals
//! - Column widths sized to the longest value
//! - Stacked column and pie charts selected by row label prefix
//! - HTTP API (`POST /process_summary_comparison`) and offline CLI
//!
//! # Example
//!
//! ```no_run
//! use emissions_report::excel::WorkbookRenderer;
//! use emissions_report::types::ReportRequest;
//!
//! let body = std::fs::read("report.json")?;
//! let request = ReportRequest::from_slice(&body)?;
//!
//! let bytes = WorkbookRenderer::new().render(&request)?;
//! std::fs::write("Summary_Comparison_Report.xlsx", bytes)?;
//! # Ok::<(), emissions_report::error::ReportError>(())
//! ```

pub mod api;
pub mod cli;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{ReportError, ReportResult};
pub use types::{CellValue, ReportRequest, Row, Table, YearEntry};
