//! API request handlers

use axum::{
    body::Bytes,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::error::{ReportError, ReportResult};
use crate::excel::WorkbookRenderer;
use crate::types::ReportRequest;

/// MIME type of the rendered workbook
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// File name offered to the client
pub const REPORT_FILENAME: &str = "Summary_Comparison_Report.xlsx";

/// Body of every failed request
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Content-Disposition value for the report download
pub fn content_disposition() -> String {
    format!("attachment;filename={}", REPORT_FILENAME)
}

/// Decode and render a raw request body
pub fn render_report(body: &[u8]) -> ReportResult<Vec<u8>> {
    let request = ReportRequest::from_slice(body)?;
    info!(
        years = request.data.len(),
        consolidated_rows = request.consolidated.len(),
        "Rendering summary comparison report"
    );
    WorkbookRenderer::new().render(&request)
}

/// POST /process_summary_comparison - Render the report workbook
///
/// Decoding and rendering run on the blocking pool.
pub async fn process_summary_comparison(body: Bytes) -> Result<Response, ReportError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("report", %request_id);

    let rendered = tokio::task::spawn_blocking(move || span.in_scope(|| render_report(&body)))
        .await
        .map_err(ReportError::from)
        .and_then(|result| result);

    match rendered {
        Ok(bytes) => {
            info!(%request_id, bytes = bytes.len(), "Report rendered");
            Ok((
                [
                    (header::CONTENT_TYPE, XLSX_MIME.to_string()),
                    (header::CONTENT_DISPOSITION, content_disposition()),
                ],
                bytes,
            )
                .into_response())
        }
        Err(e) => {
            error!(%request_id, "Error: {}", e);
            Err(e)
        }
    }
}
