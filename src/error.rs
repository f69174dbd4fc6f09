use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
