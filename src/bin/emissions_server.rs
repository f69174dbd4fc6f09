//! Emissions Report API Server binary
//!
//! HTTP endpoint rendering JSON emissions documents to Excel workbooks.

use clap::Parser;
use emissions_report::api::{
    run_api_server,
    server::{ApiConfig, DEFAULT_MAX_BODY_BYTES},
};

#[derive(Parser, Debug)]
#[command(name = "emissions-server")]
#[command(version)]
#[command(about = "Emissions Report API Server - JSON emissions tables to Excel over HTTP")]
#[command(long_about = r#"
Emissions Report API Server

Endpoint:
  - POST /process_summary_comparison
      Body: {"data": [YearEntry...], "consolidated": [Row...]}
      200:  Summary_Comparison_Report.xlsx (attachment)
      500:  {"error": "<message>"}

Features:
  - CORS enabled for cross-origin requests
  - Graceful shutdown on SIGINT/SIGTERM
  - Tracing and structured logging (RUST_LOG overrides --debug)

Example usage:
  emissions-server                           # Start on 0.0.0.0:5000
  emissions-server --host 127.0.0.1 --port 8080 --debug

  curl -X POST http://localhost:5000/process_summary_comparison \
    -H "Content-Type: application/json" \
    -d @report.json -o Summary_Comparison_Report.xlsx
"#)]
struct Args {
    /// Host address to bind to (use 127.0.0.1 for local only)
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "REPORT_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "REPORT_PORT")]
    port: u16,

    /// Enable debug logging
    #[arg(short, long, env = "REPORT_DEBUG")]
    debug: bool,

    /// Maximum accepted request body size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES, env = "REPORT_MAX_BODY_BYTES")]
    max_body_bytes: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        debug: args.debug,
        max_body_bytes: args.max_body_bytes,
    };

    run_api_server(config).await
}
