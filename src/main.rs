use clap::{Parser, Subcommand};
use emissions_report::api::server::{ApiConfig, DEFAULT_MAX_BODY_BYTES};
use emissions_report::cli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "emissions-report")]
#[command(about = "Render yearly emissions tables into a styled Excel workbook.")]
#[command(long_about = "Emissions Report - JSON emissions tables to Excel (.xlsx)

Each year entry becomes a worksheet with its summary, comparison and
combined scope tables. The consolidated table gets its own worksheet with
stacked column charts for Scope 1, 2 and 3, and rows labeled 'SCOPE 1',
'SCOPE 2', 'SCOPE 3' feed a derived Scope Summary sheet.

COMMANDS:
  render  - Render a JSON document to an .xlsx file
  serve   - Start the HTTP API (POST /process_summary_comparison)

EXAMPLES:
  emissions-report render report.json report.xlsx
  emissions-report serve --host 127.0.0.1 --port 8080 --debug")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Render a report document to Excel.

INPUT FORMAT:
  {
    \"data\": [
      {\"year\": 2023, \"summary\": [[...]], \"comparison\": [[...]], \"combined\": [[...]]}
    ],
    \"consolidated\": [[\"Category\", \"2022\", \"2023\"], [\"1.1 Fuel\", 10.5, 11.2]]
  }

Row 0 of every table is its header. Cells may be strings, numbers,
booleans or null.

EXAMPLE:
  emissions-report render report.json Summary_Comparison_Report.xlsx")]
    /// Render a JSON report document to .xlsx
    Render {
        /// Path to the JSON report document
        input: PathBuf,

        /// Output Excel file path (.xlsx)
        output: PathBuf,

        /// Show verbose render steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Start the HTTP API server
    Serve {
        /// Host address to bind to
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
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            verbose,
        } => Ok(cli::render(input, output, verbose)?),

        Commands::Serve {
            host,
            port,
            debug,
            max_body_bytes,
        } => cli::serve(ApiConfig {
            host,
            port,
            debug,
            max_body_bytes,
        }),
    }
}
