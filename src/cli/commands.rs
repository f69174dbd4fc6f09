use crate::api::{run_api_server, server::ApiConfig};
use crate::error::ReportResult;
use crate::excel::{WorkbookRenderer, CONSOLIDATED_SHEET};
use crate::types::ReportRequest;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Execute the render command
pub fn render(input: PathBuf, output: PathBuf, verbose: bool) -> ReportResult<()> {
    println!("{}", "📊 Emissions Report - Render".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if verbose {
        println!("{}", "📖 Reading report document...".cyan());
    }

    let body = fs::read(&input)?;
    let request = ReportRequest::from_slice(&body)?;

    if verbose {
        println!(
            "   Found {} years, {} consolidated rows\n",
            request.data.len(),
            request.consolidated.len()
        );
        for entry in &request.data {
            println!(
                "   {} - summary {}, comparison {}, combined {}",
                entry.sheet_name().bright_blue(),
                entry.summary.len(),
                entry.comparison.len(),
                entry.combined.len()
            );
        }
        println!("   {}\n", CONSOLIDATED_SHEET.bright_blue());
        println!("{}", "📊 Rendering workbook...".cyan());
    }

    let bytes = WorkbookRenderer::new().render(&request)?;
    fs::write(&output, &bytes)?;

    println!("{}", "✅ Render Complete!".bold().green());
    println!("   Excel file: {} ({} bytes)\n", output.display(), bytes.len());

    Ok(())
}

/// Execute the serve command
pub fn serve(config: ApiConfig) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_api_server(config))
}
