//! Report API Server module
//!
//! Provides the HTTP endpoint that renders report documents to Excel.
//! Run with `emissions-report serve` or `emissions-server`.

pub mod handlers;
pub mod server;

pub use server::{build_router, run_api_server};
