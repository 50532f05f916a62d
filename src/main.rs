//! Pizza Dough Calculator (doughcalc)
//!
//! An MCP server for pizza dough formulation and production planning.

use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use doughcalc::build_info;
use doughcalc::mcp::DoughService;
use doughcalc::store::{InMemoryRecipeRepository, InMemoryWidgetRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays free for the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("doughcalc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = DoughService::new(
        Arc::new(InMemoryRecipeRepository::new()),
        Arc::new(InMemoryWidgetRepository::new()),
    );

    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
