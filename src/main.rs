//! Todo MCP - Main Entry Point
//!
//! Runs the interactive console by default, or the MCP server over stdio
//! with `--mcp`. The actual implementation is in the `todo_mcp` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use std::io;
use std::path::PathBuf;
use todo_mcp::Config;
use todo_mcp::TodoServerHandler;
use todo_mcp::console::ConsoleInterface;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Todo list manager - interactive console or MCP server for AI agents
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task data file (TOML); tasks stay in memory when omitted
    file: Option<PathBuf>,

    /// Serve the task list as an MCP server over stdio instead of the console
    #[arg(long)]
    mcp: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "todo_mcp=debug" (RUST_LOG takes precedence)
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    /// Build the application config: file first, then command-line overrides
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(file) = self.file {
            config.data_file = Some(file);
        }
        if let Some(log) = self.log {
            config.log_filter = log;
        }
        Ok(config)
    }
}

/// Logs go to stderr so stdout stays clean for the MCP stdio transport
fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mcp = args.mcp;
    let config = args.into_config()?;
    init_tracing(&config);

    if mcp {
        let handler = TodoServerHandler::new(&config)?;
        info!("serving MCP over stdio");
        serve_stdio(handler).await?;
    } else {
        let mut console = ConsoleInterface::new(&config, io::stdout())?;
        console.run(io::stdin().lock())?;
    }
    Ok(())
}
