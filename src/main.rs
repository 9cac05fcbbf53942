//! Example CLI front end for the shortening controller.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run -- https://example.com/some/long/path
//!
//! # Emit the raw state snapshot as JSON
//! cargo run -- --json https://example.com
//! ```
//!
//! # Environment Variables
//!
//! - `TINYURL_API_KEY` (required): bearer credential for the TinyURL API
//! - `TINYURL_API_BASE` (optional): override the API base URL
//! - `RUST_LOG` / `LOG_FORMAT` (optional): logging configuration

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tinylink::application::ShorteningController;
use tinylink::config::{self, Config};
use tinylink::infrastructure::TinyUrlGateway;

/// Shorten a URL through the TinyURL API.
#[derive(Parser)]
#[command(name = "tinylink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The URL to shorten
    url: String,

    /// Print the full state snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let gateway = Arc::new(TinyUrlGateway::from_config(&config));
    let controller = ShorteningController::new(gateway);

    let snapshot = controller.submit(&cli.url).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        if snapshot.error_message.is_some() {
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Some(link) = &snapshot.result {
        println!("{} {}", "Shortened:".green().bold(), link.short_url);
        println!("{} {}", "Original: ".dimmed(), link.original_url);
        return Ok(());
    }

    if let Some(message) = &snapshot.error_message {
        eprintln!("{} {}", "Error:".red().bold(), message);
        std::process::exit(1);
    }

    Ok(())
}
