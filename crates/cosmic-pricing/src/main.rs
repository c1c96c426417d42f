//! cosmic-quote
//!
//! Prices a JSON cart for one actor and prints the checkout summary.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cosmic_common::{Actor, VERSION};
use cosmic_pricing::{
    checkout::{Cart, CartLine},
    config::StorefrontConfig,
    CosmicPricing,
};

#[derive(Parser)]
#[command(name = "cosmic-quote")]
#[command(about = "Price a cart with CosmicStore personalized pricing")]
struct Cli {
    /// Cart file: {"actor": {...}, "lines": [{"item": {...}, "quantity": n}]}
    #[arg(long)]
    cart: PathBuf,
    /// JSON config file; defaults plus COSMIC_* environment otherwise
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pretty-print the summary
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Deserialize)]
struct QuoteRequest {
    #[serde(default)]
    actor: Actor,
    lines: Vec<CartLine>,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    info!("cosmic-quote v{}", VERSION);

    let config = match &cli.config {
        Some(path) => StorefrontConfig::from_json_file(path)?,
        None => StorefrontConfig::load()?,
    };
    let service = CosmicPricing::new(config)?;

    let raw = std::fs::read_to_string(&cli.cart)
        .with_context(|| format!("failed to read cart file {}", cli.cart.display()))?;
    let request: QuoteRequest = serde_json::from_str(&raw)
        .with_context(|| format!("invalid cart file {}", cli.cart.display()))?;

    let cart = Cart::from_lines(request.lines);
    let summary = service.checkout(&cart, &request.actor)?;
    info!(
        lines = summary.lines.len(),
        total = %summary.total,
        tier = ?service.tier_of(&request.actor),
        "Priced cart"
    );

    let out = if cli.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{out}");
    Ok(())
}
