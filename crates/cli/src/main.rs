//! BloomGift CLI - Seeding and diagnostics.
//!
//! # Usage
//!
//! ```bash
//! # Show backend mode and catalog counts
//! bloomgift status
//!
//! # Push the bundled default catalog to the live backend
//! bloomgift seed products
//!
//! # Push the bundled coverage table
//! bloomgift seed cities
//!
//! # Both
//! bloomgift seed all
//! ```
//!
//! Seeding is the "sync defaults" admin action: an idempotent bulk upsert
//! keyed by slug (products) or settings key (cities). It overwrites rows
//! sharing a slug, including ones edited in the admin area.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bloomgift")]
#[command(author, version, about = "BloomGift catalog tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show backend mode and catalog counts
    Status,
    /// Push bundled default data to the live backend
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Bulk-upsert the bundled product catalog (keyed by slug)
    Products,
    /// Rebuild the delivery coverage list from the bundled table
    Cities,
    /// Seed everything
    All,
}

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bloomgift=info,bloomgift_catalog=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = bloomgift_catalog::Catalog::from_env();

    match cli.command {
        Commands::Status => commands::status::run(&catalog).await?,
        Commands::Seed { target } => match target {
            SeedTarget::Products => commands::seed::products(&catalog).await?,
            SeedTarget::Cities => commands::seed::cities(&catalog).await?,
            SeedTarget::All => {
                commands::seed::products(&catalog).await?;
                commands::seed::cities(&catalog).await?;
            }
        },
    }
    Ok(())
}
