//! Viajero Card CLI - render membership card artifacts.

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use viajero_card_core::Config;

#[derive(Parser)]
#[command(name = "viajero-card")]
#[command(about = "Render Viajero membership card artifacts", long_about = None)]
struct Cli {
    /// JSON config file overriding the built-in defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a loyalty number as a barcode
    Barcode {
        /// Loyalty number; separators are ignored
        number: String,
        /// Bar height in pixels
        #[arg(long)]
        height: Option<f64>,
        /// Bar color
        #[arg(long, default_value = viajero_card_core::constants::BRAND_COLOR)]
        color: String,
        /// Write the SVG here
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Pick a legible foreground for a background color
    Contrast {
        /// Background as #RRGGBB
        color: String,
    },
    /// Show membership-year progress ring fills
    Progress {
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        stays: i64,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        nights: i64,
    },
    /// Show the referral link and its QR code
    Referral {
        /// Referral code (usually the loyalty number)
        code: String,
        /// QR side length in pixels
        #[arg(long)]
        size: Option<u32>,
        /// Write the SVG here
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Also print a data: URI of the SVG
        #[arg(long)]
        data_uri: bool,
    },
    /// Compose the whole membership card and print it as JSON
    Card {
        /// Member snapshot JSON file; flags below override its fields
        #[arg(long)]
        member: Option<PathBuf>,
        #[arg(long)]
        number: Option<String>,
        #[arg(long)]
        tier_color: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        stays: Option<i64>,
        #[arg(long, allow_hyphen_values = true)]
        nights: Option<i64>,
        /// Locale for the booking link
        #[arg(long)]
        locale: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("viajero_card=info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Barcode { number, height, color, out } => {
            commands::show_barcode(&config, &number, height, &color, out.as_deref())?
        }
        Commands::Contrast { color } => commands::show_contrast(&color),
        Commands::Progress { stays, nights } => commands::show_progress(&config, stays, nights),
        Commands::Referral { code, size, out, data_uri } => {
            commands::show_referral(&config, &code, size, out.as_deref(), data_uri).await?
        }
        Commands::Card { member, number, tier_color, stays, nights, locale } => {
            let overrides = commands::MemberOverrides { number, tier_color, stays, nights };
            commands::show_card(&config, member.as_deref(), overrides, locale.as_deref())?
        }
    }

    Ok(())
}
