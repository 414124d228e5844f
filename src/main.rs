//! NASSAU — two-down auto-press golf match scorer
//!
//! Entry point. Loads configuration, initialises structured logging,
//! builds a scorecard from the hole strings on the command line, and
//! prints the settled match as text or JSON.

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;

use nassau::config::{self, AppConfig};
use nassau::report;
use nassau::scorecard::Scorecard;
use nassau::settlement;

/// Score a Nassau match: front nine, back nine, overall eighteen, with
/// two-down presses and an auto-press on the ninth and eighteenth.
#[derive(Debug, Parser)]
#[command(name = "nassau", version)]
struct Args {
    /// Front-nine results, one character per hole: W/+ win, L/- loss,
    /// T/0 tie, _/. unplayed. Missing holes are unplayed.
    #[arg(allow_hyphen_values = true)]
    front: String,

    /// Back-nine results, same format as FRONT.
    #[arg(default_value = "", allow_hyphen_values = true)]
    back: String,

    /// Path to the TOML config file.
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: String,

    /// Money per point; overrides the config file.
    #[arg(short, long)]
    bet_unit: Option<Decimal>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let args = Args::parse();
    init_logging();

    let mut cfg = AppConfig::load_or_default(&args.config)?;
    if let Some(unit) = args.bet_unit {
        cfg.game.bet_unit = unit;
    }
    cfg.validate()?;

    let card = Scorecard::from_strs(&args.front, &args.back)
        .context("Invalid hole results")?;
    info!(
        holes_played = card.holes_played(),
        bet_unit = %cfg.game.bet_unit,
        "Scoring match"
    );

    let settled = settlement::settle(&card, cfg.game.bet_unit)?;

    if args.json {
        let json = serde_json::to_string_pretty(&settled)
            .context("Failed to serialise match report")?;
        println!("{json}");
    } else {
        print!("{card}");
        println!();
        print!("{}", report::render(&settled, &cfg.game.currency));
    }

    Ok(())
}

/// Initialise the `tracing` subscriber. Logs go to stderr so the report
/// on stdout stays clean.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nassau=warn"));

    let json_logging = std::env::var("NASSAU_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
