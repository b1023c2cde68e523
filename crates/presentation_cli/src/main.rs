//! Routewise CLI
//!
//! Command-line front end for the route estimator.

#![allow(clippy::print_stdout)]

mod render;

use std::path::PathBuf;

use anyhow::Context;
use application::{BookingForm, DebouncedTrigger, EstimateState};
use clap::{Parser, Subcommand};
use domain::value_objects::LocationQuery;
use infrastructure::{AppConfig, init_logging, wiring};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

/// Routewise CLI
#[derive(Parser)]
#[command(name = "routewise-cli")]
#[command(author, version, about = "Driving distance and time estimates between two places", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./routewise.toml if present)
    #[arg(short, long, env = "ROUTEWISE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the route between two places
    ///
    /// Example: routewise-cli estimate Bangalore Vijayawada
    Estimate {
        /// Start location
        from: String,

        /// End location
        to: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read `pickup|drop` lines from stdin and estimate as you type
    ///
    /// Each line updates the booking form; estimation fires once input has
    /// been quiet for the configured period.
    Interactive,

    /// Show the tracking summary for a delivery
    Track {
        /// Pickup location
        from: String,

        /// Drop location
        to: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or clear the stored session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Subcommand)]
enum SessionAction {
    /// Show the signed-in user
    Show,
    /// Forget the signed-in user
    Clear,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Split an interactive input line into pickup and drop text
fn parse_pair(line: &str) -> Option<(String, String)> {
    let (pickup, drop) = line.split_once('|')?;
    Some((pickup.trim().to_string(), drop.trim().to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.logging.filter = filter.to_string();
    }
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Estimate { from, to, json } => {
            let estimator = wiring::route_estimator(&config)?;
            let result = estimator.estimate(&from, &to).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", render::route_result(&result));
            }
        },

        Commands::Interactive => interactive(&config).await?,

        Commands::Track { from, to, json } => {
            let pickup = LocationQuery::new(&from)?;
            let drop = LocationQuery::new(&to)?;
            let tracking = wiring::tracking_service(wiring::route_estimator(&config)?);
            let summary = tracking.summary(&pickup, &drop).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", render::tracking(&summary));
            }
        },

        Commands::Session { action } => {
            let sessions = wiring::session_service(&config.session);
            match action {
                SessionAction::Show => match sessions.current_user().await? {
                    Some(profile) => {
                        println!("Signed in as {} <{}>", profile.greeting_name(), profile.email());
                    },
                    None => println!("Not signed in"),
                },
                SessionAction::Clear => {
                    sessions.sign_out().await?;
                    println!("Session cleared");
                },
            }
        },

        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config)?);
        },
    }

    Ok(())
}

async fn interactive(config: &AppConfig) -> anyhow::Result<()> {
    let estimator = wiring::route_estimator(config)?;
    let (trigger, mut events) = DebouncedTrigger::new(estimator, config.estimator.quiet_period());
    let mut form = BookingForm::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Enter `pickup|drop` lines; Ctrl-D to finish.");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let Some((pickup, drop)) = parse_pair(&line) else {
                    warn!(%line, "Expected `pickup|drop`, ignoring line");
                    continue;
                };

                let changed = form.set_pickup(pickup) | form.set_drop(drop);
                if !changed {
                    continue;
                }

                if form.has_both_locations() {
                    trigger.schedule(form.pickup(), form.drop_location());
                } else {
                    trigger.cancel();
                }
                if let Some(panel) = render::form_panel(&form) {
                    println!("{panel}");
                }
            },
            Some(event) = events.recv() => {
                if form.apply_result(&event.start, &event.end, &event.result) {
                    if let Some(panel) = render::form_panel(&form) {
                        println!("{panel}");
                    }
                }
            },
        }
    }

    // Input closed: wait for the estimate of the last complete input
    while matches!(form.state(), EstimateState::Calculating) {
        let Some(event) = events.recv().await else { break };
        if form.apply_result(&event.start, &event.end, &event.result) {
            if let Some(panel) = render::form_panel(&form) {
                println!("{panel}");
            }
        }
    }

    if form.can_submit() {
        let booking = form.submit()?;
        debug!(?booking, "Booking ready");
        println!("{}", serde_json::to_string_pretty(&booking)?);
    }

    Ok(())
}
