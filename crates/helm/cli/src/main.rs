//! helm CLI - run a decision scenario end to end
//!
//! - `helm run` reasons over a scenario, commits a decision, plans it and
//!   executes the plan against a simulated executor
//! - `helm health` prints the world model's health score and anomalies
//!
//! Output is JSON on stdout; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use helm_action::ActionIntent;
use helm_types::AutonomyLevel;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod pipeline;
mod scenario;

use config::HelmConfig;
use pipeline::RunOptions;
use scenario::Scenario;

#[derive(Parser)]
#[command(name = "helm")]
#[command(about = "Helm - decision and action orchestration", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "HELM_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reason, decide, plan and execute a scenario
    Run {
        /// Scenario file (TOML)
        scenario: PathBuf,

        /// Autonomy ceiling (0-3), overriding the scenario's
        #[arg(long, value_parser = parse_ceiling)]
        ceiling: Option<AutonomyLevel>,

        /// Make the simulated executor fail steps of this type (e.g. email, payment)
        #[arg(long)]
        fail_step: Option<ActionIntent>,
    },

    /// Print the health score and anomalies of a scenario's world model
    Health {
        /// Scenario file (TOML)
        scenario: PathBuf,
    },
}

fn parse_ceiling(value: &str) -> Result<AutonomyLevel, String> {
    let level: u8 = value
        .parse()
        .map_err(|_| format!("not a number: {}", value))?;
    AutonomyLevel::try_from(level)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();

    let config = HelmConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            scenario,
            ceiling,
            fail_step,
        } => {
            let scenario = Scenario::load(&scenario)?;
            let options = RunOptions {
                ceiling,
                fail_intent: fail_step,
            };
            let report = pipeline::run(&scenario, &config, &options).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Health { scenario } => {
            let scenario = Scenario::load(&scenario)?;
            let report = pipeline::health(&scenario, &config)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
