use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracker_core::*;

#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Step and training activity tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override settings file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report metrics for a "<steps>,<activity>,<duration>" record
    Training {
        /// Record such as "3456,Running,45m"
        record: String,

        #[command(flatten)]
        body: BodyArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarise a "<steps>,<duration>" daily step record
    Day {
        /// Record such as "6000,1h30m"
        record: String,

        #[command(flatten)]
        body: BodyArgs,

        /// Print the summary as JSON (errors are reported instead of hidden)
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct BodyArgs {
    /// Weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Height in meters
    #[arg(long)]
    height: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    tracker_core::logging::init(&settings.logging);

    match cli.command {
        Commands::Training { record, body, json } => cmd_training(&record, &body, json, &settings),
        Commands::Day { record, body, json } => cmd_day(&record, &body, json, &settings),
    }
}

fn cmd_training(record: &str, args: &BodyArgs, json: bool, settings: &Settings) -> Result<()> {
    let body = settings.body_parameters(args.weight, args.height)?;
    tracing::debug!("Training record {:?} with {:?}", record, body);
    let report = training_info(record, &body)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn cmd_day(record: &str, args: &BodyArgs, json: bool, settings: &Settings) -> Result<()> {
    let body = settings.body_parameters(args.weight, args.height)?;
    tracing::debug!("Daily step record {:?} with {:?}", record, body);

    if json {
        let summary = day_summary(record, &body)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", day_action_info(record, &body));
    }
    Ok(())
}
