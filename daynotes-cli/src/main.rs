mod commands;
mod context;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use context::Context;

#[derive(Parser)]
#[command(name = "daynotes")]
#[command(about = "Record how your days go and view them on a week calendar")]
struct Cli {
    /// Use this note file instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Reject impossible dates (e.g. March 32) instead of rolling them over
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the week containing a day, then that day's notes
    Show {
        /// Day to show (W-MM-DD-YYYY, YYYY-MM-DD, today, yesterday, tomorrow)
        date: Option<String>,
    },
    /// Print the notes recorded for a day
    Get {
        date: Option<String>,
    },
    /// Record notes for a day (prompts when no values are given)
    Set {
        date: Option<String>,

        /// How the day went
        #[arg(short, long, allow_negative_numbers = true)]
        day_quality: Option<i32>,

        /// How you slept
        #[arg(short, long, allow_negative_numbers = true)]
        sleep_quality: Option<i32>,

        /// Medication was taken
        #[arg(long, conflicts_with = "no_meds")]
        meds: bool,

        /// Medication was not taken
        #[arg(long)]
        no_meds: bool,
    },
    /// List every day that has notes
    List,
    /// Delete the notes for a day
    Remove {
        date: String,
    },
    /// Show config and data file paths, or change settings
    Config {
        /// Persist whether impossible dates are rejected (true/false)
        #[arg(long)]
        strict_dates: Option<bool>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    let mut ctx = Context::new(cli.file, cli.strict)?;

    match cli.command {
        Commands::Show { date } => commands::show::run(&ctx, date.as_deref()),
        Commands::Get { date } => commands::get::run(&ctx, date.as_deref()),
        Commands::Set {
            date,
            day_quality,
            sleep_quality,
            meds,
            no_meds,
        } => {
            let took_meds = match (meds, no_meds) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let values = commands::set::NoteValues {
                day_quality,
                sleep_quality,
                took_meds,
            };
            commands::set::run(&ctx, date.as_deref(), values)
        }
        Commands::List => commands::list::run(&ctx),
        Commands::Remove { date } => commands::remove::run(&ctx, &date),
        Commands::Config { strict_dates } => commands::config::run(&mut ctx, strict_dates),
    }
}
