use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "mselens")]
#[command(about = "MSE stock history and signal toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a publisher's trading history
    Summary {
        /// Historical payload (JSON, or a raw CSV dump)
        #[arg(short, long)]
        input: PathBuf,
        /// Publisher code override (defaults to the payload's own)
        #[arg(short, long)]
        publisher: Option<String>,
        /// Range start as DD.MM.YYYY (inclusive)
        #[arg(long)]
        start: Option<String>,
        /// Range end as DD.MM.YYYY (inclusive)
        #[arg(long)]
        end: Option<String>,
    },
    /// Export a publisher's history as the dashboard CSV
    Export {
        /// Historical payload (JSON, or a raw CSV dump)
        #[arg(short, long)]
        input: PathBuf,
        /// Publisher code override (defaults to the payload's own)
        #[arg(short, long)]
        publisher: Option<String>,
        /// Range start as DD.MM.YYYY (inclusive)
        #[arg(long)]
        start: Option<String>,
        /// Range end as DD.MM.YYYY (inclusive)
        #[arg(long)]
        end: Option<String>,
        /// Output file (defaults to StockData_{publisher}.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Aggregate indicator signals from a technical payload
    Analyze {
        /// Technical-analysis payload (JSON)
        #[arg(short, long)]
        input: PathBuf,
        /// Publisher code override (defaults to the payload's own)
        #[arg(short, long)]
        publisher: Option<String>,
        /// Chart interval: 1D, 1W or 1M
        #[arg(long, default_value = "1D")]
        interval: String,
    },
    /// List the publisher catalog
    Publishers {
        /// Publisher catalog payload (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },
}

pub fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary {
            input,
            publisher,
            start,
            end,
        } => {
            commands::summary::run(&input, publisher.as_deref(), start.as_deref(), end.as_deref());
        }
        Commands::Export {
            input,
            publisher,
            start,
            end,
            output,
        } => {
            commands::export::run(
                &input,
                publisher.as_deref(),
                start.as_deref(),
                end.as_deref(),
                output,
            );
        }
        Commands::Analyze {
            input,
            publisher,
            interval,
        } => {
            commands::analyze::run(&input, publisher.as_deref(), &interval);
        }
        Commands::Publishers { input } => {
            commands::publishers::run(&input);
        }
    }
}
