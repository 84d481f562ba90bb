use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "cardstack-cmd")]
#[command(about = "Command-line utility for card index operations")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a sequence of consecutive integers as JSON
    Range {
        /// Number of values, starting at 0
        #[arg(conflicts_with_all = ["start", "end"], required_unless_present = "start")]
        size: Option<u64>,

        /// First value (inclusive)
        #[arg(long, requires = "end", allow_negative_numbers = true)]
        start: Option<i64>,

        /// Upper bound (exclusive), must be greater than --start
        #[arg(long, requires = "start", allow_negative_numbers = true)]
        end: Option<i64>,
    },

    /// Compare candidate indexes against reference indexes and print the anomalies as JSON
    Anomalies {
        /// Comma-separated reference values
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        reference: Vec<i64>,

        /// Comma-separated candidate values
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        candidate: Vec<i64>,

        /// Treat negative candidate values as invalid
        #[arg(long)]
        non_negative: bool,
    },

    /// Print items one per line, forward or in reverse
    Traverse {
        /// Traverse from the last item to the first
        #[arg(long)]
        reverse: bool,

        /// Items to traverse
        items: Vec<String>,
    },

    /// Validate card indexes against a card stack of the given size
    Validate {
        /// Name of the card stack used in messages
        #[arg(long, default_value = "stack")]
        alias: String,

        /// Number of cards in the stack
        #[arg(long)]
        size: u64,

        /// Card indexes to validate
        #[arg(allow_negative_numbers = true)]
        indexes: Vec<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    match cli.command {
        Commands::Range { size, start, end } => commands::range::run(size, start, end),
        Commands::Anomalies {
            reference,
            candidate,
            non_negative,
        } => commands::anomalies::run(reference, candidate, non_negative),
        Commands::Traverse { reverse, items } => commands::traverse::run(reverse, items),
        Commands::Validate {
            alias,
            size,
            indexes,
        } => commands::validate::run(alias, size, indexes),
    }
}
