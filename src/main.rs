use std::io;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "teller")]
#[command(about = "Interactive console practice programs: banking, lists, number stats")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive banking session
    Bank,
    /// Collect snack names and print them as one sentence
    Snacks {
        /// How many entries to collect
        #[arg(short, long, default_value = "5")]
        count: usize,
    },
    /// Read whole numbers and print their maximum, minimum, and average
    Numbers {
        /// How many numbers to read
        #[arg(short, long, default_value = "10")]
        count: usize,
    },
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with program output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teller=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match cli.command {
        // Default to the banking session when no subcommand is given.
        Some(Commands::Bank) | None => teller::bank::run(&mut input, &mut output),
        Some(Commands::Snacks { count }) => teller::snacks::run(&mut input, &mut output, count),
        Some(Commands::Numbers { count }) => teller::numbers::run(&mut input, &mut output, count),
    }
}
