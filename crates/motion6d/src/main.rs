use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Synthesize(args) => args.run(),
    }
}

#[derive(Parser)]
#[command(
    name = "motion6d",
    about = "Synthesize orientation and accelerometer channels from a trajectory"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Turn a trajectory file into six orientation and gravity channels.
    Synthesize(cli::synthesize::SynthesizeArgs),
}
