use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(
    name = "citation-cli",
    about = "Render bibliographic records as a sorted bibliography",
    long_about = "A CLI tool that reads bibliographic records from CSV sheets or JSON and renders them in GOST or APA style"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render records from a source into a sorted bibliography
    Format(commands::format::Format),
    /// List citation styles and the record kinds they cover
    Styles(commands::styles::Styles),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over the verbosity flag
    let default_filter = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();

    match &cli.command {
        Commands::Format(cmd) => cmd.execute(),
        Commands::Styles(cmd) => cmd.execute(),
    }
}
