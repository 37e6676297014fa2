mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{instance::InstanceArgs, list::ListArgs, resolve::ResolveArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rostype", about = "Resolve ROS type strings against a type manifest")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve type strings and print the qualified type they map to
    Resolve(ResolveArgs),
    /// Print a default instance of a message, or of a service request/response
    Instance(InstanceArgs),
    /// List every module and class declared in a manifest
    List(ListArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve(args) => args.run(),
        Commands::Instance(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
