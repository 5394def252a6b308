mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use klroute_cli::output::OutputFormat;
use klroute_lib::{load_configured_network, resolve_network_path, NETWORK_ENV_VAR};

use commands::distances::handle_distances;
use commands::landmarks::handle_landmarks;
use commands::route::handle_route_command;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest routes between Kuala Lumpur landmarks")]
struct Cli {
    /// Network CSV (`from,to,distance`). Falls back to the KLROUTE_NETWORK
    /// environment variable, then to the built-in KL network.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two landmarks.
    Route {
        /// Starting landmark.
        #[arg(long = "from")]
        from: String,
        /// Destination landmark.
        #[arg(long = "to")]
        to: String,
    },
    /// List all landmarks in the network.
    Landmarks,
    /// Show the distance from one landmark to every other landmark.
    Distances {
        /// Starting landmark.
        #[arg(long = "from")]
        from: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph = load_configured_network(cli.network.as_deref()).with_context(|| {
        match resolve_network_path(cli.network.as_deref()) {
            Some(path) => format!("failed to load network from {}", path.display()),
            None => format!("failed to load the built-in network ({NETWORK_ENV_VAR} unset)"),
        }
    })?;

    match cli.command {
        Command::Route { from, to } => handle_route_command(&graph, &from, &to, cli.format),
        Command::Landmarks => handle_landmarks(&graph, cli.format),
        Command::Distances { from } => handle_distances(&graph, &from, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
