use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use delivery_router_lib::{
    calculate_route, default_history_path, default_network, format_path, CostModel, HistoryStore,
    Location, RouteHistoryRecord,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Delivery route estimation utilities")]
struct Cli {
    /// Override the route history file path.
    #[arg(long)]
    history_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest route between two locations in the network.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
        /// Skip recording the result in the route history.
        #[arg(long)]
        no_save: bool,
    },
    /// List previously computed routes, oldest first.
    History,
    /// List the locations available in the network.
    Locations,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route { from, to, no_save } => {
            let store = history_store(cli.history_file)?;
            handle_route(&store, &from, &to, no_save)
        }
        Command::History => {
            let store = history_store(cli.history_file)?;
            handle_history(&store)
        }
        Command::Locations => handle_locations(),
    }
}

fn history_store(override_path: Option<PathBuf>) -> Result<HistoryStore> {
    let path = match override_path {
        Some(path) => path,
        None => default_history_path().context("failed to resolve the route history location")?,
    };
    let store = HistoryStore::new(path);
    store.initialize();
    Ok(store)
}

fn handle_route(store: &HistoryStore, from: &str, to: &str, no_save: bool) -> Result<()> {
    let graph = default_network().context("failed to build the delivery network")?;
    let source = Location::new(from);
    let target = Location::new(to);

    let result = calculate_route(&graph, &CostModel::default(), &source, &target)?;
    if result.is_reachable() {
        println!("Route: {}", format_path(result.path()));
        println!("Distance: {:.1} km", result.distance());
        println!("Cost: {:.0} COP", result.cost());
        println!("Time: {:.2} h", result.time());
    } else {
        println!("No route found between {from} and {to}");
    }

    if !no_save {
        let record = RouteHistoryRecord::from_result(&result, &source, &target);
        store
            .append(record)
            .context("failed to record the route history")?;
    }
    Ok(())
}

fn handle_history(store: &HistoryStore) -> Result<()> {
    let records = store
        .load_all()
        .context("failed to load the route history")?;
    if records.is_empty() {
        println!("No routes recorded yet.");
        return Ok(());
    }

    for record in records {
        let path = if record.path.is_empty() {
            "<no route>".to_string()
        } else {
            record.path.join(" -> ")
        };
        let distance = if record.distance.is_finite() {
            format!("{:.1} km", record.distance)
        } else {
            "unreachable".to_string()
        };
        println!(
            "{} | {} -> {} | {} | {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.source,
            record.target,
            path,
            distance,
        );
    }
    Ok(())
}

fn handle_locations() -> Result<()> {
    let graph = default_network().context("failed to build the delivery network")?;
    let mut names: Vec<_> = graph
        .vertices()
        .map(|location| location.name().to_string())
        .collect();
    names.sort();
    for name in names {
        println!("{name}");
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
