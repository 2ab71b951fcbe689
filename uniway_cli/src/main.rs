use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{estimate::EstimateArgs, route::RouteArgs};

mod estimate;
mod nodes;
mod parsers;
mod route;
mod tables;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a walking route between two locations
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Straight line travel time estimates over two or more locations
    #[command(visible_alias = "e")]
    Estimate {
        #[command(flatten)]
        args: EstimateArgs,
    },
    /// List the campus routing graph
    Nodes,
    /// List the schematic map and its proximity links
    Schematic,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Route { args }) => route::run(args).await?,
        Some(Commands::Estimate { args }) => estimate::run(args)?,
        Some(Commands::Nodes) => nodes::run_nodes()?,
        Some(Commands::Schematic) => nodes::run_schematic()?,
        None => {}
    }

    Ok(())
}
