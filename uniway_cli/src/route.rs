use std::sync::Arc;

use clap::Args;
use jiff::Zoned;
use tracing::info;
use uniway_osrm::client::{OsrmClientParams, OsrmRouteClient};
use uniway_planner::{location::Location, planner::CampusPlanner};
use uniway_routing::{campus::campus_network, category::Category};

use crate::{parsers, tables};

#[derive(Args)]
pub struct RouteArgs {
    /// Start, as `lat,lng` or a campus node id
    #[arg(short, long, value_parser = parsers::parse_location)]
    from: Location,

    /// Destination, as `lat,lng` or a campus node id
    #[arg(short, long, value_parser = parsers::parse_location)]
    to: Location,

    /// Category of the destination, drives the terrain factor
    #[arg(short, long, value_parser = parsers::parse_category)]
    category: Option<Category>,

    /// Departure time used for the time-of-day factor (default: now)
    #[arg(long, value_parser = parsers::parse_time)]
    at: Option<Zoned>,
}

pub async fn run(args: RouteArgs) -> anyhow::Result<()> {
    let network = Arc::new(campus_network()?);
    let params = OsrmClientParams::from_env();
    info!("Using OSRM at {} ({})", params.osrm_url, params.profile);

    let planner = CampusPlanner::new(network, OsrmRouteClient::new(params)?);

    let Some(route) = planner.plan(&args.from, &args.to).await else {
        println!("No route found from {} to {}", args.from, args.to);
        return Ok(());
    };

    println!("{}", tables::route_table(&route));

    let now = args.at.unwrap_or_else(Zoned::now);
    tables::print_time_calculation(&route.travel_times(args.category, &now));

    Ok(())
}
