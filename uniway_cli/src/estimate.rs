use clap::Args;
use jiff::Zoned;
use uniway_planner::location::Location;
use uniway_routing::{campus::campus_network, category::Category};
use uniway_travel_time::estimator::{Stop, estimate_multi_point};

use crate::{parsers, tables};

#[derive(Args)]
pub struct EstimateArgs {
    /// Two or more stops, as `lat,lng` or campus node ids
    #[arg(required = true, num_args = 2.., value_parser = parsers::parse_location)]
    locations: Vec<Location>,

    /// Category of the final destination
    #[arg(short, long, value_parser = parsers::parse_category)]
    category: Option<Category>,

    #[arg(long, value_parser = parsers::parse_time)]
    at: Option<Zoned>,

    /// Print the calculation as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: EstimateArgs) -> anyhow::Result<()> {
    let network = campus_network()?;
    let last = args.locations.len().saturating_sub(1);

    let stops = args
        .locations
        .iter()
        .enumerate()
        .map(|(i, location)| -> anyhow::Result<Stop> {
            let point = location.resolve(&network)?;
            let category = if i == last { args.category } else { None };
            Ok(Stop::new(point, category))
        })
        .collect::<anyhow::Result<Vec<Stop>>>()?;

    let now = args.at.unwrap_or_else(Zoned::now);
    let calculation = estimate_multi_point(&stops, &now)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&calculation)?);
    } else {
        tables::print_time_calculation(&calculation);
    }

    Ok(())
}
