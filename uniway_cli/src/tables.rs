use comfy_table::Table;
use uniway_planner::route_result::{RouteResult, RouteSource};
use uniway_travel_time::{
    estimator::{TimeCalculation, recommendations},
    format::{MISSING_VALUE, format_distance, format_time},
};

pub fn route_table(route: &RouteResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Route", ""]);

    let source = match route.source {
        RouteSource::CampusGraph => "campus graph",
        RouteSource::External => "external router",
    };
    let instructions = route
        .instructions
        .as_ref()
        .map(|instructions| instructions.join("\n"))
        .unwrap_or_else(|| MISSING_VALUE.to_string());

    table.add_row(vec!["Source".to_string(), source.to_string()]);
    table.add_row(vec!["Distance".to_string(), format_distance(route.distance)]);
    table.add_row(vec![
        "Duration".to_string(),
        format_time(route.duration.as_secs_f64() / 60.0),
    ]);
    table.add_row(vec![
        "Via subway".to_string(),
        if route.via_waypoint { "yes" } else { "no" }.to_string(),
    ]);
    table.add_row(vec!["Points".to_string(), route.coordinates.len().to_string()]);
    table.add_row(vec!["Instructions".to_string(), instructions]);

    table
}

pub fn time_table(calculation: &TimeCalculation) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Mode", "Time", "Minutes", "Arrival"]);

    for estimate in &calculation.modes {
        table.add_row(vec![
            estimate.mode.to_string(),
            estimate.formatted.clone(),
            format!("{:.1}", estimate.minutes),
            estimate.arrival.clone(),
        ]);
    }

    table
}

pub fn print_time_calculation(calculation: &TimeCalculation) {
    println!(
        "Distance: {} ({})",
        calculation.formatted_distance, calculation.time_of_day
    );
    println!("{}", time_table(calculation));

    for recommendation in recommendations(calculation) {
        println!("- {recommendation}");
    }
}
