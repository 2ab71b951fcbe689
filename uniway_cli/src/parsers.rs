use jiff::{Zoned, civil::DateTime, tz::TimeZone};
use uniway_planner::location::Location;
use uniway_routing::{category::Category, geopoint::GeoPoint};

/// `lat,lng` or a campus node id.
pub fn parse_location(input: &str) -> Result<Location, String> {
    let input = input.trim();

    if input.is_empty() {
        return Err(String::from("Empty location"));
    }

    match input.split_once(',') {
        Some((lat, lng)) => parse_geo_point(lat, lng).map(Location::Point),
        None => Ok(Location::node(input)),
    }
}

fn parse_geo_point(lat: &str, lng: &str) -> Result<GeoPoint, String> {
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("Invalid latitude {lat}"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("Invalid longitude {lng}"))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("Latitude {lat} out of range"));
    }

    if !(-180.0..=180.0).contains(&lng) {
        return Err(format!("Longitude {lng} out of range"));
    }

    Ok(GeoPoint::new(lat, lng))
}

pub fn parse_category(input: &str) -> Result<Category, String> {
    input.parse()
}

/// A zoned timestamp, or a civil datetime such as `2024-03-11T14:00` in the
/// system time zone.
pub fn parse_time(input: &str) -> Result<Zoned, String> {
    if let Ok(zoned) = input.parse::<Zoned>() {
        return Ok(zoned);
    }

    input
        .parse::<DateTime>()
        .and_then(|datetime| datetime.to_zoned(TimeZone::system()))
        .map_err(|error| format!("Invalid time {input}: {error}"))
}
