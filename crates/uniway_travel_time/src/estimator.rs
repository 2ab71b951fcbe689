use jiff::Zoned;
use serde::Serialize;
use tracing::debug;
use uniway_routing::{category::Category, geopoint::GeoPoint, meters::Meters};

use crate::{
    error::EstimateError,
    format::{format_arrival, format_distance, format_time},
    terrain::terrain_factor,
    time_of_day::TimeOfDay,
    travel_mode::TravelMode,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeEstimate {
    pub mode: TravelMode,
    pub minutes: f64,
    pub formatted: String,
    pub arrival: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeCalculation {
    pub distance: Meters,
    pub formatted_distance: String,
    pub time_of_day: TimeOfDay,
    /// In [`TravelMode::ALL`] order.
    pub modes: [ModeEstimate; 4],
}

impl TimeCalculation {
    fn new(distance: Meters, minutes: [f64; 4], time_of_day: TimeOfDay, now: &Zoned) -> Self {
        let modes = std::array::from_fn(|i| ModeEstimate {
            mode: TravelMode::ALL[i],
            minutes: minutes[i],
            formatted: format_time(minutes[i]),
            arrival: format_arrival(now, minutes[i]),
        });

        TimeCalculation {
            distance,
            formatted_distance: format_distance(distance),
            time_of_day,
            modes,
        }
    }

    pub fn mode(&self, mode: TravelMode) -> &ModeEstimate {
        let index = TravelMode::ALL
            .iter()
            .position(|m| *m == mode)
            .unwrap_or_default();
        &self.modes[index]
    }

    pub fn walking_minutes(&self) -> f64 {
        self.mode(TravelMode::Walking).minutes
    }
}

/// A stop of a multi point trip. The category of a stop drives the terrain
/// factor of the leg arriving at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub point: GeoPoint,
    pub category: Option<Category>,
}

impl Stop {
    pub fn new(point: GeoPoint, category: Option<Category>) -> Self {
        Stop { point, category }
    }
}

fn mode_minutes(distance: Meters, category: Option<Category>, time_of_day: TimeOfDay) -> [f64; 4] {
    let factor = terrain_factor(category) * time_of_day.factor();

    TravelMode::ALL.map(|mode| {
        mode.speed().minutes_for(distance) * factor * mode.accessibility_factor()
    })
}

/// Estimates travel times for a known distance, usually the length of a
/// solved route.
pub fn estimate_for_distance(
    distance: Meters,
    category: Option<Category>,
    now: &Zoned,
) -> TimeCalculation {
    let time_of_day = TimeOfDay::of(now);
    let minutes = mode_minutes(distance, category, time_of_day);

    debug!(
        distance = distance.value(),
        ?category,
        %time_of_day,
        "Estimated travel times"
    );

    TimeCalculation::new(distance, minutes, time_of_day, now)
}

/// Straight line estimate between two points.
pub fn estimate(
    from: &GeoPoint,
    to: &GeoPoint,
    category: Option<Category>,
    now: &Zoned,
) -> TimeCalculation {
    let distance = Meters::new(from.haversine_distance(to));
    estimate_for_distance(distance, category, now)
}

/// Sums the straight line legs between consecutive stops.
pub fn estimate_multi_point(stops: &[Stop], now: &Zoned) -> Result<TimeCalculation, EstimateError> {
    if stops.len() < 2 {
        return Err(EstimateError::NotEnoughLocations(stops.len()));
    }

    let time_of_day = TimeOfDay::of(now);
    let mut distance = Meters::ZERO;
    let mut minutes = [0.0; 4];

    for leg in stops.windows(2) {
        let leg_distance = Meters::new(leg[0].point.haversine_distance(&leg[1].point));
        let leg_minutes = mode_minutes(leg_distance, leg[1].category, time_of_day);

        distance += leg_distance;
        for (total, leg) in minutes.iter_mut().zip(leg_minutes) {
            *total += leg;
        }
    }

    Ok(TimeCalculation::new(distance, minutes, time_of_day, now))
}

pub fn recommendations(calculation: &TimeCalculation) -> Vec<&'static str> {
    let walking = calculation.walking_minutes();
    let mut recommendations = Vec::new();

    if walking > 15.0 {
        recommendations.push("Consider cycling for faster travel");
    }

    if walking > 30.0 {
        recommendations.push("This is a long walk - plan accordingly");
    }

    if walking < 5.0 {
        recommendations.push("Quick walk - no special preparation needed");
    }

    match calculation.time_of_day {
        TimeOfDay::Evening => recommendations.push("Evening rush hour - allow extra time"),
        TimeOfDay::Night => recommendations.push("Night time - ensure well-lit paths"),
        TimeOfDay::Morning | TimeOfDay::Afternoon => {}
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone};

    use super::*;

    fn at_hour(hour: i8) -> Zoned {
        date(2024, 3, 11)
            .at(hour, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn two_hundred_meters_to_academic_in_the_afternoon() {
        let calculation =
            estimate_for_distance(Meters::new(200.0), Some(Category::Academic), &at_hour(14));

        let walking = calculation.mode(TravelMode::Walking);
        assert_close(walking.minutes, 2.4);
        assert_eq!(walking.formatted, "2 min");
        assert_eq!(walking.arrival, "2:02 PM");

        let cycling = calculation.mode(TravelMode::Cycling);
        assert_close(cycling.minutes, 0.8);
        assert_eq!(cycling.formatted, "< 1 min");

        assert_eq!(calculation.formatted_distance, "200m");
        assert_eq!(calculation.time_of_day, TimeOfDay::Afternoon);
    }

    #[test]
    fn mode_ordering() {
        let calculation = estimate_for_distance(Meters::new(850.0), None, &at_hour(11));
        let minutes = |mode| calculation.mode(mode).minutes;

        assert!(minutes(TravelMode::Cycling) <= minutes(TravelMode::Running));
        assert!(minutes(TravelMode::Running) <= minutes(TravelMode::Walking));
        assert!(minutes(TravelMode::Walking) <= minutes(TravelMode::Wheelchair));
    }

    #[test]
    fn factors_combine() {
        // 1 km walking is 12 minutes before factors
        let evening_hostel =
            estimate_for_distance(Meters::new(1000.0), Some(Category::Hostels), &at_hour(17));
        assert_close(evening_hostel.walking_minutes(), 12.0 * 1.1 * 1.15);

        let night_recreation =
            estimate_for_distance(Meters::new(1000.0), Some(Category::Recreation), &at_hour(22));
        assert_close(
            night_recreation.mode(TravelMode::Wheelchair).minutes,
            15.0 * 1.2 * 0.9 * 1.2,
        );
    }

    #[test]
    fn straight_line_estimate() {
        let from = GeoPoint::new(26.8429, 75.5654);
        let to = from.offset_meters(0.0, 500.0);

        let calculation = estimate(&from, &to, None, &at_hour(12));
        assert!((calculation.distance.value() - 500.0).abs() < 0.5);
    }

    #[test]
    fn multi_point_needs_two_stops() {
        let stop = Stop::new(GeoPoint::new(26.8429, 75.5654), None);
        assert_eq!(
            estimate_multi_point(&[stop], &at_hour(12)),
            Err(EstimateError::NotEnoughLocations(1))
        );
        assert_eq!(
            estimate_multi_point(&[], &at_hour(12)),
            Err(EstimateError::NotEnoughLocations(0))
        );
    }

    #[test]
    fn multi_point_sums_legs() {
        let now = at_hour(12);
        let a = GeoPoint::new(26.8429, 75.5654);
        let b = a.offset_meters(300.0, 0.0);
        let c = b.offset_meters(0.0, 400.0);

        let stops = [
            Stop::new(a, None),
            Stop::new(b, Some(Category::Academic)),
            Stop::new(c, Some(Category::Hostels)),
        ];
        let total = estimate_multi_point(&stops, &now).unwrap();
        let first = estimate(&a, &b, Some(Category::Academic), &now);
        let second = estimate(&b, &c, Some(Category::Hostels), &now);

        assert_close(
            total.distance.value(),
            first.distance.value() + second.distance.value(),
        );
        for mode in TravelMode::ALL {
            assert_close(
                total.mode(mode).minutes,
                first.mode(mode).minutes + second.mode(mode).minutes,
            );
        }
    }

    #[test]
    fn advice() {
        let short = estimate_for_distance(Meters::new(200.0), None, &at_hour(12));
        assert_eq!(
            recommendations(&short),
            vec!["Quick walk - no special preparation needed"]
        );

        let long_evening = estimate_for_distance(Meters::new(3000.0), None, &at_hour(17));
        assert_eq!(
            recommendations(&long_evening),
            vec![
                "Consider cycling for faster travel",
                "This is a long walk - plan accordingly",
                "Evening rush hour - allow extra time",
            ]
        );

        let medium_night = estimate_for_distance(Meters::new(1500.0), None, &at_hour(23));
        assert_eq!(
            recommendations(&medium_night),
            vec!["Consider cycling for faster travel", "Night time - ensure well-lit paths"]
        );
    }
}
