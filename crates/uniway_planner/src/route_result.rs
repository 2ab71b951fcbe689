use jiff::{SignedDuration, Zoned};
use uniway_osrm::foot_router::ExternalRoute;
use uniway_routing::{category::Category, geopoint::GeoPoint, meters::Meters};
use uniway_travel_time::estimator::{TimeCalculation, estimate_for_distance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSource {
    CampusGraph,
    External,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub coordinates: Vec<GeoPoint>,
    pub distance: Meters,
    pub duration: SignedDuration,
    pub instructions: Option<Vec<String>>,
    pub source: RouteSource,
    pub via_waypoint: bool,
}

impl RouteResult {
    pub fn from_external(route: ExternalRoute, via_waypoint: bool) -> Self {
        let instructions = (!route.instructions.is_empty()).then_some(route.instructions);

        RouteResult {
            coordinates: route.coordinates.into_iter().map(GeoPoint::from).collect(),
            distance: Meters::new(route.distance_meters),
            duration: SignedDuration::try_from_secs_f64(route.duration_seconds)
                .unwrap_or(SignedDuration::ZERO),
            instructions,
            source: RouteSource::External,
            via_waypoint,
        }
    }

    /// Travel times over the route length rather than the straight line.
    pub fn travel_times(&self, destination: Option<Category>, now: &Zoned) -> TimeCalculation {
        estimate_for_distance(self.distance, destination, now)
    }
}
