use std::fmt::Display;

use uniway_routing::{error::RoutingError, geopoint::GeoPoint, network::CampusNetwork};

/// A routing endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Node(String),
    Point(GeoPoint),
}

impl Location {
    pub fn node(id: impl Into<String>) -> Self {
        Location::Node(id.into())
    }

    pub fn resolve(&self, network: &CampusNetwork) -> Result<GeoPoint, RoutingError> {
        match self {
            Location::Node(id) => network.node_point(id),
            Location::Point(point) => Ok(*point),
        }
    }
}

impl From<GeoPoint> for Location {
    fn from(point: GeoPoint) -> Self {
        Location::Point(point)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Node(id) => write!(f, "{id}"),
            Location::Point(point) => write!(f, "{},{}", point.lat, point.lng),
        }
    }
}
