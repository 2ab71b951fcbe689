use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A WGS84 coordinate in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }

    /// Equirectangular projection to meters around `reference_lat`. Accurate
    /// enough for campus-sized areas, only used to feed spatial indexes.
    pub fn project(&self, reference_lat: f64) -> [f64; 2] {
        let x = EARTH_RADIUS_METERS * self.lng.to_radians() * reference_lat.to_radians().cos();
        let y = EARTH_RADIUS_METERS * self.lat.to_radians();
        [x, y]
    }

    /// Returns the point moved by the given offsets, in meters.
    pub fn offset_meters(&self, north: f64, east: f64) -> GeoPoint {
        let dlat = (north / EARTH_RADIUS_METERS).to_degrees();
        let dlng = (east / (EARTH_RADIUS_METERS * self.lat.to_radians().cos())).to_degrees();
        GeoPoint::new(self.lat + dlat, self.lng + dlng)
    }
}

impl From<GeoPoint> for geo_types::Point {
    fn from(point: GeoPoint) -> Self {
        geo_types::Point::new(point.lng, point.lat)
    }
}

impl From<&GeoPoint> for geo_types::Point {
    fn from(point: &GeoPoint) -> Self {
        geo_types::Point::new(point.lng, point.lat)
    }
}

impl From<geo_types::Point> for GeoPoint {
    fn from(point: geo_types::Point) -> Self {
        GeoPoint::new(point.y(), point.x())
    }
}

pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_itself_is_zero() {
        let point = GeoPoint::new(26.8429, 75.5654);
        assert_eq!(point.haversine_distance(&point), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let expected = EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0;
        assert!((a.haversine_distance(&b) - expected).abs() < 1e-6);
    }

    #[test]
    fn offset_round_trips_through_haversine() {
        let origin = GeoPoint::new(26.8429, 75.5654);
        let north = origin.offset_meters(200.0, 0.0);
        let east = origin.offset_meters(0.0, 200.0);

        assert!((origin.haversine_distance(&north) - 200.0).abs() < 1e-6);
        assert!((origin.haversine_distance(&east) - 200.0).abs() < 0.01);
    }

    #[test]
    fn geo_types_point_uses_lng_as_x() {
        let point: geo_types::Point = GeoPoint::new(26.8, 75.5).into();
        assert_eq!(point.x(), 75.5);
        assert_eq!(point.y(), 26.8);
    }
}
