use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use uniway_osrm::foot_router::{ExternalRoute, FootRouter};
use uniway_planner::planner::CampusPlanner;
use uniway_routing::{campus::campus_network, geopoint::GeoPoint};

/// In-process stand-in for OSRM. Answers every request with a straight line
/// through the waypoints, scaled by `detour`, and records the waypoints.
pub struct MockRouter {
    pub detour: f64,
    pub via_detour: f64,
    pub delay: Duration,
    pub available: bool,
    pub requests: Mutex<Vec<Vec<GeoPoint>>>,
}

impl Default for MockRouter {
    fn default() -> Self {
        MockRouter {
            detour: 1.0,
            via_detour: 1.0,
            delay: Duration::ZERO,
            available: true,
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl MockRouter {
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

impl FootRouter for MockRouter {
    async fn route(&self, waypoints: &[geo_types::Point]) -> Option<ExternalRoute> {
        let points: Vec<GeoPoint> = waypoints.iter().copied().map(GeoPoint::from).collect();
        self.requests.lock().push(points.clone());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if !self.available {
            return None;
        }

        let straight: f64 = points
            .windows(2)
            .map(|leg| leg[0].haversine_distance(&leg[1]))
            .sum();
        let detour = if points.len() > 2 {
            self.via_detour
        } else {
            self.detour
        };
        let distance = straight * detour;

        Some(ExternalRoute {
            distance_meters: distance,
            duration_seconds: distance / 1.4,
            instructions: vec![String::from("Head north"), String::from("You have arrived")],
            coordinates: waypoints.to_vec(),
        })
    }
}

pub fn create_planner(router: MockRouter) -> CampusPlanner<MockRouter> {
    let network = campus_network().unwrap();
    CampusPlanner::new(Arc::new(network), router)
}

/// Just outside the southern edge of the coverage box, within residential
/// range of the G3 hostel block.
pub fn south_of_hostels() -> GeoPoint {
    GeoPoint::new(26.8405018, 75.5629086).offset_meters(-150.0, 0.0)
}

pub fn central_library() -> GeoPoint {
    GeoPoint::new(26.8415259, 75.5651891)
}
