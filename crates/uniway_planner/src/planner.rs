use std::sync::Arc;

use tracing::{debug, info, warn};
use uniway_osrm::foot_router::{FootRouter, route_direct_or_via};
use uniway_routing::{geopoint::GeoPoint, network::CampusNetwork, route_selector::SelectedPath};
use uniway_travel_time::kmh::Kmh;

use crate::{
    location::Location,
    route_result::{RouteResult, RouteSource},
};

/// Average walking speed on campus paths, 1.3 m/s.
pub const CAMPUS_WALKING_SPEED: Kmh = Kmh::new(4.68);

pub const CAMPUS_INSTRUCTION: &str = "Follow campus pedestrian paths to your destination.";

/// Routes on the campus graph when both endpoints are covered by it, and
/// falls back to the external foot router otherwise.
pub struct CampusPlanner<R> {
    network: Arc<CampusNetwork>,
    router: R,
}

impl<R: FootRouter> CampusPlanner<R> {
    pub fn new(network: Arc<CampusNetwork>, router: R) -> Self {
        CampusPlanner { network, router }
    }

    pub fn network(&self) -> &CampusNetwork {
        &self.network
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub async fn plan(&self, from: &Location, to: &Location) -> Option<RouteResult> {
        let (from_point, to_point) = match (from.resolve(&self.network), to.resolve(&self.network)) {
            (Ok(from), Ok(to)) => (from, to),
            (Err(error), _) | (_, Err(error)) => {
                warn!("Cannot resolve route endpoint: {}", error);
                return None;
            }
        };

        if let Some(route) = self.plan_on_campus(&from_point, &to_point) {
            return Some(route);
        }

        self.plan_external(&from_point, &to_point).await
    }

    /// `None` when an endpoint is outside coverage, does not snap, or the
    /// graph has no path between them.
    pub fn plan_on_campus(&self, from: &GeoPoint, to: &GeoPoint) -> Option<RouteResult> {
        if !self.network.covers(from) || !self.network.covers(to) {
            debug!("Endpoint outside campus coverage");
            return None;
        }

        match self.network.route_between_points(from, to) {
            Ok(path) => Some(self.campus_route(path)),
            Err(error) => {
                debug!("Campus graph cannot route: {}", error);
                None
            }
        }
    }

    pub async fn plan_external(&self, from: &GeoPoint, to: &GeoPoint) -> Option<RouteResult> {
        let via = if self.network.selector().requires_waypoint(from, to) {
            self.network.waypoint_point()
        } else {
            None
        };

        info!(via = via.is_some(), "Routing with the external foot router");

        let compared =
            route_direct_or_via(&self.router, from.into(), via.map(Into::into), to.into()).await?;

        Some(RouteResult::from_external(
            compared.route,
            compared.via_waypoint,
        ))
    }

    fn campus_route(&self, path: SelectedPath) -> RouteResult {
        let duration = path.length / CAMPUS_WALKING_SPEED;

        debug!(
            nodes = path.nodes.len(),
            length = path.length.value(),
            via_waypoint = path.via_waypoint,
            "Routed on the campus graph"
        );

        RouteResult {
            coordinates: self.network.path_points(&path.nodes),
            distance: path.length,
            duration,
            instructions: Some(vec![CAMPUS_INSTRUCTION.to_string()]),
            source: RouteSource::CampusGraph,
            via_waypoint: path.via_waypoint,
        }
    }
}
