use tracing::debug;

use crate::{
    bounds::{COVERAGE_MARGIN_DEGREES, CoverageBounds},
    error::{GraphBuildError, RoutingError},
    geopoint::GeoPoint,
    graph::{Graph, NodeIdx},
    route_selector::{RouteSelector, SelectedPath},
    snap::{SNAP_RADIUS_METERS, Snap, snap_point},
    zones::ZoneIndex,
};

/// The campus graph together with everything needed to route on it. Built
/// once and shared read-only.
pub struct CampusNetwork {
    graph: Graph,
    selector: RouteSelector,
    bounds: CoverageBounds,
    snap_radius: f64,
}

impl CampusNetwork {
    pub fn new(
        graph: Graph,
        zones: ZoneIndex,
        waypoint_id: &str,
    ) -> Result<CampusNetwork, GraphBuildError> {
        let waypoint = graph
            .index_of(waypoint_id)
            .ok_or_else(|| GraphBuildError::UnknownNode(waypoint_id.to_string()))?;

        let node_points = graph.nodes().filter_map(|(_, node)| node.coordinate().as_geo());
        let zone_points = zones.points().iter().map(|p| p.point);
        let node_points: Vec<GeoPoint> = node_points.chain(zone_points).collect();
        let bounds = CoverageBounds::from_points(&node_points).widened(COVERAGE_MARGIN_DEGREES);

        Ok(CampusNetwork {
            graph,
            selector: RouteSelector::new(zones, waypoint),
            bounds,
            snap_radius: SNAP_RADIUS_METERS,
        })
    }

    pub fn with_snap_radius(mut self, snap_radius: f64) -> Self {
        self.snap_radius = snap_radius;
        self
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn selector(&self) -> &RouteSelector {
        &self.selector
    }

    pub fn bounds(&self) -> &CoverageBounds {
        &self.bounds
    }

    pub fn covers(&self, point: &GeoPoint) -> bool {
        self.bounds.contains(point)
    }

    pub fn point_of(&self, node: NodeIdx) -> Option<GeoPoint> {
        self.graph.node(node).coordinate().as_geo()
    }

    pub fn waypoint_point(&self) -> Option<GeoPoint> {
        self.point_of(self.selector.waypoint())
    }

    pub fn snap(&self, point: &GeoPoint) -> Result<Snap, RoutingError> {
        snap_point(&self.graph, point, self.snap_radius)
    }

    /// Snaps both coordinates and runs the route selector on the snapped
    /// nodes. Zones are classified on the raw coordinates.
    pub fn route_between_points(
        &self,
        from: &GeoPoint,
        to: &GeoPoint,
    ) -> Result<SelectedPath, RoutingError> {
        let start = self.snap(from)?;
        let target = self.snap(to)?;

        debug!(
            start = self.graph.node(start.node).id(),
            target = self.graph.node(target.node).id(),
            "Snapped endpoints"
        );

        self.selector
            .select(&self.graph, from, start.node, to, target.node)
            .ok_or_else(|| RoutingError::Unreachable {
                from: self.graph.node(start.node).id().to_string(),
                to: self.graph.node(target.node).id().to_string(),
            })
    }

    pub fn node_point(&self, id: &str) -> Result<GeoPoint, RoutingError> {
        self.graph
            .index_of(id)
            .and_then(|index| self.point_of(index))
            .ok_or_else(|| RoutingError::NodeNotFound(id.to_string()))
    }

    pub fn path_points(&self, path: &[NodeIdx]) -> Vec<GeoPoint> {
        path.iter().filter_map(|node| self.point_of(*node)).collect()
    }
}
