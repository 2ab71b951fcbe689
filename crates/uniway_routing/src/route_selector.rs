use serde::Serialize;
use tracing::debug;

use crate::{
    dijkstra::shortest_path_between,
    geopoint::GeoPoint,
    graph::{Graph, NodeIdx},
    meters::Meters,
    zones::ZoneIndex,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedPath {
    pub nodes: Vec<NodeIdx>,
    pub length: Meters,
    pub via_waypoint: bool,
}

/// Sum of the distances between consecutive nodes. An empty path is
/// unavailable and has an infinite length.
pub fn path_length(graph: &Graph, path: &[NodeIdx]) -> Meters {
    if path.is_empty() {
        return Meters::INFINITY;
    }

    path.windows(2)
        .map(|pair| {
            let from = graph.node(pair[0]).coordinate();
            let to = graph.node(pair[1]).coordinate();
            Meters::new(from.distance(to).unwrap_or(f64::INFINITY))
        })
        .sum()
}

/// Picks the via path only when it is strictly shorter than the direct one.
pub fn choose_shorter(graph: &Graph, direct: Vec<NodeIdx>, via: Vec<NodeIdx>) -> Option<SelectedPath> {
    let direct_length = path_length(graph, &direct);
    let via_length = path_length(graph, &via);

    debug!(%direct_length, %via_length, "Comparing direct and via paths");

    if via_length < direct_length {
        Some(SelectedPath {
            nodes: via,
            length: via_length,
            via_waypoint: true,
        })
    } else if direct_length.is_finite() {
        Some(SelectedPath {
            nodes: direct,
            length: direct_length,
            via_waypoint: false,
        })
    } else {
        None
    }
}

/// Decides whether a route must go through the mandatory connector between
/// the residential cluster and the academic core.
pub struct RouteSelector {
    zones: ZoneIndex,
    waypoint: NodeIdx,
}

impl RouteSelector {
    pub fn new(zones: ZoneIndex, waypoint: NodeIdx) -> Self {
        RouteSelector { zones, waypoint }
    }

    pub fn waypoint(&self) -> NodeIdx {
        self.waypoint
    }

    pub fn zones(&self) -> &ZoneIndex {
        &self.zones
    }

    pub fn requires_waypoint(&self, from: &GeoPoint, to: &GeoPoint) -> bool {
        self.zones.is_cross_zone(from, to)
    }

    /// start -> waypoint -> target with the waypoint appearing once, empty
    /// when either half is unreachable.
    pub fn via_path(&self, graph: &Graph, start: NodeIdx, target: NodeIdx) -> Vec<NodeIdx> {
        let mut first = shortest_path_between(graph, start, self.waypoint);
        let second = shortest_path_between(graph, self.waypoint, target);

        if first.is_empty() || second.is_empty() {
            return Vec::new();
        }

        first.pop();
        first.extend(second);
        first
    }

    /// `from` and `to` are the raw endpoint coordinates used for zone
    /// classification, `start` and `target` the nodes they snapped to.
    pub fn select(
        &self,
        graph: &Graph,
        from: &GeoPoint,
        start: NodeIdx,
        to: &GeoPoint,
        target: NodeIdx,
    ) -> Option<SelectedPath> {
        let direct = shortest_path_between(graph, start, target);

        if !self.requires_waypoint(from, to) {
            return choose_shorter(graph, direct, Vec::new());
        }

        debug!("Endpoints are in different zones, considering the waypoint");
        let via = self.via_path(graph, start, target);
        choose_shorter(graph, direct, via)
    }
}
