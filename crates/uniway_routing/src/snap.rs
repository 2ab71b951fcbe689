use crate::{
    error::RoutingError,
    geopoint::GeoPoint,
    graph::{Coordinate, Graph, NodeIdx},
};

/// Coordinates further than this from every node are considered off graph.
pub const SNAP_RADIUS_METERS: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    pub node: NodeIdx,
    pub distance: f64,
}

/// Closest node to `point`, ties going to the first node in insertion order.
/// Nodes whose coordinate kind differs from `point` are ignored.
pub fn closest_node(graph: &Graph, point: &Coordinate) -> Option<Snap> {
    let mut best: Option<Snap> = None;

    for (index, node) in graph.nodes() {
        let Some(distance) = point.distance(node.coordinate()) else {
            continue;
        };

        if best.is_none_or(|snap| distance < snap.distance) {
            best = Some(Snap {
                node: index,
                distance,
            });
        }
    }

    best
}

pub fn nearest_node(graph: &Graph, point: &Coordinate, radius: f64) -> Option<NodeIdx> {
    closest_node(graph, point)
        .filter(|snap| snap.distance <= radius)
        .map(|snap| snap.node)
}

pub fn snap_point(graph: &Graph, point: &GeoPoint, radius: f64) -> Result<Snap, RoutingError> {
    closest_node(graph, &Coordinate::Geo(*point))
        .filter(|snap| snap.distance <= radius)
        .ok_or(RoutingError::SnapFailure {
            lat: point.lat,
            lng: point.lng,
            radius_meters: radius,
        })
}
