use crate::{
    geopoint::GeoPoint,
    graph::{Graph, Node},
};

pub const ORIGIN: GeoPoint = GeoPoint::new(26.8429, 75.5654);

/// Nodes are given as `(id, meters north, meters east)` relative to [`ORIGIN`].
pub fn geo_graph(nodes: &[(&str, f64, f64)], edges: &[(&str, &str)]) -> Graph {
    let nodes = nodes
        .iter()
        .map(|&(id, north, east)| Node::new(id, ORIGIN.offset_meters(north, east)))
        .collect();

    Graph::from_edges(nodes, edges).unwrap()
}

//
//   c (200,0) ------- h (200,200)
//   |                 |
//   b (100,0)         w (100,100)
//   |               /
//   a (0,0) -------/
//
pub fn campus_like_graph() -> Graph {
    geo_graph(
        &[
            ("a", 0.0, 0.0),
            ("b", 100.0, 0.0),
            ("c", 200.0, 0.0),
            ("w", 100.0, 100.0),
            ("h", 200.0, 200.0),
        ],
        &[("a", "b"), ("b", "c"), ("c", "h"), ("a", "w"), ("w", "h")],
    )
}

/// Planar graph from `(id, x, y)` nodes and weighted-by-distance edges.
pub fn planar_graph(nodes: &[(&str, f64, f64)], edges: &[(&str, &str)]) -> Graph {
    let nodes = nodes
        .iter()
        .map(|&(id, x, y)| Node::planar(id, x, y))
        .collect();

    Graph::from_edges(nodes, edges).unwrap()
}
