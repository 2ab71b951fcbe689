use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::GraphBuildError, geopoint::GeoPoint};

/// Default linking radius of the proximity builder, in schematic map units.
pub const DEFAULT_PROXIMITY_THRESHOLD: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeIdx(usize);

impl NodeIdx {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Coordinate {
    Geo(GeoPoint),
    Planar { x: f64, y: f64 },
}

impl Coordinate {
    /// Great-circle meters for geographic pairs, Euclidean units for planar
    /// pairs, `None` when the kinds differ.
    pub fn distance(&self, other: &Coordinate) -> Option<f64> {
        match (self, other) {
            (Coordinate::Geo(a), Coordinate::Geo(b)) => Some(a.haversine_distance(b)),
            (Coordinate::Planar { x: x1, y: y1 }, Coordinate::Planar { x: x2, y: y2 }) => {
                let dx = x1 - x2;
                let dy = y1 - y2;
                Some((dx * dx + dy * dy).sqrt())
            }
            _ => None,
        }
    }

    pub fn as_geo(&self) -> Option<GeoPoint> {
        match self {
            Coordinate::Geo(point) => Some(*point),
            Coordinate::Planar { .. } => None,
        }
    }
}

impl From<GeoPoint> for Coordinate {
    fn from(point: GeoPoint) -> Self {
        Coordinate::Geo(point)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Node {
    id: String,
    coordinate: Coordinate,
    label: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, coordinate: impl Into<Coordinate>) -> Self {
        Node {
            id: id.into(),
            coordinate: coordinate.into(),
            label: None,
        }
    }

    pub fn planar(id: impl Into<String>, x: f64, y: f64) -> Self {
        Node::new(id, Coordinate::Planar { x, y })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphEdge {
    pub to: NodeIdx,
    pub weight: f64,
}

/// Undirected weighted graph. Every edge is stored in both adjacency lists
/// with the same weight, and nodes keep their insertion order.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    adjacency: Vec<Vec<GraphEdge>>,
    ids: FxHashMap<String, NodeIdx>,
}

impl Graph {
    fn with_nodes(nodes: Vec<Node>) -> Result<Graph, GraphBuildError> {
        let mut ids = FxHashMap::default();
        for (index, node) in nodes.iter().enumerate() {
            if ids.insert(node.id.clone(), NodeIdx(index)).is_some() {
                return Err(GraphBuildError::DuplicateNode(node.id.clone()));
            }
        }

        Ok(Graph {
            adjacency: vec![Vec::new(); nodes.len()],
            nodes,
            ids,
        })
    }

    /// Builds the graph from a declared list of undirected edges, weighted by
    /// the distance between their end points.
    pub fn from_edges<S: AsRef<str>>(
        nodes: Vec<Node>,
        edges: &[(S, S)],
    ) -> Result<Graph, GraphBuildError> {
        let mut graph = Graph::with_nodes(nodes)?;

        for (a, b) in edges {
            let (a, b) = (a.as_ref(), b.as_ref());
            let from = graph
                .index_of(a)
                .ok_or_else(|| GraphBuildError::UnknownNode(a.to_string()))?;
            let to = graph
                .index_of(b)
                .ok_or_else(|| GraphBuildError::UnknownNode(b.to_string()))?;

            let weight = graph.nodes[from.0]
                .coordinate
                .distance(&graph.nodes[to.0].coordinate)
                .ok_or_else(|| GraphBuildError::MixedCoordinates(a.to_string(), b.to_string()))?;

            graph.link(from, to, weight);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built graph from explicit edges"
        );

        Ok(graph)
    }

    /// Links every pair of nodes whose distance is within `threshold`.
    pub fn from_proximity(nodes: Vec<Node>, threshold: f64) -> Result<Graph, GraphBuildError> {
        if threshold.is_nan() || threshold < 0.0 {
            return Err(GraphBuildError::InvalidThreshold(threshold));
        }

        let mut graph = Graph::with_nodes(nodes)?;

        for i in 0..graph.nodes.len() {
            for j in (i + 1)..graph.nodes.len() {
                let (a, b) = (&graph.nodes[i], &graph.nodes[j]);
                let distance = a.coordinate.distance(&b.coordinate).ok_or_else(|| {
                    GraphBuildError::MixedCoordinates(a.id.clone(), b.id.clone())
                })?;

                if distance <= threshold {
                    graph.link(NodeIdx(i), NodeIdx(j), distance);
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            threshold,
            "Built graph from node proximity"
        );

        Ok(graph)
    }

    fn link(&mut self, a: NodeIdx, b: NodeIdx, weight: f64) {
        self.adjacency[a.0].push(GraphEdge { to: b, weight });
        if a != b {
            self.adjacency[b.0].push(GraphEdge { to: a, weight });
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        let mut half_edges = 0;
        let mut loops = 0;
        for (index, edges) in self.adjacency.iter().enumerate() {
            half_edges += edges.len();
            loops += edges.iter().filter(|edge| edge.to.0 == index).count();
        }
        (half_edges - loops) / 2 + loops
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIdx> {
        self.ids.get(id).copied()
    }

    pub fn node(&self, index: NodeIdx) -> &Node {
        &self.nodes[index.0]
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIdx, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeIdx(index), node))
    }

    pub fn edges(&self, index: NodeIdx) -> &[GraphEdge] {
        &self.adjacency[index.0]
    }

    pub fn contains(&self, index: NodeIdx) -> bool {
        index.0 < self.nodes.len()
    }

    pub fn ids<'a>(&'a self, path: &[NodeIdx]) -> Vec<&'a str> {
        path.iter().map(|index| self.node(*index).id()).collect()
    }
}

/// Explicit edges when given, proximity linking with the default threshold
/// otherwise.
pub fn build_graph<S: AsRef<str>>(
    nodes: Vec<Node>,
    edges: Option<&[(S, S)]>,
) -> Result<Graph, GraphBuildError> {
    match edges {
        Some(edges) => Graph::from_edges(nodes, edges),
        None => Graph::from_proximity(nodes, DEFAULT_PROXIMITY_THRESHOLD),
    }
}
