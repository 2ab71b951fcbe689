use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GraphBuildError {
    #[error("Duplicate node id {0}")]
    DuplicateNode(String),
    #[error("Edge references unknown node {0}")]
    UnknownNode(String),
    #[error("Cannot connect {0} and {1}: geographic and planar coordinates are mixed")]
    MixedCoordinates(String, String),
    #[error("Negative proximity threshold {0}")]
    InvalidThreshold(f64),
}

#[derive(Error, Debug, PartialEq)]
pub enum RoutingError {
    #[error("Node {0} is not part of the graph")]
    NodeNotFound(String),
    #[error("No path between {from} and {to}")]
    Unreachable { from: String, to: String },
    #[error("No node within {radius_meters} m of ({lat}, {lng})")]
    SnapFailure {
        lat: f64,
        lng: f64,
        radius_meters: f64,
    },
}
