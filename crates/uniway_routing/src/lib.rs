pub mod bounds;
pub mod campus;
pub mod category;
pub mod dijkstra;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod meters;
pub mod network;
pub mod route_selector;
pub mod snap;
pub mod zones;

#[cfg(test)]
pub(crate) mod test_utils;
