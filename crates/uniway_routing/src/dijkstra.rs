use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::{
    error::RoutingError,
    graph::{Graph, NodeIdx},
};

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node: NodeIdx,
    weight: f64,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.node.cmp(&self.node))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIdx>,
    pub weight: f64,
}

pub struct Dijkstra<'a> {
    graph: &'a Graph,
    heap: BinaryHeap<HeapItem>,
    weights: Vec<f64>,
    parents: Vec<Option<NodeIdx>>,
    settled: Vec<bool>,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        let node_count = graph.node_count();
        Dijkstra {
            graph,
            heap: BinaryHeap::with_capacity(node_count),
            weights: vec![f64::INFINITY; node_count],
            parents: vec![None; node_count],
            settled: vec![false; node_count],
        }
    }

    fn reset(&mut self) {
        self.heap.clear();
        self.weights.fill(f64::INFINITY);
        self.parents.fill(None);
        self.settled.fill(false);
    }

    pub fn calc_path(
        &mut self,
        start: NodeIdx,
        target: NodeIdx,
    ) -> Result<ShortestPath, RoutingError> {
        for node in [start, target] {
            if !self.graph.contains(node) {
                return Err(RoutingError::NodeNotFound(node.to_string()));
            }
        }

        if start == target {
            return Ok(ShortestPath {
                nodes: vec![start],
                weight: 0.0,
            });
        }

        self.reset();
        self.weights[start.get()] = 0.0;
        self.heap.push(HeapItem {
            node: start,
            weight: 0.0,
        });

        let mut iterations = 0;

        while let Some(HeapItem { node, weight }) = self.heap.pop() {
            if self.settled[node.get()] {
                continue;
            }

            self.settled[node.get()] = true;
            iterations += 1;

            if node == target {
                break;
            }

            for edge in self.graph.edges(node) {
                if self.settled[edge.to.get()] {
                    continue;
                }

                let next_weight = weight + edge.weight;
                if next_weight < self.weights[edge.to.get()] {
                    self.weights[edge.to.get()] = next_weight;
                    self.parents[edge.to.get()] = Some(node);
                    self.heap.push(HeapItem {
                        node: edge.to,
                        weight: next_weight,
                    });
                }
            }
        }

        debug!(iterations, "Dijkstra finished");

        if !self.settled[target.get()] {
            return Err(RoutingError::Unreachable {
                from: self.graph.node(start).id().to_string(),
                to: self.graph.node(target).id().to_string(),
            });
        }

        Ok(ShortestPath {
            nodes: self.build_path(target),
            weight: self.weights[target.get()],
        })
    }

    fn build_path(&self, target: NodeIdx) -> Vec<NodeIdx> {
        let mut path = vec![target];
        let mut node = target;

        while let Some(parent) = self.parents[node.get()] {
            path.push(parent);
            node = parent;
        }

        path.reverse();
        path
    }
}

/// Node path between two node ids, empty when either id is unknown or the
/// target cannot be reached.
pub fn shortest_path(graph: &Graph, start: &str, target: &str) -> Vec<NodeIdx> {
    let (Some(start_idx), Some(target_idx)) = (graph.index_of(start), graph.index_of(target))
    else {
        debug!(start, target, "Unknown node id, no path");
        return Vec::new();
    };

    shortest_path_between(graph, start_idx, target_idx)
}

pub fn shortest_path_between(graph: &Graph, start: NodeIdx, target: NodeIdx) -> Vec<NodeIdx> {
    match Dijkstra::new(graph).calc_path(start, target) {
        Ok(path) => path.nodes,
        Err(error) => {
            debug!("{}", error);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::graph::Node;
    use crate::test_utils::{campus_like_graph, planar_graph};

    fn path_weight(graph: &Graph, path: &[NodeIdx]) -> f64 {
        path.windows(2)
            .map(|pair| {
                graph
                    .edges(pair[0])
                    .iter()
                    .filter(|edge| edge.to == pair[1])
                    .map(|edge| edge.weight)
                    .fold(f64::INFINITY, f64::min)
            })
            .sum()
    }

    fn brute_force_minimum(graph: &Graph, start: NodeIdx, target: NodeIdx) -> Option<f64> {
        fn visit(
            graph: &Graph,
            node: NodeIdx,
            target: NodeIdx,
            visited: &mut Vec<bool>,
            weight: f64,
            best: &mut Option<f64>,
        ) {
            if node == target {
                if best.is_none_or(|current| weight < current) {
                    *best = Some(weight);
                }
                return;
            }

            for edge in graph.edges(node) {
                if visited[edge.to.get()] {
                    continue;
                }
                visited[edge.to.get()] = true;
                visit(graph, edge.to, target, visited, weight + edge.weight, best);
                visited[edge.to.get()] = false;
            }
        }

        let mut visited = vec![false; graph.node_count()];
        visited[start.get()] = true;
        let mut best = None;
        visit(graph, start, target, &mut visited, 0.0, &mut best);
        best
    }

    #[test]
    fn path_to_itself() {
        let graph = campus_like_graph();
        for (index, node) in graph.nodes() {
            assert_eq!(shortest_path(&graph, node.id(), node.id()), vec![index]);
        }
    }

    #[test]
    fn finds_the_shorter_branch() {
        let graph = campus_like_graph();
        let path = shortest_path(&graph, "a", "h");
        assert_eq!(graph.ids(&path), vec!["a", "w", "h"]);
    }

    #[test]
    fn disconnected_components_have_no_path() {
        let graph = planar_graph(
            &[("a", 0.0, 0.0), ("b", 1.0, 0.0), ("c", 10.0, 0.0), ("d", 11.0, 0.0)],
            &[("a", "b"), ("c", "d")],
        );

        assert!(shortest_path(&graph, "a", "d").is_empty());
        assert!(matches!(
            Dijkstra::new(&graph).calc_path(graph.index_of("a").unwrap(), graph.index_of("d").unwrap()),
            Err(RoutingError::Unreachable { .. })
        ));
    }

    #[test]
    fn unknown_ids_have_no_path() {
        let graph = campus_like_graph();
        assert!(shortest_path(&graph, "a", "nowhere").is_empty());
        assert!(shortest_path(&graph, "nowhere", "a").is_empty());
        assert!(matches!(
            Dijkstra::new(&graph).calc_path(NodeIdx::new(0), NodeIdx::new(99)),
            Err(RoutingError::NodeNotFound(_))
        ));
    }

    #[test]
    fn solver_can_be_reused() {
        let graph = campus_like_graph();
        let a = graph.index_of("a").unwrap();
        let c = graph.index_of("c").unwrap();
        let h = graph.index_of("h").unwrap();

        let mut dijkstra = Dijkstra::new(&graph);
        let first = dijkstra.calc_path(a, h).unwrap();
        let second = dijkstra.calc_path(c, a).unwrap();

        assert_eq!(graph.ids(&first.nodes), vec!["a", "w", "h"]);
        assert_eq!(graph.ids(&second.nodes), vec!["c", "b", "a"]);
        assert!((second.weight - 200.0).abs() < 1e-6);
    }

    #[test]
    fn matches_brute_force_on_small_random_graphs() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let node_count = rng.random_range(2..=8);
            let nodes: Vec<Node> = (0..node_count)
                .map(|i| {
                    Node::planar(
                        format!("n{i}"),
                        rng.random_range(0.0..100.0),
                        rng.random_range(0.0..100.0),
                    )
                })
                .collect();

            let mut edges = Vec::new();
            for i in 0..node_count {
                for j in (i + 1)..node_count {
                    if rng.random_bool(0.4) {
                        edges.push((format!("n{i}"), format!("n{j}")));
                    }
                }
            }

            let graph = Graph::from_edges(nodes, &edges).unwrap();
            let start = NodeIdx::new(0);
            let target = NodeIdx::new(node_count - 1);

            let path = shortest_path_between(&graph, start, target);
            match brute_force_minimum(&graph, start, target) {
                None => assert!(path.is_empty()),
                Some(expected) => {
                    assert_eq!(path.first(), Some(&start));
                    assert_eq!(path.last(), Some(&target));
                    assert!((path_weight(&graph, &path) - expected).abs() < 1e-9);
                }
            }
        }
    }
}
