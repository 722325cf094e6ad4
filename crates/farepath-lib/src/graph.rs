use std::collections::HashMap;

/// Integer cost attached to an edge and accumulated along a route.
///
/// Signed so that a hand-edited edge list with a negative cost still loads;
/// the search assumes non-negative values and collaborators reject negative
/// costs on the write paths they own.
pub type Cost = i64;

/// Directed edge stored in the adjacency list of its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub destination: String,
    pub cost: Cost,
}

/// Adjacency store mapping each origin to its outgoing edges.
///
/// Edges keep their insertion order and parallel edges between the same pair
/// of locations are all retained. There is no removal operation.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: HashMap<String, Vec<Edge>>,
    edge_count: usize,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge to the adjacency list of `origin`, creating the list the
    /// first time `origin` is seen.
    pub fn insert_edge(
        &mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        cost: Cost,
    ) {
        self.adjacency
            .entry(origin.into())
            .or_default()
            .push(Edge {
                destination: destination.into(),
                cost,
            });
        self.edge_count += 1;
    }

    /// Outgoing edges of `location` in insertion order, or an empty slice when
    /// it has never been an origin.
    pub fn edges_from(&self, location: &str) -> &[Edge] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct locations that have at least one outgoing edge.
    pub fn origin_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_creates_list_for_new_origin() {
        let mut graph = RouteGraph::new();
        assert!(graph.is_empty());

        graph.insert_edge("GRU", "BRC", 10);

        assert_eq!(graph.origin_count(), 1);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(
            graph.edges_from("GRU"),
            &[Edge {
                destination: "BRC".to_string(),
                cost: 10
            }]
        );
    }

    #[test]
    fn unknown_location_has_no_edges() {
        let graph = RouteGraph::new();
        assert!(graph.edges_from("CDG").is_empty());
    }

    #[test]
    fn destinations_are_not_origins() {
        let mut graph = RouteGraph::new();
        graph.insert_edge("GRU", "BRC", 10);
        assert!(graph.edges_from("BRC").is_empty());
        assert_eq!(graph.origin_count(), 1);
    }

    #[test]
    fn parallel_edges_are_kept_in_insertion_order() {
        let mut graph = RouteGraph::new();
        graph.insert_edge("GRU", "SCL", 20);
        graph.insert_edge("GRU", "BRC", 10);
        graph.insert_edge("GRU", "SCL", 15);

        let edges: Vec<_> = graph
            .edges_from("GRU")
            .iter()
            .map(|edge| (edge.destination.as_str(), edge.cost))
            .collect();
        assert_eq!(edges, vec![("SCL", 20), ("BRC", 10), ("SCL", 15)]);
        assert_eq!(graph.edge_count(), 3);
    }
}
