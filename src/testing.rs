use crate::{algo::*, prelude::*};

/// Asserts every property an Eulerian tour of `graph` starting at `start` must have
pub(crate) fn assert_valid_tour(graph: &AdjMatrix, tour: &Tour, start: Node) {
    assert_eq!(tour.len(), graph.number_of_edges() as usize, "{tour}");
    assert_eq!(tour.start(), Some(start), "{tour}");
    assert_eq!(tour.vertices().last(), Some(start), "{tour}");
    assert!(tour.is_closed_walk(), "{tour}");
    assert!(tour.covers(graph), "{tour}");
    assert!(tour.edges().iter().all(|&Edge(u, v)| graph.has_edge(u, v)));
}
