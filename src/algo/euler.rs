/*!
# Eulerian Tours

Randomized **Hierholzer** construction of closed walks that traverse every edge exactly once.

The search consumes the graph destructively: every traversed edge is deleted from the matrix
right away and appended to an undo log. Once the tour is assembled (or the search failed), the
log is replayed in reverse and the graph is back in its original state.

The simplest entry point is the [`EulerTour`] trait implemented on every editable graph.
For more control, configure a [`Hierholzer`] instance.
*/

use rand::Rng;
use tracing::{debug, trace};

use super::*;

/// Which endpoint of a walked step is checked for remaining edges before recursing into a detour.
///
/// Both conventions yield a valid tour on Eulerian graphs; they only differ in where detours are
/// discovered and thus in the shape of the resulting tour.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum DetourAnchor {
    /// Check the vertex a step walks *to*
    #[default]
    Destination,
    /// Check the vertex a step walks *from*
    Origin,
}

impl DetourAnchor {
    /// Returns the endpoint of `step` selected by this anchor
    pub fn endpoint(self, step: Edge) -> Node {
        match self {
            DetourAnchor::Destination => step.destination(),
            DetourAnchor::Origin => step.origin(),
        }
    }
}

/// Precondition that gates a tour computation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ConnectivityCheck {
    /// Every vertex must have positive even degree.
    /// Isolated vertices are the only disconnection detected up front; graphs made of several
    /// Eulerian components are reported as [`EulerError::Disconnected`] after the search.
    #[default]
    DegreeOnly,
    /// Like `DegreeOnly`, but additionally every vertex must be reachable from vertex `0`.
    Reachability,
}

/// Configurable randomized Hierholzer algorithm.
///
/// # Example
/// ```
/// use eulertour::{prelude::*, algo::*, gens::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let mut graph = AdjMatrix::complete(5).unwrap();
/// let rng = &mut Pcg64Mcg::seed_from_u64(7);
///
/// let tour = Hierholzer::new()
///     .anchor(DetourAnchor::Origin)
///     .connectivity(ConnectivityCheck::Reachability)
///     .run(&mut graph, rng, 2)
///     .unwrap();
///
/// assert_eq!(tour.len(), 10);
/// assert_eq!(tour.start(), Some(2));
/// assert!(tour.covers(&graph));
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Hierholzer {
    anchor: DetourAnchor,
    connectivity: ConnectivityCheck,
}

impl Hierholzer {
    /// Creates a new instance with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint that is checked for detours
    pub fn anchor(mut self, anchor: DetourAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the precondition checked before the search starts
    pub fn connectivity(mut self, connectivity: ConnectivityCheck) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Returns the reason why `graph` fails the configured precondition, if any
    pub fn violation<G>(&self, graph: &G) -> Option<Violation>
    where
        G: EulerTour,
    {
        match self.connectivity {
            ConnectivityCheck::DegreeOnly => graph.eulerian_violation(),
            ConnectivityCheck::Reachability => graph.connected_eulerian_violation(),
        }
    }

    /// Computes an Eulerian tour of `graph` starting and ending at `start`.
    ///
    /// The graph is temporarily modified but always restored before returning, including when
    /// an error is returned.
    ///
    /// # Errors
    /// - [`EulerError::IndexOutOfRange`] if `start >= n`,
    /// - [`EulerError::PreconditionViolation`] if the configured precondition fails,
    /// - [`EulerError::Disconnected`] if the walk could not reach every edge.
    pub fn run<G, R>(&self, graph: &mut G, rng: &mut R, start: Node) -> Result<Tour>
    where
        G: EulerTour,
        R: Rng,
    {
        graph.check_node(start)?;
        if let Some(violation) = self.violation(&*graph) {
            debug!(%violation, "graph has no Eulerian tour");
            return Err(EulerError::PreconditionViolation(violation));
        }

        let total = graph.number_of_edges();
        debug!(
            nodes = graph.number_of_nodes(),
            edges = total,
            start,
            anchor = ?self.anchor,
            "searching Eulerian tour"
        );

        let mut search = TourSearch::new(graph, rng, self.anchor);
        let tour = search.euler(start);
        search.restore()?;
        let tour = tour?;

        let covered = tour.len() as NumEdges;
        if covered != total {
            debug!(covered, total, "walk did not reach every edge");
            return Err(EulerError::Disconnected { covered, total });
        }

        Ok(tour)
    }
}

/// Eulerian tour queries and computations on editable undirected graphs.
pub trait EulerTour: AdjacencyList + GraphEdgeOrder + GraphEdgeEditing {
    /// Returns the first vertex (in increasing order) with odd or zero degree
    fn eulerian_violation(&self) -> Option<Violation> {
        self.vertices().find_map(|vertex| {
            let degree = self.degree_of(vertex);
            if degree % 2 != 0 {
                Some(Violation::OddDegree { vertex, degree })
            } else if degree == 0 {
                Some(Violation::Isolated { vertex })
            } else {
                None
            }
        })
    }

    /// Like [`EulerTour::eulerian_violation`] but also reports vertices that are not reachable
    /// from vertex `0`
    fn connected_eulerian_violation(&self) -> Option<Violation> {
        self.eulerian_violation().or_else(|| {
            if self.is_empty() {
                None
            } else {
                self.first_unreachable_from(0)
                    .map(|vertex| Violation::Unreachable { vertex })
            }
        })
    }

    /// Returns *true* if every vertex has positive even degree.
    ///
    /// Note that this does not test connectivity beyond the absence of isolated vertices.
    /// Use [`EulerTour::has_connected_eulerian_tour`] for the full check.
    fn has_eulerian_tour(&self) -> bool {
        self.eulerian_violation().is_none()
    }

    /// Returns *true* if every vertex has positive even degree and the graph is connected
    fn has_connected_eulerian_tour(&self) -> bool {
        self.connected_eulerian_violation().is_none()
    }

    /// Computes an Eulerian tour starting at `start` using the thread-local RNG.
    /// See [`Hierholzer::run`] for details.
    fn find_euler_tour(&mut self, start: Node) -> Result<Tour> {
        let mut rng = rand::rng();
        self.find_euler_tour_with(&mut rng, start)
    }

    /// Computes an Eulerian tour starting at `start` using the provided RNG.
    /// See [`Hierholzer::run`] for details.
    fn find_euler_tour_with<R: Rng>(&mut self, rng: &mut R, start: Node) -> Result<Tour> {
        Hierholzer::new().run(self, rng, start)
    }
}

impl<G> EulerTour for G where G: AdjacencyList + GraphEdgeOrder + GraphEdgeEditing {}

/// State of a single tour computation: the graph being consumed and the log of removed edges.
struct TourSearch<'a, G, R>
where
    G: EulerTour,
    R: Rng,
{
    graph: &'a mut G,
    rng: &'a mut R,
    anchor: DetourAnchor,
    removed: Vec<Edge>,
}

impl<'a, G, R> TourSearch<'a, G, R>
where
    G: EulerTour,
    R: Rng,
{
    fn new(graph: &'a mut G, rng: &'a mut R, anchor: DetourAnchor) -> Self {
        let capacity = graph.number_of_edges() as usize;
        Self {
            graph,
            rng,
            anchor,
            removed: Vec::with_capacity(capacity),
        }
    }

    /// Picks a uniformly random remaining neighbor of `u`
    fn random_neighbor(&mut self, u: Node) -> Option<Node> {
        let degree = self.graph.degree_of(u);
        if degree == 0 {
            return None;
        }

        let i = self.rng.random_range(0..degree);
        self.graph.neighbors_of(u).nth(i as usize)
    }

    /// Walks randomly from `start` until stuck, deleting every traversed edge
    fn find_tour(&mut self, start: Node) -> Result<Tour> {
        let mut tour = Tour::new();
        let mut u = start;
        while let Some(v) = self.random_neighbor(u) {
            self.graph.remove_edge(u, v)?;
            self.removed.push(Edge(u, v));
            tour.push(Edge(u, v));
            u = v;
        }

        trace!(start, end = u, steps = tour.len(), "random walk");
        Ok(tour)
    }

    /// Walks from `start` and recursively splices in detours at every walked vertex that still
    /// has edges left
    fn euler(&mut self, start: Node) -> Result<Tour> {
        let mut tour = self.find_tour(start)?;
        let snapshot = tour.edges().to_vec();

        for step in snapshot {
            let v = self.anchor.endpoint(step);
            if !self.graph.is_singleton(v) {
                let detour = self.euler(v)?;
                trace!(at = v, steps = detour.len(), "splicing detour");
                tour.splice(detour)?;
            }
        }

        Ok(tour)
    }

    /// Re-inserts all removed edges in reverse order of removal
    fn restore(&mut self) -> Result<()> {
        debug!(edges = self.removed.len(), "restoring removed edges");
        while let Some(Edge(u, v)) = self.removed.pop() {
            self.graph.add_edge(u, v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn has_eulerian_tour_on_rings() {
        for n in 3..20 {
            let graph = AdjMatrix::ring(n).unwrap();
            assert!(graph.has_eulerian_tour());
            assert!(graph.has_connected_eulerian_tour());
        }
    }

    #[test]
    fn odd_and_isolated_vertices() {
        // vertex 3 hangs off the triangle
        let odd = AdjMatrix::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        assert!(!odd.has_eulerian_tour());
        assert_eq!(
            odd.eulerian_violation(),
            Some(Violation::OddDegree {
                vertex: 2,
                degree: 3
            })
        );

        let isolated = AdjMatrix::from_edges(4, [(0, 1), (1, 2), (2, 0)]).unwrap();
        assert!(!isolated.has_eulerian_tour());
        assert_eq!(
            isolated.eulerian_violation(),
            Some(Violation::Isolated { vertex: 3 })
        );
    }

    #[test]
    fn ring_of_eleven() {
        let mut graph = AdjMatrix::new(11);
        for i in 0..11 {
            graph.add_edge(i, (i + 1) % 11).unwrap();
        }
        let before = graph.to_matrix();

        assert!(graph.has_eulerian_tour());
        let tour = graph.find_euler_tour(0).unwrap();

        assert_eq!(tour.len(), 11);
        assert_valid_tour(&graph, &tour, 0);
        assert_eq!(graph.to_matrix(), before);
    }

    #[test]
    fn complete_graph_k5() {
        let mut graph = AdjMatrix::complete(5).unwrap();
        assert!(graph.has_eulerian_tour());

        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for start in 0..5 {
            let tour = graph.find_euler_tour_with(rng, start).unwrap();
            assert_eq!(tour.len(), 10);
            assert_valid_tour(&graph, &tour, start);
        }
    }

    #[test]
    fn complete_graph_k4_is_rejected() {
        let mut graph = AdjMatrix::complete(4).unwrap();
        let before = graph.clone();

        assert!(!graph.has_eulerian_tour());
        assert_eq!(
            graph.find_euler_tour(0),
            Err(EulerError::PreconditionViolation(Violation::OddDegree {
                vertex: 0,
                degree: 3
            }))
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn start_out_of_range() {
        let mut graph = AdjMatrix::ring(5).unwrap();
        let before = graph.clone();

        assert_eq!(
            graph.find_euler_tour(5),
            Err(EulerError::IndexOutOfRange { index: 5, n: 5 })
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn repeated_tours() {
        let mut graph = AdjMatrix::complete(11).unwrap();
        let before = graph.clone();

        let first = graph.find_euler_tour(0).unwrap();
        let second = graph.find_euler_tour(0).unwrap();

        for tour in [&first, &second] {
            assert_eq!(tour.len(), 55);
            assert_valid_tour(&graph, tour, 0);
        }
        assert_eq!(graph, before);
    }

    #[test]
    fn seeded_tours_are_reproducible() {
        let mut graph = AdjMatrix::complete(9).unwrap();

        let a = graph
            .find_euler_tour_with(&mut Pcg64Mcg::seed_from_u64(42), 4)
            .unwrap();
        let b = graph
            .find_euler_tour_with(&mut Pcg64Mcg::seed_from_u64(42), 4)
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn both_anchors_yield_tours() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        // two triangles and a square sharing vertex 0, plus K7
        let mut flower = AdjMatrix::from_edges(
            8,
            [
                (0, 1),
                (1, 2),
                (2, 0),
                (0, 3),
                (3, 4),
                (4, 0),
                (0, 5),
                (5, 6),
                (6, 7),
                (7, 0),
            ],
        )
        .unwrap();
        let mut k7 = AdjMatrix::complete(7).unwrap();

        for anchor in [DetourAnchor::Destination, DetourAnchor::Origin] {
            let algo = Hierholzer::new().anchor(anchor);
            for graph in [&mut flower, &mut k7] {
                let before = graph.clone();
                for start in graph.vertices_range() {
                    for _ in 0..10 {
                        let tour = algo.run(&mut *graph, rng, start).unwrap();
                        assert_valid_tour(graph, &tour, start);
                    }
                }
                assert_eq!(*graph, before);
            }
        }
    }

    #[test]
    fn disjoint_triangles() {
        let mut graph =
            AdjMatrix::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]).unwrap();
        let before = graph.clone();

        assert!(graph.has_eulerian_tour());
        assert!(!graph.has_connected_eulerian_tour());
        assert_eq!(
            graph.connected_eulerian_violation(),
            Some(Violation::Unreachable { vertex: 3 })
        );

        assert_eq!(
            graph.find_euler_tour(0),
            Err(EulerError::Disconnected {
                covered: 3,
                total: 6
            })
        );
        assert_eq!(graph, before);

        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        assert_eq!(
            Hierholzer::new()
                .connectivity(ConnectivityCheck::Reachability)
                .run(&mut graph, rng, 4),
            Err(EulerError::PreconditionViolation(Violation::Unreachable {
                vertex: 3
            }))
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn random_walk_returns_to_start() {
        let mut graph = AdjMatrix::complete(7).unwrap();
        let before = graph.clone();
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        let mut search = TourSearch::new(&mut graph, rng, DetourAnchor::default());
        let walk = search.find_tour(3).unwrap();

        assert!(!walk.is_empty());
        assert!(walk.is_closed_walk());
        assert_eq!(walk.start(), Some(3));
        assert!(search.graph.is_singleton(3));
        assert_eq!(search.removed.len(), walk.len());

        search.restore().unwrap();
        assert!(search.removed.is_empty());
        assert_eq!(graph, before);
    }

    #[test]
    fn random_eulerian_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let mut num_connected = 0;
        for n in [5 as NumNodes, 10, 20] {
            // a single cycle through all nodes is always connected
            let configs = [(1, n..=n), (1, 3..=n), (3, 3..=n), (8, 3..=n)];
            for (cycles, lengths) in configs {
                for _ in 0..10 {
                    let mut graph: AdjMatrix = RandomEulerian::new()
                        .nodes(n)
                        .cycles(cycles)
                        .cycle_lengths(lengths.clone())
                        .build(rng)
                        .unwrap();
                    let before = graph.clone();

                    assert!(graph.degrees().all(|d| d % 2 == 0));

                    if graph.has_connected_eulerian_tour() {
                        num_connected += 1;
                        let start = rng.random_range(0..n);
                        let tour = graph.find_euler_tour_with(rng, start).unwrap();
                        assert_valid_tour(&graph, &tour, start);
                    } else if graph.has_eulerian_tour() {
                        assert!(matches!(
                            graph.find_euler_tour_with(rng, 0),
                            Err(EulerError::Disconnected { .. })
                        ));
                    } else {
                        assert!(matches!(
                            graph.find_euler_tour_with(rng, 0),
                            Err(EulerError::PreconditionViolation(_))
                        ));
                    }

                    assert_eq!(graph, before);
                }
            }
        }

        assert!(num_connected >= 30);
    }
}
