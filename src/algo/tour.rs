use std::fmt::Display;

use fxhash::FxHashSet;
use itertools::Itertools;

use super::*;

/// An ordered sequence of steps `Edge(from, to)` through a graph.
///
/// Tours returned by [`EulerTour::find_euler_tour`] are closed walks: the destination of every
/// step is the origin of the next one and the last step ends where the first one started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tour(Vec<Edge>);

impl Tour {
    /// Creates an empty tour
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of steps
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns *true* if the tour has no steps
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the steps as a slice
    pub fn edges(&self) -> &[Edge] {
        &self.0
    }

    /// Consumes the tour and returns its steps
    pub fn into_edges(self) -> Vec<Edge> {
        self.0
    }

    /// Origin of the first step
    pub fn start(&self) -> Option<Node> {
        self.0.first().map(Edge::origin)
    }

    /// Returns the sequence of visited vertices, starting with the origin of the first step.
    /// A closed tour with `k` steps yields `k + 1` vertices.
    pub fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.start()
            .into_iter()
            .chain(self.0.iter().map(Edge::destination))
    }

    /// Returns *true* if consecutive steps share their endpoint and the tour ends at its start.
    /// The empty tour is considered closed.
    pub fn is_closed_walk(&self) -> bool {
        let (Some(first), Some(last)) = (self.0.first(), self.0.last()) else {
            return true;
        };

        first.origin() == last.destination()
            && self
                .0
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.destination() == b.origin())
    }

    /// Returns *true* if the steps, taken as unordered pairs, are exactly the edges of `graph`
    /// with no edge traversed twice.
    pub fn covers<G>(&self, graph: &G) -> bool
    where
        G: AdjacencyList + GraphEdgeOrder,
    {
        if self.0.len() != graph.number_of_edges() as usize {
            return false;
        }

        let mut walked = FxHashSet::default();
        if !self.0.iter().all(|e| walked.insert(e.normalized())) {
            return false;
        }

        graph.edges(true).all(|e| walked.contains(&e))
    }

    /// Inserts the closed walk `detour` before the first step of `self` that leaves the start
    /// vertex of `detour`.
    ///
    /// An empty detour leaves the tour unchanged. If no step of `self` originates at the start
    /// of `detour`, [`EulerError::SpliceNotFound`] is returned and `self` is left unchanged.
    ///
    /// # Example
    /// ```
    /// use eulertour::{prelude::*, algo::*};
    ///
    /// let mut tour = Tour::from(vec![Edge(0, 1), Edge(1, 2), Edge(2, 0)]);
    /// tour.splice(Tour::from(vec![Edge(1, 3), Edge(3, 4), Edge(4, 1)])).unwrap();
    ///
    /// assert_eq!(
    ///     tour.vertices().collect::<Vec<_>>(),
    ///     vec![0, 1, 3, 4, 1, 2, 0]
    /// );
    /// ```
    pub fn splice(&mut self, detour: Tour) -> Result<()> {
        let Some(vertex) = detour.start() else {
            return Ok(());
        };

        let pos = self
            .0
            .iter()
            .position(|e| e.origin() == vertex)
            .ok_or(EulerError::SpliceNotFound { vertex })?;

        self.0.splice(pos..pos, detour.0);
        Ok(())
    }

    pub(crate) fn push(&mut self, step: Edge) {
        self.0.push(step);
    }
}

impl From<Vec<Edge>> for Tour {
    fn from(steps: Vec<Edge>) -> Self {
        Self(steps)
    }
}

impl From<Tour> for Vec<(Node, Node)> {
    fn from(tour: Tour) -> Self {
        tour.0.into_iter().map(Into::into).collect_vec()
    }
}

impl Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.vertices().join(" -> "))
    }
}

impl<'a> IntoIterator for &'a Tour {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Tour {
        Tour::from(vec![Edge(0, 1), Edge(1, 2), Edge(2, 0)])
    }

    #[test]
    fn closed_walks() {
        assert!(Tour::new().is_closed_walk());
        assert!(triangle().is_closed_walk());
        assert!(!Tour::from(vec![Edge(0, 1), Edge(1, 2)]).is_closed_walk());
        assert!(!Tour::from(vec![Edge(0, 1), Edge(2, 0)]).is_closed_walk());
        assert_eq!(triangle().start(), Some(0));
        assert_eq!(Tour::new().start(), None);
    }

    #[test]
    fn splice_at_first_occurrence() {
        // 0 -> 1 -> 2 -> 1 -> 0 visits 1 twice; the detour goes before the first departure
        let mut tour = Tour::from(vec![Edge(0, 1), Edge(1, 2), Edge(2, 1), Edge(1, 0)]);
        tour.splice(Tour::from(vec![Edge(1, 3), Edge(3, 4), Edge(4, 1)]))
            .unwrap();

        assert_eq!(
            tour.into_edges(),
            vec![
                Edge(0, 1),
                Edge(1, 3),
                Edge(3, 4),
                Edge(4, 1),
                Edge(1, 2),
                Edge(2, 1),
                Edge(1, 0)
            ]
        );
    }

    #[test]
    fn splice_at_start() {
        let mut tour = triangle();
        tour.splice(Tour::from(vec![Edge(0, 3), Edge(3, 4), Edge(4, 0)]))
            .unwrap();

        assert_eq!(tour.vertices().collect_vec(), vec![0, 3, 4, 0, 1, 2, 0]);
        assert!(tour.is_closed_walk());
    }

    #[test]
    fn splice_empty_and_missing() {
        let mut tour = triangle();
        tour.splice(Tour::new()).unwrap();
        assert_eq!(tour, triangle());

        assert_eq!(
            tour.splice(Tour::from(vec![Edge(5, 6), Edge(6, 7), Edge(7, 5)])),
            Err(EulerError::SpliceNotFound { vertex: 5 })
        );
        assert_eq!(tour, triangle());
    }

    #[test]
    fn covers_graph() {
        let graph = AdjMatrix::from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        assert!(triangle().covers(&graph));

        let doubled = Tour::from(vec![Edge(0, 1), Edge(1, 0), Edge(0, 1)]);
        assert!(!doubled.covers(&graph));
        assert!(!Tour::from(vec![Edge(0, 1), Edge(1, 2)]).covers(&graph));
    }

    #[test]
    fn display() {
        assert_eq!(triangle().to_string(), "0 -> 1 -> 2 -> 0");
        assert_eq!(Tour::new().to_string(), "");
        let pairs: Vec<(Node, Node)> = triangle().into();
        assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 0)]);
    }
}
