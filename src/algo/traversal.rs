/*!
Breadth-first traversal over the current edges of a graph.

The traversal is exposed as an iterator, so callers can stop early, count reachable nodes or
inspect the visited-set afterwards.
*/

use std::collections::VecDeque;

use stream_bitset::prelude::*;

use super::*;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub struct BFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G> BFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
        }
    }

    /// Checks if a given node `u` has already been discovered.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

impl<G> Iterator for BFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

/// Exposes traversal algorithms directly as methods on graphs.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use eulertour::{prelude::*, algo::*};
    ///
    /// let g = AdjMatrix::from_edges(3, [(0, 1)]).unwrap();
    /// assert_eq!(g.bfs(0).collect::<Vec<_>>(), vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjMatrix::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)])
            .unwrap();

        assert_eq!(graph.bfs(1).collect_vec(), vec![1, 0, 2, 5, 4, 3]);
        assert_eq!(graph.bfs(3).count(), 6);
    }

    #[test]
    fn bfs_visited() {
        let graph = AdjMatrix::from_edges(5, [(0, 1), (3, 4)]).unwrap();

        let mut bfs = graph.bfs(0);
        assert_eq!(bfs.by_ref().collect_vec(), vec![0, 1]);
        assert!(bfs.did_visit_node(1));
        assert!(!bfs.did_visit_node(2));
        assert!(!bfs.did_visit_node(3));
    }
}
