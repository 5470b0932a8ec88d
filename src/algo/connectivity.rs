use super::*;

/// Reachability queries on undirected graphs.
pub trait Connectivity: Traversal {
    /// Returns the smallest vertex that is not reachable from `start`, if any.
    /// ** Panics if `start >= n` **
    fn first_unreachable_from(&self, start: Node) -> Option<Node> {
        let mut bfs = self.bfs(start);
        bfs.by_ref().for_each(drop);
        self.vertices().find(|&u| !bfs.did_visit_node(u))
    }
}

impl<G: AdjacencyList> Connectivity for G {}
