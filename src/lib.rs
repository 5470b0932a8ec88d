/*!
`eulertour` computes **Eulerian tours**, closed walks traversing every edge exactly once, on
undirected graphs stored as adjacency matrices.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.
The graph itself is an [`AdjMatrix`](crate::repr::AdjMatrix): a symmetric bit matrix without
self-loops that can be constructed from a dense `0/1` matrix or from an edge list.

# Algorithm

Tours are built with a randomized variant of **Hierholzer's algorithm**:
1. walk randomly from the start vertex, deleting every traversed edge, until the walk gets stuck
   (which, in a graph with only even degrees, happens exactly at the start vertex),
2. for every vertex on that walk that still has edges, recursively find a closed detour,
3. splice each detour into the walk at the first step leaving its start vertex.

All deleted edges are logged and restored once the tour is complete (or an error occurred),
so the graph is unchanged after every call.

# Usage

```rust
use eulertour::{prelude::*, algo::*, gens::*};

let mut ring = AdjMatrix::ring(11).unwrap();
assert!(ring.has_eulerian_tour());

let tour = ring.find_euler_tour(0).unwrap();
assert_eq!(tour.len(), 11);
assert!(tour.is_closed_walk());
assert!(tour.covers(&ring));
```

Randomness can be controlled by passing an explicit RNG (see [`EulerTour::find_euler_tour_with`](crate::algo::EulerTour::find_euler_tour_with))
and the algorithm can be configured with the [`Hierholzer`](crate::algo::Hierholzer) builder.

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and the matrix representation,
- [`algo`] includes the tour computation as well as connectivity checks,
- [`gens`] includes fixture generators for rings, complete graphs and random Eulerian graphs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use error::*;

/// `eulertour::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as the matrix representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
