/*!
# Graph Generators

This module provides generators for graphs that are useful when working with Eulerian tours:

- deterministic **substructures** such as paths, cycles and cliques (see [`GeneratorSubstructures`]),
- the sample graphs **rings** and **complete graphs** (see [`EulerianFixtures`]),
- **random even-degree graphs** built from random cycles (see [`RandomEulerian`]).

Random generators follow a builder-style pattern:

1. Create a generator instance (e.g., `RandomEulerian::new()`).
2. Set parameters using its setters (e.g., `.nodes(n).cycles(k)`).
3. Generate edges via `generate()` or a whole graph via `build()`.
*/

use rand::Rng;

use crate::prelude::*;

mod eulerian;
mod substructures;

pub use eulerian::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
pub trait GraphGenerator {
    /// Returns the number of nodes of generated graphs
    fn num_nodes(&self) -> NumNodes;

    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng;

    /// Generates a random graph of the given representation.
    fn build<G, R>(&self, rng: &mut R) -> Result<G>
    where
        G: GraphFromScratch,
        R: Rng,
    {
        G::from_edges(self.num_nodes(), self.generate(rng))
    }
}

/// Constructors for the sample graphs commonly used to exercise tour computations.
pub trait EulerianFixtures: Sized {
    /// Creates the cycle `0 - 1 - ... - (n - 1) - 0`.
    /// Every vertex has degree `2` for `n >= 3`.
    ///
    /// # Errors
    /// [`EulerError::SelfLoop`] for `n = 1`.
    fn ring(n: NumNodes) -> Result<Self>;

    /// Creates the complete graph `K_n`, i.e. the complement of the identity matrix.
    /// Every vertex has degree `n - 1`, so the graph is Eulerian exactly for odd `n >= 3`.
    fn complete(n: NumNodes) -> Result<Self>;
}

impl<G> EulerianFixtures for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn ring(n: NumNodes) -> Result<Self> {
        let mut graph = Self::new(n);
        graph.connect_cycle(0..n)?;
        Ok(graph)
    }

    fn complete(n: NumNodes) -> Result<Self> {
        let mut graph = Self::new(n);
        graph.connect_clique(0..n)?;
        Ok(graph)
    }
}
