use std::ops::RangeInclusive;

use fxhash::FxHashSet;
use itertools::Itertools;
use rand::seq::index::sample;

use super::*;

/// Random graphs in which every vertex has even degree.
///
/// The generator draws `cycles` random simple cycles, each on a uniformly random set of distinct
/// vertices with a length drawn from `cycle_lengths`, and combines them via symmetric difference:
/// an edge contained in an even number of cycles is dropped. Since every cycle contributes an
/// even degree to each of its vertices, all degrees of the result are even.
///
/// The result is **not** necessarily connected and may contain isolated vertices.
/// A single cycle of length `n` always yields a Hamiltonian ring.
///
/// # Example
/// ```
/// use eulertour::{prelude::*, gens::*};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(1);
/// let graph: AdjMatrix = RandomEulerian::new().nodes(10).cycles(4).build(rng).unwrap();
///
/// assert!(graph.degrees().all(|d| d % 2 == 0));
/// ```
#[derive(Debug, Clone)]
pub struct RandomEulerian {
    n: NumNodes,
    cycles: usize,
    lengths: RangeInclusive<NumNodes>,
}

impl Default for RandomEulerian {
    fn default() -> Self {
        Self {
            n: 0,
            cycles: 1,
            lengths: 3..=NumNodes::MAX,
        }
    }
}

impl RandomEulerian {
    /// Creates a new generator producing a single cycle of random length
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of random cycles
    pub fn cycles(mut self, cycles: usize) -> Self {
        self.cycles = cycles;
        self
    }

    /// Sets the range cycle lengths are drawn from.
    /// The range is clamped to `3..=n` when generating.
    pub fn cycle_lengths(mut self, lengths: RangeInclusive<NumNodes>) -> Self {
        self.lengths = lengths;
        self
    }
}

impl NumNodesGen for RandomEulerian {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl GraphGenerator for RandomEulerian {
    fn num_nodes(&self) -> NumNodes {
        self.n
    }

    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        assert!(self.n >= 3, "At least three nodes are required for a cycle!");
        let min_len = (*self.lengths.start()).max(3);
        let max_len = (*self.lengths.end()).min(self.n);
        assert!(min_len <= max_len, "No valid cycle length in the given range!");

        let mut edges = FxHashSet::default();
        for _ in 0..self.cycles {
            let len = rng.random_range(min_len..=max_len);
            let nodes = sample(rng, self.n as usize, len as usize).into_vec();

            for (&u, &v) in nodes.iter().circular_tuple_windows() {
                let edge = Edge(u as Node, v as Node).normalized();
                if !edges.insert(edge) {
                    edges.remove(&edge);
                }
            }
        }

        edges.into_iter().sorted().collect_vec()
    }
}
