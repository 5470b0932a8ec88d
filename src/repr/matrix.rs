use std::fmt::Debug;

use itertools::Itertools;
use stream_bitset::prelude::*;

use super::*;

/// An undirected graph stored as a symmetric bit adjacency matrix without self-loops.
///
/// # Example
/// ```
/// use eulertour::prelude::*;
///
/// let graph = AdjMatrix::try_from_matrix(&[
///     [0u8, 1, 1],
///     [1, 0, 1],
///     [1, 1, 0],
/// ]).unwrap();
///
/// assert_eq!(graph.number_of_edges(), 3);
/// assert!(graph.has_edge(2, 0));
/// ```
#[derive(Clone, PartialEq)]
pub struct AdjMatrix {
    rows: Vec<NodeBitSet>,
    num_edges: NumEdges,
}

impl AdjMatrix {
    /// Creates a graph from a dense `N x N` matrix.
    ///
    /// Every row must have exactly `N` entries, all entries must be `0` or `1`, the matrix must
    /// be symmetric and its diagonal must be zero. Otherwise [`EulerError::InvalidMatrix`] is
    /// returned.
    pub fn try_from_matrix<M, T>(matrix: &[M]) -> Result<Self>
    where
        M: AsRef<[T]>,
        T: Copy + Into<u8>,
    {
        let n = NumNodes::try_from(matrix.len())
            .map_err(|_| EulerError::InvalidMatrix(format!("{} rows exceed u32", matrix.len())))?;

        let entry = |i: usize, j: usize| -> u8 { matrix[i].as_ref()[j].into() };

        for (i, row) in matrix.iter().enumerate() {
            let len = row.as_ref().len();
            if len != matrix.len() {
                return Err(EulerError::InvalidMatrix(format!(
                    "row {i} has {len} entries, expected {}",
                    matrix.len()
                )));
            }
        }

        let mut graph = Self::new(n);
        for i in 0..matrix.len() {
            if entry(i, i) != 0 {
                return Err(EulerError::InvalidMatrix(format!(
                    "diagonal entry ({i},{i}) must be 0"
                )));
            }

            for j in (i + 1)..matrix.len() {
                let (x, y) = (entry(i, j), entry(j, i));
                if x > 1 || y > 1 {
                    return Err(EulerError::InvalidMatrix(format!(
                        "entry ({i},{j}) must be 0 or 1"
                    )));
                }
                if x != y {
                    return Err(EulerError::InvalidMatrix(format!(
                        "entries ({i},{j}) and ({j},{i}) differ"
                    )));
                }
                if x == 1 {
                    graph.try_add_edge(i as Node, j as Node)?;
                }
            }
        }

        Ok(graph)
    }

    /// Returns the dense `0/1` form of the matrix
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| self.vertices().map(|v| row.get_bit(v) as u8).collect_vec())
            .collect_vec()
    }

    fn check_edge(&self, u: Node, v: Node) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(EulerError::SelfLoop { vertex: u });
        }
        Ok(())
    }
}

impl Debug for AdjMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "AdjMatrix(n = {}, m = {})",
            self.number_of_nodes(),
            self.num_edges
        )?;
        for row in self.to_matrix() {
            writeln!(f, "  {}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

impl GraphNodeOrder for AdjMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.rows[u as usize].iter_set_bits()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.rows[u as usize].cardinality()
    }
}

impl AdjacencyTest for AdjMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.rows[u as usize].get_bit(v)
    }
}

impl GraphNew for AdjMatrix {
    fn new(n: NumNodes) -> Self {
        Self {
            rows: vec![NodeBitSet::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjMatrix {
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_edge(u, v)?;
        if self.rows[u as usize].set_bit(v) {
            return Ok(false);
        }

        self.rows[v as usize].set_bit(u);
        self.num_edges += 1;
        Ok(true)
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_edge(u, v)?;
        if !self.rows[u as usize].clear_bit(v) {
            return Ok(false);
        }

        self.rows[v as usize].clear_bit(u);
        self.num_edges -= 1;
        Ok(true)
    }
}
