/*!
# Graph Representation

Graphs are stored as a dense, symmetric **adjacency matrix** where every row is a
[`NodeBitSet`]. Edge tests and edits are `O(1)`, iterating a neighborhood costs `O(n / 64)`.

The matrix can be built from
- a dense `0/1` matrix (see [`AdjMatrix::try_from_matrix`]),
- an edge list (see [`GraphFromScratch::from_edges`]),
- or incrementally via [`GraphEdgeEditing`].
*/

use crate::{edge::*, error::*, node::*, ops::*};

mod matrix;

pub use matrix::*;
