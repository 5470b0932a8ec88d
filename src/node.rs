/*!
# Node Representation

We choose `Node = u32` as adjacency matrices with more than `2^32` nodes are far beyond
what a dense representation can hold anyway.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly manipulate node
values without abstracting over them.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes; also used as a single row of the adjacency matrix
pub type NodeBitSet = BitSetImpl<Node>;
