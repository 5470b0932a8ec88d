/*!
# Graph Algorithms

This module provides the **Eulerian tour** computation and the graph routines it builds upon.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use eulertour::algo::*;
```
and gain access to traversal, connectivity and tour construction.
If possible, algorithms are provided as **traits on the graph itself** (`graph.find_euler_tour(0)`),
configurable variants as builder structs (see [`Hierholzer`]).
*/

mod connectivity;
mod euler;
mod tour;
mod traversal;

use crate::prelude::*;

pub use connectivity::*;
pub use euler::*;
pub use tour::*;
pub use traversal::*;
