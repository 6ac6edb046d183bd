/*!
# Graph Algorithms

This module provides the **dense-matrix algorithms** of this crate, built on
top of the [`crate::ops`] trait seams. All algorithms are re-exported at the
top level of this module, so you can simply do:
```rust
use lexgraphs::algo::*;
```
and gain access to all-pairs shortest paths, transitive closure,
single-source shortest paths, and minimum spanning trees.

Every entry point first snapshots the graph through its
[`crate::ops::MatrixView`] and validates its preconditions against that
snapshot, failing fast with a [`crate::error::GraphError`] instead of
returning a result computed from invalid input.
*/

mod apsp;
mod dijkstra;
mod prim;

use crate::prelude::*;

pub use apsp::*;
pub use dijkstra::*;
pub use prim::*;
