/*!
# Graph Representation

The container and its derived dense projections.

- [`AdjacencyList`]: name-keyed adjacency list. Nodes live in one sequence
  in strictly ascending name order; every node owns its outgoing edges in
  strictly ascending destination order.
- [`WeightMatrix`]: dense NxN weight grid over that order, the input shape
  of all algorithms in [`crate::algo`].
- [`ReachabilityMatrix`]: boolean NxN grid, the output shape of the
  transitive closure.
*/

mod adjacency;
mod matrix;

pub use adjacency::*;
pub use matrix::*;
