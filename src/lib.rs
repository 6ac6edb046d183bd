/*!
`lexgraphs` is a small graph library for graphs that are
- **named** : Nodes are identified by arbitrary strings, not by indices
- **ordered** : Nodes and the edges of each node are kept sorted by name at all times
- **weighted** : Every edge carries a signed integer weight

# Representation

There is a single storage backend, [`repr::AdjacencyList`]: a sorted list of nodes, each holding its outgoing edges sorted by destination name.
Node and edge lookups are binary searches, and every iteration reports nodes and edges in ascending name order, independent of insertion order.

The algorithms do not work on that list directly. They snapshot the graph through its [`ops::MatrixView`]: the projection onto the **ascending node order**, with a dense [`repr::WeightMatrix`] holding the weight of the edge from the i-th to the j-th name in cell (i, j).
[`edge::INFINITY`] is the sentinel for "no edge / no path"; it compares greater than every real weight and path sums saturate on it.

# Algorithms

All algorithms are implemented via traits on the graph itself, see [`algo`]:
- [`algo::AllPairsShortestPaths`] relaxes the full matrix over every intermediate node, yielding the all-pairs distance matrix (`graph.all_pairs_shortest_paths()`) or its collapse to a reachability matrix (`graph.transitive_closure()`),
- [`algo::SingleSourceShortestPaths`] grows a shortest-path tree from one node (`graph.shortest_paths_from(start)`),
- [`algo::MinimumSpanningTree`] grows a minimum spanning tree over a symmetric graph (`graph.minimum_spanning_tree(start)`).

Every entry point validates its preconditions up front and returns a [`error::GraphError`] instead of a result computed from invalid input.
Mutations of the container itself never fail: operations on absent names are no-ops with a status return.

# Usage

```
use lexgraphs::{algo::*, prelude::*};

let mut graph = AdjacencyList::new();
for name in ["rome", "paris", "lyon"] {
    graph.add_node(name, None);
}
graph.add_edge("paris", "lyon", 4);
graph.add_edge("lyon", "rome", 6);

let tree = graph.shortest_paths_from("paris").unwrap();
assert_eq!(tree.names(), ["lyon", "paris", "rome"]);
assert_eq!(tree.distances(), [Some(4), None, Some(10)]);

let dist = graph.all_pairs_shortest_paths().unwrap();
assert_eq!(dist[(1, 0)], 4);
```

The binary of this crate wraps all of the above into an interactive terminal menu with a directed and an undirected mode; the [`io`] module renders the results as aligned text tables.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;

/// `lexgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits, as well as the adjacency list itself and the matrix projections.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
