/*!
# Graph Operations

Trait seams between graph storage and everything that consumes it.

[`crate::repr::AdjacencyList`] implements all of them. The algorithms in
[`crate::algo`] are bounded on these traits alone and never touch storage
internals; in particular they reach the graph exclusively through its
[`MatrixView`], the projection onto the ascending node order.
*/

use crate::{
    edge::{Edge, NumEdges, Weight},
    node::{NodeIndex, NumNodes},
    repr::WeightMatrix,
};

/// Access to the ascending node order and the aggregate counts of a graph.
pub trait GraphOrder {
    /// Number of nodes in the graph
    fn node_count(&self) -> NumNodes;

    /// Number of stored directed edges, self-loops included, each counted once
    fn edge_count(&self) -> NumEdges;

    /// Number of nodes with an edge pointing back at themselves
    fn self_loop_count(&self) -> NumNodes;

    /// Returns true if the graph has no nodes
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Node names in ascending order
    fn node_names(&self) -> impl Iterator<Item = &str>;

    /// All stored edges, ascending by source, then by destination within
    /// one source
    fn edge_list(&self) -> impl Iterator<Item = Edge>;
}

/// Membership tests for nodes and edges.
pub trait AdjacencyTest {
    /// Returns true if a node with this name is a member
    fn find_node(&self, name: &str) -> bool;

    /// Returns true if the edge (src, dst) is stored
    fn find_edge(&self, src: &str, dst: &str) -> bool {
        self.edge_weight(src, dst).is_some()
    }

    /// Weight of the edge (src, dst), if stored
    fn edge_weight(&self, src: &str, dst: &str) -> Option<Weight>;
}

/// In-place mutation of a graph.
///
/// All operations are total: a name that is not a member leads to a no-op
/// and a status return value, never to an error.
pub trait GraphEditing {
    /// Opaque per-node payload
    type Info;

    /// Inserts a node, keeping the name order ascending. If the name is
    /// already a member, only its payload is replaced; its edges are left
    /// untouched. Returns true if the node was a member before.
    fn add_node(&mut self, name: &str, info: Option<Self::Info>) -> bool;

    /// Removes a node together with its outgoing edges.
    /// Returns true if it was a member.
    ///
    /// Edges of **other** nodes pointing at `name` are not touched. Run
    /// [`GraphEditing::delete_edges_to`] first, or the survivors keep edges
    /// toward a name that is no longer a member.
    fn delete_node(&mut self, name: &str) -> bool;

    /// Removes from every node all edges with destination `name` and
    /// returns how many were removed
    fn delete_edges_to(&mut self, name: &str) -> NumEdges;

    /// Inserts or updates the edge (src, dst), keeping the edge sequence of
    /// `src` ascending by destination. Re-adding a stored pair overwrites
    /// its weight instead of duplicating the edge.
    ///
    /// If `dst` is no member, or `src` is no member, the graph is left
    /// unchanged. Returns true if the edge is stored afterwards.
    fn add_edge(&mut self, src: &str, dst: &str, weight: Weight) -> bool;

    /// Removes the edge (src, dst). Returns true if it was stored.
    fn delete_edge(&mut self, src: &str, dst: &str) -> bool;
}

/// Read-only projection of a graph onto its ascending node order.
///
/// The name/index mapping is derived from the current node sequence on
/// every call and never cached: an index is only valid until the next
/// mutation.
pub trait MatrixView {
    /// Position of `name` in the ascending node order
    fn index_of(&self, name: &str) -> Option<NodeIndex>;

    /// Name at `index` of the ascending node order.
    /// ** Panics if `index >= node_count()` **
    fn name_of(&self, index: NodeIndex) -> &str;

    /// Dense matrix over the ascending node order: cell (i, j) holds the
    /// weight of the edge from the i-th to the j-th node, or
    /// [`crate::edge::INFINITY`] if there is none. Self-loop weights land
    /// on the diagonal.
    fn to_matrix(&self) -> WeightMatrix;
}
