use fxhash::FxHashMap;
use smallvec::SmallVec;

use crate::{
    edge::{Edge, NumEdges, Weight},
    node::{NodeIndex, NodeName, NumNodes},
    ops::{AdjacencyTest, GraphEditing, GraphOrder, MatrixView},
    repr::WeightMatrix,
};

/// One stored outgoing edge. The source is implicit in the owning node.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OutEdge {
    dst: NodeName,
    weight: Weight,
}

/// A node: its name, an optional payload, and its outgoing edges in
/// ascending destination order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeRecord<I> {
    name: NodeName,
    info: Option<I>,
    edges: SmallVec<[OutEdge; 4]>,
}

impl<I> NodeRecord<I> {
    fn edge_position(&self, dst: &str) -> Result<usize, usize> {
        self.edges.binary_search_by(|edge| edge.dst.as_str().cmp(dst))
    }
}

/// Name-keyed adjacency list, the single graph storage of this crate.
///
/// Nodes are kept sorted by name at all times and every node keeps its
/// outgoing edges sorted by destination name, so membership tests are
/// binary searches and every traversal reports nodes and edges in the same
/// ascending order. Names compare as plain byte strings.
///
/// Each node may carry an opaque payload of type `I`. Graphs built through
/// [`AdjacencyList::new`] or [`AdjacencyList::from_edges`] fix the payload
/// to `()`; use [`AdjacencyList::default`] with a concrete type otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList<I = ()> {
    nodes: Vec<NodeRecord<I>>,
    num_edges: NumEdges,
}

impl<I> Default for AdjacencyList<I> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            num_edges: 0,
        }
    }
}

impl AdjacencyList {
    /// Creates an empty graph without node payloads
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a payload-free graph from an edge sequence. Both endpoints of
    /// every edge are registered as nodes before the edge itself is stored,
    /// so no edge of the sequence is dropped.
    pub fn from_edges<E, T>(edges: E) -> Self
    where
        E: IntoIterator<Item = T>,
        T: Into<Edge>,
    {
        let mut graph = Self::new();
        for edge in edges {
            let Edge { src, dst, weight } = edge.into();
            graph.add_node(&src, None);
            graph.add_node(&dst, None);
            graph.add_edge(&src, &dst, weight);
        }
        graph
    }
}

impl<I> AdjacencyList<I> {
    /// Position of `name` in the sorted node sequence, or the position
    /// where it would be inserted
    fn position(&self, name: &str) -> Result<usize, usize> {
        self.nodes
            .binary_search_by(|record| record.name.as_str().cmp(name))
    }

    /// Payload of the named node. `None` if the node is no member or
    /// carries no payload.
    pub fn node_info(&self, name: &str) -> Option<&I> {
        let pos = self.position(name).ok()?;
        self.nodes[pos].info.as_ref()
    }
}

impl<I> GraphOrder for AdjacencyList<I> {
    fn node_count(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }

    fn edge_count(&self) -> NumEdges {
        self.num_edges
    }

    fn self_loop_count(&self) -> NumNodes {
        self.nodes
            .iter()
            .filter(|record| record.edge_position(&record.name).is_ok())
            .count() as NumNodes
    }

    fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|record| record.name.as_str())
    }

    fn edge_list(&self) -> impl Iterator<Item = Edge> {
        self.nodes.iter().flat_map(|record| {
            record.edges.iter().map(move |edge| Edge {
                src: record.name.clone(),
                dst: edge.dst.clone(),
                weight: edge.weight,
            })
        })
    }
}

impl<I> AdjacencyTest for AdjacencyList<I> {
    fn find_node(&self, name: &str) -> bool {
        self.position(name).is_ok()
    }

    fn edge_weight(&self, src: &str, dst: &str) -> Option<Weight> {
        let record = &self.nodes[self.position(src).ok()?];
        let at = record.edge_position(dst).ok()?;
        Some(record.edges[at].weight)
    }
}

impl<I> GraphEditing for AdjacencyList<I> {
    type Info = I;

    fn add_node(&mut self, name: &str, info: Option<I>) -> bool {
        match self.position(name) {
            Ok(pos) => {
                self.nodes[pos].info = info;
                true
            }
            Err(pos) => {
                self.nodes.insert(
                    pos,
                    NodeRecord {
                        name: name.to_owned(),
                        info,
                        edges: SmallVec::new(),
                    },
                );
                false
            }
        }
    }

    fn delete_node(&mut self, name: &str) -> bool {
        match self.position(name) {
            Ok(pos) => {
                let record = self.nodes.remove(pos);
                self.num_edges -= record.edges.len() as NumEdges;
                true
            }
            Err(_) => false,
        }
    }

    fn delete_edges_to(&mut self, name: &str) -> NumEdges {
        let mut removed = 0;
        for record in &mut self.nodes {
            let before = record.edges.len();
            record.edges.retain(|edge| edge.dst != name);
            removed += (before - record.edges.len()) as NumEdges;
        }
        self.num_edges -= removed;
        removed
    }

    fn add_edge(&mut self, src: &str, dst: &str, weight: Weight) -> bool {
        if self.position(dst).is_err() {
            return false;
        }
        let Ok(pos) = self.position(src) else {
            return false;
        };

        match self.nodes[pos].edge_position(dst) {
            Ok(at) => self.nodes[pos].edges[at].weight = weight,
            Err(at) => {
                self.nodes[pos].edges.insert(
                    at,
                    OutEdge {
                        dst: dst.to_owned(),
                        weight,
                    },
                );
                self.num_edges += 1;
            }
        }
        true
    }

    fn delete_edge(&mut self, src: &str, dst: &str) -> bool {
        let Ok(pos) = self.position(src) else {
            return false;
        };

        match self.nodes[pos].edge_position(dst) {
            Ok(at) => {
                self.nodes[pos].edges.remove(at);
                self.num_edges -= 1;
                true
            }
            Err(_) => false,
        }
    }
}

impl<I> MatrixView for AdjacencyList<I> {
    fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.position(name).ok().map(|pos| pos as NodeIndex)
    }

    fn name_of(&self, index: NodeIndex) -> &str {
        self.nodes[index as usize].name.as_str()
    }

    fn to_matrix(&self) -> WeightMatrix {
        let mut matrix = WeightMatrix::new(self.node_count());

        let columns: FxHashMap<&str, NodeIndex> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, record)| (record.name.as_str(), i as NodeIndex))
            .collect();

        for (i, record) in self.nodes.iter().enumerate() {
            for edge in record.edges.iter() {
                // a destination that is no longer a member has no column
                if let Some(&j) = columns.get(edge.dst.as_str()) {
                    matrix[(i as NodeIndex, j)] = edge.weight;
                }
            }
        }
        matrix
    }
}
