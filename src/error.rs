use thiserror::Error;

use crate::{
    edge::Weight,
    node::{NodeName, NumNodes},
};

/// Errors reported by the algorithm entry points.
///
/// Container operations never produce one of these: a mutation or query on
/// an absent name is a no-op or yields `false`. Algorithms instead validate
/// their preconditions up front and fail fast, so a returned matrix or
/// result array is never silently wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The named node is not a member of the graph
    #[error("unknown node `{0}`")]
    UnknownNode(NodeName),

    /// The graph has no nodes
    #[error("graph has no nodes")]
    EmptyGraph,

    /// All-pairs algorithms require a loop-free graph: a self-loop makes the
    /// distance of a node to itself ambiguous
    #[error("graph contains {0} self-loop(s)")]
    SelfLoops(NumNodes),

    /// Spanning trees require an undirected topology: every stored edge
    /// mirrored by a reverse edge of equal weight
    #[error("edge (`{src}`, `{dst}`) has no mirrored reverse edge of equal weight")]
    Asymmetric { src: NodeName, dst: NodeName },

    /// Shortest paths require nonnegative edge weights
    #[error("negative weight {weight} on edge (`{src}`, `{dst}`)")]
    NegativeWeight {
        src: NodeName,
        dst: NodeName,
        weight: Weight,
    },
}

/// Result type of all algorithm entry points
pub type Result<T> = std::result::Result<T, GraphError>;
