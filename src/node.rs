use stream_bitset::bitset::BitSetImpl;

/// Nodes are identified by their name.
/// Any string works as a name; the container keeps nodes sorted by name at all times.
pub type NodeName = String;

/// Position of a node in the ascending name order of a graph.
/// We limit graphs to `2^32 - 1` nodes, which saves space compared to `u64/usize`
/// and more than suffices for dense-matrix algorithms.
///
/// An index is only meaningful until the next mutation of the graph it was
/// derived from.
pub type NodeIndex = u32;

/// Number of nodes in a graph
pub type NumNodes = NodeIndex;

/// A BitSet over NodeIndex
pub type IndexBitSet = BitSetImpl<NodeIndex>;
