use itertools::{Itertools, izip};

use super::*;

/// Per-node result of [`MinimumSpanningTree::minimum_spanning_tree`],
/// positionally aligned with a snapshot of the ascending node order.
///
/// `lowcost` holds the weight of the tree edge that attached a node,
/// `closest` the node on the other end of it. The start node's entries are
/// `None`; a node out of reach of the start's component keeps [`INFINITY`]
/// unless it was attached to a later component (see
/// [`MinimumSpanningTree::minimum_spanning_tree`] on forests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    names: Vec<NodeName>,
    lowcost: Vec<Option<Weight>>,
    closest: Vec<Option<NodeName>>,
}

impl SpanningTree {
    /// Node names the arrays are aligned with, ascending
    pub fn names(&self) -> &[NodeName] {
        &self.names
    }

    /// Weight of the attaching tree edge per node
    pub fn lowcost(&self) -> &[Option<Weight>] {
        &self.lowcost
    }

    /// Other endpoint of the attaching tree edge per node
    pub fn closest(&self) -> &[Option<NodeName>] {
        &self.closest
    }

    /// Sum of the weights of all tree edges
    pub fn total_weight(&self) -> Weight {
        self.lowcost
            .iter()
            .flatten()
            .copied()
            .filter(|&weight| weight != INFINITY)
            .sum()
    }

    /// The tree edges, directed from the attaching node to the attached
    /// one, ascending by the attached node
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        izip!(&self.names, &self.lowcost, &self.closest).filter_map(
            |(name, lowcost, closest)| {
                let weight = (*lowcost)?;
                let src = closest.clone()?;
                (weight != INFINITY).then(|| Edge {
                    src,
                    dst: name.clone(),
                    weight,
                })
            },
        )
    }
}

/// Minimum spanning trees over symmetric graphs, in `O(n^2)`.
pub trait MinimumSpanningTree: GraphOrder + MatrixView {
    /// Grows a spanning tree from `start`, attaching the cheapest pending
    /// node first. Nodes of equal attachment cost are attached in
    /// ascending name order, so the result is deterministic. Negative
    /// weights are fine.
    ///
    /// Fails if `start` is no member or some stored edge is not mirrored
    /// by a reverse edge of equal weight.
    ///
    /// A graph that is not connected yields a spanning forest: growth
    /// restarts at the cheapest pending node of the next component, which
    /// itself keeps [`INFINITY`] as its attachment cost.
    fn minimum_spanning_tree(&self, start: &str) -> Result<SpanningTree> {
        let start = self
            .index_of(start)
            .ok_or_else(|| GraphError::UnknownNode(start.to_owned()))?;

        let matrix = self.to_matrix();
        if let Some((i, j)) = matrix.first_asymmetry() {
            // report the direction that is actually stored
            let (src, dst) = if matrix[(i, j)].is_infinite() {
                (j, i)
            } else {
                (i, j)
            };
            return Err(GraphError::Asymmetric {
                src: self.name_of(src).to_owned(),
                dst: self.name_of(dst).to_owned(),
            });
        }

        let order = matrix.order();
        let mut lowcost = vec![INFINITY; order as usize];
        let mut closest: Vec<Option<NodeIndex>> = vec![None; order as usize];
        lowcost[start as usize] = 0;

        let mut pending = IndexBitSet::new_all_set(order);
        for _ in 1..order {
            let Some(next) = pending.iter_set_bits().min_by_key(|&i| lowcost[i as usize])
            else {
                break;
            };
            pending.clear_bit(next);

            for j in pending.iter_set_bits() {
                let weight = matrix[(next, j)];
                if weight < lowcost[j as usize] {
                    lowcost[j as usize] = weight;
                    closest[j as usize] = Some(next);
                }
            }
        }

        let names = self.node_names().map(NodeName::from).collect_vec();
        let mut lowcost = lowcost.into_iter().map(Some).collect_vec();
        let mut closest = closest
            .into_iter()
            .map(|c| c.map(|i| names[i as usize].clone()))
            .collect_vec();
        lowcost[start as usize] = None;
        closest[start as usize] = None;

        Ok(SpanningTree {
            names,
            lowcost,
            closest,
        })
    }
}

impl<G: GraphOrder + MatrixView> MinimumSpanningTree for G {}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected<const N: usize>(edges: [(&str, &str, Weight); N]) -> AdjacencyList {
        let mirrored = edges
            .iter()
            .flat_map(|&(src, dst, weight)| [(src, dst, weight), (dst, src, weight)])
            .collect_vec();
        AdjacencyList::from_edges(mirrored)
    }

    #[test]
    fn triangle_tree() {
        let graph = undirected([("a", "b", 1), ("b", "c", 1), ("a", "c", 2)]);
        let tree = graph.minimum_spanning_tree("a").unwrap();

        assert_eq!(tree.names(), ["a", "b", "c"]);
        assert_eq!(tree.lowcost(), [None, Some(1), Some(1)]);
        assert_eq!(
            tree.closest(),
            [None, Some("a".to_owned()), Some("b".to_owned())]
        );
        assert_eq!(tree.total_weight(), 2);
    }

    #[test]
    fn tree_edges_and_total() {
        let graph = undirected([
            ("a", "b", 4),
            ("a", "c", 1),
            ("c", "b", 2),
            ("b", "d", 7),
        ]);
        let tree = graph.minimum_spanning_tree("c").unwrap();

        assert_eq!(
            tree.edges().collect_vec(),
            [
                Edge::new("c", "a", 1),
                Edge::new("c", "b", 2),
                Edge::new("b", "d", 7),
            ]
        );
        assert_eq!(tree.total_weight(), 10);
    }

    #[test]
    fn disconnected_graphs_grow_a_forest() {
        let graph = undirected([("a", "b", 1), ("c", "d", 2)]);
        let tree = graph.minimum_spanning_tree("a").unwrap();

        assert_eq!(tree.lowcost(), [None, Some(1), Some(INFINITY), Some(2)]);
        assert_eq!(
            tree.closest(),
            [None, Some("a".to_owned()), None, Some("c".to_owned())]
        );
        assert_eq!(tree.total_weight(), 3);
        assert_eq!(
            tree.edges().collect_vec(),
            [Edge::new("a", "b", 1), Edge::new("c", "d", 2)]
        );
    }

    #[test]
    fn negative_weights_are_allowed() {
        let graph = undirected([("a", "b", -4), ("b", "c", 3), ("a", "c", 1)]);
        let tree = graph.minimum_spanning_tree("b").unwrap();
        assert_eq!(tree.total_weight(), -3);
    }

    #[test]
    fn self_loops_never_enter_the_tree() {
        let mut graph = undirected([("a", "b", 2)]);
        graph.add_edge("a", "a", 1);
        let tree = graph.minimum_spanning_tree("a").unwrap();

        assert_eq!(tree.total_weight(), 2);
        assert_eq!(tree.edges().collect_vec(), [Edge::new("a", "b", 2)]);
    }

    #[test]
    fn rejects_directed_topologies() {
        let graph = AdjacencyList::from_edges([("a", "b", 1), ("b", "a", 1), ("b", "c", 5)]);
        assert_eq!(
            graph.minimum_spanning_tree("a"),
            Err(GraphError::Asymmetric {
                src: "b".to_owned(),
                dst: "c".to_owned(),
            })
        );

        let mut graph = undirected([("a", "b", 1)]);
        graph.add_edge("b", "a", 3);
        assert_eq!(
            graph.minimum_spanning_tree("a"),
            Err(GraphError::Asymmetric {
                src: "a".to_owned(),
                dst: "b".to_owned(),
            })
        );
    }

    #[test]
    fn rejects_unknown_starts() {
        let graph = undirected([("a", "b", 1)]);
        assert_eq!(
            graph.minimum_spanning_tree("z"),
            Err(GraphError::UnknownNode("z".to_owned()))
        );
        assert_eq!(
            AdjacencyList::new().minimum_spanning_tree("a"),
            Err(GraphError::UnknownNode("a".to_owned()))
        );
    }
}
