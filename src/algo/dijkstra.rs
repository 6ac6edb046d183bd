use itertools::Itertools;

use super::*;

/// Per-node result of [`SingleSourceShortestPaths::shortest_paths_from`],
/// positionally aligned with a snapshot of the ascending node order.
///
/// The start node's own entries are `None` in both arrays. Every other
/// node holds its distance from the start, [`INFINITY`] if no path exists,
/// and the name of its predecessor on a cheapest path, `None` if it was
/// never reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    names: Vec<NodeName>,
    dist: Vec<Option<Weight>>,
    prev: Vec<Option<NodeName>>,
}

impl ShortestPathTree {
    /// Node names the arrays are aligned with, ascending
    pub fn names(&self) -> &[NodeName] {
        &self.names
    }

    /// Distance from the start per node
    pub fn distances(&self) -> &[Option<Weight>] {
        &self.dist
    }

    /// Predecessor on a cheapest path per node
    pub fn predecessors(&self) -> &[Option<NodeName>] {
        &self.prev
    }
}

/// Single-source shortest paths over nonnegative weights, in `O(n^2)`.
pub trait SingleSourceShortestPaths: GraphOrder + MatrixView {
    /// Cheapest paths from `start` to every node, by greedy expansion of
    /// the closest pending node. Nodes of equal distance are expanded in
    /// ascending name order, so the reported predecessors are
    /// deterministic.
    ///
    /// Fails if `start` is no member or some stored weight is negative.
    fn shortest_paths_from(&self, start: &str) -> Result<ShortestPathTree> {
        let start = self
            .index_of(start)
            .ok_or_else(|| GraphError::UnknownNode(start.to_owned()))?;

        let matrix = self.to_matrix();
        if let Some((i, j)) = matrix.first_negative() {
            return Err(GraphError::NegativeWeight {
                src: self.name_of(i).to_owned(),
                dst: self.name_of(j).to_owned(),
                weight: matrix[(i, j)],
            });
        }

        let order = matrix.order();
        let mut dist = vec![INFINITY; order as usize];
        let mut prev: Vec<Option<NodeIndex>> = vec![None; order as usize];
        dist[start as usize] = 0;

        let mut pending = IndexBitSet::new_all_set(order);
        while let Some(next) = pending.iter_set_bits().min_by_key(|&i| dist[i as usize]) {
            pending.clear_bit(next);

            let base = dist[next as usize];
            for j in 0..order {
                let relaxed = base.path_add(matrix[(next, j)]);
                if relaxed < dist[j as usize] {
                    dist[j as usize] = relaxed;
                    prev[j as usize] = Some(next);
                }
            }
        }

        let names = self.node_names().map(NodeName::from).collect_vec();
        let mut dist = dist.into_iter().map(Some).collect_vec();
        let mut prev = prev
            .into_iter()
            .map(|p| p.map(|i| names[i as usize].clone()))
            .collect_vec();
        dist[start as usize] = None;
        prev[start as usize] = None;

        Ok(ShortestPathTree { names, dist, prev })
    }
}

impl<G: GraphOrder + MatrixView> SingleSourceShortestPaths for G {}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn line_graph_tree() {
        let graph = AdjacencyList::from_edges([("a", "b", 1), ("b", "c", 2)]);
        let tree = graph.shortest_paths_from("a").unwrap();

        assert_eq!(tree.names(), ["a", "b", "c"]);
        assert_eq!(tree.distances(), [None, Some(1), Some(3)]);
        assert_eq!(
            tree.predecessors(),
            [None, Some("a".to_owned()), Some("b".to_owned())]
        );
    }

    #[test]
    fn picks_the_cheaper_detour() {
        let graph = AdjacencyList::from_edges([
            ("s", "a", 10),
            ("s", "b", 1),
            ("b", "a", 2),
            ("a", "t", 1),
        ]);
        let tree = graph.shortest_paths_from("s").unwrap();

        assert_eq!(tree.names(), ["a", "b", "s", "t"]);
        assert_eq!(tree.distances(), [Some(3), Some(1), None, Some(4)]);
        assert_eq!(
            tree.predecessors(),
            [
                Some("b".to_owned()),
                Some("s".to_owned()),
                None,
                Some("a".to_owned())
            ]
        );
    }

    #[test]
    fn unreachable_nodes_keep_the_sentinel() {
        let graph = AdjacencyList::from_edges([("a", "b", 1), ("c", "a", 1)]);
        let tree = graph.shortest_paths_from("a").unwrap();

        assert_eq!(tree.distances(), [None, Some(1), Some(INFINITY)]);
        assert_eq!(tree.predecessors(), [None, Some("a".to_owned()), None]);
    }

    #[test]
    fn equal_distances_expand_in_name_order() {
        // two cheapest paths to d, via b and via c
        let graph = AdjacencyList::from_edges([
            ("a", "b", 1),
            ("a", "c", 1),
            ("b", "d", 1),
            ("c", "d", 1),
        ]);
        let tree = graph.shortest_paths_from("a").unwrap();

        // b is expanded before c, so it settles d first
        assert_eq!(tree.distances()[3], Some(2));
        assert_eq!(tree.predecessors()[3], Some("b".to_owned()));
    }

    #[test]
    fn self_loops_do_not_disturb_the_tree() {
        let graph = AdjacencyList::from_edges([("a", "a", 5), ("a", "b", 2), ("b", "b", 1)]);
        let tree = graph.shortest_paths_from("a").unwrap();
        assert_eq!(tree.distances(), [None, Some(2)]);
    }

    #[test]
    fn rejects_unknown_starts_and_negative_weights() {
        let graph = AdjacencyList::from_edges([("a", "b", 1)]);
        assert_eq!(
            graph.shortest_paths_from("x"),
            Err(GraphError::UnknownNode("x".to_owned()))
        );
        assert_eq!(
            AdjacencyList::new().shortest_paths_from("a"),
            Err(GraphError::UnknownNode("a".to_owned()))
        );

        let graph = AdjacencyList::from_edges([("a", "b", 1), ("b", "c", -2)]);
        assert_eq!(
            graph.shortest_paths_from("a"),
            Err(GraphError::NegativeWeight {
                src: "b".to_owned(),
                dst: "c".to_owned(),
                weight: -2,
            })
        );
    }

    #[test]
    fn agrees_with_the_all_pairs_relaxation() {
        let mut rng = Pcg64Mcg::seed_from_u64(98765);
        let names = ('a'..='j').map(|c| c.to_string()).collect_vec();

        for _ in 0..50 {
            let mut graph = AdjacencyList::new();
            for name in &names {
                graph.add_node(name, None);
            }
            for _ in 0..rng.random_range(5..40) {
                let src = &names[rng.random_range(0..names.len())];
                let dst = &names[rng.random_range(0..names.len())];
                if src != dst {
                    graph.add_edge(src, dst, rng.random_range(1..50));
                }
            }

            let pairs = graph.all_pairs_shortest_paths().unwrap();
            for (i, name) in names.iter().enumerate() {
                let tree = graph.shortest_paths_from(name).unwrap();
                for (j, &dist) in tree.distances().iter().enumerate() {
                    if i == j {
                        assert_eq!(dist, None);
                    } else {
                        assert_eq!(dist, Some(pairs[(i as NodeIndex, j as NodeIndex)]));
                    }
                }
            }
        }
    }
}
