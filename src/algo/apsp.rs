use super::*;

/// Relaxation pass shared by both entry points of
/// [`AllPairsShortestPaths`]: the edge matrix with a zero diagonal,
/// relaxed over every node as an intermediate.
fn relaxed_distances<G>(graph: &G) -> Result<WeightMatrix>
where
    G: GraphOrder + MatrixView + ?Sized,
{
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let loops = graph.self_loop_count();
    if loops > 0 {
        return Err(GraphError::SelfLoops(loops));
    }

    let mut dist = graph.to_matrix();
    dist.fill_diagonal(0);

    let order = dist.order();
    for k in 0..order {
        for i in 0..order {
            // (i, k) cannot improve while k is the intermediate, so it is
            // loop-invariant here
            let via_k = dist[(i, k)];
            if via_k.is_infinite() {
                continue;
            }
            for j in 0..order {
                let relaxed = via_k.path_add(dist[(k, j)]);
                if relaxed < dist[(i, j)] {
                    dist[(i, j)] = relaxed;
                }
            }
        }
    }
    Ok(dist)
}

/// All-pairs shortest paths and transitive closure by relaxation over
/// every intermediate node, in `O(n^3)` time and `O(n^2)` space.
///
/// Both entry points validate the same preconditions: the graph must have
/// at least one node and no self-loops. Weights may be negative as long as
/// no negative cycle exists; with one, shortest distances are not
/// well-defined and the relaxed matrix is meaningless.
pub trait AllPairsShortestPaths: GraphOrder + MatrixView {
    /// Distance matrix over the ascending node order: cell (i, j) holds
    /// the weight of a cheapest path from the i-th to the j-th node,
    /// [`INFINITY`] if there is none, and `0` on the diagonal.
    fn all_pairs_shortest_paths(&self) -> Result<WeightMatrix> {
        relaxed_distances(self)
    }

    /// Reachability matrix over the ascending node order: (i, j) is set
    /// iff some path from the i-th to the j-th node exists. Every node
    /// reaches itself.
    fn transitive_closure(&self) -> Result<ReachabilityMatrix> {
        Ok(ReachabilityMatrix::from_distances(&relaxed_distances(
            self,
        )?))
    }
}

impl<G: GraphOrder + MatrixView> AllPairsShortestPaths for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn line_graph_distances() {
        let graph = AdjacencyList::from_edges([("a", "b", 1), ("b", "c", 2)]);
        let dist = graph.all_pairs_shortest_paths().unwrap();

        assert_eq!(dist[(0, 1)], 1);
        assert_eq!(dist[(0, 2)], 3);
        assert_eq!(dist[(1, 2)], 2);
        assert_eq!(dist[(1, 0)], INFINITY);
        assert_eq!(dist[(2, 0)], INFINITY);
        for i in 0..3 {
            assert_eq!(dist[(i, i)], 0);
        }
    }

    #[test]
    fn shortcut_beats_long_detour() {
        let graph = AdjacencyList::from_edges([
            ("a", "b", 10),
            ("a", "c", 1),
            ("c", "b", 2),
            ("b", "d", 1),
        ]);
        let dist = graph.all_pairs_shortest_paths().unwrap();

        let a = graph.index_of("a").unwrap();
        let b = graph.index_of("b").unwrap();
        let d = graph.index_of("d").unwrap();
        assert_eq!(dist[(a, b)], 3);
        assert_eq!(dist[(a, d)], 4);
    }

    #[test]
    fn negative_edges_without_negative_cycles() {
        let graph = AdjacencyList::from_edges([("a", "b", 5), ("b", "c", -3), ("a", "c", 4)]);
        let dist = graph.all_pairs_shortest_paths().unwrap();
        assert_eq!(dist[(0, 2)], 2);
    }

    #[test]
    fn rejects_empty_graphs_and_self_loops() {
        let graph = AdjacencyList::new();
        assert_eq!(
            graph.all_pairs_shortest_paths(),
            Err(GraphError::EmptyGraph)
        );
        assert_eq!(graph.transitive_closure().err(), Some(GraphError::EmptyGraph));

        let graph = AdjacencyList::from_edges([("a", "a", 1), ("b", "b", 1), ("a", "b", 1)]);
        assert_eq!(
            graph.all_pairs_shortest_paths(),
            Err(GraphError::SelfLoops(2))
        );
        assert_eq!(
            graph.transitive_closure().err(),
            Some(GraphError::SelfLoops(2))
        );
    }

    #[test]
    fn closure_marks_exactly_the_finite_distances() {
        let graph = AdjacencyList::from_edges([("a", "b", 4), ("b", "c", 1), ("d", "a", 2)]);
        let dist = graph.all_pairs_shortest_paths().unwrap();
        let reach = graph.transitive_closure().unwrap();

        for i in 0..graph.node_count() {
            for j in 0..graph.node_count() {
                assert_eq!(reach.reachable(i, j), dist[(i, j)] != INFINITY);
            }
        }

        // d reaches everything, nothing else reaches d
        let d = graph.index_of("d").unwrap();
        assert_eq!(reach.reachable_from(d).collect_vec(), [0, 1, 2, 3]);
        assert!((0..3).all(|i| !reach.reachable(i, d)));
    }

    #[test]
    fn relaxation_is_idempotent() {
        let graph = AdjacencyList::from_edges([
            ("a", "b", 3),
            ("b", "a", 3),
            ("b", "c", 1),
            ("c", "d", 2),
            ("a", "d", 9),
        ]);
        let dist = graph.all_pairs_shortest_paths().unwrap();
        assert_eq!(graph.all_pairs_shortest_paths().unwrap(), dist);

        // relaxing the output once more changes nothing
        let mut again = dist.clone();
        let order = again.order();
        for k in 0..order {
            for i in 0..order {
                for j in 0..order {
                    let relaxed = again[(i, k)].path_add(again[(k, j)]);
                    if relaxed < again[(i, j)] {
                        again[(i, j)] = relaxed;
                    }
                }
            }
        }
        assert_eq!(again, dist);
    }
}
