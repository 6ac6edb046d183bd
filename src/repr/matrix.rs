use std::ops::{Index, IndexMut};

use itertools::Itertools;

use crate::{
    edge::{INFINITY, Weight},
    node::{IndexBitSet, NodeIndex, NumNodes},
};

/// Dense NxN weight grid over the ascending node order of a graph.
///
/// Cell (i, j) holds the weight of the edge from the i-th to the j-th node,
/// or [`INFINITY`] if there is none. The all-pairs shortest-path
/// computation reuses the same shape, with [`INFINITY`] meaning "no path".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMatrix {
    order: NumNodes,
    cells: Vec<Weight>,
}

impl WeightMatrix {
    /// Creates an `order` x `order` matrix with every cell set to [`INFINITY`]
    pub fn new(order: NumNodes) -> Self {
        Self {
            order,
            cells: vec![INFINITY; (order as usize).pow(2)],
        }
    }

    /// Number of rows (= number of columns)
    pub fn order(&self) -> NumNodes {
        self.order
    }

    fn cell(&self, i: NodeIndex, j: NodeIndex) -> usize {
        debug_assert!(i < self.order && j < self.order);
        i as usize * self.order as usize + j as usize
    }

    /// Iterator over the rows as weight slices
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        self.cells.chunks(self.order.max(1) as usize)
    }

    /// Sets every diagonal cell to `weight`
    pub fn fill_diagonal(&mut self, weight: Weight) {
        for i in 0..self.order {
            self[(i, i)] = weight;
        }
    }

    /// First pair (i, j) with i < j whose mirrored cells disagree, in
    /// ascending row order. `None` means the matrix is symmetric.
    pub fn first_asymmetry(&self) -> Option<(NodeIndex, NodeIndex)> {
        (0..self.order)
            .tuple_combinations()
            .find(|&(i, j)| self[(i, j)] != self[(j, i)])
    }

    /// First cell (i, j) holding a negative weight, in ascending row order.
    /// The sentinel is positive, so it never matches.
    pub fn first_negative(&self) -> Option<(NodeIndex, NodeIndex)> {
        (0..self.order)
            .cartesian_product(0..self.order)
            .find(|&(i, j)| self[(i, j)] < 0)
    }
}

impl Index<(NodeIndex, NodeIndex)> for WeightMatrix {
    type Output = Weight;

    fn index(&self, (i, j): (NodeIndex, NodeIndex)) -> &Weight {
        &self.cells[self.cell(i, j)]
    }
}

impl IndexMut<(NodeIndex, NodeIndex)> for WeightMatrix {
    fn index_mut(&mut self, (i, j): (NodeIndex, NodeIndex)) -> &mut Weight {
        let cell = self.cell(i, j);
        &mut self.cells[cell]
    }
}

/// Boolean NxN grid over the ascending node order, one bitset row per node.
/// Produced by the transitive-closure computation.
#[derive(Clone)]
pub struct ReachabilityMatrix {
    rows: Vec<IndexBitSet>,
}

impl ReachabilityMatrix {
    /// Collapses a relaxed distance matrix to reachability:
    /// (i, j) is reachable iff the distance is finite
    pub fn from_distances(matrix: &WeightMatrix) -> Self {
        let order = matrix.order();
        Self {
            rows: matrix
                .rows()
                .map(|row| {
                    let mut bits = IndexBitSet::new(order);
                    bits.set_bits(row.iter().enumerate().filter_map(|(j, &weight)| {
                        (weight != INFINITY).then_some(j as NodeIndex)
                    }));
                    bits
                })
                .collect(),
        }
    }

    /// Number of rows (= number of columns)
    pub fn order(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }

    /// Returns true if (i, j) is marked reachable.
    /// ** Panics if `i >= order()` or `j >= order()` **
    pub fn reachable(&self, i: NodeIndex, j: NodeIndex) -> bool {
        self.rows[i as usize].get_bit(j)
    }

    /// Indices reachable from `i`, ascending.
    /// ** Panics if `i >= order()` **
    pub fn reachable_from(&self, i: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.rows[i as usize].iter_set_bits()
    }
}
