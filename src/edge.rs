use std::fmt::{Debug, Display};

use crate::node::NodeName;

/// Weight of a single edge.
/// No sign constraint is imposed at the storage level; the shortest-path
/// algorithms require nonnegative weights and validate that themselves.
pub type Weight = i64;

/// Sentinel for "no edge / no path".
/// Not a valid weight: it compares greater than every finite weight and path
/// sums saturate on it (see [`WeightExt::path_add`]).
pub const INFINITY: Weight = Weight::MAX;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Sentinel-aware arithmetic on [`Weight`].
pub trait WeightExt {
    /// Adds two path weights, saturating on the sentinel:
    /// `INFINITY + x = INFINITY` for every `x`, finite or not.
    fn path_add(self, rhs: Weight) -> Weight;

    /// Returns true for the sentinel
    fn is_infinite(self) -> bool;
}

impl WeightExt for Weight {
    fn path_add(self, rhs: Weight) -> Weight {
        if self == INFINITY || rhs == INFINITY {
            INFINITY
        } else {
            self + rhs
        }
    }

    fn is_infinite(self) -> bool {
        self == INFINITY
    }
}

/// A directed edge from `src` to `dst`, carrying a weight.
///
/// The derived ordering (source first, then destination) matches the order
/// in which the container reports its edges.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub src: NodeName,
    pub dst: NodeName,
    pub weight: Weight,
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.src, self.dst, self.weight)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    pub fn new<S, T>(src: S, dst: T, weight: Weight) -> Self
    where
        S: Into<NodeName>,
        T: Into<NodeName>,
    {
        Edge {
            src: src.into(),
            dst: dst.into(),
            weight,
        }
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.src == self.dst
    }

    /// Reverses the edge by switching the endpoints
    pub fn reversed(&self) -> Self {
        Edge {
            src: self.dst.clone(),
            dst: self.src.clone(),
            weight: self.weight,
        }
    }
}

impl<S, T> From<(S, T, Weight)> for Edge
where
    S: Into<NodeName>,
    T: Into<NodeName>,
{
    fn from(value: (S, T, Weight)) -> Self {
        Edge::new(value.0, value.1, value.2)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_add_saturates() {
        assert_eq!(3.path_add(4), 7);
        assert_eq!((-3).path_add(4), 1);
        assert_eq!(INFINITY.path_add(4), INFINITY);
        assert_eq!(4.path_add(INFINITY), INFINITY);
        assert_eq!(INFINITY.path_add(INFINITY), INFINITY);
        assert_eq!(INFINITY.path_add(-10), INFINITY);
    }

    #[test]
    fn sentinel_never_below_finite() {
        assert!(INFINITY.is_infinite());
        assert!(!(5 as Weight).is_infinite());
        assert!(0 < INFINITY);
        assert!(Weight::MAX - 1 < INFINITY);
        assert!(!(INFINITY < INFINITY));
    }

    #[test]
    fn edge_basics() {
        let edge = Edge::new("a", "b", 3);
        assert!(!edge.is_loop());
        assert_eq!(edge.reversed(), Edge::new("b", "a", 3));
        assert!(Edge::new("c", "c", 1).is_loop());
        assert_eq!(format!("{edge}"), "(a,b,3)");
        assert_eq!(format!("{edge:?}"), "(a,b,3)");
    }

    #[test]
    fn edge_ordering_is_src_then_dst() {
        let mut edges = vec![
            Edge::new("b", "a", 9),
            Edge::new("a", "c", 1),
            Edge::new("a", "b", 5),
        ];
        edges.sort();
        assert_eq!(
            edges,
            [
                Edge::new("a", "b", 5),
                Edge::new("a", "c", 1),
                Edge::new("b", "a", 9),
            ]
        );
    }
}
