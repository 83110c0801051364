//! Lexicographic permutation stepping and the distance lookups it feeds.

use geo::Coord;
use nightwalk_core::distance_km;

/// Orderings of `0..n`, stepped in lexicographic order.
///
/// The first ordering is the identity, so stepping visits permutations in
/// lexicographic order of the original input positions.
#[derive(Debug, Clone)]
pub(crate) struct Permutations {
    order: Vec<usize>,
}

impl Permutations {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
        }
    }

    pub(crate) fn current(&self) -> &[usize] {
        &self.order
    }

    /// Step to the next ordering; returns `false` once the last one is passed.
    pub(crate) fn advance(&mut self) -> bool {
        let Some(pivot) = self
            .order
            .windows(2)
            .rposition(|pair| matches!(pair, [left, right] if left < right))
        else {
            return false;
        };
        let Some(&pivot_value) = self.order.get(pivot) else {
            return false;
        };
        // The suffix after the pivot is decreasing, so the rightmost larger
        // value is the smallest successor.
        let Some(successor) = self.order.iter().rposition(|&value| value > pivot_value) else {
            return false;
        };
        self.order.swap(pivot, successor);
        if let Some(suffix) = self.order.get_mut(pivot + 1..) {
            suffix.reverse();
        }
        true
    }
}

/// Pairwise great-circle distances between the start (node 0) and the stops
/// (nodes `1..=n`).
#[derive(Debug, Clone)]
pub(crate) struct DistanceMatrix {
    size: usize,
    legs: Vec<f64>,
}

impl DistanceMatrix {
    pub(crate) fn new(nodes: &[Coord<f64>]) -> Self {
        let legs = nodes
            .iter()
            .flat_map(|&from| nodes.iter().map(move |&to| distance_km(from, to)))
            .collect();
        Self {
            size: nodes.len(),
            legs,
        }
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "node indices come from permutations of the matrix's own nodes"
    )]
    fn leg(&self, from: usize, to: usize) -> f64 {
        self.legs[from * self.size + to]
    }

    /// Length of the walk from the start through the stops in `order`,
    /// where `order` holds zero-based stop positions.
    #[expect(
        clippy::float_arithmetic,
        reason = "tour length accumulates floating-point leg distances"
    )]
    pub(crate) fn path_from_start(&self, order: &[usize]) -> f64 {
        let mut total = 0.0;
        let mut previous = 0;
        for &stop in order {
            let node = stop + 1;
            total += self.leg(previous, node);
            previous = node;
        }
        total
    }
}
