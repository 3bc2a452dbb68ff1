//! Stock linkage rules for the fusion tree builder.
//!
//! Each rule owns the side tables it needs, indexed by edge id; the graph's
//! weight vector is never written back. A rule only ever reads the entries
//! of edges that are still active, so tables keep stale values for removed
//! edges without harm.

use crate::graph::UndirectedGraph;

use super::fusion::{FusionStep, LinkageRule, NeighbourMerge};

/// Single linkage: the distance between two regions is the minimum weight
/// of the edges between them.
///
/// The canonical builder computes the same hierarchy faster; this rule
/// exists as the reference fusion behaviour and for symmetry with the other
/// rules.
#[derive(Clone, Debug)]
pub struct SingleLinkage {
    weights: Vec<f64>,
}

impl SingleLinkage {
    /// Creates the rule from the same weights the builder is seeded with.
    #[must_use]
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }
}

impl LinkageRule for SingleLinkage {
    fn fuse(
        &mut self,
        _graph: &UndirectedGraph,
        _step: &FusionStep,
        neighbours: &mut [NeighbourMerge],
    ) {
        for descriptor in neighbours {
            let mut weight = self.weights[descriptor.first_edge()];
            if let Some(second) = descriptor.second_edge() {
                if self.weights[second] < weight {
                    weight = self.weights[second];
                }
            }
            descriptor.set_new_weight(weight);
            self.weights[descriptor.first_edge()] = weight;
        }
    }
}

/// Complete linkage: the distance between two regions is the maximum weight
/// of the edges between them.
#[derive(Clone, Debug)]
pub struct CompleteLinkage {
    weights: Vec<f64>,
}

impl CompleteLinkage {
    /// Creates the rule from the same weights the builder is seeded with.
    #[must_use]
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }
}

impl LinkageRule for CompleteLinkage {
    fn fuse(
        &mut self,
        _graph: &UndirectedGraph,
        _step: &FusionStep,
        neighbours: &mut [NeighbourMerge],
    ) {
        for descriptor in neighbours {
            let mut weight = self.weights[descriptor.first_edge()];
            if let Some(second) = descriptor.second_edge() {
                if self.weights[second] > weight {
                    weight = self.weights[second];
                }
            }
            descriptor.set_new_weight(weight);
            self.weights[descriptor.first_edge()] = weight;
        }
    }
}

/// Weighted average linkage over per-edge values and masses.
///
/// When two edges towards the same neighbour merge, the surviving edge
/// carries the mass-weighted mean of their values and the sum of their
/// masses; with a single edge both pass through. The side tables here are
/// the single source of truth for merged values; the weight vector the
/// builder was seeded with is never consulted again.
#[derive(Clone, Debug)]
pub struct AverageLinkage {
    values: Vec<f64>,
    masses: Vec<f64>,
}

impl AverageLinkage {
    /// Creates the rule from per-edge values and masses of equal length.
    ///
    /// A unit mass per edge gives the plain arithmetic mean of the merged
    /// edge values.
    #[must_use]
    pub fn new(values: Vec<f64>, masses: Vec<f64>) -> Self {
        debug_assert_eq!(
            values.len(),
            masses.len(),
            "values and masses must describe the same edges"
        );
        Self { values, masses }
    }
}

impl LinkageRule for AverageLinkage {
    fn fuse(
        &mut self,
        _graph: &UndirectedGraph,
        _step: &FusionStep,
        neighbours: &mut [NeighbourMerge],
    ) {
        for descriptor in neighbours {
            let first = descriptor.first_edge();
            let (value, mass) = match descriptor.second_edge() {
                Some(second) => {
                    let mass = self.masses[first] + self.masses[second];
                    let value = (self.values[first] * self.masses[first]
                        + self.values[second] * self.masses[second])
                        / mass;
                    (value, mass)
                }
                None => (self.values[first], self.masses[first]),
            };
            descriptor.set_new_weight(value);
            self.values[first] = value;
            self.masses[first] = mass;
        }
    }
}
