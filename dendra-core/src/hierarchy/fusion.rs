//! Generic binary partition tree by region fusion.
//!
//! The builder works on a private copy of the graph. Every edge starts on a
//! pairing heap keyed by its weight; each round pops the cheapest live edge,
//! fuses its two endpoint regions into a fresh vertex, and hands the edges
//! towards the surviving neighbours to a [`LinkageRule`] for re-weighting.
//! Edges made redundant by a fusion are removed from the graph but left on
//! the heap; the `active` flags filter those stale entries when they
//! eventually surface.

use tracing::{debug, instrument};

use crate::{
    error::HierarchyError,
    graph::UndirectedGraph,
    heap::{HeapHandle, PairingHeap},
    tree::Tree,
};

use super::NodeWeightedTree;

/// The fusion a [`LinkageRule`] is being asked to weight.
#[derive(Clone, Copy, Debug)]
pub struct FusionStep {
    /// The edge whose removal fused the two regions.
    pub fusion_edge: usize,
    /// The fresh vertex standing for the fused region.
    pub new_node: usize,
    /// The first fused region.
    pub merged_left: usize,
    /// The second fused region.
    pub merged_right: usize,
}

/// One neighbour of a freshly fused region, and the one or two edges that
/// connected it to the two halves.
///
/// Descriptors live in a scratch buffer owned by the builder and are only
/// borrowed by the linkage rule for the duration of one call; the rule's
/// sole obligation is to weight each of them via [`Self::set_new_weight`].
#[derive(Clone, Copy, Debug)]
pub struct NeighbourMerge {
    neighbour: usize,
    first_edge: usize,
    second_edge: Option<usize>,
    new_weight: Option<f64>,
}

impl NeighbourMerge {
    fn new(neighbour: usize, first_edge: usize) -> Self {
        Self {
            neighbour,
            first_edge,
            second_edge: None,
            new_weight: None,
        }
    }

    /// The neighbour vertex.
    #[must_use]
    pub fn neighbour(&self) -> usize {
        self.neighbour
    }

    /// The edge connecting the first-scanned half to the neighbour. This is
    /// the id the surviving edge keeps after the fusion.
    #[must_use]
    pub fn first_edge(&self) -> usize {
        self.first_edge
    }

    /// The edge connecting the other half to the neighbour, when both
    /// halves were connected to it.
    #[must_use]
    pub fn second_edge(&self) -> Option<usize> {
        self.second_edge
    }

    /// The number of edges between the fused halves and the neighbour, one
    /// or two.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        if self.second_edge.is_some() {
            2
        } else {
            1
        }
    }

    /// The weight assigned by the linkage rule, once set.
    #[must_use]
    pub fn new_weight(&self) -> Option<f64> {
        self.new_weight
    }

    /// Assigns the weight of the surviving edge. Every linkage rule must
    /// call this on every descriptor it is given.
    pub fn set_new_weight(&mut self, weight: f64) {
        self.new_weight = Some(weight);
    }
}

/// Re-weights the edges of a fused region towards its neighbours.
///
/// The rule sees the graph as it stands after the fusion edge (and any edge
/// internal to the new region) has been removed, but before the surviving
/// edges are relabelled onto the new vertex. It must call
/// [`NeighbourMerge::set_new_weight`] on every descriptor; references to the
/// graph or the descriptors must not escape the call.
pub trait LinkageRule {
    /// Weights each descriptor for one fusion.
    fn fuse(&mut self, graph: &UndirectedGraph, step: &FusionStep, neighbours: &mut [NeighbourMerge]);
}

impl<L: LinkageRule + ?Sized> LinkageRule for &mut L {
    fn fuse(
        &mut self,
        graph: &UndirectedGraph,
        step: &FusionStep,
        neighbours: &mut [NeighbourMerge],
    ) {
        (**self).fuse(graph, step, neighbours);
    }
}

/// Computes a binary partition tree by iterated cheapest-edge fusion.
///
/// Starting from `graph` and `edge_weights`, each round fuses the two
/// regions joined by the globally cheapest live edge into a fresh vertex and
/// lets `linkage` decide the weights of the edges towards the surviving
/// neighbours. The input graph is left untouched. Leaves `[0, n)` are the
/// input vertices and interior nodes `[n, 2n - 1)` are the fused regions in
/// creation order.
///
/// Heap ties are broken arbitrarily; when equal weights compete, the tree
/// shape is one of the valid outcomes rather than a canonical one.
///
/// # Errors
/// Returns [`HierarchyError::EmptyGraph`] and
/// [`HierarchyError::WeightsLengthMismatch`] on malformed input,
/// [`HierarchyError::DisconnectedGraph`] when the heap drains before the
/// tree is complete, and [`HierarchyError::LinkageContractViolation`] when
/// `linkage` leaves a descriptor unweighted.
#[instrument(skip_all, fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn binary_partition_tree<L: LinkageRule>(
    graph: &UndirectedGraph,
    edge_weights: &[f64],
    mut linkage: L,
) -> Result<NodeWeightedTree, HierarchyError> {
    let num_leaves = graph.num_vertices();
    if num_leaves == 0 {
        return Err(HierarchyError::EmptyGraph);
    }
    if edge_weights.len() != graph.num_edges() {
        return Err(HierarchyError::WeightsLengthMismatch {
            expected: graph.num_edges(),
            got: edge_weights.len(),
        });
    }

    let mut working = graph.clone();
    let num_nodes = 2 * num_leaves - 1;

    let mut parents: Vec<usize> = (0..num_nodes).collect();
    let mut altitudes = vec![0.0; num_nodes];

    let mut heap = PairingHeap::with_capacity(edge_weights.len());
    let mut handles: Vec<Option<HeapHandle>> = vec![None; edge_weights.len()];
    let mut active = vec![false; edge_weights.len()];
    for (edge, _, _) in working.edges() {
        handles[edge] = Some(heap.push(edge_weights[edge], edge));
        active[edge] = true;
    }

    // Scratch reused across fusions: the neighbour descriptors, the edges
    // found to be internal to the new region, and the neighbour -> descriptor
    // lookup (reset only for touched entries).
    let mut neighbours: Vec<NeighbourMerge> = Vec::new();
    let mut internal: Vec<usize> = Vec::new();
    let mut descriptor_of: Vec<Option<usize>> = vec![None; num_nodes];

    let mut current_num_nodes = num_leaves;
    while current_num_nodes < num_nodes {
        let Some((weight, fusion_edge)) = heap.pop() else {
            break;
        };
        handles[fusion_edge] = None;
        if !active[fusion_edge] {
            // Stale entry from a lazy delete.
            continue;
        }
        active[fusion_edge] = false;

        let (left, right) = working.edge_endpoints(fusion_edge);
        let new_node = working.add_vertex();
        parents[left] = new_node;
        parents[right] = new_node;
        altitudes[new_node] = weight;
        current_num_nodes += 1;
        working.remove_edge(fusion_edge)?;

        neighbours.clear();
        for region in [left, right] {
            for edge in working.out_edges(region) {
                let neighbour = working.other_endpoint(edge, region);
                if neighbour == left || neighbour == right {
                    // A parallel edge between the fused pair: internal to
                    // the new region, absorbed without consulting the rule.
                    if active[edge] {
                        active[edge] = false;
                        internal.push(edge);
                    }
                    continue;
                }
                match descriptor_of[neighbour] {
                    Some(index) => {
                        let descriptor = &mut neighbours[index];
                        if descriptor.second_edge.is_none() {
                            descriptor.second_edge = Some(edge);
                        } else if active[edge] {
                            // Third parallel edge towards the same
                            // neighbour; fold it into the pair.
                            active[edge] = false;
                            internal.push(edge);
                        }
                    }
                    None => {
                        descriptor_of[neighbour] = Some(neighbours.len());
                        neighbours.push(NeighbourMerge::new(neighbour, edge));
                    }
                }
            }
        }
        for descriptor in &neighbours {
            descriptor_of[descriptor.neighbour] = None;
        }
        for edge in internal.drain(..) {
            working.remove_edge(edge)?;
        }

        if neighbours.is_empty() {
            // Terminal merge: the fused pair were the last two regions.
            continue;
        }

        let step = FusionStep {
            fusion_edge,
            new_node,
            merged_left: left,
            merged_right: right,
        };
        linkage.fuse(&working, &step, &mut neighbours);

        for descriptor in &neighbours {
            let new_weight =
                descriptor
                    .new_weight
                    .ok_or(HierarchyError::LinkageContractViolation {
                        neighbour: descriptor.neighbour,
                        edge: descriptor.first_edge,
                    })?;
            if let Some(edge) = descriptor.second_edge {
                active[edge] = false;
                working.remove_edge(edge)?;
            }
            let surviving = descriptor.first_edge;
            let (source, target) = working.edge_endpoints(surviving);
            let old = if source == descriptor.neighbour {
                target
            } else {
                source
            };
            working.set_endpoint(surviving, old, new_node)?;
            let handle = handles[surviving].ok_or(HierarchyError::InvariantViolation {
                invariant: "surviving edge has a live heap entry",
            })?;
            heap.update(handle, new_weight, surviving);
            active[surviving] = true;
        }
    }

    if current_num_nodes != num_nodes {
        return Err(HierarchyError::DisconnectedGraph {
            merged: current_num_nodes - num_leaves,
            required: num_leaves - 1,
        });
    }
    debug!(nodes = num_nodes, "fusion tree complete");

    Ok(NodeWeightedTree::new(Tree::from_parents(parents)?, altitudes))
}
