//! Canonical binary partition tree and the quasi-flat-zones hierarchy.
//!
//! The canonical tree (binary partition tree by altitude ordering) is built
//! Kruskal-style: edges are visited in non-decreasing weight order and every
//! edge joining two distinct components allocates one interior node. The
//! edges that triggered a merge are exactly a minimum spanning tree of the
//! input, which is returned alongside the tree.

use tracing::{debug, instrument};

use crate::{
    error::HierarchyError, graph::UndirectedGraph, tree::Tree, union_find::DisjointSet,
};

use super::{simplify::simplify_tree, NodeWeightedTree};

/// The output of [`bpt_canonical`]: the tree, its altitudes, and the
/// companion minimum spanning tree.
#[derive(Clone, Debug)]
pub struct CanonicalHierarchy {
    tree: Tree,
    altitudes: Vec<f64>,
    mst: UndirectedGraph,
    mst_edge_map: Vec<usize>,
}

impl CanonicalHierarchy {
    /// Returns the binary partition tree.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns the altitude of each tree node.
    #[must_use]
    pub fn altitudes(&self) -> &[f64] {
        &self.altitudes
    }

    /// Returns the minimum spanning tree over the input vertex set.
    ///
    /// Its edges are numbered in merge order, so their weights are
    /// non-decreasing.
    #[must_use]
    pub fn mst(&self) -> &UndirectedGraph {
        &self.mst
    }

    /// Maps each MST edge id back to the input edge id it came from.
    #[must_use]
    pub fn mst_edge_map(&self) -> &[usize] {
        &self.mst_edge_map
    }

    /// Consumes the result into its parts: tree, altitudes, MST, and edge
    /// map.
    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<f64>, UndirectedGraph, Vec<usize>) {
        (self.tree, self.altitudes, self.mst, self.mst_edge_map)
    }
}

/// Computes the canonical binary partition tree of an edge-weighted graph,
/// together with its minimum spanning tree.
///
/// Leaves `[0, n)` are the graph vertices; interior nodes `[n, 2n - 1)` are
/// allocated in merge order, each at the altitude of the edge whose merge
/// created it. The edge scan uses a stable sort, so equal weights break by
/// edge id and the tree shape is deterministic.
///
/// # Errors
/// Returns [`HierarchyError::EmptyGraph`] for a graph without vertices,
/// [`HierarchyError::WeightsLengthMismatch`] when `edge_weights` does not
/// have one entry per edge, and [`HierarchyError::DisconnectedGraph`] when
/// the scan exhausts the edges before `n - 1` merges.
#[instrument(skip_all, fields(vertices = graph.num_vertices(), edges = graph.num_edges()))]
pub fn bpt_canonical(
    graph: &UndirectedGraph,
    edge_weights: &[f64],
) -> Result<CanonicalHierarchy, HierarchyError> {
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

    let mut order: Vec<usize> = graph.edges().map(|(id, _, _)| id).collect();
    order.sort_by(|&left, &right| edge_weights[left].total_cmp(&edge_weights[right]));

    let num_nodes = 2 * num_leaves - 1;
    let mut parents: Vec<usize> = (0..num_nodes).collect();
    let mut altitudes = vec![0.0; num_nodes];

    let mut components = DisjointSet::new(num_leaves);
    let mut mst = UndirectedGraph::new(num_leaves);
    let required = num_leaves - 1;
    let mut mst_edge_map = Vec::with_capacity(required);
    let mut next_node = num_leaves;

    for &edge in &order {
        if mst_edge_map.len() == required {
            break;
        }
        let (source, target) = graph.edge_endpoints(edge);
        let left = components.find(source);
        let right = components.find(target);
        if left == right {
            continue;
        }
        altitudes[next_node] = edge_weights[edge];
        parents[components.component_node[left]] = next_node;
        parents[components.component_node[right]] = next_node;
        let merged = components.link(left, right);
        components.component_node[merged] = next_node;
        mst.add_edge(source, target)?;
        mst_edge_map.push(edge);
        next_node += 1;
    }

    if mst_edge_map.len() != required {
        return Err(HierarchyError::DisconnectedGraph {
            merged: mst_edge_map.len(),
            required,
        });
    }
    debug!(mst_edges = mst_edge_map.len(), "canonical tree complete");

    Ok(CanonicalHierarchy {
        tree: Tree::from_parents(parents)?,
        altitudes,
        mst,
        mst_edge_map,
    })
}

/// Computes the quasi-flat-zones hierarchy of an edge-weighted graph.
///
/// For a threshold λ, a λ-flat zone is a maximal set of vertices pairwise
/// connected by paths whose edges all weigh at most λ; the hierarchy is the
/// nesting of those partitions over every λ occurring in `edge_weights`. It
/// is obtained from the canonical tree by collapsing interior nodes whose
/// altitude equals their parent's.
///
/// # Errors
/// Propagates the errors of [`bpt_canonical`].
pub fn quasi_flat_zones_hierarchy(
    graph: &UndirectedGraph,
    edge_weights: &[f64],
) -> Result<NodeWeightedTree, HierarchyError> {
    let (tree, altitudes, _, _) = bpt_canonical(graph, edge_weights)?.into_parts();

    let plateau = |node: usize| altitudes[node] == altitudes[tree.parent(node)];
    let simplified = simplify_tree(&tree, plateau)?;

    let flat_altitudes = simplified
        .node_map()
        .iter()
        .map(|&original| altitudes[original])
        .collect();
    let (tree, _) = simplified.into_parts();

    Ok(NodeWeightedTree::new(tree, flat_altitudes))
}
