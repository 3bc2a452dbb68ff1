//! Mutable undirected graph with stable edge identifiers.
//!
//! Edges are numbered in allocation order and identifiers are never reused,
//! so a dense weight vector indexed by edge id stays valid across mutation.
//! Adjacency is a hashed edge-id set per vertex, giving O(deg) iteration and
//! O(1) removal, and parallel edges between the same vertex pair are kept as
//! distinct identifiers. The fusion tree builder relies on `add_vertex`,
//! `remove_edge`, and the in-place endpoint relabel `set_endpoint`.

use std::collections::HashSet;

use thiserror::Error;

/// Errors returned by graph mutators.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// A vertex identifier was outside the graph's vertex range.
    #[error("vertex {vertex} is out of bounds for a graph with {num_vertices} vertices")]
    VertexOutOfBounds {
        /// The offending vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        num_vertices: usize,
    },
    /// An edge identifier was never allocated.
    #[error("edge {edge} was never allocated (edge ids end at {bound})")]
    EdgeOutOfBounds {
        /// The offending edge id.
        edge: usize,
        /// One past the largest allocated edge id.
        bound: usize,
    },
    /// The edge has already been removed.
    #[error("edge {edge} has been removed")]
    EdgeRemoved {
        /// The offending edge id.
        edge: usize,
    },
    /// The vertex given as an endpoint does not belong to the edge.
    #[error("vertex {vertex} is not an endpoint of edge {edge}")]
    NotAnEndpoint {
        /// The edge whose endpoints were inspected.
        edge: usize,
        /// The vertex that is not one of them.
        vertex: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::VertexOutOfBounds { .. } => GraphErrorCode::VertexOutOfBounds,
            Self::EdgeOutOfBounds { .. } => GraphErrorCode::EdgeOutOfBounds,
            Self::EdgeRemoved { .. } => GraphErrorCode::EdgeRemoved,
            Self::NotAnEndpoint { .. } => GraphErrorCode::NotAnEndpoint,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// A vertex identifier was outside the graph's vertex range.
    VertexOutOfBounds,
    /// An edge identifier was never allocated.
    EdgeOutOfBounds,
    /// The edge has already been removed.
    EdgeRemoved,
    /// The vertex given as an endpoint does not belong to the edge.
    NotAnEndpoint,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VertexOutOfBounds => "VERTEX_OUT_OF_BOUNDS",
            Self::EdgeOutOfBounds => "EDGE_OUT_OF_BOUNDS",
            Self::EdgeRemoved => "EDGE_REMOVED",
            Self::NotAnEndpoint => "NOT_AN_ENDPOINT",
        }
    }
}

/// Undirected graph with stable edge ids and hashed per-vertex adjacency.
#[derive(Clone, Debug, Default)]
pub struct UndirectedGraph {
    endpoints: Vec<Option<(usize, usize)>>,
    adjacency: Vec<HashSet<usize>>,
    live_edges: usize,
}

impl UndirectedGraph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    #[must_use]
    pub fn new(num_vertices: usize) -> Self {
        Self {
            endpoints: Vec::new(),
            adjacency: vec![HashSet::new(); num_vertices],
            live_edges: 0,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of live edges.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.live_edges
    }

    /// Appends a fresh, isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(HashSet::new());
        self.adjacency.len() - 1
    }

    /// Adds an edge between `source` and `target` and returns its id.
    ///
    /// Parallel edges are legal; every call allocates a distinct id.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] when either endpoint is not
    /// a vertex of the graph.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<usize, GraphError> {
        let num_vertices = self.num_vertices();
        for vertex in [source, target] {
            if vertex >= num_vertices {
                return Err(GraphError::VertexOutOfBounds {
                    vertex,
                    num_vertices,
                });
            }
        }
        let edge = self.endpoints.len();
        self.endpoints.push(Some((source, target)));
        self.adjacency[source].insert(edge);
        self.adjacency[target].insert(edge);
        self.live_edges += 1;
        Ok(edge)
    }

    /// Removes a live edge. Its id is retired, never reused.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeOutOfBounds`] for an unallocated id and
    /// [`GraphError::EdgeRemoved`] for an already-removed edge.
    pub fn remove_edge(&mut self, edge: usize) -> Result<(), GraphError> {
        let (source, target) = self.live_endpoints(edge)?;
        self.adjacency[source].remove(&edge);
        self.adjacency[target].remove(&edge);
        self.endpoints[edge] = None;
        self.live_edges -= 1;
        Ok(())
    }

    /// Relabels the `old` endpoint of a live edge to `new` in place.
    ///
    /// The edge keeps its id; only the adjacency sets and the stored
    /// endpoint change.
    ///
    /// # Errors
    /// Returns [`GraphError::NotAnEndpoint`] when `old` is not an endpoint
    /// of the edge, [`GraphError::VertexOutOfBounds`] when `new` is not a
    /// vertex, and the liveness errors of [`Self::remove_edge`].
    pub fn set_endpoint(&mut self, edge: usize, old: usize, new: usize) -> Result<(), GraphError> {
        let (source, target) = self.live_endpoints(edge)?;
        if new >= self.num_vertices() {
            return Err(GraphError::VertexOutOfBounds {
                vertex: new,
                num_vertices: self.num_vertices(),
            });
        }
        let relabelled = if source == old {
            (new, target)
        } else if target == old {
            (source, new)
        } else {
            return Err(GraphError::NotAnEndpoint { edge, vertex: old });
        };
        self.adjacency[old].remove(&edge);
        self.adjacency[new].insert(edge);
        self.endpoints[edge] = Some(relabelled);
        Ok(())
    }

    /// Returns the endpoints of a live edge.
    ///
    /// # Panics
    /// Panics when the edge id was never allocated or has been removed.
    #[must_use]
    pub fn edge_endpoints(&self, edge: usize) -> (usize, usize) {
        self.endpoints[edge].expect("edge has been removed")
    }

    /// Returns the endpoint of `edge` opposite to `known`.
    ///
    /// # Panics
    /// Panics when the edge is not live; see [`Self::edge_endpoints`].
    #[must_use]
    pub fn other_endpoint(&self, edge: usize, known: usize) -> usize {
        let (source, target) = self.edge_endpoints(edge);
        debug_assert!(
            source == known || target == known,
            "vertex {known} is not an endpoint of edge {edge}"
        );
        if source == known {
            target
        } else {
            source
        }
    }

    /// Iterates over the ids of the live edges incident to `vertex`.
    ///
    /// The iteration order is unspecified.
    ///
    /// # Panics
    /// Panics when `vertex` is out of bounds.
    pub fn out_edges(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[vertex].iter().copied()
    }

    /// Iterates over live edges as `(id, source, target)` in id order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.endpoints
            .iter()
            .enumerate()
            .filter_map(|(id, &endpoints)| endpoints.map(|(source, target)| (id, source, target)))
    }

    fn live_endpoints(&self, edge: usize) -> Result<(usize, usize), GraphError> {
        match self.endpoints.get(edge) {
            None => Err(GraphError::EdgeOutOfBounds {
                edge,
                bound: self.endpoints.len(),
            }),
            Some(None) => Err(GraphError::EdgeRemoved { edge }),
            Some(Some(endpoints)) => Ok(*endpoints),
        }
    }
}
