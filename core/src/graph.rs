use std::fmt;

use tracing::{debug, warn};

use crate::error::{GraphError, Result};

/// Positional vertex identifier: the 0-based insertion index.
pub type VertexId = usize;

/// A labeled vertex. Identity is positional; the label is only used for lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub label: String,
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Fixed-capacity undirected graph backed by a boolean adjacency matrix.
///
/// The matrix has side `capacity` and is stored row-major in one allocation.
/// Cell `(i, j)` is set together with `(j, i)`, so the matrix is always
/// symmetric. Vertices are appended and never removed, which keeps every
/// `VertexId` stable for the lifetime of the graph.
///
/// Label lookup is a linear scan returning the first match. Duplicate labels
/// are accepted, but only the first vertex carrying a label is reachable
/// through the label-based API.
#[derive(Debug, Clone)]
pub struct Graph {
    capacity: usize,
    vertices: Vec<Vertex>,
    adjacency: Vec<bool>,
}

impl Graph {
    /// Create an empty graph that can hold up to `capacity` vertices.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            vertices: Vec::with_capacity(capacity),
            adjacency: vec![false; capacity * capacity],
        }
    }

    /// Append a vertex, returning its index.
    ///
    /// No uniqueness check is performed on `label`.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> Result<VertexId> {
        if self.vertices.len() >= self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        let id = self.vertices.len();
        let label = label.into();
        debug!(id, label = %label, "vertex added");
        self.vertices.push(Vertex { label });
        Ok(id)
    }

    /// Connect `start` to `end` and to every label in `more`.
    ///
    /// Returns true only if every pair resolved. Pairs that did resolve are
    /// connected even when the overall result is false; nothing is rolled back.
    pub fn add_edge(&mut self, start: &str, end: &str, more: &[&str]) -> bool {
        let mut connected = self.connect_labels(start, end);
        for other in more {
            connected &= self.connect_labels(start, other);
        }
        connected
    }

    fn connect_labels(&mut self, start: &str, end: &str) -> bool {
        match (self.index_of(start), self.index_of(end)) {
            (Some(a), Some(b)) => self.connect(a, b),
            _ => {
                warn!(start, end, "edge endpoint not found, edge skipped");
                false
            }
        }
    }

    /// Connect two vertices by index. Returns false if either index is out of range.
    pub fn connect(&mut self, a: VertexId, b: VertexId) -> bool {
        if a >= self.vertices.len() || b >= self.vertices.len() {
            return false;
        }
        self.adjacency[a * self.capacity + b] = true;
        self.adjacency[b * self.capacity + a] = true;
        true
    }

    /// Index of the first vertex carrying `label`.
    pub fn index_of(&self, label: &str) -> Option<VertexId> {
        self.vertices.iter().position(|v| v.label == label)
    }

    /// Like [`Graph::index_of`], but an unknown label is an error.
    pub(crate) fn resolve(&self, label: &str) -> Result<VertexId> {
        self.index_of(label)
            .ok_or_else(|| GraphError::unknown_vertex(label))
    }

    /// Get a vertex by index.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// All vertices in index order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Current vertex count (not capacity).
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether an edge joins `a` and `b`. Out-of-range indices have no edges.
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        a < self.vertices.len() && b < self.vertices.len() && self.adjacency[a * self.capacity + b]
    }

    /// Neighbours of `id` in ascending index order.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let row: &[bool] = if id < self.vertices.len() {
            &self.adjacency[id * self.capacity..id * self.capacity + self.vertices.len()]
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter_map(|(j, &linked)| linked.then_some(j))
    }

    /// Number of undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let n = self.vertices.len();
        (0..n)
            .map(|i| self.neighbors(i).filter(|&j| j >= i).count())
            .sum()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let matrix_mem = self.adjacency.len() * size_of::<bool>();
        let vertex_mem: usize = self
            .vertices
            .iter()
            .map(|v| size_of::<Vertex>() + v.label.capacity())
            .sum();

        matrix_mem + vertex_mem
    }
}

/// Adjacency listing: one line per vertex in index order, the vertex followed
/// by each neighbour, e.g. `A -> B -> C`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, vertex) in self.vertices.iter().enumerate() {
            write!(f, "{vertex}")?;
            for neighbor in self.neighbors(id) {
                write!(f, " -> {}", self.vertices[neighbor])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
