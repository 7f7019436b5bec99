//! matrix-graph-core: fixed-capacity in-memory graph engine.
//!
//! Vertices carry a string label and are identified by their insertion
//! position. Edges are undirected and unweighted, stored in a square boolean
//! adjacency matrix sized to the capacity declared at construction.
//!
//! Three queries are provided: depth-first traversal, breadth-first traversal
//! and shortest path. Queries take `&Graph` and keep their visitation state
//! local to the call, so a graph can be shared between readers freely.
//! Formatting of results lives in [`render`].

mod error;
mod graph;
pub mod render;
mod traversal;
mod visit;

pub use error::{GraphError, Result};
pub use graph::{Graph, Vertex, VertexId};
pub use traversal::{bfs, dfs, shortest_path, PathStep, Traversal};
