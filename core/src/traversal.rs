use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::visit::{BreadthFirst, DepthFirst, Discovery};

/// A vertex on a traversal order or a shortest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub vertex_id: VertexId,
    pub label: String,
}

impl PathStep {
    fn new(graph: &Graph, vertex_id: VertexId) -> Self {
        Self {
            vertex_id,
            label: graph.vertices()[vertex_id].label.clone(),
        }
    }
}

/// Result of a depth-first or breadth-first traversal: every vertex reachable
/// from the start, in visitation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    pub steps: Vec<PathStep>,
}

impl Traversal {
    fn collect(graph: &Graph, discoveries: impl Iterator<Item = Discovery>) -> Self {
        Self {
            steps: discoveries
                .map(|d| PathStep::new(graph, d.vertex))
                .collect(),
        }
    }

    /// Labels in visitation order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Depth-first traversal from the vertex labeled `start`.
///
/// Uses an explicit stack. At each step the top of the stack moves to its
/// lowest-index unvisited neighbour, or is popped when it has none.
pub fn dfs(graph: &Graph, start: &str) -> Result<Traversal> {
    let start = graph.resolve(start)?;
    let traversal = Traversal::collect(graph, DepthFirst::new(graph, start));
    debug!(start, visited = traversal.len(), "dfs complete");
    Ok(traversal)
}

/// Breadth-first traversal from the vertex labeled `start`.
///
/// Same neighbour rule as [`dfs`], applied to the front of a FIFO queue.
pub fn bfs(graph: &Graph, start: &str) -> Result<Traversal> {
    let start = graph.resolve(start)?;
    let traversal = Traversal::collect(graph, BreadthFirst::new(graph, start));
    debug!(start, visited = traversal.len(), "bfs complete");
    Ok(traversal)
}

/// Shortest path between two labeled vertices (unweighted, undirected).
///
/// The path is chained backward from `finish`: each breadth-first pass from
/// `start` runs until some queue front discovers the current target, and that
/// front becomes the next target. Every predecessor found this way is one hop
/// closer to `start`, so the loop ends after at most `size()` passes. Ties
/// between equally short paths resolve toward lower vertex indices.
///
/// Returns `Ok(None)` when the vertices are not connected, and a single step
/// when `start == finish`. Steps are ordered start to finish.
pub fn shortest_path(graph: &Graph, start: &str, finish: &str) -> Result<Option<Vec<PathStep>>> {
    let start = graph.resolve(start)?;
    let finish = graph.resolve(finish)?;

    let mut chain = vec![finish];
    let mut target = finish;
    while target != start {
        match predecessor(graph, start, target) {
            Some(prev) => {
                chain.push(prev);
                target = prev;
            }
            None => {
                debug!(start, finish, "no path");
                return Ok(None);
            }
        }
    }

    chain.reverse();
    debug!(start, finish, hops = chain.len() - 1, "shortest path found");
    Ok(Some(
        chain.into_iter().map(|id| PathStep::new(graph, id)).collect(),
    ))
}

/// One breadth-first pass from `start`, stopping at the queue front that
/// discovers `target`.
fn predecessor(graph: &Graph, start: VertexId, target: VertexId) -> Option<VertexId> {
    let found = BreadthFirst::new(graph, start)
        .find(|d| d.vertex == target)
        .and_then(|d| d.parent);
    trace!(start, target, ?found, "predecessor pass");
    found
}
