//! Call-scoped visitation state shared by every traversal.
//!
//! An [`Exploration`] owns its visited set and frontier, so nothing is ever
//! written back to the graph. Dropping the exploration (after draining, or
//! early when a caller stops iterating) discards all visitation state.

use std::collections::VecDeque;

use crate::graph::{Graph, VertexId};

/// Bit set of visited vertex indices, sized to the vertex count.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
}

impl VisitedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
        }
    }

    pub(crate) fn contains(&self, id: VertexId) -> bool {
        self.words
            .get(id / 64)
            .is_some_and(|word| word & (1u64 << (id % 64)) != 0)
    }

    pub(crate) fn insert(&mut self, id: VertexId) {
        self.words[id / 64] |= 1u64 << (id % 64);
    }
}

/// Pending vertices of a traversal. The element returned by `current` is the
/// one whose neighbours are scanned next.
pub(crate) trait Frontier {
    fn push(&mut self, id: VertexId);
    fn current(&self) -> Option<VertexId>;
    /// Drop the current element once it has no unvisited neighbours left.
    fn retire(&mut self);
}

/// Stack frontier: depth-first.
impl Frontier for Vec<VertexId> {
    fn push(&mut self, id: VertexId) {
        Vec::push(self, id);
    }

    fn current(&self) -> Option<VertexId> {
        self.last().copied()
    }

    fn retire(&mut self) {
        self.pop();
    }
}

/// Queue frontier: breadth-first.
impl Frontier for VecDeque<VertexId> {
    fn push(&mut self, id: VertexId) {
        self.push_back(id);
    }

    fn current(&self) -> Option<VertexId> {
        self.front().copied()
    }

    fn retire(&mut self) {
        self.pop_front();
    }
}

/// A vertex reached by an exploration, with the frontier element it was
/// reached from (`None` for the start vertex).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Discovery {
    pub vertex: VertexId,
    pub parent: Option<VertexId>,
}

/// Lazy traversal from a start vertex.
///
/// Each step inspects the current frontier element and visits its
/// lowest-index unvisited neighbour, or retires the element when there is
/// none. Yields one [`Discovery`] per visited vertex, start first.
pub(crate) struct Exploration<'g, F> {
    graph: &'g Graph,
    frontier: F,
    visited: VisitedSet,
    start: Option<VertexId>,
}

impl<'g, F: Frontier + Default> Exploration<'g, F> {
    /// `start` must be a valid vertex index of `graph`.
    pub(crate) fn new(graph: &'g Graph, start: VertexId) -> Self {
        Self {
            graph,
            frontier: F::default(),
            visited: VisitedSet::new(graph.size()),
            start: Some(start),
        }
    }
}

impl<F: Frontier> Exploration<'_, F> {
    fn visit(&mut self, id: VertexId) {
        self.visited.insert(id);
        self.frontier.push(id);
    }

    fn nearest_unvisited(&self, id: VertexId) -> Option<VertexId> {
        self.graph
            .neighbors(id)
            .find(|&next| !self.visited.contains(next))
    }
}

impl<F: Frontier> Iterator for Exploration<'_, F> {
    type Item = Discovery;

    fn next(&mut self) -> Option<Discovery> {
        if let Some(start) = self.start.take() {
            self.visit(start);
            return Some(Discovery {
                vertex: start,
                parent: None,
            });
        }

        while let Some(current) = self.frontier.current() {
            match self.nearest_unvisited(current) {
                Some(next) => {
                    self.visit(next);
                    return Some(Discovery {
                        vertex: next,
                        parent: Some(current),
                    });
                }
                None => self.frontier.retire(),
            }
        }
        None
    }
}

pub(crate) type DepthFirst<'g> = Exploration<'g, Vec<VertexId>>;
pub(crate) type BreadthFirst<'g> = Exploration<'g, VecDeque<VertexId>>;
