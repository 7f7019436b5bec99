//! Text rendering of graph listings, traversals and shortest paths.
//!
//! Renderers only consume query results; they never drive a traversal
//! themselves, except [`write_shortest_path`] which runs the query it prints.

use std::io::Write;

use crate::error::Result;
use crate::graph::Graph;
use crate::traversal::{shortest_path, PathStep, Traversal};

/// Message printed in place of a path when the endpoints are not connected.
pub const NO_CONNECTION: &str = "vertexes do not have connections";

/// Write the adjacency listing of `graph`, one vertex per line.
pub fn write_adjacency<W: Write>(out: &mut W, graph: &Graph) -> Result<()> {
    write!(out, "{graph}")?;
    Ok(())
}

/// Write each visited label on its own line.
pub fn write_traversal<W: Write>(out: &mut W, traversal: &Traversal) -> Result<()> {
    for label in traversal.labels() {
        writeln!(out, "{label}")?;
    }
    Ok(())
}

/// Join path labels as `A => B => C`.
pub fn format_path(path: &[PathStep]) -> String {
    path.iter()
        .map(|s| s.label.as_str())
        .collect::<Vec<_>>()
        .join(" => ")
}

/// Find and print the shortest path between two labels:
/// `Shortest Path for A -> E : A => B => D => E`.
pub fn write_shortest_path<W: Write>(
    out: &mut W,
    graph: &Graph,
    start: &str,
    finish: &str,
) -> Result<()> {
    let path = shortest_path(graph, start, finish)?;
    write!(out, "Shortest Path for {start} -> {finish} : ")?;
    match path {
        Some(steps) => writeln!(out, "{}", format_path(&steps))?,
        None => writeln!(out, "{NO_CONNECTION}")?,
    }
    Ok(())
}
