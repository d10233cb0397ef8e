use crate::transform::TrimmedGraph;
use itertools::Itertools;
use std::{fmt, io};

/// Displays a [`TrimmedGraph`] in the adjacency-list text format.
pub struct Txt<'a>(pub &'a TrimmedGraph);

impl<'a> fmt::Display for Txt<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let graph = self.0;
        writeln!(f, "{}", graph.num_vertices())?;
        for vid in 0..graph.num_vertices() {
            let neighbors = graph.neighbors(vid);
            if neighbors.is_empty() {
                writeln!(f, "{}", graph.label(vid))?;
            } else {
                writeln!(f, "{} {}", neighbors.iter().join(" "), graph.label(vid))?;
            }
        }
        Ok(())
    }
}

pub fn render(graph: &TrimmedGraph) -> String {
    Txt(graph).to_string()
}

pub fn write<W: io::Write>(graph: &TrimmedGraph, out: &mut W) -> io::Result<()> {
    write!(out, "{}", Txt(graph))
}
