//! Edge de-duplication and overlap trimming.
//!
//! The compacted DBG stores the `k-1` characters shared by adjacent vertices
//! twice. Every vertex with a predecessor loses that prefix here so that
//! walking the graph spells each base once.

use crate::{
    dot::DotGraph,
    error::{Err, Result},
    types::{Edge, VId},
};
use itertools::Itertools;
use log::{debug, info};

/// Trimmed labels and the out-neighbors of every vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct TrimmedGraph {
    labels: Vec<String>,
    adjacency: Vec<Vec<VId>>,
    num_edges: usize,
    num_duplicates: usize,
    num_trimmed: usize,
}

impl TrimmedGraph {
    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    /// Number of unique edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Number of repeated edges dropped by de-duplication.
    pub fn num_duplicates(&self) -> usize {
        self.num_duplicates
    }

    /// Number of vertices whose label lost its overlap.
    pub fn num_trimmed(&self) -> usize {
        self.num_trimmed
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, vid: VId) -> &str {
        &self.labels[vid]
    }

    /// Out-neighbors of `vid` in first-seen order.
    pub fn neighbors(&self, vid: VId) -> &[VId] {
        &self.adjacency[vid]
    }
}

/// Length of a label after trimming.
///
/// Returns `None` when the trimmed label would be empty.
pub fn trimmed_len(len: usize, has_incoming: bool, k: usize) -> Option<usize> {
    let overlap = if has_incoming { k.saturating_sub(1) } else { 0 };
    len.checked_sub(overlap).filter(|&n| n > 0)
}

/// Removes the `k-1` overlap from `label` if the vertex has a predecessor.
pub fn trim_label(vid: VId, label: &mut String, has_incoming: bool, k: usize) -> Result<()> {
    let len = label.len();
    match trimmed_len(len, has_incoming, k) {
        Some(n) => {
            label.replace_range(..len - n, "");
            Ok(())
        }
        None => Err(Err::EmptyLabel {
            vid,
            len,
            trimmed: if has_incoming { k.saturating_sub(1) } else { 0 },
        }),
    }
}

/// Turns the parsed graph into its trimmed adjacency form.
pub fn transform(k: usize, graph: DotGraph) -> Result<TrimmedGraph> {
    if k == 0 {
        return Err(Err::InvalidK(k.to_string()));
    }
    let (mut labels, raw_edges) = graph.into_parts();
    let num_vertices = labels.len();
    let num_raw = raw_edges.len();
    let edges: Vec<Edge> = raw_edges.into_iter().unique().collect();
    debug!("{} unique edges out of {}", edges.len(), num_raw);
    for &(src, dst) in &edges {
        if src >= num_vertices || dst >= num_vertices {
            return Err(Err::DanglingEdge {
                src,
                dst,
                num_vertices,
            });
        }
    }
    let mut has_incoming = vec![false; num_vertices];
    for &(_, dst) in &edges {
        has_incoming[dst] = true;
    }
    for (vid, label) in labels.iter_mut().enumerate() {
        trim_label(vid, label, has_incoming[vid], k)?;
    }
    let mut adjacency = vec![Vec::new(); num_vertices];
    for &(src, dst) in &edges {
        adjacency[src].push(dst);
    }
    let num_trimmed = has_incoming.iter().filter(|&&flag| flag).count();
    info!("trimmed {} of {} vertices", num_trimmed, num_vertices);
    Ok(TrimmedGraph {
        labels,
        adjacency,
        num_edges: edges.len(),
        num_duplicates: num_raw - edges.len(),
        num_trimmed,
    })
}
