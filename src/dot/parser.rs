use crate::{
    error::{Err, Result},
    types::{Edge, VId},
};
use log::{debug, trace};

/// The marker separating the two endpoints of an edge declaration.
const ARROW: &str = "->";

/// Vertex labels and raw edges in declaration order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DotGraph {
    labels: Vec<String>,
    edges: Vec<Edge>,
}

impl DotGraph {
    pub fn new(labels: Vec<String>, edges: Vec<Edge>) -> Self {
        Self { labels, edges }
    }

    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Edge>) {
        (self.labels, self.edges)
    }
}

/// Parses the graph description.
///
/// A line with two tokens declares the next vertex, a line `<src> -> <dst>`
/// declares an edge of the most recently declared vertex. Every other line is
/// ignored.
pub fn parse(input: &str) -> Result<DotGraph> {
    let mut graph = DotGraph::default();
    for (i, line) in input.lines().enumerate() {
        let line_no = i + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [vid, token] => {
                let vid = parse_vid(line_no, vid)?;
                let expected = graph.labels.len();
                if vid != expected {
                    return Err(Err::VertexOutOfOrder {
                        line: line_no,
                        found: vid,
                        expected,
                    });
                }
                let label = extract_label(token);
                trace!("vertex {}: {}", vid, label);
                graph.labels.push(label);
            }
            [src, arrow, dst] if *arrow == ARROW => {
                let src = parse_vid(line_no, src)?;
                let dst = parse_vid(line_no, dst)?;
                let current = match graph.labels.len() {
                    0 => return Err(Err::EdgeBeforeVertex { line: line_no }),
                    n => n - 1,
                };
                if src != current {
                    return Err(Err::EdgeSourceMismatch {
                        line: line_no,
                        src,
                        current,
                    });
                }
                graph.edges.push((src, dst));
            }
            _ => trace!("line {}: skipped", line_no),
        }
    }
    debug!(
        "parsed {} vertices and {} edges",
        graph.labels.len(),
        graph.edges.len()
    );
    Ok(graph)
}

/// Extracts the DNA sequence from a decorated label token.
///
/// Keeps `A`, `C`, `G`, `T` and `N`, recodes the record separator `$` to `N`
/// and drops everything else.
pub fn extract_label(token: &str) -> String {
    token
        .chars()
        .filter_map(|c| match c {
            'A' | 'C' | 'G' | 'T' | 'N' => Some(c),
            '$' => Some('N'),
            _ => None,
        })
        .collect()
}

fn parse_vid(line: usize, token: &str) -> Result<VId> {
    token.parse().map_err(|_| Err::MalformedId {
        line,
        token: token.to_owned(),
    })
}
