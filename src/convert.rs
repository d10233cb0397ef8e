//! The Parser → Transformer → Serializer pipeline.

use crate::{
    dot,
    error::{Err, Result},
    transform::{transform, TrimmedGraph},
    txt,
};
use derive_more::Display;
use log::info;
use std::path::Path;

/// Summary of a conversion.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(
    fmt = "{} vertices, {} edges ({} duplicates dropped), {} vertices trimmed",
    num_vertices,
    num_edges,
    num_duplicates,
    num_trimmed
)]
pub struct ConversionInfo {
    pub num_vertices: usize,
    pub num_edges: usize,
    pub num_duplicates: usize,
    pub num_trimmed: usize,
}

impl ConversionInfo {
    pub fn new(graph: &TrimmedGraph) -> Self {
        Self {
            num_vertices: graph.num_vertices(),
            num_edges: graph.num_edges(),
            num_duplicates: graph.num_duplicates(),
            num_trimmed: graph.num_trimmed(),
        }
    }
}

/// The rendered text of a finished conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    text: String,
    info: ConversionInfo,
}

impl Conversion {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn info(&self) -> ConversionInfo {
        self.info
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Parses `k`, the MEM/kmer size of the upstream builder.
pub fn parse_k(arg: &str) -> Result<usize> {
    match arg.parse() {
        Ok(k) if k > 0 => Ok(k),
        _ => Err(Err::InvalidK(arg.to_owned())),
    }
}

pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| Err::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Converts a graph description into the adjacency-list text.
///
/// Nothing is rendered unless every stage succeeds.
pub fn convert(k: usize, input: &str) -> Result<Conversion> {
    info!("parsing...");
    let graph = dot::parse(input)?;
    info!("transforming...");
    let graph = transform(k, graph)?;
    let info = ConversionInfo::new(&graph);
    info!("{}", info);
    Ok(Conversion {
        text: txt::render(&graph),
        info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;

    #[test]
    fn test_parse_k() {
        assert_eq!(parse_k("31"), Ok(31));
        assert_eq!(parse_k("1"), Ok(1));
        for arg in &["0", "-3", "k", "", "2.5"] {
            assert_eq!(parse_k(arg), Err(Err::InvalidK(arg.to_string())));
        }
    }

    #[test]
    fn test_read_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "0 ACGT\n").unwrap();
        assert_eq!(read_input(file.path()).unwrap(), "0 ACGT\n");
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(dir.path().join("missing.dot")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
    }

    #[test]
    fn test_convert() {
        let conversion = convert(3, "0 ACGT\n0 -> 1\n0 -> 1\n1 GTAC\n").unwrap();
        assert_eq!(conversion.text(), "2\n1 ACGT\nAC\n");
        assert_eq!(
            conversion.info(),
            ConversionInfo {
                num_vertices: 2,
                num_edges: 1,
                num_duplicates: 1,
                num_trimmed: 1
            }
        );
        assert_eq!(
            conversion.info().to_string(),
            "2 vertices, 1 edges (1 duplicates dropped), 1 vertices trimmed"
        );
    }

    #[test]
    fn test_convert_zero_k() {
        assert_eq!(convert(0, "0 A\n"), Err(Err::InvalidK("0".into())));
    }
}
