//! Error management.

use crate::types::VId;
use derive_more::Display;

pub type Result<T> = std::result::Result<T, Err>;

/// The class of invariant an [`Err`] violates.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[display(fmt = "format error")]
    Format,
    #[display(fmt = "integrity error")]
    Integrity,
    #[display(fmt = "argument error")]
    Argument,
}

#[derive(Debug, Display, PartialEq)]
pub enum Err {
    #[display(fmt = "line {}: malformed vertex id {:?}", line, token)]
    MalformedId { line: usize, token: String },
    #[display(
        fmt = "line {}: vertex {} declared out of order, expected vertex {}",
        line,
        found,
        expected
    )]
    VertexOutOfOrder {
        line: usize,
        found: VId,
        expected: VId,
    },
    #[display(fmt = "line {}: edge declared before any vertex", line)]
    EdgeBeforeVertex { line: usize },
    #[display(
        fmt = "line {}: edge source {} does not match the current vertex {}",
        line,
        src,
        current
    )]
    EdgeSourceMismatch {
        line: usize,
        src: VId,
        current: VId,
    },
    #[display(
        fmt = "edge {} -> {} references a vertex outside 0..{}",
        src,
        dst,
        num_vertices
    )]
    DanglingEdge {
        src: VId,
        dst: VId,
        num_vertices: usize,
    },
    #[display(
        fmt = "vertex {} has an empty label after trimming {} characters (label length {})",
        vid,
        trimmed,
        len
    )]
    EmptyLabel { vid: VId, len: usize, trimmed: usize },
    #[display(fmt = "invalid k {:?}: expected a positive integer", _0)]
    InvalidK(String),
    #[display(fmt = "cannot read {}: {}", path, reason)]
    Unreadable { path: String, reason: String },
}

impl Err {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Err::MalformedId { .. }
            | Err::VertexOutOfOrder { .. }
            | Err::EdgeBeforeVertex { .. }
            | Err::EdgeSourceMismatch { .. } => ErrorKind::Format,
            Err::DanglingEdge { .. } | Err::EmptyLabel { .. } => ErrorKind::Integrity,
            Err::InvalidK(_) | Err::Unreadable { .. } => ErrorKind::Argument,
        }
    }
}

impl std::error::Error for Err {}
