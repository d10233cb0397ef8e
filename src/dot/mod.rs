//! Reader for the DOT-like graph description emitted by the compacted DBG
//! builder.

pub use parser::{extract_label, parse, DotGraph};

mod parser;
