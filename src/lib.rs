//! Converts compacted de Bruijn graph descriptions into adjacency-list text.

pub mod convert;
pub mod dot;
pub mod error;
pub mod transform;
pub mod txt;
pub mod types;
