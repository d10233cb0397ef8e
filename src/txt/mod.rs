//! The adjacency-list text format.
//!
//! ```text
//! <vertex_count>
//! <neighbor> <neighbor> ... <label_0>
//! ...
//! ```

pub use loader::{load, CsrGraph};
pub use writer::{render, write, Txt};

pub(crate) use loader::TxtRule;

pub mod error;

mod loader;
mod writer;
